//! Mock fallback catalog
//!
//! Static in-memory movie table served when every live provider fails. The
//! data is read-only at runtime, already carries absolute image URLs, and is
//! never enriched. Genre ids follow the TMDB numbering used elsewhere.

use crate::models::Movie;

struct Record {
    id: &'static str,
    title: &'static str,
    overview: &'static str,
    poster: &'static str,
    backdrop: &'static str,
    release_date: &'static str,
    vote_average: f32,
    vote_count: u32,
    popularity: f32,
    genre_ids: &'static [u32],
}

const CDN: &str = "https://image.tmdb.org/t/p/w500";
const CDN_FULL: &str = "https://image.tmdb.org/t/p/original";

const CATALOG: &[Record] = &[
    Record {
        id: "155",
        title: "The Dark Knight",
        overview: "Batman raises the stakes in his war on crime against the Joker.",
        poster: "/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        backdrop: "/hkBaDkMWbLaf8B1lsWsKX7Ew3Xq.jpg",
        release_date: "2008-07-16",
        vote_average: 8.5,
        vote_count: 32106,
        popularity: 123.2,
        genre_ids: &[18, 28, 80, 53],
    },
    Record {
        id: "414906",
        title: "The Batman",
        overview: "Batman follows a trail of cryptic clues left by the Riddler.",
        poster: "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
        backdrop: "/b0PlSFdDwbyK0cf5RxwDpaOJQvQ.jpg",
        release_date: "2022-03-01",
        vote_average: 7.7,
        vote_count: 10453,
        popularity: 152.1,
        genre_ids: &[80, 9648, 53],
    },
    Record {
        id: "272",
        title: "Batman Begins",
        overview: "Bruce Wayne confronts his fears and becomes Gotham's protector.",
        poster: "/8RW2runSEc34IwKN2D1aPcJd2UL.jpg",
        backdrop: "/tQ4GV1eMjVDwRVrBvpLbRkMIIZb.jpg",
        release_date: "2005-06-10",
        vote_average: 7.7,
        vote_count: 20597,
        popularity: 64.4,
        genre_ids: &[28, 80, 18],
    },
    Record {
        id: "27205",
        title: "Inception",
        overview: "A thief who steals corporate secrets through dream-sharing technology.",
        poster: "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        backdrop: "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg",
        release_date: "2010-07-15",
        vote_average: 8.4,
        vote_count: 35676,
        popularity: 98.7,
        genre_ids: &[28, 878, 12],
    },
    Record {
        id: "157336",
        title: "Interstellar",
        overview: "Explorers travel through a wormhole in search of a new home for humanity.",
        poster: "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        backdrop: "/pbrkL804c8yAv3zBZR4QPEafpAR.jpg",
        release_date: "2014-11-05",
        vote_average: 8.4,
        vote_count: 35123,
        popularity: 140.2,
        genre_ids: &[12, 18, 878],
    },
    Record {
        id: "603",
        title: "The Matrix",
        overview: "A hacker discovers the shocking truth about his reality.",
        poster: "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        backdrop: "/fNG7i7RqMErkcqhohV2a6cV1Ehy.jpg",
        release_date: "1999-03-30",
        vote_average: 8.2,
        vote_count: 25352,
        popularity: 104.0,
        genre_ids: &[28, 878],
    },
    Record {
        id: "680",
        title: "Pulp Fiction",
        overview: "The lives of two mob hitmen, a boxer, and a pair of bandits intertwine.",
        poster: "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
        backdrop: "/suaEOtk1N1sgg2MTM7oZd2cfVp3.jpg",
        release_date: "1994-09-10",
        vote_average: 8.5,
        vote_count: 27635,
        popularity: 77.5,
        genre_ids: &[53, 80],
    },
    Record {
        id: "278",
        title: "The Shawshank Redemption",
        overview: "Two imprisoned men bond over a number of years.",
        poster: "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
        backdrop: "/kXfqcdQKsToO0OUXHcrrNCHDBzO.jpg",
        release_date: "1994-09-23",
        vote_average: 8.7,
        vote_count: 26840,
        popularity: 111.7,
        genre_ids: &[18, 80],
    },
    Record {
        id: "496243",
        title: "Parasite",
        overview: "Greed and class discrimination threaten a newly formed symbiosis.",
        poster: "/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        backdrop: "/TU9NIjwzjoKPwQHoHshkFcQUCG.jpg",
        release_date: "2019-05-30",
        vote_average: 8.5,
        vote_count: 17953,
        popularity: 86.3,
        genre_ids: &[35, 53, 18],
    },
    Record {
        id: "129",
        title: "Spirited Away",
        overview: "A young girl wanders into a world ruled by gods and witches.",
        poster: "/39wmItIWsg5sZMyRUHLkWBcuVCM.jpg",
        backdrop: "/bSXfU4dwZyBA05fHgfhFDNmOaxd.jpg",
        release_date: "2001-07-20",
        vote_average: 8.5,
        vote_count: 16143,
        popularity: 89.9,
        genre_ids: &[16, 14],
    },
    Record {
        id: "76341",
        title: "Mad Max: Fury Road",
        overview: "Max teams up with Furiosa to flee a tyrant across the Wasteland.",
        poster: "/hA2ple9q4qnwxp3hKVNhroipsir.jpg",
        backdrop: "/phszHPFVhPHhMZgo0fWTKBDQsJA.jpg",
        release_date: "2015-05-13",
        vote_average: 7.6,
        vote_count: 22444,
        popularity: 71.1,
        genre_ids: &[28, 12, 878],
    },
    Record {
        id: "419430",
        title: "Get Out",
        overview: "A young man uncovers a disturbing secret at his girlfriend's family estate.",
        poster: "/tFXcEccSQMf3lfhfXKSU9iRBpa3.jpg",
        backdrop: "/ueVtZNSmY2zJEmCDlvTWfAILE5u.jpg",
        release_date: "2017-02-24",
        vote_average: 7.6,
        vote_count: 15221,
        popularity: 58.0,
        genre_ids: &[9648, 53, 27],
    },
    Record {
        id: "313369",
        title: "La La Land",
        overview: "A jazz pianist falls for an aspiring actress in Los Angeles.",
        poster: "/uDO8zWDhfWwoFdKS4fzkUJt0Rf0.jpg",
        backdrop: "/nlPCdZlHtRNcF6C9hzUH4ebmV1w.jpg",
        release_date: "2016-11-29",
        vote_average: 7.9,
        vote_count: 16711,
        popularity: 62.3,
        genre_ids: &[35, 18, 10749],
    },
];

fn to_movie(record: &Record) -> Movie {
    Movie {
        id: record.id.to_string(),
        title: record.title.to_string(),
        overview: record.overview.to_string(),
        poster_path: Some(format!("{}{}", CDN, record.poster)),
        backdrop_path: Some(format!("{}{}", CDN_FULL, record.backdrop)),
        release_date: record.release_date.to_string(),
        vote_average: record.vote_average,
        vote_count: record.vote_count,
        popularity: record.popularity,
        genre_ids: record.genre_ids.to_vec(),
        trailer_thumbnail: None,
    }
}

/// The full mock catalog
pub fn all() -> Vec<Movie> {
    CATALOG.iter().map(to_movie).collect()
}

/// Titles containing the query, case-insensitively. A blank query matches all.
pub fn search(title: &str) -> Vec<Movie> {
    if title.is_empty() {
        return all();
    }
    let needle = title.to_lowercase();
    CATALOG
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .map(to_movie)
        .collect()
}

/// Movies whose genre set contains the given id
pub fn by_genre(genre_id: u32) -> Vec<Movie> {
    CATALOG
        .iter()
        .filter(|r| r.genre_ids.contains(&genre_id))
        .map(to_movie)
        .collect()
}

/// The full catalog re-labelled for a region, ids re-keyed with the country
/// code so they cannot collide with provider-native identifiers
pub fn regional(country: &str) -> Vec<Movie> {
    CATALOG
        .iter()
        .map(|r| {
            let mut movie = to_movie(r);
            movie.title = format!("{}: {}", country.to_uppercase(), movie.title);
            movie.id = format!("{}_{}", country.to_lowercase(), movie.id);
            movie
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let hits = search("batman");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|m| m.title.to_lowercase().contains("batman")));
    }

    #[test]
    fn test_blank_search_returns_everything() {
        assert_eq!(search("").len(), CATALOG.len());
    }

    #[test]
    fn test_genre_filter() {
        for movie in by_genre(878) {
            assert!(movie.genre_ids.contains(&878), "{} not sci-fi", movie.title);
        }
        assert!(by_genre(878).len() >= 3);
        assert!(by_genre(999_999).is_empty());
    }

    #[test]
    fn test_regional_rekeys_ids() {
        let movies = regional("ng");
        assert_eq!(movies.len(), CATALOG.len());
        for movie in &movies {
            assert!(movie.id.starts_with("ng_"));
            assert!(movie.title.starts_with("NG: "));
        }
    }

    #[test]
    fn test_mock_ratings_in_range() {
        for movie in all() {
            assert!((0.0..=10.0).contains(&movie.vote_average));
            assert!(movie.poster_path.as_deref().unwrap().starts_with("http"));
        }
    }
}
