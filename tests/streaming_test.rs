//! Streaming-availability catalog client tests
//!
//! Tests schema mapping, rating rescaling, pagination defaults, the region
//! recency filter, and error taxonomy.

use chrono::Datelike;
use mockito::{Matcher, Server};

use flickfetch::api::{ProviderError, StreamingClient};

// =============================================================================
// Title Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_maps_catalog_schema() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "result": [
            {
                "tmdbID": "414906",
                "imdbID": "tt1877830",
                "title": "The Batman",
                "overview": "Batman ventures into Gotham's underworld",
                "posterURLs": {
                    "original": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                    "500": "/small.jpg"
                },
                "backdropURLs": {
                    "original": "/b0PlSFdDwbyK0cf5RxwDpaOJQvQ.jpg",
                    "1280": "/wide.jpg"
                },
                "year": 2022,
                "tmdbRating": 78,
                "tmdbVotes": 9543,
                "popularity": 212.3,
                "genres": [{"id": 80, "name": "Crime"}, {"id": 9648, "name": "Mystery"}]
            },
            {
                "imdbID": "tt0000001",
                "title": "Bare Minimum"
            }
        ],
        "total_pages": 3,
        "total_results": 42
    }"#;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("title".into(), "batman".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "20".into()),
            Matcher::UrlEncoded("show_type".into(), "movie".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.search_by_title("batman", 1).await.unwrap();

    mock.assert_async().await;

    assert_eq!(response.page, 1);
    assert_eq!(response.total_pages, 3);
    assert_eq!(response.total_results, 42);
    assert_eq!(response.results.len(), 2);

    let full = &response.results[0];
    assert_eq!(full.id, "414906");
    assert_eq!(full.title, "The Batman");
    assert!((full.vote_average - 7.8).abs() < 0.01);
    assert_eq!(full.vote_count, 9543);
    assert_eq!(full.release_date, "2022-01-01");
    assert_eq!(full.genre_ids, vec![80, 9648]);
    assert_eq!(
        full.poster_path.as_deref(),
        Some("https://image.tmdb.org/t/p/original/74xTEgt7R36Fpooo50r9T25onhq.jpg")
    );
    assert_eq!(
        full.backdrop_path.as_deref(),
        Some("https://image.tmdb.org/t/p/original/b0PlSFdDwbyK0cf5RxwDpaOJQvQ.jpg")
    );

    // Sparse item degrades field-by-field, never fails the call
    let sparse = &response.results[1];
    assert_eq!(sparse.id, "tt0000001");
    assert_eq!(sparse.overview, "");
    assert_eq!(sparse.vote_average, 0.0);
    assert!(sparse.poster_path.is_none());
    assert!(sparse.genre_ids.is_empty());
}

#[tokio::test]
async fn test_search_sends_rapidapi_headers() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .match_header("x-rapidapi-key", "secret_key")
        .match_header(
            "x-rapidapi-host",
            "streaming-availability.p.rapidapi.com",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": []}"#)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("secret_key", server.url());
    let _ = client.search_by_title("test", 1).await;

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_pagination_defaults() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": [{"title": "Only One"}]}"#)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.search_by_title("only", 1).await.unwrap();

    mock.assert_async().await;

    assert_eq!(response.total_pages, 1);
    assert_eq!(response.total_results, 1);
}

#[tokio::test]
async fn test_results_truncated_to_page_size() {
    let mut server = Server::new_async().await;

    let items: Vec<serde_json::Value> = (0..25)
        .map(|i| serde_json::json!({"tmdbID": i, "title": format!("Movie {}", i)}))
        .collect();
    let body = serde_json::json!({ "result": items }).to_string();

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.search_by_title("", 1).await.unwrap();

    mock.assert_async().await;

    assert_eq!(response.results.len(), flickfetch::PAGE_SIZE);
}

// =============================================================================
// Genre and Region Tests
// =============================================================================

#[tokio::test]
async fn test_by_genre_uses_basic_search() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/basic")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("genres".into(), "28".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result": [{"tmdbID": "603", "title": "The Matrix", "genres": [{"id": 28}]}]}"#)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.by_genre(28, 2).await.unwrap();

    mock.assert_async().await;

    assert_eq!(response.page, 2);
    assert_eq!(response.results[0].genre_ids, vec![28]);
}

#[tokio::test]
async fn test_by_region_drops_stale_releases() {
    let mut server = Server::new_async().await;

    let current_year = chrono::Local::now().year();
    let body = format!(
        r#"{{"result": [
            {{"tmdbID": "1", "title": "Fresh", "year": {}}},
            {{"tmdbID": "2", "title": "Stale", "year": {}}},
            {{"tmdbID": "3", "title": "Undated"}}
        ]}}"#,
        current_year,
        current_year - 5
    );

    let mock = server
        .mock("GET", "/shows/search/basic")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("country".into(), "ng".into()),
            Matcher::UrlEncoded("sort_by".into(), "year".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.by_region("ng", 1).await.unwrap();

    mock.assert_async().await;

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].title, "Fresh");
    assert_eq!(response.total_results, 1);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_http_error_is_status() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let err = client.search_by_title("test", 1).await.unwrap_err();

    mock.assert_async().await;

    assert!(matches!(err, ProviderError::Status(500)));
}

#[tokio::test]
async fn test_missing_result_array_is_malformed() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "ok but wrong shape"}"#)
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let err = client.search_by_title("test", 1).await.unwrap_err();

    mock.assert_async().await;

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_invalid_json_is_malformed() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json {{{")
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let err = client.search_by_title("test", 1).await.unwrap_err();

    mock.assert_async().await;

    assert!(matches!(err, ProviderError::Malformed(_)));
}

// =============================================================================
// Rating Scale Tests
// =============================================================================

#[tokio::test]
async fn test_all_ratings_land_in_canonical_range() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows/search/title")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"result": [
                {"title": "Perfect", "tmdbRating": 100},
                {"title": "Broken", "tmdbRating": 250},
                {"title": "Negative", "tmdbRating": -3},
                {"title": "Unrated"}
            ]}"#,
        )
        .create_async()
        .await;

    let client = StreamingClient::with_base_url("test_key", server.url());
    let response = client.search_by_title("x", 1).await.unwrap();

    mock.assert_async().await;

    for movie in &response.results {
        assert!(
            (0.0..=10.0).contains(&movie.vote_average),
            "{} rated {}",
            movie.title,
            movie.vote_average
        );
    }
    assert_eq!(response.results[0].vote_average, 10.0);
    assert_eq!(response.results[1].vote_average, 10.0);
    assert_eq!(response.results[2].vote_average, 0.0);
    assert_eq!(response.results[3].vote_average, 0.0);
}
