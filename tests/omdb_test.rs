use httpmock::prelude::*;
use movie_shelf::{FetchConfig, MetadataSource, OmdbClient, ShelfError};
use std::time::Duration;

fn client_for(server: &MockServer) -> OmdbClient {
    OmdbClient::new(FetchConfig {
        endpoint: server.url("/"),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

#[test]
fn fetch_maps_response_into_movie_fields() {
    let server = MockServer::start();
    let lookup = server.mock(|when, then| {
        when.method(GET)
            .query_param("apikey", "test-key")
            .query_param("t", "Alien");
        then.status(200).json_body(serde_json::json!({
            "Title": "Alien",
            "Year": "1979",
            "imdbRating": "8.5",
            "Poster": "https://img.example/alien.jpg",
            "Response": "True"
        }));
    });

    let fetched = client_for(&server).fetch("Alien").unwrap();
    lookup.assert();
    assert_eq!(fetched.title, "Alien");
    assert_eq!(fetched.year, 1979);
    assert_eq!(fetched.rating, 8.5);
    assert_eq!(fetched.poster_url, "https://img.example/alien.jpg");
}

#[test]
fn lookup_miss_is_reported_as_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({
            "Response": "False",
            "Error": "Movie not found!"
        }));
    });

    let err = client_for(&server).fetch("No Such Film").unwrap_err();
    assert!(matches!(err, ShelfError::LookupNotFound { .. }));
}

#[test]
fn missing_poster_keeps_sentinel() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({
            "Title": "Obscure",
            "Year": "2003",
            "imdbRating": "6.1",
            "Poster": "N/A",
            "Response": "True"
        }));
    });

    let fetched = client_for(&server).fetch("Obscure").unwrap();
    assert_eq!(fetched.poster_url, "N/A");
}

#[test]
fn unrated_title_stores_zero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({
            "Title": "Fresh Release",
            "Year": "2026",
            "imdbRating": "N/A",
            "Poster": "N/A",
            "Response": "True"
        }));
    });

    let fetched = client_for(&server).fetch("Fresh Release").unwrap();
    assert_eq!(fetched.rating, 0.0);
}

#[test]
fn server_error_surfaces_as_network_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let err = client_for(&server).fetch("Alien").unwrap_err();
    assert!(matches!(err, ShelfError::Network(_)));
}

#[test]
fn series_year_range_takes_leading_year() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({
            "Title": "Friends",
            "Year": "1994–2004",
            "imdbRating": "8.9",
            "Poster": "N/A",
            "Response": "True"
        }));
    });

    let fetched = client_for(&server).fetch("Friends").unwrap();
    assert_eq!(fetched.year, 1994);
}
