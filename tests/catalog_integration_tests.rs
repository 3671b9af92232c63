use marquee::catalog::{
    CatalogError, CatalogSource, ListingQuery, SortKey, TmdbCatalog,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn discover_query(page: u32, sort: SortKey, year: Option<i32>) -> ListingQuery {
    ListingQuery {
        term: String::new(),
        page,
        sort,
        year,
    }
}

fn search_query(term: &str, page: u32) -> ListingQuery {
    ListingQuery {
        term: term.to_string(),
        page,
        // Sort/year are set to prove the search endpoint never receives them
        sort: SortKey::PopularityDesc,
        year: Some(1989),
    }
}

fn catalog_for(server: &MockServer) -> TmdbCatalog {
    TmdbCatalog::new(
        "test-key".to_string(),
        Some(server.uri()),
        "en-US".to_string(),
    )
}

fn listing_body(ids: &[u64], total_pages: u32, total_results: u32) -> serde_json::Value {
    serde_json::json!({
        "page": 1,
        "results": ids.iter().map(|id| serde_json::json!({
            "id": id,
            "original_title": format!("Movie {id}"),
            "poster_path": format!("/poster-{id}.jpg"),
            "backdrop_path": format!("/backdrop-{id}.jpg"),
            "overview": "Synopsis.",
            "release_date": "1989-06-21"
        })).collect::<Vec<_>>(),
        "total_pages": total_pages,
        "total_results": total_results
    })
}

// ============================================================================
// Discover Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_discover_routing_and_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "2"))
        .and(query_param("sort_by", "popularity.desc"))
        .and(query_param("primary_release_year", "1989"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(&[1, 2], 5, 100)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    let listing = catalog
        .fetch_listing(&discover_query(2, SortKey::PopularityDesc, Some(1989)))
        .await
        .unwrap();

    assert_eq!(listing.results.len(), 2);
    assert_eq!(listing.total_pages, 5);
    assert_eq!(listing.total_results, 100);
    assert_eq!(listing.results[0].title, "Movie 1");
    assert_eq!(listing.results[0].release_year(), Some(1989));
}

#[tokio::test]
async fn test_discover_omits_unset_sort_and_year() {
    let mock_server = MockServer::start().await;

    // Mounted without sort_by/primary_release_year matchers; the handler
    // asserts on the received URL instead.
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(&[1], 1, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    catalog
        .fetch_listing(&discover_query(1, SortKey::Unsorted, None))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert!(!url.query_pairs().any(|(k, _)| k == "sort_by"));
    assert!(!url.query_pairs().any(|(k, _)| k == "primary_release_year"));
}

// ============================================================================
// Search Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_search_routing_encodes_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "batman returns"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_body(&[3], 1, 1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    let listing = catalog
        .fetch_listing(&search_query("batman returns", 1))
        .await
        .unwrap();

    assert_eq!(listing.results[0].id, 3);

    // Sort/year never reach the search endpoint
    let requests = mock_server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert!(!url.query_pairs().any(|(k, _)| k == "sort_by"));
    assert!(!url.query_pairs().any(|(k, _)| k == "primary_release_year"));
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_api_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    let result = catalog
        .fetch_listing(&discover_query(1, SortKey::Unsorted, None))
        .await;

    assert!(matches!(result, Err(CatalogError::Api { status: 401, .. })));
}

#[tokio::test]
async fn test_malformed_body_surfaces_status_message() {
    let mock_server = MockServer::start().await;

    // Well-formed JSON, but no results collection — the upstream error shape
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })))
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    let result = catalog
        .fetch_listing(&discover_query(1, SortKey::Unsorted, None))
        .await;

    match result {
        Err(CatalogError::Listing(message)) => {
            assert_eq!(message, "Invalid API key: You must be granted a valid key.");
        }
        other => panic!("Expected CatalogError::Listing, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_malformed_body_without_message_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(&mock_server);
    let result = catalog.fetch_listing(&search_query("batman", 1)).await;

    match result {
        Err(CatalogError::Listing(message)) => assert_eq!(message, "Error"),
        other => panic!("Expected CatalogError::Listing, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on the mock server once it's dropped.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let catalog = TmdbCatalog::new("test-key".to_string(), Some(uri), "en-US".to_string());
    let result = catalog
        .fetch_listing(&discover_query(1, SortKey::Unsorted, None))
        .await;

    assert!(matches!(result, Err(CatalogError::Network(_))));
}
