use std::time::Duration;

use mockito::Matcher;
use pushkind_gallery::client::errors::ClientError;
use pushkind_gallery::client::{ImageSearch, PixabayClient};
use pushkind_gallery::domain::session::SearchSession;
use pushkind_gallery::domain::types::{PageNumber, PageSize, SearchTerm};

const TWO_HITS: &str = r#"{
    "total": 4692,
    "totalHits": 500,
    "hits": [
        {
            "id": 195893,
            "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
            "type": "photo",
            "tags": "blossom, bloom, flower",
            "previewURL": "https://cdn.pixabay.com/photo/2013/10/15/09/12/flower-195893_150.jpg",
            "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
            "largeImageURL": "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg",
            "views": 7671,
            "downloads": 6439,
            "likes": 5,
            "comments": 2,
            "user_id": 48777,
            "user": "Josch13"
        },
        {
            "id": 73424,
            "tags": "tulips, yellow",
            "webformatURL": "https://pixabay.com/get/second_640.jpg",
            "largeImageURL": "https://pixabay.com/get/second_1280.jpg",
            "views": 10,
            "downloads": 20,
            "likes": 30,
            "comments": 40
        }
    ]
}"#;

fn session(query: &str, page: u32) -> SearchSession {
    SearchSession::at_page(
        SearchTerm::new(query).unwrap(),
        PageNumber::new(page).unwrap(),
        PageSize::default(),
    )
}

fn client_for(server: &mockito::ServerGuard) -> PixabayClient {
    PixabayClient::new(
        format!("{}/api/", server.url()),
        "test-key",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn sends_session_and_fixed_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("key".into(), "test-key".into()),
            Matcher::UrlEncoded("q".into(), "yellow flowers".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "40".into()),
            Matcher::UrlEncoded("image_type".into(), "photo".into()),
            Matcher::UrlEncoded("orientation".into(), "horizontal".into()),
            Matcher::UrlEncoded("safesearch".into(), "true".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TWO_HITS)
        .create_async()
        .await;

    let page = client_for(&server)
        .search_images(&session("yellow flowers", 2))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total_hits, 500);
    assert_eq!(page.hits.len(), 2);

    let first = &page.hits[0];
    assert_eq!(
        first.preview_url.as_str(),
        "https://pixabay.com/get/35bbf209e13e39d2_640.jpg"
    );
    assert_eq!(
        first.full_image_url.as_str(),
        "https://pixabay.com/get/ed6a99fd0a76647_1280.jpg"
    );
    assert_eq!(first.tags, "blossom, bloom, flower");
    assert_eq!(
        (first.likes, first.views, first.comments, first.downloads),
        (5, 7671, 2, 6439)
    );
    assert_eq!(page.hits[1].tags, "tulips, yellow");
}

#[tokio::test]
async fn error_status_becomes_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body("[ERROR 400] \"page\" is out of valid range.")
        .create_async()
        .await;

    let result = client_for(&server)
        .search_images(&session("cats", 14))
        .await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("out of valid range"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_becomes_parse_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"hits": "nope"}"#)
        .create_async()
        .await;

    let result = client_for(&server).search_images(&session("cats", 1)).await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn hits_with_unusable_urls_are_skipped() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "totalHits": 2,
                "hits": [
                    {"webformatURL": "javascript:alert(1)", "largeImageURL": "https://x.test/a.jpg"},
                    {"webformatURL": "https://x.test/b_640.jpg", "largeImageURL": "https://x.test/b.jpg", "tags": "b"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let page = client_for(&server)
        .search_images(&session("cats", 1))
        .await
        .unwrap();

    assert_eq!(page.total_hits, 2);
    assert_eq!(page.hits.len(), 1);
    assert_eq!(page.hits[0].tags, "b");
}

#[tokio::test]
async fn unreachable_api_becomes_network_error() {
    let client = PixabayClient::new(
        "http://127.0.0.1:1/api/",
        "test-key",
        Duration::from_secs(2),
    )
    .unwrap();

    let result = client.search_images(&session("cats", 1)).await;

    assert!(matches!(result, Err(ClientError::Network(_))));
}
