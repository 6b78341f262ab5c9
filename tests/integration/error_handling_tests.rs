//! Fatal failure paths: each one ends the run without writing a report

mod common;

use common::{esearch_json, mock_fetcher};
use pubmed_fetcher::{PubMedError, SearchParams};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_search_server_error_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let err = mock_fetcher(&server.uri(), output.clone())
        .fetch_and_save("SUFU")
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::ApiError { status: 500, .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unparseable_search_payload_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let err = mock_fetcher(&server.uri(), dir.path().join("out.txt"))
        .fetch_and_save("SUFU")
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::JsonError(_)));
}

#[tokio::test]
async fn test_search_error_field_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"ERROR": "Invalid db name specified: nope"}}"#,
        ))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let params = SearchParams::new("SUFU").with_database("nope");
    let err = mock_fetcher(&server.uri(), dir.path().join("out.txt"))
        .fetch_and_save_with(&params)
        .await
        .unwrap_err();

    match err {
        PubMedError::ApiError { message, .. } => assert!(message.contains("Invalid db name")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_fetch_document_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json(&["1"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<PubmedArticleSet><PubmedArticle></PubmedArticleSet>"),
        )
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");
    let err = mock_fetcher(&server.uri(), output.clone())
        .fetch_and_save("SUFU")
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::XmlError(_)));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json(&[])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<PubmedArticleSet/>"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("out.txt");
    let err = mock_fetcher(&server.uri(), output)
        .fetch_and_save("SUFU")
        .await
        .unwrap_err();

    assert!(matches!(err, PubMedError::IoError { .. }));
}
