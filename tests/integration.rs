//! End-to-end tests against the HTTP router.
//!
//! Each test runs against a fresh temporary upload directory.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::util::ServiceExt;

use file_gateway::{ServerConfig, api};

const BOUNDARY: &str = "gateway-test-boundary";

fn test_router(upload_dir: &std::path::Path) -> Router {
    let config = ServerConfig {
        bind_address: "127.0.0.1".into(),
        port: 8080,
        upload_dir: upload_dir.to_string_lossy().to_string(),
        max_upload_size_mb: 8,
    };
    api::router(Arc::new(config))
}

fn upload_request(file_name: Option<&str>, content: &[u8]) -> Request<Body> {
    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"file\"; filename=\"{}\"", name),
        None => "form-data; name=\"file\"".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(format!("Content-Disposition: {}\r\n", disposition).as_bytes());
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/files/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn download_request(file_name: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/files/download/{}", file_name))
        .body(Body::empty())
        .unwrap()
}

fn delete_request(file_name: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/api/files/delete/{}", file_name))
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn upload_then_download_roundtrip() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router
        .clone()
        .oneshot(upload_request(Some("report.txt"), b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("report.txt"), "unexpected body: {}", body);

    let response = router.oneshot(download_request("report.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/octet-stream"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=report.txt"
    );
    assert_eq!(body_bytes(response).await, b"hello");
}

#[tokio::test]
async fn reupload_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router
        .clone()
        .oneshot(upload_request(Some("report.txt"), b"first"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(upload_request(Some("report.txt"), b"second"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(download_request("report.txt")).await.unwrap();
    assert_eq!(body_bytes(response).await, b"second");
}

#[tokio::test]
async fn upload_creates_missing_upload_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("uploads");
    let router = test_router(&root);

    let response = router
        .oneshot(upload_request(Some("report.txt"), b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(root.join("report.txt").is_file());
}

#[tokio::test]
async fn upload_without_filename_is_rejected() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router.oneshot(upload_request(None, b"hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upload_with_traversal_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("uploads");
    std::fs::create_dir(&root).unwrap();
    let router = test_router(&root);

    let response = router
        .oneshot(upload_request(Some("../escape.txt"), b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!dir.path().join("escape.txt").exists());
}

#[tokio::test]
async fn download_of_missing_file_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router.oneshot(download_request("missing.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_download_is_404() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router
        .clone()
        .oneshot(upload_request(Some("report.txt"), b"hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(delete_request("report.txt"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("report.txt"));

    let response = router.oneshot(download_request("report.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_of_missing_file_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let router = test_router(dir.path());

    let response = router.oneshot(delete_request("missing.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("missing.txt"), "unexpected body: {}", body);
}
