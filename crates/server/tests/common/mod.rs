//! Common test utilities for E2E testing.
//!
//! This module provides a test fixture that creates an in-process server
//! over a temporary upload root, enabling end-to-end testing of the upload
//! flow without binding a socket.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use sortbox_core::{Config, FsPlacer, Placer, RuleSet, ServerConfig, StorageConfig};
use sortbox_server::api::create_router;
use sortbox_server::state::AppState;

/// Boundary used for hand-built multipart bodies.
const BOUNDARY: &str = "sortbox-test-boundary";

/// Test fixture wrapping an in-process router.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_upload() {
///     let fixture = TestFixture::new().await;
///     let response = fixture
///         .upload(&[("photo.jpg", b"bytes".as_slice())])
///         .await;
///     assert_eq!(response.status, StatusCode::OK);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Temporary directory holding the upload root
    pub temp_dir: TempDir,
    /// Upload root inside `temp_dir`
    pub upload_root: PathBuf,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a test fixture with the built-in rule table.
    pub async fn new() -> Self {
        Self::with_rules(RuleSet::default()).await
    }

    /// Create a test fixture with a custom rule set.
    pub async fn with_rules(rules: RuleSet) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let upload_root = temp_dir.path().join("uploads");

        let config = Config {
            server: ServerConfig::default(),
            storage: StorageConfig {
                root: upload_root.clone(),
                rules_path: temp_dir.path().join("organizer_config.json"),
                max_upload_bytes: 1024 * 1024,
            },
        };

        let placer: Arc<dyn Placer> = Arc::new(FsPlacer::new(upload_root.clone(), rules));
        let state = Arc::new(AppState::new(config, placer));
        let router = create_router(state);

        Self {
            router,
            temp_dir,
            upload_root,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a GET request and return the raw body as text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).to_string())
    }

    /// Upload files through `POST /upload` as `files` multipart entries.
    pub async fn upload(&self, files: &[(&str, &[u8])]) -> TestResponse {
        let parts: Vec<MultipartPart> = files
            .iter()
            .map(|&(name, data)| MultipartPart::file("files", name, data))
            .collect();
        self.post_multipart("/upload", &parts).await
    }

    /// Send a POST request with a hand-built multipart body.
    pub async fn post_multipart(&self, path: &str, parts: &[MultipartPart<'_>]) -> TestResponse {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part.filename {
                Some(filename) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        part.field, filename
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.field)
                        .as_bytes(),
                ),
            }
            body.extend_from_slice(part.data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// One part of a hand-built multipart body.
pub struct MultipartPart<'a> {
    pub field: &'a str,
    pub filename: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> MultipartPart<'a> {
    /// A file part (carries a filename).
    pub fn file(field: &'a str, filename: &'a str, data: &'a [u8]) -> Self {
        Self {
            field,
            filename: Some(filename),
            data,
        }
    }

    /// A plain text part (no filename).
    pub fn text(field: &'a str, data: &'a [u8]) -> Self {
        Self {
            field,
            filename: None,
            data,
        }
    }
}
