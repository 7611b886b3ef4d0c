use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use feature_table::server::create_router;
use tempfile::TempDir;

/// Build a server over a scratch prototype directory:
///
/// ```text
/// <tmp>/
///   secret.txt          (outside the served root)
///   site/
///     index.html
///     game.js
///     assets/sprite.svg
/// ```
fn setup() -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("secret.txt"), "do not serve").expect("Failed to write file");

    let root = dir.path().join("site");
    std::fs::create_dir(&root).expect("Failed to create site dir");
    std::fs::write(root.join("index.html"), "<html><body>tetris</body></html>")
        .expect("Failed to write file");
    std::fs::write(root.join("game.js"), "console.log('ready');").expect("Failed to write file");
    std::fs::create_dir(root.join("assets")).expect("Failed to create assets dir");
    std::fs::write(root.join("assets").join("sprite.svg"), "<svg></svg>")
        .expect("Failed to write file");

    let app = create_router(root);
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, dir)
}

fn assert_cache_disabled(response: &TestResponse) {
    let headers = response.headers();
    assert_eq!(
        headers
            .get("cache-control")
            .expect("Cache-Control header missing"),
        "no-store, no-cache, must-revalidate"
    );
    assert_eq!(headers.get("expires").expect("Expires header missing"), "0");
}

mod existing_files {
    use super::*;

    #[tokio::test]
    async fn serves_file_bytes_with_caching_disabled() {
        let (server, _dir) = setup();

        let response = server.get("/game.js").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "console.log('ready');");
        assert_cache_disabled(&response);
    }

    #[tokio::test]
    async fn infers_mime_type_from_extension() {
        let (server, _dir) = setup();

        let response = server.get("/game.js").await;

        response.assert_status_ok();
        let content_type = response
            .headers()
            .get("content-type")
            .expect("Content-Type header missing")
            .to_str()
            .expect("Content-Type not valid UTF-8")
            .to_string();
        assert!(content_type.contains("javascript"), "got {content_type}");
    }

    #[tokio::test]
    async fn serves_index_html_for_directory_requests() {
        let (server, _dir) = setup();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains("tetris"));
        assert_cache_disabled(&response);
    }

    #[tokio::test]
    async fn serves_nested_paths() {
        let (server, _dir) = setup();

        let response = server.get("/assets/sprite.svg").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "<svg></svg>");
    }
}

mod missing_files {
    use super::*;

    #[tokio::test]
    async fn returns_404_with_caching_disabled() {
        let (server, _dir) = setup();

        let response = server.get("/no-such-file.html").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_cache_disabled(&response);
    }

    #[tokio::test]
    async fn keeps_serving_after_a_miss() {
        let (server, _dir) = setup();

        server.get("/no-such-file.html").await;
        let response = server.get("/game.js").await;

        response.assert_status_ok();
    }
}

mod traversal {
    use super::*;

    #[tokio::test]
    async fn parent_segments_do_not_escape_the_root() {
        let (server, _dir) = setup();

        let response = server.get("/../secret.txt").await;

        assert_ne!(response.status_code(), StatusCode::OK);
        assert!(!response.text().contains("do not serve"));
    }

    #[tokio::test]
    async fn nested_parent_segments_do_not_escape_the_root() {
        let (server, _dir) = setup();

        let response = server.get("/assets/../../secret.txt").await;

        assert_ne!(response.status_code(), StatusCode::OK);
        assert!(!response.text().contains("do not serve"));
    }
}
