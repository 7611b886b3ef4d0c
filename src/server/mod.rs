//! Static file server for previewing the browser-game prototypes locally.
//!
//! Browsers cache game assets aggressively, which makes iterating on a
//! prototype confusing. Every response therefore carries cache-disabling
//! headers, so a plain reload always picks up fresh files.

use std::future::IntoFuture;
use std::path::PathBuf;

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const DEFAULT_PORT: u16 = 8000;

/// Build the preview router over `root`.
///
/// Requests resolve against `root` with conventional static-file semantics:
/// MIME type from the file extension, `index.html` for directory requests,
/// 404 for missing paths, and `..` segments never escape the root. The
/// cache-disabling headers are set on every response, including 404s,
/// overriding anything set further in.
pub fn create_router(root: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve `root` on the given port until interrupted.
///
/// Fails fast if the directory does not exist or the port cannot be bound.
/// Ctrl+C returns cleanly; there is no graceful drain beyond dropping the
/// listener.
pub async fn serve(root: PathBuf, port: u16) -> anyhow::Result<()> {
    let root = root.canonicalize()?;
    let app = create_router(root.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Serving {} on http://localhost:{}", root.display(), port);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, shutting down");
        }
    }

    Ok(())
}
