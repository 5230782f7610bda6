//! Liveness probe handler.

use axum::response::Html;

/// Returns a fixed readiness string.
///
/// Minimal check with no dependencies; pipeline orchestration polls this
/// to confirm the process is serving.
pub async fn service_status() -> Html<&'static str> {
    Html("<pre>BKT Outcome Unwind - ready to go!!!</pre>")
}
