//! HTML page routes. The pages are static and compiled into the binary; they
//! fetch everything they show from the JSON API.

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../assets/dashboard.html");
const SIMPLE_HTML: &str = include_str!("../assets/simple.html");

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn simple() -> Html<&'static str> {
    Html(SIMPLE_HTML)
}

/// Liveness check.
pub async fn test() -> &'static str {
    "threatboard is working!"
}
