//! Static pages.

use axum::response::Html;

/// GET / -- the browser front end for the API.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
