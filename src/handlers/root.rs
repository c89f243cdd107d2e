//! Landing page.
//! Used by: server.

use axum::response::Html;

use crate::config::ROOT_BODY;

pub async fn index() -> Html<&'static str> {
    Html(ROOT_BODY)
}
