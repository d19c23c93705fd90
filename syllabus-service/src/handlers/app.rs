use askama::Template;
use axum::response::IntoResponse;

use crate::models::MAX_TITLE_CHARS;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_title_chars: usize,
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {
        max_title_chars: MAX_TITLE_CHARS,
    }
}
