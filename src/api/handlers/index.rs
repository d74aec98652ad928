use askama::Template;
use axum::response::Html;

use crate::api::pages::IndexTemplate;
use crate::error::Result;

/// Static description of the service.
pub async fn index() -> Result<Html<String>> {
    Ok(Html(IndexTemplate::default().render()?))
}
