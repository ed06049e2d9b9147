pub mod dictionary;
pub mod landing;
pub mod waitlist;

use axum::{
    Router,
    http::{HeaderMap, header},
};

use crate::{adapters::http::app_state::AppState, application::language::UserLanguage};

/// Routes mounted under `/api`. The landing page itself lives at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/waitlist", waitlist::router())
        .nest("/dictionary", dictionary::router())
}

fn user_language(headers: &HeaderMap) -> UserLanguage {
    let lang = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    UserLanguage::from_raw(lang)
}
