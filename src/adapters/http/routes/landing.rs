use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;

use crate::{
    adapters::http::{app_state::AppState, routes::user_language},
    app_error::{AppError, AppResult},
    application::{landing_page::LandingTemplate, submission_form::SubmissionForm},
};

#[derive(Deserialize)]
struct SubmitForm {
    #[serde(default)]
    email: String,
}

fn render<T: Template>(tmpl: T) -> Html<String> {
    Html(tmpl.render().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Template render failed");
        format!("<pre>Template error: {e}</pre>")
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(show_page).post(submit_page))
}

async fn show_page(State(app_state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let lang = user_language(&headers);
    let form = SubmissionForm::new();
    render(LandingTemplate::new(
        lang,
        &form,
        &app_state.config.contact_email,
    ))
}

/// No-script path: the browser posts the form and gets the page back with the
/// outcome rendered in place.
async fn submit_page(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(payload): Form<SubmitForm>,
) -> AppResult<impl IntoResponse> {
    let lang = user_language(&headers);
    let mut form = SubmissionForm::with_email(payload.email);

    app_state
        .waitlist_use_cases
        .submit_form(&mut form, lang)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(render(LandingTemplate::new(
        lang,
        &form,
        &app_state.config.contact_email,
    )))
}
