use crate::web::page::{render, PageModel};
use crate::web::state::{ViewEvent, ViewState};
use crate::web::submission::{run_submission, SubmissionForm};
use crate::web::AppState;
use axum::{extract::State, response::Html, Form};

/// `GET /`: empty form.
pub async fn index() -> Html<String> {
    let state = ViewState::Idle.on(ViewEvent::PageShown);
    Html(render(&PageModel {
        state: &state,
        role: None,
        user_text: "",
    }))
}

/// `POST /`: run one submission and show its outcome under the form.
///
/// Always answers 200 with the page; failures are part of the page.
pub async fn submit(State(app): State<AppState>, Form(form): Form<SubmissionForm>) -> Html<String> {
    let state = run_submission(&form, app.credentials.clone(), app.backend.as_ref()).await;
    Html(render(&PageModel {
        state: &state,
        role: Some(&form.role),
        user_text: &form.user_text,
    }))
}

pub async fn health() -> &'static str {
    "ok"
}
