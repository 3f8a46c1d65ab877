// HTTP request handlers
use crate::domain::credentials::{CopyRequest, Credentials};
use crate::domain::status::CopyStatus;
use crate::presentation::app_state::AppState;
use crate::presentation::page::{render_page, FormValues};
use axum::{extract::State, http::StatusCode, response::Html, Form};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CopyForm {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub dashboard_id: String,
    #[serde(default)]
    pub copy_title: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Empty form with the configured base URL filled in
pub async fn show_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    let values = FormValues {
        base_url: state.default_base_url.clone(),
        ..Default::default()
    };
    render_html(&values, None)
}

/// Run one copy and re-render the form with the outcome
pub async fn submit_copy(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CopyForm>,
) -> Result<Html<String>, StatusCode> {
    let values = FormValues {
        base_url: form.base_url.clone(),
        username: form.username.clone(),
        dashboard_id: form.dashboard_id.clone(),
        copy_title: form.copy_title.clone(),
    };

    let request = CopyRequest::new(
        Credentials::new(form.base_url, form.username, form.password),
        form.dashboard_id,
        form.copy_title,
    );

    let result = state.copy_service.copy_dashboard(request).await;
    match &result {
        Ok(outcome) => tracing::info!(
            "Copied dashboard {} to new dashboard {:?}",
            outcome.source_id,
            outcome.new_dashboard_id
        ),
        Err(e) => tracing::warn!(
            status = ?e.http_status(),
            "Dashboard copy failed at {} step: {}",
            e.step(),
            e
        ),
    }

    let status = CopyStatus::from_result(&result);
    render_html(&values, Some(&status))
}

fn render_html(values: &FormValues, status: Option<&CopyStatus>) -> Result<Html<String>, StatusCode> {
    render_page(values, status).map(Html).map_err(|e| {
        tracing::error!("Page render error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
