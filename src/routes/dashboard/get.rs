use crate::{
    app_state::AppState,
    session::extract::SessionUserId,
    utils::{e500, HttpError},
};
use anyhow::{Context, Error};
use askama_axum::Template;
use axum::extract::State;
use axum_messages::Messages;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get dashboard", skip(app_state, messages, user_id))]
pub(super) async fn dashboard(
    State(app_state): State<AppState>,
    messages: Messages,
    SessionUserId(user_id): SessionUserId,
) -> Result<DashboardPage<'static>, HttpError<Error>> {
    let username = get_user_name(&app_state.db_pool, user_id)
        .await
        .map_err(e500)?;
    let flashes = messages.map(|m| m.message).collect();

    Ok(DashboardPage::new(username, flashes))
}

#[tracing::instrument(skip(db_pool, user_id))]
pub async fn get_user_name(db_pool: &PgPool, user_id: Uuid) -> Result<String, Error> {
    let name = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name
        FROM users
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db_pool)
    .await
    .context("Failed to perform a query to retrieve a user name")?;

    Ok(name)
}

/// Rendered generation result, shared with the POST handler.
pub(super) struct GeneratedView {
    pub video_title: String,
    pub content_html: String,
    pub content_raw: String,
}

#[derive(Template)]
#[template(path = "web/dashboard.html")]
pub(super) struct DashboardPage<'a> {
    pub page_title: &'a str,
    pub heading: &'a str,
    pub url_placeholder: &'a str,
    pub generate_label: &'a str,
    pub history_label: &'a str,
    pub logout_label: &'a str,
    pub username: String,
    pub error: Option<String>,
    pub result: Option<GeneratedView>,
    pub flashes: Vec<String>,
}

impl DashboardPage<'static> {
    pub fn new(username: String, flashes: Vec<String>) -> Self {
        Self {
            page_title: "Dashboard",
            heading: "What are we creating today?",
            url_placeholder: "Paste YouTube URL here...",
            generate_label: "Generate",
            history_label: "History",
            logout_label: "Logout",
            username,
            error: None,
            result: None,
            flashes,
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_result(mut self, result: GeneratedView) -> Self {
        self.result = Some(result);
        self
    }
}
