use super::get::{get_user_name, DashboardPage, GeneratedView};
use crate::{
    app_state::AppState,
    generation::generate_newsletter,
    markdown::markdown_to_html,
    session::extract::SessionUserId,
    utils::{e500, HttpError},
};
use anyhow::Error;
use axum::{extract::State, Form};
use serde::Deserialize;

#[tracing::instrument(name = "Generate newsletter from form", skip(app_state, user_id, form))]
pub(super) async fn generate(
    State(app_state): State<AppState>,
    SessionUserId(user_id): SessionUserId,
    Form(form): Form<FormData>,
) -> Result<DashboardPage<'static>, HttpError<Error>> {
    let username = get_user_name(&app_state.db_pool, user_id)
        .await
        .map_err(e500)?;
    let page = DashboardPage::new(username, Vec::new());

    match generate_newsletter(&app_state, user_id, &form.youtube_url).await {
        Ok(newsletter) => Ok(page.with_result(GeneratedView {
            video_title: newsletter.video_title,
            content_html: markdown_to_html(&newsletter.content),
            content_raw: newsletter.content,
        })),
        Err(e) => {
            tracing::error!("{:#?}", e);
            Ok(page.with_error(format!("Failed to generate newsletter: {e}")))
        }
    }
}

#[derive(Deserialize)]
pub(super) struct FormData {
    youtube_url: String,
}
