use crate::{
    app_state::AppState,
    newsletter_store::delete_newsletter,
    session::extract::SessionUserId,
    utils::{e500, HttpError},
};
use anyhow::Context;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use axum_messages::Messages;

#[tracing::instrument(name = "Delete newsletter from form", skip(app_state, user_id, messages))]
pub(super) async fn delete(
    State(app_state): State<AppState>,
    SessionUserId(user_id): SessionUserId,
    messages: Messages,
    Path(id): Path<i64>,
) -> Result<Redirect, HttpError<anyhow::Error>> {
    let deleted = delete_newsletter(&app_state.db_pool, id, user_id)
        .await
        .context("Failed to delete newsletter")
        .map_err(e500)?;

    if deleted {
        messages.info("Newsletter deleted.");
    } else {
        messages.error("Newsletter not found.");
    }

    Ok(Redirect::to("/history"))
}
