use crate::{
    app_state::AppState,
    markdown::markdown_to_html,
    newsletter_store::get_newsletter,
    session::extract::SessionUserId,
};
use anyhow::Context;
use askama_axum::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[tracing::instrument(name = "Get newsletter page", skip(app_state, user_id))]
pub(super) async fn newsletter(
    State(app_state): State<AppState>,
    SessionUserId(user_id): SessionUserId,
    Path(id): Path<i64>,
) -> Result<NewsletterPage<'static>, NewsletterError> {
    let newsletter = get_newsletter(&app_state.db_pool, id, user_id)
        .await
        .context("Failed to fetch newsletter")?
        .ok_or(NewsletterError::NotFound)?;

    Ok(NewsletterPage {
        page_title: "Newsletter",
        from_label: "From:",
        copy_label: "Copy",
        back_label: "Back to history",
        video_title: newsletter.video_title,
        video_author: newsletter.video_author,
        content_html: markdown_to_html(&newsletter.content),
        content_raw: newsletter.content,
    })
}

#[derive(Template)]
#[template(path = "web/newsletter.html")]
pub(super) struct NewsletterPage<'a> {
    page_title: &'a str,
    from_label: &'a str,
    copy_label: &'a str,
    back_label: &'a str,
    video_title: String,
    video_author: String,
    content_html: String,
    content_raw: String,
}

#[derive(Debug, thiserror::Error)]
pub(super) enum NewsletterError {
    #[error("Newsletter not found")]
    NotFound,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl IntoResponse for NewsletterError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            Self::UnexpectedError(_) => {
                tracing::error!("{:#?}", self);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
