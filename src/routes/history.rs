use crate::{
    app_state::AppState,
    domain::Newsletter,
    markdown::{markdown_to_html, preview},
    newsletter_store::list_newsletters,
    routes::dashboard::get_user_name,
    session::extract::SessionUserId,
    utils::{e500, HttpError},
};
use anyhow::{Context, Error};
use askama_axum::Template;
use axum::{extract::State, routing::get, Router};
use axum_messages::Messages;
use time::{format_description::FormatItem, macros::format_description};

pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[tracing::instrument(name = "Get history", skip(app_state, messages, user_id))]
async fn history(
    State(app_state): State<AppState>,
    messages: Messages,
    SessionUserId(user_id): SessionUserId,
) -> Result<HistoryPage<'static>, HttpError<Error>> {
    let username = get_user_name(&app_state.db_pool, user_id)
        .await
        .map_err(e500)?;

    let newsletters = list_newsletters(&app_state.db_pool, user_id)
        .await
        .context("Failed to list newsletters")
        .map_err(e500)?
        .into_iter()
        .map(NewsletterView::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(e500)?;

    let flashes = messages.map(|m| m.message).collect();

    Ok(HistoryPage {
        page_title: "Your Newsletters",
        heading: "Your Newsletters",
        subheading: "View and manage your generated newsletters",
        empty_hint: "Nothing here yet. Generate your first newsletter from the dashboard.",
        dashboard_label: "Dashboard",
        logout_label: "Logout",
        copy_label: "Copy",
        delete_label: "Delete",
        open_label: "Open",
        username,
        newsletters,
        flashes,
    })
}

struct NewsletterView {
    id: i64,
    video_title: String,
    video_author: String,
    video_url: String,
    created_on: String,
    preview: String,
    content_html: String,
    content_raw: String,
}

impl TryFrom<Newsletter> for NewsletterView {
    type Error = Error;

    fn try_from(newsletter: Newsletter) -> Result<Self, Self::Error> {
        let created_on = newsletter
            .created_at
            .format(DATE_FORMAT)
            .context("Failed to format creation date")?;

        Ok(Self {
            id: newsletter.id,
            video_url: format!("https://www.youtube.com/watch?v={}", newsletter.video_id),
            video_title: newsletter.video_title,
            video_author: newsletter.video_author,
            created_on,
            preview: preview(&newsletter.content),
            content_html: markdown_to_html(&newsletter.content),
            content_raw: newsletter.content,
        })
    }
}

#[derive(Template)]
#[template(path = "web/history.html")]
struct HistoryPage<'a> {
    page_title: &'a str,
    heading: &'a str,
    subheading: &'a str,
    empty_hint: &'a str,
    dashboard_label: &'a str,
    logout_label: &'a str,
    copy_label: &'a str,
    delete_label: &'a str,
    open_label: &'a str,
    username: String,
    newsletters: Vec<NewsletterView>,
    flashes: Vec<String>,
}
