use crate::app_state::AppState;
use askama_axum::Template;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

#[tracing::instrument(name = "Render landing page")]
async fn home() -> HomePage<'static> {
    HomePage {
        page_title: "Newsletter Generator",
        tagline: "Turn YouTube videos into email newsletters",
        blurb: "Paste any YouTube video link and get a ready-to-send \
            newsletter built from its transcript.",
        steps: [
            "Paste a YouTube URL",
            "The transcript is cleaned up and rewritten",
            "Copy your newsletter and send it",
        ],
        login_label: "Login",
        signup_label: "Start free",
    }
}

#[derive(Template)]
#[template(path = "web/home.html")]
struct HomePage<'a> {
    page_title: &'a str,
    tagline: &'a str,
    blurb: &'a str,
    steps: [&'a str; 3],
    login_label: &'a str,
    signup_label: &'a str,
}
