use crate::app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use get::dashboard;
use post::generate;

mod get;
mod post;

pub use get::get_user_name;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/dashboard", post(generate))
}
