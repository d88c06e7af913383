use crate::app_state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use delete::delete;
use get::newsletter;

mod delete;
mod get;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/newsletters/:id", get(newsletter))
        .route("/newsletters/:id/delete", post(delete))
}
