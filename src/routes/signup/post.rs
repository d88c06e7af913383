use crate::{
    app_state::AppState,
    authentication::compute_password_hash,
    domain::{UserEmail, UserName},
    session::state::TypedSession,
    telemetry::spawn_blocking_with_tracing,
    utils::{e500, HttpError},
};
use anyhow::Context;
use axum::{extract::State, response::Redirect, Form};
use axum_messages::Messages;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

const UNIQUE_VIOLATION: &str = "23505";

#[tracing::instrument(
    skip(app_state, session, messages, form),
    fields(email = tracing::field::Empty)
)]
pub(super) async fn signup(
    State(app_state): State<AppState>,
    session: TypedSession,
    messages: Messages,
    Form(form): Form<FormData>,
) -> Result<Redirect, HttpError<anyhow::Error>> {
    let name = match UserName::parse(form.name) {
        Ok(name) => name,
        Err(e) => {
            messages.error(e);
            return Ok(Redirect::to("/signup"));
        }
    };
    let email = match UserEmail::parse(form.email) {
        Ok(email) => email,
        Err(e) => {
            messages.error(e);
            return Ok(Redirect::to("/signup"));
        }
    };
    tracing::Span::current().record("email", tracing::field::display(&email));

    let password_hash = spawn_blocking_with_tracing(move || compute_password_hash(form.password))
        .await
        .context("Failed to spawn blocking task")
        .map_err(e500)?
        .map_err(e500)?;

    let user_id = match insert_user(&app_state.db_pool, &name, &email, password_hash).await {
        Ok(user_id) => user_id,
        Err(e) if is_unique_violation(&e) => {
            messages.error("An account with this email already exists.");
            return Ok(Redirect::to("/signup"));
        }
        Err(e) => {
            return Err(e500(
                anyhow::Error::from(e).context("Failed to insert new user"),
            ));
        }
    };

    session.cycle_id().await.map_err(e500)?;
    session.insert_user_id(user_id).await.map_err(e500)?;

    Ok(Redirect::to("/dashboard"))
}

#[derive(Deserialize)]
pub(super) struct FormData {
    name: String,
    email: String,
    password: Secret<String>,
}

#[tracing::instrument(name = "Insert new user", skip(db_pool, name, email, password_hash))]
async fn insert_user(
    db_pool: &PgPool,
    name: &UserName,
    email: &UserEmail,
    password_hash: Secret<String>,
) -> Result<Uuid, sqlx::Error> {
    let user_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO users (user_id, name, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(user_id)
    .bind(name.as_ref())
    .bind(email.as_ref())
    .bind(password_hash.expose_secret())
    .bind(OffsetDateTime::now_utc())
    .execute(db_pool)
    .await?;

    Ok(user_id)
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|e| e.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}
