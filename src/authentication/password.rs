use crate::{domain::UserEmail, telemetry::spawn_blocking_with_tracing};
use anyhow::{anyhow, Context};
use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use secrecy::{ExposeSecret, Secret};
use sqlx::PgPool;
use uuid::Uuid;

pub struct Credentials {
    pub email: UserEmail,
    pub password: Secret<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials(#[source] anyhow::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

// Verified when no account matches, so unknown emails take as long as
// known ones.
const FALLBACK_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

#[tracing::instrument(name = "Validate credentials", skip(db_pool, credentials))]
pub async fn validate_credentials(
    db_pool: &PgPool,
    credentials: Credentials,
) -> Result<Uuid, AuthError> {
    let mut user_id = None;
    let mut expected_password_hash = Secret::new(FALLBACK_PASSWORD_HASH.to_string());

    if let Some((stored_user_id, stored_password_hash)) =
        get_stored_credentials(db_pool, &credentials.email).await?
    {
        user_id = Some(stored_user_id);
        expected_password_hash = stored_password_hash;
    }

    spawn_blocking_with_tracing(move || {
        verify_password_hash(expected_password_hash, credentials.password)
    })
    .await
    .context("Failed to spawn blocking task")??;

    user_id.ok_or_else(|| AuthError::InvalidCredentials(anyhow!("Unknown email")))
}

#[tracing::instrument(name = "Get stored credentials", skip(db_pool, email))]
pub async fn get_stored_credentials(
    db_pool: &PgPool,
    email: &UserEmail,
) -> Result<Option<(Uuid, Secret<String>)>, anyhow::Error> {
    let row = sqlx::query_as::<_, (Uuid, String)>(
        r#"
        SELECT user_id, password_hash
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email.as_ref())
    .fetch_optional(db_pool)
    .await
    .context("Failed to perform a query to retrieve stored credentials")?;

    Ok(row.map(|(user_id, password_hash)| (user_id, Secret::new(password_hash))))
}

#[tracing::instrument(name = "Verify password hash", skip(expected, candidate))]
fn verify_password_hash(
    expected: Secret<String>,
    candidate: Secret<String>,
) -> Result<(), AuthError> {
    let expected = PasswordHash::new(expected.expose_secret())
        .context("Failed to parse hash in PHC string format")?;

    Argon2::default()
        .verify_password(candidate.expose_secret().as_bytes(), &expected)
        .context("Invalid password")
        .map_err(AuthError::InvalidCredentials)
}

pub fn compute_password_hash(password: Secret<String>) -> Result<Secret<String>, anyhow::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).context("Failed to build argon2 parameters")?,
    )
    .hash_password(password.expose_secret().as_bytes(), &salt)
    .context("Failed to hash password")?
    .to_string();

    Ok(Secret::new(password_hash))
}

#[cfg(test)]
mod tests {
    use super::{compute_password_hash, verify_password_hash, AuthError};
    use claims::{assert_err, assert_ok};
    use secrecy::Secret;

    #[test]
    fn a_computed_hash_verifies_the_original_password() {
        // given
        let password = Secret::new("correct horse battery staple".to_string());
        let hash = compute_password_hash(password.clone()).unwrap();

        // when
        let result = verify_password_hash(hash, password);

        // then
        assert_ok!(result);
    }

    #[test]
    fn the_wrong_password_is_rejected() {
        // given
        let hash = compute_password_hash(Secret::new("right password".to_string())).unwrap();

        // when
        let result = verify_password_hash(hash, Secret::new("wrong password".to_string()));

        // then
        let error = assert_err!(result);
        assert!(matches!(error, AuthError::InvalidCredentials(_)));
    }
}
