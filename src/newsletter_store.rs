use crate::domain::{Newsletter, VideoData};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

#[tracing::instrument(name = "Insert newsletter", skip(db_pool, video, content))]
pub async fn insert_newsletter(
    db_pool: &PgPool,
    user_id: Uuid,
    video: &VideoData,
    content: &str,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO newsletters (user_id, video_id, video_title, video_author, content, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(video.video_id.as_ref())
    .bind(&video.title)
    .bind(&video.author)
    .bind(content)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(db_pool)
    .await?;

    Ok(id)
}

#[tracing::instrument(name = "List newsletters", skip(db_pool))]
pub async fn list_newsletters(
    db_pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<Newsletter>, sqlx::Error> {
    sqlx::query_as::<_, Newsletter>(
        r#"
        SELECT id, user_id, video_id, video_title, video_author, content, created_at
        FROM newsletters
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db_pool)
    .await
}

/// Returns the row only when it is owned by the caller; a foreign row is
/// indistinguishable from a missing one.
#[tracing::instrument(name = "Get newsletter", skip(db_pool))]
pub async fn get_newsletter(
    db_pool: &PgPool,
    id: i64,
    user_id: Uuid,
) -> Result<Option<Newsletter>, sqlx::Error> {
    sqlx::query_as::<_, Newsletter>(
        r#"
        SELECT id, user_id, video_id, video_title, video_author, content, created_at
        FROM newsletters
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(db_pool)
    .await
}

/// Ownership is checked before deleting. The read-then-delete window is a
/// benign race: a concurrent delete only turns the result into `false`.
#[tracing::instrument(name = "Delete newsletter", skip(db_pool))]
pub async fn delete_newsletter(
    db_pool: &PgPool,
    id: i64,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let owner = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT user_id
        FROM newsletters
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;

    match owner {
        Some(owner) if owner == user_id => {
            sqlx::query(
                r#"
                DELETE FROM newsletters
                WHERE id = $1
                "#,
            )
            .bind(id)
            .execute(db_pool)
            .await?;

            Ok(true)
        }
        _ => Ok(false),
    }
}
