use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A persisted newsletter. `video_title` and `video_author` are a snapshot
/// taken at generation time and are never synced with the source video.
#[derive(Debug, FromRow)]
pub struct Newsletter {
    pub id: i64,
    pub user_id: Uuid,
    pub video_id: String,
    pub video_title: String,
    pub video_author: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}
