use crate::{
    generative_client::GenerativeClient, metadata_client::MetadataClient,
    transcript_client::TranscriptClient,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub metadata_client: MetadataClient,
    pub transcript_client: TranscriptClient,
    pub generative_client: GenerativeClient,
}
