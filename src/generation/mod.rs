use crate::{
    app_state::AppState,
    domain::{VideoData, VideoDuration, VideoId},
    generative_client::{GenerativeClient, GenerativeError},
    metadata_client::{MetadataClient, MetadataError},
    newsletter_store,
    transcript_client::{TranscriptClient, TranscriptError},
};
use uuid::Uuid;

pub mod formatting;
pub mod prompts;

const MIN_NEWSLETTER_LENGTH: usize = 300;

#[derive(Debug)]
pub struct GeneratedNewsletter {
    pub id: i64,
    pub video_title: String,
    pub video_author: String,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid YouTube URL - could not extract video ID")]
    InvalidUrl(#[source] InvalidUrlError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Transcript(#[from] TranscriptError),
    #[error(
        "No captions available for this video. \
        The video must have captions to generate a newsletter."
    )]
    NoCaptions,
    #[error(transparent)]
    Generative(#[from] GenerativeError),
    #[error("Generated newsletter is too short: {0} characters")]
    ContentTooShort(usize),
    #[error("Failed to save the newsletter")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct InvalidUrlError(String);

/// Runs the whole pipeline for one URL: extract video data, rewrite the
/// transcript, generate the newsletter, persist it for `user_id`. Strictly
/// sequential; a failure anywhere discards all intermediate output and the
/// next attempt starts over from extraction.
#[tracing::instrument(
    name = "Generate newsletter",
    skip(app_state, url),
    fields(video_id = tracing::field::Empty)
)]
pub async fn generate_newsletter(
    app_state: &AppState,
    user_id: Uuid,
    url: &str,
) -> Result<GeneratedNewsletter, GenerationError> {
    let video = extract_video_data(
        &app_state.metadata_client,
        &app_state.transcript_client,
        url,
    )
    .await?;
    tracing::Span::current().record("video_id", tracing::field::display(video.video_id.as_ref()));

    let content = produce_newsletter(&app_state.generative_client, &video).await?;

    let id = newsletter_store::insert_newsletter(&app_state.db_pool, user_id, &video, &content)
        .await?;
    tracing::info!("Newsletter saved with id `{id}`");

    Ok(GeneratedNewsletter {
        id,
        video_title: video.title,
        video_author: video.author,
        content,
    })
}

#[tracing::instrument(name = "Extract video data", skip(metadata_client, transcript_client, url))]
pub async fn extract_video_data(
    metadata_client: &MetadataClient,
    transcript_client: &TranscriptClient,
    url: &str,
) -> Result<VideoData, GenerationError> {
    let video_id =
        VideoId::parse(url).map_err(|e| GenerationError::InvalidUrl(InvalidUrlError(e)))?;

    let metadata = metadata_client.video_metadata(&video_id).await?;
    let caption = transcript_client.fetch_transcript(&video_id).await?;

    let duration = VideoDuration::parse(&metadata.duration).unwrap_or_else(|e| {
        tracing::warn!("Falling back to a zero duration: {e}");
        VideoDuration::zero()
    });

    Ok(VideoData {
        video_id,
        title: metadata.title,
        description: metadata.description,
        author: metadata.author,
        duration,
        captions: vec![caption],
    })
}

/// The two-stage generative pass over already-extracted video data.
#[tracing::instrument(name = "Produce newsletter", skip(generative_client, video))]
pub async fn produce_newsletter(
    generative_client: &GenerativeClient,
    video: &VideoData,
) -> Result<String, GenerationError> {
    if video.captions.is_empty() {
        return Err(GenerationError::NoCaptions);
    }

    let transcript = video.full_transcript();
    tracing::info!("Rewriting a transcript of {} characters", transcript.len());
    let rewritten = generative_client
        .generate(&prompts::rewrite_prompt(video, &transcript))
        .await?;

    tracing::info!("Generating a newsletter from {} characters", rewritten.len());
    let newsletter = generative_client
        .generate(&prompts::newsletter_prompt(video, &rewritten))
        .await?;
    let newsletter = formatting::normalize_markdown(&newsletter);

    if newsletter.chars().count() < MIN_NEWSLETTER_LENGTH {
        return Err(GenerationError::ContentTooShort(newsletter.chars().count()));
    }

    Ok(newsletter)
}
