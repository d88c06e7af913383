use crate::domain::VideoId;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

/// Snapshot of video metadata as returned by the external metadata API.
/// Absent fields fall back to placeholders instead of failing the request.
#[derive(Clone, Debug)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub duration: String,
}

#[derive(Clone)]
pub struct MetadataClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl MetadataClient {
    pub fn new(base_url: String, api_key: Secret<String>, timeout: Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    pub async fn video_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, MetadataError> {
        let url = format!("{}/videos", &self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video_id.as_ref()),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::RequestFailed { status, body });
        }

        let listing: VideoListResponse = response.json().await?;
        let item = listing
            .items
            .into_iter()
            .next()
            .ok_or(MetadataError::VideoNotFound)?;

        let snippet = item.snippet.unwrap_or_default();
        let content_details = item.content_details.unwrap_or_default();

        Ok(VideoMetadata {
            title: snippet.title.unwrap_or_else(|| "Unknown Title".into()),
            description: snippet.description.unwrap_or_default(),
            author: snippet
                .channel_title
                .unwrap_or_else(|| "Unknown Author".into()),
            duration: content_details.duration.unwrap_or_else(|| "PT0S".into()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Video metadata request failed with status {status}: {body}")]
    RequestFailed { status: StatusCode, body: String },
    #[error("Video not found or not accessible")]
    VideoNotFound,
    #[error("Failed to reach the video metadata API")]
    Transport(#[from] reqwest::Error),
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: Option<Snippet>,
    content_details: Option<ContentDetails>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: Option<String>,
    description: Option<String>,
    channel_title: Option<String>,
}

#[derive(Default, Deserialize)]
struct ContentDetails {
    duration: Option<String>,
}
