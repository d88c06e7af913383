use super::{VideoDuration, VideoId};

/// One caption record. The transcript service returns the whole transcript
/// as a single block, so `start` and `dur` are zero in practice.
#[derive(Clone, Debug)]
pub struct Caption {
    pub start: f64,
    pub dur: f64,
    pub text: String,
}

impl Caption {
    pub fn from_text(text: String) -> Self {
        Self {
            start: 0.0,
            dur: 0.0,
            text,
        }
    }
}

/// Per-request snapshot of everything the prompt builder needs. Never
/// persisted; the orchestrator discards it once generation completes.
#[derive(Clone, Debug)]
pub struct VideoData {
    pub video_id: VideoId,
    pub title: String,
    pub description: String,
    pub author: String,
    pub duration: VideoDuration,
    pub captions: Vec<Caption>,
}

impl VideoData {
    pub fn full_transcript(&self) -> String {
        self.captions
            .iter()
            .map(|caption| caption.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
