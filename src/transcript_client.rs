use crate::domain::{Caption, VideoId};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone)]
pub struct TranscriptClient {
    http_client: Client,
    base_url: String,
}

impl TranscriptClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            http_client,
            base_url,
        }
    }

    /// Requests the full transcript for a video. The service returns plain
    /// concatenated text rather than timed segments, so the result is a
    /// single caption record with zeroed timing fields.
    pub async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Caption, TranscriptError> {
        let url = format!("{}/transcript", &self.base_url);
        let request_body = TranscriptRequest {
            video_id: video_id.as_ref(),
        };

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "text/plain")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                format!("transcript service returned {status}")
            } else {
                body
            };
            return Err(TranscriptError::Service(detail));
        }

        let transcript = response.text().await?;
        let transcript = transcript.trim();

        if transcript.is_empty() {
            return Err(TranscriptError::NoCaptions);
        }

        Ok(Caption::from_text(transcript.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Transcript fetch failed: {0}")]
    Service(String),
    #[error("No captions available for this video")]
    NoCaptions,
    #[error("Failed to reach the transcript service")]
    Transport(#[from] reqwest::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranscriptRequest<'a> {
    video_id: &'a str,
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};
    use helpers::{transcript_client, video_id, TranscriptBodyMatcher};
    use wiremock::{
        matchers::{any, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use crate::transcript_client::TranscriptError;

    #[tokio::test]
    async fn fetch_transcript_sends_the_expected_request() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/transcript"))
            .and(header("Content-Type", "application/json"))
            .and(header("Accept", "text/plain"))
            .and(TranscriptBodyMatcher)
            .respond_with(ResponseTemplate::new(200).set_body_string("hello world text"))
            .expect(1)
            .mount(&mock_server)
            .await;

        // when
        let response = client.fetch_transcript(&video_id()).await;

        // then
        assert_ok!(response);
    }

    #[tokio::test]
    async fn the_transcript_is_wrapped_as_one_zeroed_caption() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("  hello world text \n"))
            .mount(&mock_server)
            .await;

        // when
        let caption = client.fetch_transcript(&video_id()).await.unwrap();

        // then
        assert_eq!(caption.text, "hello world text");
        assert_eq!(caption.start, 0.0);
        assert_eq!(caption.dur, 0.0);
    }

    #[tokio::test]
    async fn a_blank_body_is_reported_as_missing_captions() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string("   \n  "))
            .mount(&mock_server)
            .await;

        // when
        let response = client.fetch_transcript(&video_id()).await;

        // then
        assert!(matches!(response, Err(TranscriptError::NoCaptions)));
    }

    #[tokio::test]
    async fn a_non_2xx_status_surfaces_the_response_body() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        // when
        let response = client.fetch_transcript(&video_id()).await;

        // then
        let error = response.unwrap_err();
        assert!(error.to_string().contains("upstream exploded"));
    }

    #[tokio::test]
    async fn a_non_2xx_status_with_an_empty_body_surfaces_the_status() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(any())
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        // when
        let response = client.fetch_transcript(&video_id()).await;

        // then
        let error = response.unwrap_err();
        assert!(error.to_string().contains("503"));
    }

    #[tokio::test]
    async fn fetch_transcript_times_out_if_the_server_takes_too_long() {
        // given
        let mock_server = MockServer::start().await;
        let client = transcript_client(mock_server.uri());

        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("text")
                    .set_delay(std::time::Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        // when
        let response = client.fetch_transcript(&video_id()).await;

        // then
        assert_err!(response);
    }

    mod helpers {
        use crate::{domain::VideoId, transcript_client::TranscriptClient};
        use serde_json::{from_slice, Value};
        use std::time::Duration;
        use wiremock::{Match, Request};

        pub struct TranscriptBodyMatcher;

        impl Match for TranscriptBodyMatcher {
            fn matches(&self, request: &Request) -> bool {
                let result: Result<Value, _> = from_slice(&request.body);

                if let Ok(body) = result {
                    body.get("videoId").and_then(Value::as_str) == Some("dQw4w9WgXcQ")
                } else {
                    false
                }
            }
        }

        pub fn transcript_client(base_url: String) -> TranscriptClient {
            TranscriptClient::new(base_url, Duration::from_millis(200))
        }

        pub fn video_id() -> VideoId {
            VideoId::parse("https://youtu.be/dQw4w9WgXcQ").unwrap()
        }
    }
}
