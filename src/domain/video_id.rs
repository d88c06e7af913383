use once_cell::sync::Lazy;
use regex::Regex;

static ID_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)")
            .unwrap(),
        Regex::new(r"youtube\.com/v/([^&\n?#]+)").unwrap(),
    ]
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Extracts a video id from a free-form YouTube URL. The input is
    /// canonicalized first (leading `@`s stripped, scheme added when absent);
    /// the id is whatever the first matching URL shape captures, truncated at
    /// the first of `&`, newline, `?`, `#`.
    pub fn parse(url: &str) -> Result<VideoId, String> {
        let url = canonicalize_url(url);

        ID_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(&url))
            .map(|captures| Self(captures[1].to_string()))
            .ok_or_else(|| format!("`{url}` does not contain a recognizable video id"))
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn canonicalize_url(raw: &str) -> String {
    let stripped = raw.trim().trim_start_matches('@');

    if stripped.starts_with("http://") || stripped.starts_with("https://") {
        stripped.to_string()
    } else {
        format!("https://{stripped}")
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::VideoId;
    use claims::{assert_err, assert_ok_eq};
    use proptest::prelude::proptest;

    #[test]
    fn watch_urls_are_parsed_successfully() {
        // given
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "dQw4w9WgXcQ");
    }

    #[test]
    fn short_urls_are_parsed_successfully() {
        // given
        let url = "https://youtu.be/dQw4w9WgXcQ";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "dQw4w9WgXcQ");
    }

    #[test]
    fn embed_urls_are_parsed_successfully() {
        // given
        let url = "https://www.youtube.com/embed/dQw4w9WgXcQ";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "dQw4w9WgXcQ");
    }

    #[test]
    fn legacy_v_urls_are_parsed_successfully() {
        // given
        let url = "https://www.youtube.com/v/dQw4w9WgXcQ";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "dQw4w9WgXcQ");
    }

    #[test]
    fn the_id_stops_at_the_first_delimiter() {
        // given
        for url in [
            "https://www.youtube.com/watch?v=abc123&t=5s",
            "https://youtu.be/abc123?si=tracking",
            "https://www.youtube.com/embed/abc123#fragment",
            "https://www.youtube.com/watch?v=abc123\nsecond line",
        ] {
            // when
            let result = VideoId::parse(url);

            // then
            assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "abc123");
        }
    }

    #[test]
    fn leading_at_signs_are_stripped() {
        // given
        let url = "@@https://www.youtube.com/watch?v=abc123";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "abc123");
    }

    #[test]
    fn a_missing_scheme_is_tolerated() {
        // given
        let url = "www.youtube.com/watch?v=abc123";

        // when
        let result = VideoId::parse(url);

        // then
        assert_ok_eq!(result.map(|id| id.as_ref().to_string()), "abc123");
    }

    #[test]
    fn urls_without_a_recognizable_shape_are_rejected() {
        // given
        for url in [
            "",
            "https://example.com/watch?v=abc123",
            "https://www.youtube.com/",
            "not a url at all",
        ] {
            // when
            let result = VideoId::parse(url);

            // then
            assert_err!(result);
        }
    }

    proptest! {
        #[test]
        fn generated_ids_survive_a_watch_url_round_trip(id in "[A-Za-z0-9_-]{11}") {
            // given
            let url = format!("https://www.youtube.com/watch?v={id}");

            // when
            let result = VideoId::parse(&url);

            // then
            assert_ok_eq!(result.map(|v| v.as_ref().to_string()), id);
        }
    }
}
