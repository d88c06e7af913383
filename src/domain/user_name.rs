use once_cell::sync::Lazy;
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug, Deserialize)]
pub struct UserName(String);

static FORBIDDEN_CHARS: [char; 10] = ['<', '>', '\'', '"', '\\', '(', ')', '{', '}', '/'];
static FORBIDDEN_CHARS_STRING: Lazy<String> = Lazy::new(|| String::from_iter(FORBIDDEN_CHARS));

impl UserName {
    pub fn parse(s: String) -> Result<UserName, String> {
        let s = s.trim().to_string();

        match s {
            _ if s.is_empty() => Err("User name is empty or contains whitespace only".into()),
            _ if s.graphemes(true).count() > 256 => {
                Err(format!("`{s}` is longer than 256 graphemes"))
            }
            _ if s.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) => Err(format!(
                "`{s}` contains at least one of forbidden characters: {}",
                *FORBIDDEN_CHARS_STRING
            )),
            _ => Ok(Self(s)),
        }
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
