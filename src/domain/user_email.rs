use serde::Deserialize;
use validator::validate_email;

#[derive(Clone, Debug, Deserialize)]
pub struct UserEmail(String);

impl UserEmail {
    /// Accounts are keyed by email, so the address is trimmed and lowercased
    /// before validation to keep lookups case-insensitive.
    pub fn parse(s: String) -> Result<UserEmail, String> {
        let normalized = s.trim().to_lowercase();

        if validate_email(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(format!("`{s}` email has invalid format"))
        }
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
