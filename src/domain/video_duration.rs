use once_cell::sync::Lazy;
use regex::Regex;

const SECONDS_PER_MINUTE: u64 = 60;

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").unwrap()
});

/// An ISO-8601 video duration (the `PnDTnHnMnS` subset the metadata API
/// emits), held as whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoDuration(u64);

impl VideoDuration {
    pub fn parse(s: &str) -> Result<VideoDuration, String> {
        let captures = DURATION_RE
            .captures(s.trim())
            .ok_or_else(|| format!("`{s}` is not a valid ISO-8601 duration"))?;

        let component = |i: usize| {
            captures
                .get(i)
                .map_or(0, |m| m.as_str().parse::<u64>().unwrap_or(0))
        };

        let seconds = component(1) * 86_400
            + component(2) * 3_600
            + component(3) * SECONDS_PER_MINUTE
            + component(4);

        Ok(Self(seconds))
    }

    pub fn zero() -> Self {
        Self(0)
    }

    pub fn as_seconds(&self) -> u64 {
        self.0
    }

    pub fn minutes(&self) -> u64 {
        self.0 / SECONDS_PER_MINUTE
    }
}
