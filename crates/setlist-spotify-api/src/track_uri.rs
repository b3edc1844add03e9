use serde::Deserialize;
use serde::Serialize;
use std::ops::Deref;

/// A catalog URI such as `spotify:track:4uLU6hMCjMI75M1A2tKUQC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackUri(pub String);
impl std::fmt::Display for TrackUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Deref for TrackUri {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<str> for TrackUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl From<&str> for TrackUri {
    fn from(value: &str) -> Self {
        TrackUri(value.to_string())
    }
}
