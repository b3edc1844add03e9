use serde::Deserialize;
use serde::Serialize;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(pub String);
impl std::fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl Deref for PlaylistId {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<&str> for PlaylistId {
    fn from(value: &str) -> Self {
        PlaylistId(value.to_string())
    }
}
