use crate::track_uri::TrackUri;
use serde::Deserialize;
use serde::Serialize;

pub const UNKNOWN_ARTIST: &str = "unknown artist";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub uri: TrackUri,
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub artists: Vec<Artist>,
    /// `track` or `episode`; only present in playlist listings.
    #[serde(rename = "type", default)]
    pub type_field: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub name: String,
}

impl Track {
    pub fn artist_names(&self) -> impl Iterator<Item = &str> {
        self.artists.iter().map(|a| a.name.as_str())
    }

    pub fn first_artist_name(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// First artist, or a placeholder when the catalog lists none.
    pub fn artist_label(&self) -> &str {
        self.first_artist_name().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn is_episode(&self) -> bool {
        self.type_field.as_deref() == Some("episode")
    }
}
