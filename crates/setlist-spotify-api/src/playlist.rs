use crate::page::Page;
use crate::playlist_id::PlaylistId;
use crate::track::Track;
use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::nullable::null_as_default")]
    pub id: PlaylistId,
}

/// https://developer.spotify.com/documentation/web-api/reference/get-playlist
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDetail {
    #[serde(default)]
    pub tracks: Page<PlaylistItem>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// `null` when the entry is no longer available.
    #[serde(default)]
    pub track: Option<Track>,
}

impl PlaylistDetail {
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
            .into_items("playlist tracks")
            .into_iter()
            .filter_map(|item| item.track)
            .collect()
    }
}
