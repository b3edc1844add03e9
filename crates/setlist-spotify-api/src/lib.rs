pub mod access_token;
pub mod add_track_to_playlist;
pub mod client;
pub mod credentials;
pub mod error;
pub mod get_playlist_tracks;
pub mod get_playlists;
mod mutate;
mod nullable;
pub mod page;
pub mod playlist;
pub mod playlist_id;
pub mod remove_track_from_playlist;
pub mod search_tracks;
pub mod track;
pub mod track_uri;
pub mod auth {
    pub mod browser;
    pub mod token;
}

pub use error::Error;
pub use error::Result;
