use crate::config::Config;
use crate::config::GrantMode;
use eyre::OptionExt;
use eyre::Result;
use eyre::WrapErr;
use setlist_prompt::Prompt;
use setlist_spotify_api::add_track_to_playlist::add_track_to_playlist;
use setlist_spotify_api::auth::browser::request_authorization_code_from;
use setlist_spotify_api::auth::token::Grant;
use setlist_spotify_api::client::SpotifyClient;
use setlist_spotify_api::credentials::Credentials;
use setlist_spotify_api::get_playlist_tracks::get_playlist_tracks;
use setlist_spotify_api::get_playlists::get_playlists;
use setlist_spotify_api::playlist::Playlist;
use setlist_spotify_api::remove_track_from_playlist::remove_track_from_playlist;
use setlist_spotify_api::search_tracks::search_tracks;
use setlist_spotify_api::track::Track;
use std::io::BufRead;
use std::io::Write;
use tracing::debug;
use tracing::info;

pub const PLAYLIST_PROMPT: &str = "Enter the index of the playlist you want: ";
pub const ACTION_PROMPT: &str = "Do you want to add or remove a track from your playlist? ";
pub const SEARCH_PROMPT: &str = "Enter track to search: ";
pub const TRACK_PROMPT: &str = "Enter the index of the track you want: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

impl Action {
    /// `add` or `remove`; anything else means do nothing.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "add" => Some(Action::Add),
            "remove" => Some(Action::Remove),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added { playlist: Playlist, track: Track },
    Removed { playlist: Playlist, track: Track },
    NoAction,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Added { playlist, track } => {
                write!(f, "Added {} by {} to {}", track.name, track.artist_label(), playlist.name)
            }
            Outcome::Removed { playlist, track } => {
                write!(
                    f,
                    "Removed {} by {} from {}",
                    track.name,
                    track.artist_label(),
                    playlist.name
                )
            }
            Outcome::NoAction => write!(f, "Nothing to do"),
        }
    }
}

pub fn playlist_label(playlist: &Playlist) -> String {
    format!("Playlist Name: {} Playlist ID: {}", playlist.name, playlist.id)
}

pub fn search_label(track: &Track) -> String {
    format!("Track: {} by {}", track.name, track.artist_label())
}

pub fn playlist_track_label(track: &Track) -> String {
    let episode = if track.is_episode() { " (episode)" } else { "" };
    format!("Track Name: {}{} Artist: {}", track.name, episode, track.artist_label())
}

/// Turn the configured grant mode into a concrete grant, running the browser flow if asked.
pub async fn resolve_grant(config: &Config, credentials: &Credentials) -> Result<Grant> {
    let code = match config.grant {
        GrantMode::ClientCredentials => return Ok(Grant::ClientCredentials),
        GrantMode::AuthorizationCode => credentials
            .authorization_code
            .clone()
            .ok_or_eyre("SPOTIFY_GRANT=authorization_code needs SPOTIFY_AUTH_CODE")?,
        GrantMode::Browser => request_authorization_code_from(
            &config.accounts_base,
            &credentials.client_id,
            &config.redirect_uri,
        )
        .await
        .wrap_err("Browser authorization failed")?,
    };
    Ok(Grant::AuthorizationCode {
        code,
        redirect_uri: config.redirect_uri.clone(),
    })
}

/// One interactive session: pick a playlist, then add or remove a single track.
pub async fn run<R: BufRead, W: Write>(
    client: &SpotifyClient,
    config: &Config,
    prompt: &mut Prompt<R, W>,
) -> Result<Outcome> {
    let playlists = get_playlists(client, config.user_id.as_deref())
        .await
        .wrap_err("Failed to list playlists")?;
    let playlist = prompt
        .select(&playlists, PLAYLIST_PROMPT, playlist_label)
        .wrap_err("No playlist selected")?
        .clone();
    debug!("Selected playlist {}", playlist.id);

    let answer = prompt.ask(ACTION_PROMPT)?;
    let Some(action) = Action::parse(&answer) else {
        debug!("Ignoring action {:?}", answer);
        return Ok(Outcome::NoAction);
    };

    match action {
        Action::Add => {
            let query = prompt.ask(SEARCH_PROMPT)?;
            let tracks = search_tracks(client, &query, config.search_limit)
                .await
                .wrap_err_with(|| format!("Failed to search for {:?}", query))?;
            let track = prompt
                .select(&tracks, TRACK_PROMPT, search_label)
                .wrap_err("No track selected")?
                .clone();
            add_track_to_playlist(client, &playlist.id, &track.uri).await?;
            info!("Added {} to {}", track.uri, playlist.id);
            Ok(Outcome::Added { playlist, track })
        }
        Action::Remove => {
            let tracks = get_playlist_tracks(client, &playlist.id)
                .await
                .wrap_err("Failed to list playlist tracks")?;
            let track = prompt
                .select(&tracks, TRACK_PROMPT, playlist_track_label)
                .wrap_err("No track selected")?
                .clone();
            remove_track_from_playlist(client, &playlist.id, &track.uri).await?;
            info!("Removed {} from {}", track.uri, playlist.id);
            Ok(Outcome::Removed { playlist, track })
        }
    }
}
