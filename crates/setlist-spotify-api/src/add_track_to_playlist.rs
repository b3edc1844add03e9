use crate::client::SpotifyClient;
use crate::error::MutationAction;
use crate::error::Result;
use crate::mutate::mutate;
use crate::playlist_id::PlaylistId;
use crate::track_uri::TrackUri;
use http::Method;
use http::StatusCode;
use serde_json::json;

/// Succeeds only on `201 Created`.
///
/// https://developer.spotify.com/documentation/web-api/reference/add-tracks-to-playlist
pub async fn add_track_to_playlist(
    client: &SpotifyClient,
    playlist_id: &PlaylistId,
    track_uri: &TrackUri,
) -> Result<()> {
    let path = format!("/playlists/{}/tracks", playlist_id);
    let body = json!({ "uris": [track_uri] });
    mutate(
        client,
        Method::POST,
        &path,
        &body,
        MutationAction::Add,
        StatusCode::CREATED,
    )
    .await
}
