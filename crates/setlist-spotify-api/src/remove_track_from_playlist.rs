use crate::client::SpotifyClient;
use crate::error::MutationAction;
use crate::error::Result;
use crate::mutate::mutate;
use crate::playlist_id::PlaylistId;
use crate::track_uri::TrackUri;
use http::Method;
use http::StatusCode;
use serde_json::json;

/// Succeeds only on `200 OK`.
///
/// https://developer.spotify.com/documentation/web-api/reference/remove-tracks-playlist
pub async fn remove_track_from_playlist(
    client: &SpotifyClient,
    playlist_id: &PlaylistId,
    track_uri: &TrackUri,
) -> Result<()> {
    let path = format!("/playlists/{}/tracks", playlist_id);
    let body = json!({ "tracks": [{ "uri": track_uri }] });
    mutate(
        client,
        Method::DELETE,
        &path,
        &body,
        MutationAction::Remove,
        StatusCode::OK,
    )
    .await
}
