use crate::client::SpotifyClient;
use crate::error::Result;
use crate::playlist::PlaylistDetail;
use crate::playlist_id::PlaylistId;
use crate::track::Track;

/// https://developer.spotify.com/documentation/web-api/reference/get-playlist
pub async fn get_playlist_tracks(
    client: &SpotifyClient,
    playlist_id: &PlaylistId,
) -> Result<Vec<Track>> {
    let path = format!("/playlists/{}", playlist_id);
    let res: PlaylistDetail = client.get(&path, &[]).await?;
    Ok(res.into_tracks())
}
