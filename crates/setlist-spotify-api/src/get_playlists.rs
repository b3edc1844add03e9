use crate::client::SpotifyClient;
use crate::error::Result;
use crate::page::Page;
use crate::playlist::Playlist;

/// Playlists of `user_id`, or of the token's owner when `None`.
///
/// https://developer.spotify.com/documentation/web-api/reference/get-list-users-playlists
pub async fn get_playlists(
    client: &SpotifyClient,
    user_id: Option<&str>,
) -> Result<Vec<Playlist>> {
    let path = match user_id {
        Some(user_id) => format!("/users/{}/playlists", user_id),
        None => "/me/playlists".to_string(),
    };
    let res: Page<Playlist> = client.get(&path, &[]).await?;
    Ok(res.into_items("playlists"))
}
