use crate::client::SpotifyClient;
use crate::error::Result;
use crate::page::Page;
use crate::track::Track;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Page<Track>,
}

/// https://developer.spotify.com/documentation/web-api/reference/search
pub async fn search_tracks(
    client: &SpotifyClient,
    query: &str,
    limit: Option<u32>,
) -> Result<Vec<Track>> {
    let limit = limit.map(|l| l.to_string());
    let mut params = vec![("q", query), ("type", "track")];
    if let Some(limit) = limit.as_deref() {
        params.push(("limit", limit));
    }
    let res: SearchResponse = client.get("/search", &params).await?;
    Ok(res.tracks.into_items("search results"))
}
