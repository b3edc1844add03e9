use crate::client::SpotifyClient;
use crate::error::Error;
use crate::error::MutationAction;
use crate::error::Result;
use http::Method;
use http::StatusCode;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SnapshotResponse {
    snapshot_id: Option<String>,
}

/// Send a single mutation and accept exactly `expected`.
pub(crate) async fn mutate<B>(
    client: &SpotifyClient,
    method: Method,
    path: &str,
    body: &B,
    action: MutationAction,
    expected: StatusCode,
) -> Result<()>
where
    B: Serialize + ?Sized,
{
    let (status, body) = client.send(method, path, &[], Some(body)).await?;
    if status != expected {
        return Err(Error::Mutation {
            action,
            expected,
            status,
            body,
        });
    }
    if let Ok(SnapshotResponse {
        snapshot_id: Some(snapshot_id),
    }) = serde_json::from_str(&body)
    {
        debug!("Playlist snapshot after {}: {}", action, snapshot_id);
    }
    Ok(())
}
