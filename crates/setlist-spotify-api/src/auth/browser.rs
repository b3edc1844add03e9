use crate::auth::token::ACCOUNTS_BASE;
use crate::error::Error;
use crate::error::Result;
use open::that as open_browser;
use rand::Rng;
use rand::distr::Alphanumeric;
use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::debug;
use tracing::info;
use tracing::warn;
use url::Url;

/// Scopes needed to read and modify the user's playlists.
pub const PLAYLIST_SCOPES: &str =
    "playlist-read-private playlist-modify-public playlist-modify-private";

fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub fn authorize_url(
    accounts_base: &str,
    client_id: &str,
    redirect_uri: &str,
    state: &str,
) -> Result<Url> {
    let base = format!("{}/authorize", accounts_base.trim_end_matches('/'));
    Url::parse_with_params(
        &base,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", PLAYLIST_SCOPES),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Authorization(format!("Invalid authorize URL {}: {}", base, e)))
}

/// Open the consent page and wait for the provider to redirect back with a code.
pub async fn request_authorization_code(client_id: &str, redirect_uri: &str) -> Result<String> {
    request_authorization_code_from(ACCOUNTS_BASE, client_id, redirect_uri).await
}

pub async fn request_authorization_code_from(
    accounts_base: &str,
    client_id: &str,
    redirect_uri: &str,
) -> Result<String> {
    let state = generate_state();
    let auth_url = authorize_url(accounts_base, client_id, redirect_uri, &state)?;

    // Bind before opening the browser so the redirect cannot race us.
    let listener = TcpListener::bind(listen_addr(redirect_uri)?)
        .await
        .map_err(|e| {
            Error::Authorization(format!("Failed to listen on {}: {}", redirect_uri, e))
        })?;

    info!("Opening browser for auth");
    if let Err(e) = open_browser(auth_url.as_str()) {
        warn!("Failed to open browser ({}), visit this URL manually:\n{}", e, auth_url);
    }

    listen_for_code(listener, &state).await
}

fn listen_addr(redirect_uri: &str) -> Result<String> {
    let url = Url::parse(redirect_uri).map_err(|e| {
        Error::Authorization(format!("Invalid redirect URI {}: {}", redirect_uri, e))
    })?;
    let host = url.host_str().ok_or_else(|| {
        Error::Authorization(format!("Redirect URI has no host: {}", redirect_uri))
    })?;
    let port = url.port_or_known_default().unwrap_or(80);
    Ok(format!("{}:{}", host, port))
}

async fn listen_for_code(listener: TcpListener, expected_state: &str) -> Result<String> {
    debug!("Listening for code on {:?}", listener.local_addr().ok());
    let io_err =
        |e: std::io::Error| Error::Authorization(format!("Callback connection failed: {}", e));
    let (mut socket, _) = listener.accept().await.map_err(io_err)?;

    let mut buffer = [0; 4096];
    let read = socket.read(&mut buffer).await.map_err(io_err)?;
    let request = String::from_utf8_lossy(&buffer[..read]);
    let result = parse_callback(&request, expected_state);

    let (status, message) = match &result {
        Ok(_) => ("200 OK", "Spotify auth complete. You may close this window."),
        Err(_) => ("400 Bad Request", "Spotify auth failed. Check the terminal."),
    };
    let body = format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="UTF-8"><title>Spotify Auth</title></head>
  <body style="font-family:sans-serif;text-align:center;padding-top:3em">
    <h1>Setlist</h1>
    <strong>{}</strong>
  </body>
</html>
"#,
        message
    );
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await.map_err(io_err)?;

    result
}

/// Pull the `code` out of the raw HTTP request the browser sends to the redirect URI.
pub fn parse_callback(request: &str, expected_state: &str) -> Result<String> {
    let url = request
        .split_whitespace()
        .nth(1)
        .and_then(|target| Url::parse(&format!("http://localhost{}", target)).ok())
        .ok_or_else(|| Error::Authorization("Malformed callback request".to_string()))?;

    let param = |name: &str| {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.to_string())
    };

    if let Some(error) = param("error") {
        return Err(Error::Authorization(format!("Provider returned error: {}", error)));
    }
    if param("state").as_deref() != Some(expected_state) {
        return Err(Error::Authorization("State mismatch in callback".to_string()));
    }
    param("code")
        .ok_or_else(|| Error::Authorization("Failed to extract code from request".to_string()))
}
