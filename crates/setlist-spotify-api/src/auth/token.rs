use crate::access_token::AccessToken;
use crate::credentials::Credentials;
use crate::error::Error;
use crate::error::Result;
use base64::Engine;
use tracing::debug;

pub const ACCOUNTS_BASE: &str = "https://accounts.spotify.com";

/// How the token is obtained.
///
/// `AuthorizationCode` yields a user-scoped token, needed to modify playlists.
/// `ClientCredentials` yields an app-scoped token, enough for catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    AuthorizationCode { code: String, redirect_uri: String },
    ClientCredentials,
}

impl Grant {
    fn form(&self) -> Vec<(&'static str, &str)> {
        match self {
            Grant::AuthorizationCode { code, redirect_uri } => vec![
                ("grant_type", "authorization_code"),
                ("code", code.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
            ],
            Grant::ClientCredentials => vec![("grant_type", "client_credentials")],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode { .. } => "authorization_code",
            Grant::ClientCredentials => "client_credentials",
        }
    }
}

fn basic_authorization(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(pair))
}

/// https://developer.spotify.com/documentation/web-api/tutorials/code-flow
pub async fn acquire_token(credentials: &Credentials, grant: &Grant) -> Result<AccessToken> {
    acquire_token_from(ACCOUNTS_BASE, credentials, grant).await
}

/// Exchange `credentials` for a token at `{accounts_base}/api/token`.
pub async fn acquire_token_from(
    accounts_base: &str,
    credentials: &Credentials,
    grant: &Grant,
) -> Result<AccessToken> {
    let url = format!("{}/api/token", accounts_base.trim_end_matches('/'));
    debug!("Requesting token via {} grant", grant.name());

    let client = reqwest::Client::new();
    let res = client
        .post(&url)
        .header(reqwest::header::AUTHORIZATION, basic_authorization(credentials))
        .form(&grant.form())
        .send()
        .await
        .map_err(Error::AuthTransport)?;

    let status = res.status();
    let body = res.text().await.map_err(Error::AuthTransport)?;
    if !status.is_success() {
        return Err(Error::Auth { status, body });
    }

    let token: AccessToken =
        serde_json::from_str(&body).map_err(|source| Error::AuthDecode { source, body })?;

    debug!("Access Token: len={}", token.access_token.len());
    debug!("Expires in: {}s", token.expires_in);
    Ok(token)
}
