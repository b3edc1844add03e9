use crate::access_token::AccessToken;
use crate::error::Error;
use crate::error::Result;
use http::Method;
use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub const API_BASE: &str = "https://api.spotify.com/v1";

/// An authenticated session against the catalog API.
///
/// Owns the token for the whole run; every request borrows it.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl SpotifyClient {
    pub fn new(token: AccessToken) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    pub fn with_base_url(token: AccessToken, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and hand back the status and body without judging either.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(StatusCode, String)>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut req = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(self.token.secret())
            .query(query);
        if let Some(body) = body {
            // .json() also sets Content-Type: application/json
            req = req.json(body);
        }

        let res = req.send().await?;
        let status = res.status();
        let text = res.text().await?;
        debug!("{} {} -> {}", method, path, status);
        Ok((status, text))
    }

    /// Issue one request and decode a 2xx body into `T`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, text) = self.send(method, path, query, body).await?;
        if !status.is_success() {
            return Err(Error::Api { status, body: text });
        }
        decode(text)
    }

    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, query, None).await
    }
}

/// The one place response bodies become typed values.
pub fn decode<T>(body: String) -> Result<T>
where
    T: DeserializeOwned,
{
    match serde_json::from_str(&body) {
        Ok(x) => Ok(x),
        Err(source) => Err(Error::Decode { source, body }),
    }
}
