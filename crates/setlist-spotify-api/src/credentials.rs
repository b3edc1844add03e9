use crate::error::Error;
use crate::error::Result;

/// Application credentials plus the optional user-granted authorization code.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub authorization_code: Option<String>,
}

const CLIENT_ID_VARS: &[&str] = &["SPOTIFY_CLIENT_ID", "CLIENT_ID"];
const CLIENT_SECRET_VARS: &[&str] = &["SPOTIFY_CLIENT_SECRET", "CLIENT_SECRET"];
const AUTH_CODE_VARS: &[&str] = &["SPOTIFY_AUTH_CODE", "SPOTIFY_ALTER_PLAYLIST"];

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`; the first non-empty name in each list wins.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(*name).filter(|value| !value.trim().is_empty()))
        };
        let required = |names: &[&str]| {
            first(names).ok_or_else(|| Error::MissingEnv(names[0].to_string()))
        };

        Ok(Self {
            client_id: required(CLIENT_ID_VARS)?,
            client_secret: required(CLIENT_SECRET_VARS)?,
            authorization_code: first(AUTH_CODE_VARS),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("authorization_code", &self.authorization_code.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
