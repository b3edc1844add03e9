use eyre::Result;
use eyre::WrapErr;
use eyre::eyre;
use setlist_spotify_api::auth::token::ACCOUNTS_BASE;
use setlist_spotify_api::client::API_BASE;

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8000";
pub const DEFAULT_SELECTION_ATTEMPTS: usize = 3;

/// Which token grant to use for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantMode {
    /// Exchange an authorization code taken from the environment.
    AuthorizationCode,
    ClientCredentials,
    /// Obtain the authorization code through the browser first.
    Browser,
}

impl std::str::FromStr for GrantMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "authorization_code" | "code" => Ok(GrantMode::AuthorizationCode),
            "client_credentials" => Ok(GrantMode::ClientCredentials),
            "browser" => Ok(GrantMode::Browser),
            other => Err(eyre!(
                "Unknown grant {:?}, expected authorization_code, client_credentials or browser",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub grant: GrantMode,
    pub redirect_uri: String,
    pub user_id: Option<String>,
    pub search_limit: Option<u32>,
    pub selection_attempts: usize,
    pub api_base: String,
    pub accounts_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grant: GrantMode::ClientCredentials,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            user_id: None,
            search_limit: None,
            selection_attempts: DEFAULT_SELECTION_ATTEMPTS,
            api_base: API_BASE.to_string(),
            accounts_base: ACCOUNTS_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// A configured authorization code implies the code grant.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let grant = match var("SPOTIFY_GRANT") {
            Some(grant) => grant.parse()?,
            None if var("SPOTIFY_AUTH_CODE").is_some()
                || var("SPOTIFY_ALTER_PLAYLIST").is_some() =>
            {
                GrantMode::AuthorizationCode
            }
            None => GrantMode::ClientCredentials,
        };

        let search_limit = match var("SPOTIFY_SEARCH_LIMIT") {
            Some(limit) => {
                let limit: u32 = limit
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("Invalid SPOTIFY_SEARCH_LIMIT {:?}", limit))?;
                if !(1..=50).contains(&limit) {
                    return Err(eyre!(
                        "SPOTIFY_SEARCH_LIMIT must be within 1..=50, got {}",
                        limit
                    ));
                }
                Some(limit)
            }
            None => None,
        };

        let selection_attempts = match var("SETLIST_SELECTION_ATTEMPTS") {
            Some(attempts) => attempts
                .trim()
                .parse::<usize>()
                .wrap_err_with(|| format!("Invalid SETLIST_SELECTION_ATTEMPTS {:?}", attempts))?
                .max(1),
            None => defaults.selection_attempts,
        };

        Ok(Self {
            grant,
            redirect_uri: var("SPOTIFY_REDIRECT_URI").unwrap_or(defaults.redirect_uri),
            user_id: var("SPOTIFY_USER_ID"),
            search_limit,
            selection_attempts,
            api_base: var("SPOTIFY_API_BASE").unwrap_or(defaults.api_base),
            accounts_base: var("SPOTIFY_ACCOUNTS_BASE").unwrap_or(defaults.accounts_base),
        })
    }
}
