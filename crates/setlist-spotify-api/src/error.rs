use http::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Which playlist mutation was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Add,
    Remove,
}

impl std::fmt::Display for MutationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationAction::Add => write!(f, "adding a track"),
            MutationAction::Remove => write!(f, "removing a track"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The token endpoint could not be reached or its body not read
    #[error("Token request failed: {0}")]
    AuthTransport(#[source] reqwest::Error),

    /// The token endpoint answered with a non-2xx status
    #[error("Token request failed with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    /// The token endpoint answered 2xx but not with a token
    #[error("Failed to deserialize token response:\n{body}")]
    AuthDecode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The catalog API answered with a status outside [200, 300)
    #[error("API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to deserialize:\n{body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// A playlist mutation did not return its success status
    #[error("Expected status {expected} when {action}, got {status}: {body}")]
    Mutation {
        action: MutationAction,
        expected: StatusCode,
        status: StatusCode,
        body: String,
    },

    #[error("Missing env var: {0}")]
    MissingEnv(String),

    /// The interactive browser authorization did not yield a code
    #[error("Authorization failed: {0}")]
    Authorization(String),
}

impl Error {
    /// True for failures while obtaining a token.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Error::AuthTransport(_)
                | Error::Auth { .. }
                | Error::AuthDecode { .. }
                | Error::Authorization(_)
        )
    }

    /// The raw response body, for the variants that carry one.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Auth { body, .. }
            | Error::AuthDecode { body, .. }
            | Error::Api { body, .. }
            | Error::Decode { body, .. }
            | Error::Mutation { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_error_mentions_action_and_body() {
        let err = Error::Mutation {
            action: MutationAction::Add,
            expected: StatusCode::CREATED,
            status: StatusCode::BAD_REQUEST,
            body: "{\"error\":\"bad\"}".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("adding a track"));
        assert!(message.contains("400 Bad Request"));
        assert_eq!(err.body(), Some("{\"error\":\"bad\"}"));
        assert!(!err.is_auth());
    }

    #[test]
    fn auth_variants_are_auth() {
        let err = Error::Auth {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(err.is_auth());
        assert!(Error::Authorization("denied".into()).is_auth());
        assert!(!Error::MissingEnv("X".into()).is_auth());
    }
}
