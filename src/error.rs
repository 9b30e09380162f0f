#[derive(Debug, thiserror::Error)]
pub enum BricklinkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{code} - {message}: {description}")]
    Api {
        code: i64,
        message: String,
        description: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Malformed {entity} payload: {source}")]
    MalformedPayload {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl BricklinkError {
    /// Build a [`BricklinkError::MalformedPayload`] for the named entity.
    pub fn payload(entity: &'static str, source: serde_json::Error) -> Self {
        Self::MalformedPayload { entity, source }
    }

    /// The service status code, if this is an API (envelope) error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True when the service reported the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.api_code() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, BricklinkError>;
