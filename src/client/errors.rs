//! Error types for the REST client

use thiserror::Error;

/// Errors returned by [`TeamCityClient`](super::TeamCityClient) calls
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code returned by the server.
        status: u16,
        /// Response body, usually the server's explanation.
        body: String,
    },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A single-entity lookup matched nothing
    #[error("Nothing matches locator '{0}'")]
    NotFound(String),

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Returns true for 404 responses and empty single-entity lookups
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No server URL was given
    #[error("Server URL cannot be empty")]
    EmptyServerUrl,

    /// The server URL does not parse
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl {
        /// The rejected URL.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Zero request timeout
    #[error("Invalid timeout: must be positive, got {value}")]
    InvalidTimeout {
        /// The rejected value in seconds.
        value: u64,
    },

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration file is not valid YAML
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
