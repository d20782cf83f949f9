//! Configuration management
//!
//! Settings come from a YAML file and may be overridden by `FLUENTTC_*`
//! environment variables.
//!
//! ```yaml
//! server_url: https://teamcity.example.com
//! auth:
//!   type: basic
//!   username: ci-bot
//!   password: hunter2
//! timeout_secs: 10
//! log_level: debug
//! ```

use crate::client::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable overriding [`Config::server_url`]
pub const ENV_URL: &str = "FLUENTTC_URL";
/// Environment variable selecting basic authentication
pub const ENV_USERNAME: &str = "FLUENTTC_USERNAME";
/// Environment variable overriding the basic authentication password
pub const ENV_PASSWORD: &str = "FLUENTTC_PASSWORD";
/// Environment variable overriding [`Config::log_level`]
pub const ENV_LOG: &str = "FLUENTTC_LOG";

/// How requests authenticate against the server
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Auth {
    /// Anonymous guest access
    #[default]
    Guest,
    /// HTTP basic authentication
    Basic {
        /// Login name
        username: String,
        /// Password or access token
        password: String,
    },
}

impl Auth {
    /// Creates basic credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Path segment the server expects for this kind of authentication
    #[must_use]
    pub fn path_prefix(&self) -> &'static str {
        match self {
            Self::Guest => "guestAuth",
            Self::Basic { .. } => "httpAuth",
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("Guest"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server root, e.g. `https://teamcity.example.com`
    pub server_url: String,
    /// Authentication
    #[serde(default)]
    pub auth: Auth,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8111".to_string(),
            auth: Auth::Guest,
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Creates a guest configuration for a server
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Sets the authentication
    #[must_use]
    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Parses YAML
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Applies `FLUENTTC_*` environment variables
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup
    ///
    /// Username and password are applied independently on top of existing
    /// basic credentials. Guest access switches to basic authentication only
    /// when a username is given; the password then defaults to empty.
    #[must_use]
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_URL) {
            self.server_url = url;
        }
        let env_username = lookup(ENV_USERNAME);
        let env_password = lookup(ENV_PASSWORD);
        self.auth = match self.auth {
            Auth::Basic { username, password } => Auth::Basic {
                username: env_username.unwrap_or(username),
                password: env_password.unwrap_or(password),
            },
            Auth::Guest => match env_username {
                Some(username) => Auth::Basic {
                    username,
                    password: env_password.unwrap_or_default(),
                },
                None => Auth::Guest,
            },
        };
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level;
        }
        self
    }

    /// Request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parsed server URL, always ending in `/`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyServerUrl`] or
    /// [`ConfigError::InvalidServerUrl`].
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let trimmed = self.server_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyServerUrl);
        }
        let with_slash = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };
        let url = Url::parse(&with_slash).map_err(|e| ConfigError::InvalidServerUrl {
            url: self.server_url.clone(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidServerUrl {
                url: self.server_url.clone(),
                reason: "expected an http or https URL".to_string(),
            });
        }
        Ok(url)
    }

    /// [`Config::base_url`] without any user name or password, for logging
    ///
    /// # Errors
    ///
    /// Same as [`Config::base_url`].
    pub fn redacted_url(&self) -> Result<Url, ConfigError> {
        let mut url = self.base_url()?;
        // Both only fail for URLs that cannot carry credentials at all.
        let _ = url.set_username("");
        let _ = url.set_password(None);
        Ok(url)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base_url()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout_secs,
            });
        }
        Ok(())
    }
}
