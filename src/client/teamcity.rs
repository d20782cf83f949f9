//! High-level REST client
//!
//! Each query method takes the same closure shape as the locator builders:
//! it receives an empty builder and returns the configured one.

use super::errors::ClientError;
use super::transport::{ApiRequest, HttpTransport, Transport};
use crate::domain::{Build, BuildConfig, BuildConfigs, Builds, Project, Projects, User, Users};
use crate::infrastructure::Config;
use crate::locators::{
    BuildConfigurationHavingBuilder, BuildHavingBuilder, BuildProjectHavingBuilder, Locator,
    UserHavingBuilder,
};
use serde::de::DeserializeOwned;

const BUILDS: &str = "app/rest/builds";
const BUILD_TYPES: &str = "app/rest/buildTypes";
const PROJECTS: &str = "app/rest/projects";
const USERS: &str = "app/rest/users";

/// Client for the server's REST API
#[derive(Debug, Clone)]
pub struct TeamCityClient<T = HttpTransport> {
    transport: T,
}

impl TeamCityClient<HttpTransport> {
    /// Connects over HTTP using `config`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the configuration is invalid.
    pub fn connect(config: &Config) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(config)?;
        tracing::info!(server = %config.redacted_url()?, auth = ?config.auth, "creating client");
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> TeamCityClient<T> {
    /// Uses an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds matching a filter
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP and decoding errors.
    pub async fn builds<F>(&self, having: F) -> Result<Vec<Build>, ClientError>
    where
        F: FnOnce(BuildHavingBuilder) -> BuildHavingBuilder,
    {
        let locator = having(BuildHavingBuilder::new()).locator();
        let request = ApiRequest::new(BUILDS).with_locator(&locator);
        let builds: Builds = self.fetch(&request).await?;
        Ok(builds.build)
    }

    /// The first (most recent) build matching a filter
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if nothing matches.
    pub async fn build<F>(&self, having: F) -> Result<Build, ClientError>
    where
        F: FnOnce(BuildHavingBuilder) -> BuildHavingBuilder,
    {
        let locator = having(BuildHavingBuilder::new()).locator();
        let request = ApiRequest::new(BUILDS).with_locator(&locator);
        let builds: Builds = self.fetch(&request).await?;
        builds
            .build
            .into_iter()
            .next()
            .ok_or(ClientError::NotFound(locator))
    }

    /// Build configurations matching a filter; an untouched builder lists all
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP and decoding errors.
    pub async fn build_configurations<F>(&self, having: F) -> Result<Vec<BuildConfig>, ClientError>
    where
        F: FnOnce(BuildConfigurationHavingBuilder) -> BuildConfigurationHavingBuilder,
    {
        let locator = having(BuildConfigurationHavingBuilder::new()).locator();
        let request = ApiRequest::new(BUILD_TYPES).with_locator(&locator);
        let configs: BuildConfigs = self.fetch(&request).await?;
        Ok(configs.build_type)
    }

    /// Full details of a single build configuration
    ///
    /// The locator travels as a path segment, so a `/` in it is sent as
    /// `%2F`. Servers behind Tomcat reject that with `400` unless encoded
    /// slashes are allowed; use [`Self::build_configurations`] for names containing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an empty locator, otherwise
    /// propagates transport, HTTP and decoding errors.
    pub async fn build_configuration<F>(&self, having: F) -> Result<BuildConfig, ClientError>
    where
        F: FnOnce(BuildConfigurationHavingBuilder) -> BuildConfigurationHavingBuilder,
    {
        let locator = having(BuildConfigurationHavingBuilder::new()).locator();
        self.fetch_single(BUILD_TYPES, locator).await
    }

    /// All projects
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP and decoding errors.
    pub async fn projects(&self) -> Result<Vec<Project>, ClientError> {
        let projects: Projects = self.fetch(&ApiRequest::new(PROJECTS)).await?;
        Ok(projects.project)
    }

    /// A single project
    ///
    /// The locator travels as a path segment, so a `/` in it is sent as
    /// `%2F`. Servers behind Tomcat reject that with `400` unless encoded
    /// slashes are allowed; use [`Self::projects`] for names containing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an empty locator, otherwise
    /// propagates transport, HTTP and decoding errors.
    pub async fn project<F>(&self, having: F) -> Result<Project, ClientError>
    where
        F: FnOnce(BuildProjectHavingBuilder) -> BuildProjectHavingBuilder,
    {
        let locator = having(BuildProjectHavingBuilder::new()).locator();
        self.fetch_single(PROJECTS, locator).await
    }

    /// All users
    ///
    /// # Errors
    ///
    /// Propagates transport, HTTP and decoding errors.
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let users: Users = self.fetch(&ApiRequest::new(USERS)).await?;
        Ok(users.user)
    }

    /// A single user
    ///
    /// The locator travels as a path segment, so a `/` in it is sent as
    /// `%2F`. Servers behind Tomcat reject that with `400` unless encoded
    /// slashes are allowed; use [`Self::users`] for names containing `/`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an empty locator, otherwise
    /// propagates transport, HTTP and decoding errors.
    pub async fn user<F>(&self, having: F) -> Result<User, ClientError>
    where
        F: FnOnce(UserHavingBuilder) -> UserHavingBuilder,
    {
        let locator = having(UserHavingBuilder::new()).locator();
        self.fetch_single(USERS, locator).await
    }

    async fn fetch_single<D: DeserializeOwned>(
        &self,
        path: &str,
        locator: String,
    ) -> Result<D, ClientError> {
        if locator.is_empty() {
            return Err(ClientError::NotFound(locator));
        }
        if locator.contains('/') {
            tracing::warn!(%locator, "locator contains '/', the server may reject the encoded path");
        }
        self.fetch(&ApiRequest::new(path).with_segment(locator)).await
    }

    async fn fetch<D: DeserializeOwned>(&self, request: &ApiRequest) -> Result<D, ClientError> {
        let body = self.transport.get(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(path = %request.path, error = %e, "unexpected response body");
            ClientError::from(e)
        })
    }
}
