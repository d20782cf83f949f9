//! HTTP transport
//!
//! The client only ever issues authenticated `GET` requests that return a
//! JSON body; [`Transport`] is the seam that lets tests replace the network.

use super::errors::ClientError;
use crate::infrastructure::{Auth, Config};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

/// A `GET` request relative to the REST root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Path below the authentication prefix, e.g. `app/rest/builds`
    pub path: String,
    /// Extra path segment, percent-encoded when the URL is built
    pub segment: Option<String>,
    /// Query parameters in order
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request for `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            segment: None,
            query: Vec::new(),
        }
    }

    /// Appends a single path segment such as a locator
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    /// Adds a query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds `locator=<locator>` unless the locator is empty
    #[must_use]
    pub fn with_locator(self, locator: &str) -> Self {
        if locator.is_empty() {
            self
        } else {
            self.with_query("locator", locator)
        }
    }

    /// Resolves the request against a server root
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if `base` cannot carry a path.
    pub fn url(&self, base: &Url, auth: &Auth) -> Result<Url, ClientError> {
        let mut url = base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ClientError::Transport(format!("cannot use {base} as a base URL")))?;
            segments.pop_if_empty();
            segments.push(auth.path_prefix());
            segments.extend(self.path.split('/').filter(|s| !s.is_empty()));
            if let Some(segment) = &self.segment {
                segments.push(segment);
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Executes requests and returns the raw response body
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a `GET`
    async fn get(&self, request: &ApiRequest) -> Result<String, ClientError>;
}

/// [`Transport`] over `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    auth: Auth,
}

impl HttpTransport {
    /// Builds a transport from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an invalid configuration and
    /// [`ClientError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url()?,
            auth: config.auth.clone(),
        })
    }

    /// Server root requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &ApiRequest) -> Result<String, ClientError> {
        let url = request.url(&self.base_url, &self.auth)?;
        tracing::debug!(%url, "GET");

        let mut builder = self.http.get(url);
        if let Auth::Basic { username, password } = &self.auth {
            builder = builder.basic_auth(username, Some(password));
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path = %request.path, "request failed");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("http://tc:8111/").unwrap()
    }

    #[test]
    fn test_guest_url_with_locator() {
        let url = ApiRequest::new("app/rest/builds")
            .with_locator("buildType:id:X,branch:name:main")
            .url(&base(), &Auth::Guest)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://tc:8111/guestAuth/app/rest/builds?locator=buildType%3Aid%3AX%2Cbranch%3Aname%3Amain"
        );
    }

    #[test]
    fn test_basic_auth_prefix() {
        let url = ApiRequest::new("app/rest/projects")
            .url(&base(), &Auth::basic("u", "p"))
            .unwrap();
        assert_eq!(url.as_str(), "http://tc:8111/httpAuth/app/rest/projects");
    }

    #[test]
    fn test_empty_locator_is_omitted() {
        let url = ApiRequest::new("app/rest/builds")
            .with_locator("")
            .url(&base(), &Auth::Guest)
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_segment_is_encoded() {
        let url = ApiRequest::new("app/rest/buildTypes")
            .with_segment("name:My Build/Nightly")
            .url(&base(), &Auth::Guest)
            .unwrap();
        assert_eq!(
            url.path(),
            "/guestAuth/app/rest/buildTypes/name:My%20Build%2FNightly"
        );
    }

    #[test]
    fn test_server_below_context_path() {
        let base = Url::parse("https://ci.example.com/teamcity/").unwrap();
        let url = ApiRequest::new("app/rest/users")
            .url(&base, &Auth::Guest)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://ci.example.com/teamcity/guestAuth/app/rest/users"
        );
    }

    #[test]
    fn test_http_transport_rejects_bad_config() {
        let err = HttpTransport::new(&Config::new("")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_http_transport_base_url() {
        let transport = HttpTransport::new(&Config::new("http://tc:8111")).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://tc:8111/");
    }

    /// Serves one canned response on a local port and hands back the raw
    /// request head it received.
    async fn serve_once(
        response: &'static str,
    ) -> (std::net::SocketAddr, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8(head).unwrap()
        });
        (addr, handle)
    }

    #[tokio::test]
    async fn test_http_error_status_and_headers() {
        let (addr, server) = serve_once(
            "HTTP/1.1 400 Bad Request\r\nContent-Length: 11\r\nConnection: close\r\n\r\nbad locator",
        )
        .await;
        let config = Config::new(format!("http://{addr}")).with_auth(Auth::basic("u", "p"));
        let transport = HttpTransport::new(&config).unwrap();

        let result = transport
            .get(&ApiRequest::new("app/rest/builds").with_locator("id:1"))
            .await;
        assert_eq!(
            result,
            Err(ClientError::Http {
                status: 400,
                body: "bad locator".to_string(),
            })
        );

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /httpAuth/app/rest/builds?locator=id%3A1 HTTP/1.1\r\n"));
        let head = head.to_ascii_lowercase();
        assert!(head.contains("authorization: basic dtpw"));
        assert!(head.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_http_success_returns_body() {
        let (addr, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"count\":0}",
        )
        .await;
        let transport = HttpTransport::new(&Config::new(format!("http://{addr}"))).unwrap();

        let body = transport.get(&ApiRequest::new("app/rest/projects")).await.unwrap();
        assert_eq!(body, r#"{"count":0}"#);

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /guestAuth/app/rest/projects HTTP/1.1\r\n"));
        assert!(!head.to_ascii_lowercase().contains("authorization:"));
    }
}
