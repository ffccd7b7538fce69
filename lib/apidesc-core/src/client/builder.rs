use std::fmt::Debug;

use http::Uri;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::uri::{PathAndQuery, Scheme};
use tracing::debug;
use url::Url;

use super::{ApiClient, ApiClientError, Authentication};

/// Builder for [`ApiClient`].
///
/// The base URL is either assembled from a scheme, host, port and base path, or given
/// as a whole with [`with_base_url`](Self::with_base_url), which takes precedence.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP
/// - **Host**: `localhost`
/// - **Port**: none (the scheme default)
/// - **Base path**: none
/// - **Authentication**: none
/// - **Default headers**: none
///
/// # Example
///
/// ```rust
/// use apidesc_core::ApiClient;
/// use http::uri::Scheme;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("api.example.com")
///     .with_base_path("/v1")?
///     .build()?;
/// assert_eq!(client.base_url().as_str(), "https://api.example.com/v1");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    base_path: Option<PathAndQuery>,
    base_url: Option<Url>,
    authentication: Option<Authentication>,
    headers: Vec<(String, String)>,
}

impl ApiClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the scheme, host and port do not form a valid URI, if a default
    /// header is invalid, or if the credentials cannot be turned into a header.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            scheme,
            host,
            port,
            base_path,
            base_url,
            authentication,
            headers,
        } = self;

        let base_url = match base_url {
            Some(url) => url,
            None => {
                let authority = match port {
                    Some(port) => format!("{host}:{port}"),
                    None => host,
                };
                let path = base_path.as_ref().map_or("/", PathAndQuery::path);
                let uri = Uri::builder()
                    .scheme(scheme)
                    .authority(authority)
                    .path_and_query(path)
                    .build()?;
                Url::parse(&uri.to_string())?
            }
        };

        if let Some(auth) = &authentication {
            auth.to_header()?;
        }

        let mut default_headers = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            let value = HeaderValue::from_str(&value)?;
            default_headers.append(name, value);
        }

        debug!(
            %base_url,
            ?authentication,
            default_headers = default_headers.len(),
            "api client built"
        );

        Ok(ApiClient {
            base_url,
            authentication,
            default_headers,
        })
    }

    /// Sets the scheme, `HTTP` by default.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host name or IP address, `localhost` by default.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets an explicit port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the path every request path is appended to, e.g. `/v1`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBasePath`] if the path contains invalid
    /// characters (such as spaces), cannot be parsed as a URI path, or carries a
    /// query string.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        if let Some(query) = base_path.query() {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("'{base_path}' must not have a query string, got '{query}'"),
            });
        }
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets the whole base URL, e.g. `https://api.example.com/v1`.
    ///
    /// Overrides the scheme, host, port and base path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::UrlError`] if the URL does not parse, and
    /// [`ApiClientError::InvalidBasePath`] if it cannot hold a path or carries a
    /// query string or fragment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiClientError> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("'{base_url}' cannot be a base URL"),
            });
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("'{base_url}' must not have a query string or fragment"),
            });
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the credentials added to every descriptor.
    ///
    /// # Example
    ///
    /// ```rust
    /// use apidesc_core::{ApiClient, Authentication};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ApiClient::builder()
    ///     .with_authentication(Authentication::ApiKey {
    ///         header_name: "X-API-Key".to_string(),
    ///         key: "secret-key".into(),
    ///     })
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Adds a header sent with every descriptor.
    ///
    /// Names and values are validated by [`build`](Self::build).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            scheme: Scheme::HTTP,
            host: "localhost".to_string(),
            port: None,
            base_path: None,
            base_url: None,
            authentication: None,
            headers: Vec::new(),
        }
    }
}
