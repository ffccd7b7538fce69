use http::HeaderMap;
use url::Url;

mod builder;
pub use self::builder::ApiClientBuilder;

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod parameters;
pub use self::parameters::{CallBody, CallPath, CallQuery, Pagination, ParamValue};

mod config;
pub use self::config::{Continuation, EntityRollback, EntityUpdater, RequestConfig, Transform};

mod endpoint;
pub use self::endpoint::{Endpoint, ResponseFormat};

mod request;
pub use self::request::RequestBuilder;

mod descriptor;
pub use self::descriptor::{RequestDescriptor, RequestOptions};

mod resource;
pub use self::resource::{CrudOperations, Resource, ResourceApi};

mod actions;

mod error;
pub use self::error::ApiClientError;

/// Factory of request descriptors for one API deployment.
///
/// The client holds the base URL, the credentials and the default headers that every
/// descriptor carries. It never performs I/O, so it is cheap to clone and safe to
/// share between threads.
///
/// # Example
///
/// ```rust
/// use apidesc_core::models::AclEntry;
/// use apidesc_core::{ApiClient, Authentication, RequestConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_base_url("https://api.example.com/v1")?
///     .with_authentication(Authentication::Bearer("token".into()))
///     .build()?;
///
/// let descriptor = client.resource::<AclEntry>().delete("acl-1", RequestConfig::new())?;
/// assert_eq!(descriptor.options.method, http::Method::DELETE);
/// assert!(descriptor.options.headers.contains_key(http::header::AUTHORIZATION));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    authentication: Option<Authentication>,
    default_headers: HeaderMap,
}

// Create
impl ApiClient {
    /// Starts configuring a client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// Requests
impl ApiClient {
    /// The CRUD operations of resource `R`.
    pub fn resource<R>(&self) -> ResourceApi<'_, R>
    where
        R: Resource,
    {
        ResourceApi::new(self)
    }

    /// Starts a descriptor for an arbitrary endpoint.
    pub fn request<T>(&self, endpoint: Endpoint<T>) -> RequestBuilder<'_, T>
    where
        T: 'static,
    {
        RequestBuilder::new(self, endpoint)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, ApiClientError> {
        let url = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = url.parse::<Url>()?;
        Ok(url)
    }

    fn default_headers(&self) -> Result<HeaderMap, ApiClientError> {
        let mut headers = self.default_headers.clone();
        if let Some(auth) = &self.authentication {
            auth.apply(&mut headers)?;
        }
        Ok(headers)
    }
}
