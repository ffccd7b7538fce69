use headers::HeaderMapExt;
use http::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::debug;

use super::parameters::PathResolved;
use super::{
    ApiClient, ApiClientError, CallBody, CallPath, CallQuery, Endpoint, ParamValue, RequestConfig,
    RequestDescriptor, RequestOptions, ResponseFormat,
};

/// Builder assembling the descriptor of one [`Endpoint`].
///
/// Required inputs are checked as they are supplied, so a missing one fails before
/// [`build`](Self::build) creates anything. This is the single builder behind every
/// CRUD and action operation; it is public so additional endpoints can be declared
/// outside this crate.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::models::Run;
/// use apidesc_core::{ApiClient, Endpoint, RequestConfig};
/// use http::Method;
///
/// const RETRY_RUN: Endpoint<Run> = Endpoint::json("retryRun", Method::POST, "/Run/{id}/retry");
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_base_url("https://api.example.com")?.build()?;
/// let descriptor = client
///     .request(RETRY_RUN)
///     .path_param("id", "run-1")?
///     .build(RequestConfig::new())?;
/// assert_eq!(descriptor.url.as_str(), "https://api.example.com/Run/run-1/retry");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RequestBuilder<'a, T> {
    client: &'a ApiClient,
    endpoint: Endpoint<T>,
    path: CallPath,
    query: CallQuery,
    body: Option<CallBody>,
    headers: HeaderMap,
}

impl<'a, T> RequestBuilder<'a, T>
where
    T: 'static,
{
    pub(in crate::client) fn new(client: &'a ApiClient, endpoint: Endpoint<T>) -> Self {
        let path = CallPath::from(endpoint.path);
        Self {
            client,
            endpoint,
            path,
            query: CallQuery::default(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Fills the `{name}` placeholder of the path template.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when the value is absent, `null`
    /// or empty.
    pub fn path_param(
        mut self,
        name: &'static str,
        value: impl Into<ParamValue>,
    ) -> Result<Self, ApiClientError> {
        let value = value.into().require(name, self.endpoint.operation)?;
        self.path = self.path.add_param(name, value);
        Ok(self)
    }

    /// Sets a required JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `body` is `None`, or if it
    /// cannot be serialized.
    pub fn json_body<B>(self, name: &'static str, body: Option<&B>) -> Result<Self, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        let Some(body) = body else {
            return Err(ApiClientError::missing(name, self.endpoint.operation));
        };
        self.optional_json_body(Some(body))
    }

    /// Sets a JSON body if one is given; `None` leaves the request bodiless.
    ///
    /// # Errors
    ///
    /// Fails if the body cannot be serialized.
    pub fn optional_json_body<B>(mut self, body: Option<&B>) -> Result<Self, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        self.body = body.map(CallBody::json).transpose()?;
        Ok(self)
    }

    /// Replaces the query object.
    #[must_use]
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = query;
        self
    }

    /// Adds a request-specific header, overriding a client default of the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Assembles the descriptor.
    ///
    /// The transform is attached only when `config` carries a continuation.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::PathUnresolved`] if a placeholder of the endpoint
    /// path was never filled.
    pub fn build<U>(self, config: RequestConfig<T, U>) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let Self {
            client,
            endpoint,
            path,
            query,
            body,
            headers: request_headers,
        } = self;

        let path = PathResolved::try_from(path)?;
        let url = client.endpoint_url(&path.path)?;

        let mut headers = client.default_headers()?;
        if endpoint.format == ResponseFormat::Html {
            headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
        }
        if let Some(body) = &body {
            headers.typed_insert(body.content_type.clone());
        }
        for (name, value) in request_headers {
            if let Some(name) = name {
                headers.insert(name, value);
            }
        }

        let RequestConfig {
            meta,
            update,
            query_key,
            optimistic_update,
            force,
            rollback,
            transform,
        } = config;
        let transform = transform.map(|continuation| endpoint.compose(continuation));

        debug!(
            operation = endpoint.operation,
            method = %endpoint.method,
            %url,
            has_body = body.is_some(),
            has_transform = transform.is_some(),
            "request descriptor built"
        );

        Ok(RequestDescriptor {
            operation: endpoint.operation,
            url,
            options: RequestOptions {
                method: endpoint.method,
                headers,
            },
            query,
            body,
            transform,
            meta,
            update,
            query_key,
            optimistic_update,
            force,
            rollback,
        })
    }
}
