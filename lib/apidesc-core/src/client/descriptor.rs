use std::fmt;

use http::{HeaderMap, Method};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use url::Url;

use super::{ApiClientError, CallBody, CallQuery, EntityRollback, EntityUpdater, Transform};

/// Method and headers of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// HTTP method.
    pub method: Method,
    /// Request headers, including `Content-Type` when a body is present.
    pub headers: HeaderMap,
}

/// Everything an execution layer needs to perform one call.
///
/// A descriptor is built fresh per call and owned by the caller; nothing in it is
/// shared with the client that produced it.
pub struct RequestDescriptor<U> {
    /// Operation that produced the descriptor, e.g. `getAclEntry`.
    pub operation: &'static str,
    /// Base URL joined with the resolved path, without query string.
    pub url: Url,
    /// Method and headers.
    pub options: RequestOptions,
    /// The query object; only defined parameters are present.
    pub query: CallQuery,
    /// The JSON body, if any.
    pub body: Option<CallBody>,
    /// Decodes the response body and forwards it to the caller continuation.
    pub transform: Option<Transform<U>>,
    /// Caller metadata, passed through.
    pub meta: Map<String, Value>,
    /// Entity updaters applied with the response, passed through.
    pub update: IndexMap<String, EntityUpdater>,
    /// Cache key of the query, passed through.
    pub query_key: Option<String>,
    /// Entity updaters applied before the response, passed through.
    pub optimistic_update: IndexMap<String, EntityUpdater>,
    /// Whether to bypass the execution layer cache.
    pub force: bool,
    /// Entity rollbacks applied on failure, passed through.
    pub rollback: IndexMap<String, EntityRollback>,
}

impl<U> RequestDescriptor<U> {
    /// The serialized JSON body, if any.
    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref().map(CallBody::value)
    }

    /// The full URL, query string included.
    ///
    /// # Errors
    ///
    /// Fails if the query object cannot be encoded.
    pub fn full_url(&self) -> Result<Url, ApiClientError> {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            let query_string = self.query.to_query_string()?;
            url.set_query(Some(&query_string));
        }
        Ok(url)
    }

    /// Runs the transform on a response the way an execution layer would.
    ///
    /// Returns `None` when the caller did not ask for a transform.
    pub fn apply_transform(&self, body: Value, text: &str) -> Option<Result<U, ApiClientError>> {
        self.transform
            .as_ref()
            .map(|transform| transform(body, text))
    }

    /// Converts the descriptor into a `reqwest` request, without sending it.
    ///
    /// # Errors
    ///
    /// Fails if the query object or the body cannot be encoded.
    pub fn to_request(&self) -> Result<reqwest::Request, ApiClientError> {
        let url = self.full_url()?;
        let mut request = reqwest::Request::new(self.options.method.clone(), url);
        request.headers_mut().clone_from(&self.options.headers);
        if let Some(body) = &self.body {
            *request.body_mut() = Some(reqwest::Body::from(body.to_bytes()?));
        }
        Ok(request)
    }
}

impl<U> fmt::Debug for RequestDescriptor<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("operation", &self.operation)
            .field("url", &self.url.as_str())
            .field("options", &self.options)
            .field("query", &self.query)
            .field("body", &self.json_body())
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .field("meta", &self.meta)
            .field("update", &self.update)
            .field("query_key", &self.query_key)
            .field("optimistic_update", &self.optimistic_update)
            .field("force", &self.force)
            .field("rollback", &self.rollback)
            .finish()
    }
}
