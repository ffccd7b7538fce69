use std::fmt::Debug;

use super::AuthenticationError;

/// Errors that can occur when building or transforming request descriptors.
///
/// Once the client itself has been built, descriptor construction fails with
/// [`ApiClientError::MissingParameter`] or, for values that do not serialize,
/// [`ApiClientError::JsonValueError`]; the other variants come from client configuration,
/// from the hand-off to `reqwest`, or from the response transform.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// URL parsing error when constructing request URLs.
    ///
    /// Occurs when the base URL or the resolved path create an invalid URL.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    ///
    /// Occurs when the scheme, host and port do not form a valid URI.
    HttpError(http::Error),

    /// Invalid HTTP header name in the client default headers.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value in the client default headers.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// A request body or parameter could not be serialized to JSON.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    ///
    /// Occurs when converting the query object to a URL query string.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Credentials cannot be turned into an HTTP header.
    Authentication(AuthenticationError),

    /// Invalid base path configuration.
    ///
    /// Occurs when the provided base path cannot be used for URL construction.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// A required parameter was absent or null.
    ///
    /// Raised before any part of the descriptor is built.
    #[display("Required parameter '{parameter}' was null or undefined when calling {operation}")]
    #[from(skip)]
    MissingParameter {
        /// Name of the missing parameter, e.g. `id` or `aclEntry`.
        parameter: &'static str,
        /// Name of the operation, e.g. `getAclEntry`.
        operation: &'static str,
    },

    /// Path template contains unresolved parameters.
    ///
    /// Occurs when an endpoint template names a placeholder that no parameter fills.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Parameter value cannot be used in a path or query string.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// Specific error message describing the conversion failure.
        message: String,
        /// The value that failed to convert.
        value: serde_json::Value,
    },

    /// Response body deserialization failure inside a transform.
    #[display("Failed to deserialize {operation} response at '{path}': {error}")]
    #[from(skip)]
    JsonError {
        /// The operation whose response failed to parse.
        operation: &'static str,
        /// JSON path of the offending value.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
    },
}

impl ApiClientError {
    pub(in crate::client) fn missing(parameter: &'static str, operation: &'static str) -> Self {
        Self::MissingParameter {
            parameter,
            operation,
        }
    }
}
