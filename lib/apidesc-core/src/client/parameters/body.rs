use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// The body of a request descriptor: the wire form of a domain object.
///
/// The value is kept as JSON rather than bytes so the execution layer can inspect
/// it; [`RequestDescriptor::to_request`](crate::RequestDescriptor::to_request)
/// serializes it when building a transport request.
#[derive(Debug, Clone)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    pub(in crate::client) value: serde_json::Value,
}

impl CallBody {
    /// Creates a JSON body from a serializable type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apidesc_core::CallBody;
    /// use apidesc_core::models::DeadLetterDiscardRequest;
    ///
    /// let body = CallBody::json(&DeadLetterDiscardRequest {
    ///     reason: "poison message".to_string(),
    /// })?;
    /// assert_eq!(body.value(), &serde_json::json!({ "reason": "poison message" }));
    /// # Ok::<(), apidesc_core::ApiClientError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be represented as JSON (e.g. a map with non-string keys).
    pub fn json<T>(t: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(t)?;
        Ok(Self {
            content_type: ContentType::json(),
            value,
        })
    }

    /// The serialized body.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    /// The content type sent with the body.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    pub(in crate::client) fn to_bytes(&self) -> Result<Vec<u8>, ApiClientError> {
        let data = serde_json::to_vec(&self.value)?;
        Ok(data)
    }
}
