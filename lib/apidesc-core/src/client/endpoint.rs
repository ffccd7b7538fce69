use std::fmt;

use http::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiClientError;
use super::config::{Continuation, Transform};

type Decode<T> = fn(&'static str, Value, &str) -> Result<T, ApiClientError>;

/// How the response of an endpoint is read before reaching the caller continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The JSON body is deserialized into the response model.
    Json,
    /// The JSON body is handed over untouched; nothing is deserialized.
    Passthrough,
    /// The raw response text is the payload (`Accept: text/html`).
    Html,
}

/// Static description of one operation of the API.
///
/// `T` is the type the response decodes into. CRUD endpoints are derived from
/// [`Resource`](super::Resource) metadata; action endpoints are declared as constants.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::Endpoint;
/// use apidesc_core::models::Run;
/// use http::Method;
///
/// const RETRY_RUN: Endpoint<Run> = Endpoint::json("retryRun", Method::POST, "/Run/{id}/retry");
/// assert_eq!(RETRY_RUN.path, "/Run/{id}/retry");
/// ```
pub struct Endpoint<T> {
    /// The operation name used in diagnostics, e.g. `getAclEntry`.
    pub operation: &'static str,
    /// HTTP method.
    pub method: Method,
    /// Path template relative to the base URL, e.g. `/AclEntry/{id}`.
    pub path: &'static str,
    /// How the response is read.
    pub format: ResponseFormat,
    decode: Decode<T>,
}

impl<T> Endpoint<T>
where
    T: DeserializeOwned,
{
    /// An endpoint whose JSON response deserializes into `T`.
    pub const fn json(operation: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            operation,
            method,
            path,
            format: ResponseFormat::Json,
            decode: decode_json::<T>,
        }
    }
}

impl Endpoint<Value> {
    /// An endpoint whose response body is passed through without deserialization.
    pub const fn passthrough(operation: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            operation,
            method,
            path,
            format: ResponseFormat::Passthrough,
            decode: passthrough,
        }
    }
}

impl Endpoint<String> {
    /// An endpoint returning an HTML document, handed over as text.
    pub const fn html(operation: &'static str, method: Method, path: &'static str) -> Self {
        Self {
            operation,
            method,
            path,
            format: ResponseFormat::Html,
            decode: html_text,
        }
    }
}

impl<T> Endpoint<T>
where
    T: 'static,
{
    /// Composes the decoding step with the caller continuation.
    pub(in crate::client) fn compose<U>(&self, continuation: Continuation<T, U>) -> Transform<U>
    where
        U: 'static,
    {
        let operation = self.operation;
        let decode = self.decode;
        Box::new(move |body, text| {
            let decoded = decode(operation, body, text)?;
            Ok(continuation(decoded, text))
        })
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            method: self.method.clone(),
            path: self.path,
            format: self.format,
            decode: self.decode,
        }
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

fn decode_json<T>(operation: &'static str, body: Value, _text: &str) -> Result<T, ApiClientError>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(body).map_err(|err| {
        let path = err.path().to_string();
        ApiClientError::JsonError {
            operation,
            path,
            error: err.into_inner(),
        }
    })
}

fn passthrough(_operation: &'static str, body: Value, _text: &str) -> Result<Value, ApiClientError> {
    Ok(body)
}

fn html_text(_operation: &'static str, _body: Value, text: &str) -> Result<String, ApiClientError> {
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: u32,
        labels: Vec<String>,
    }

    const GET_ITEM: Endpoint<Item> = Endpoint::json("getItem", Method::GET, "/Item/{id}");
    const LIST_ITEMS: Endpoint<Vec<Item>> = Endpoint::json("getItemList", Method::GET, "/Item");
    const DELETE_ITEM: Endpoint<Value> =
        Endpoint::passthrough("deleteItem", Method::DELETE, "/Item/{id}");
    const PREVIEW_ITEM: Endpoint<String> =
        Endpoint::html("previewItem", Method::GET, "/Item/{id}/preview");

    #[test]
    fn test_json_transform_decodes_before_continuation() {
        let transform = GET_ITEM.compose(Box::new(|item: Item, text: &str| (item, text.len())));

        let (item, len) = transform(json!({ "id": 1, "labels": ["a"] }), "raw!")
            .expect("should decode");

        assert_eq!(
            item,
            Item {
                id: 1,
                labels: vec!["a".to_string()]
            }
        );
        assert_eq!(len, 4);
    }

    #[test]
    fn test_list_transform_decodes_each_element() {
        let transform = LIST_ITEMS.compose(Box::new(|items: Vec<Item>, _: &str| items.len()));

        let count = transform(
            json!([{ "id": 1, "labels": [] }, { "id": 2, "labels": ["x"] }]),
            "",
        )
        .expect("should decode");

        assert_eq!(count, 2);
    }

    #[test]
    fn test_decode_error_reports_path() {
        let transform = LIST_ITEMS.compose(Box::new(|items: Vec<Item>, _: &str| items));

        let result = transform(json!([{ "id": 1, "labels": [] }, { "id": "two", "labels": [] }]), "");

        let Err(ApiClientError::JsonError {
            operation, path, ..
        }) = result
        else {
            panic!("expected a JSON error");
        };
        assert_eq!(operation, "getItemList");
        assert_eq!(path, "[1].id");
    }

    #[test]
    fn test_passthrough_never_decodes() {
        let transform = DELETE_ITEM.compose(Box::new(|body: Value, _: &str| body));

        let body = transform(json!("not an item"), "").expect("should pass through");

        assert_eq!(body, json!("not an item"));
    }

    #[test]
    fn test_html_uses_raw_text() {
        let transform = PREVIEW_ITEM.compose(Box::new(|html: String, _: &str| html));

        let html = transform(Value::Null, "<h1>Preview</h1>").expect("should read text");

        assert_eq!(html, "<h1>Preview</h1>");
    }

    #[test]
    fn test_endpoint_debug() {
        insta::assert_debug_snapshot!(GET_ITEM, @r#"
        Endpoint {
            operation: "getItem",
            method: GET,
            path: "/Item/{id}",
            format: Json,
            ..
        }
        "#);
    }
}
