use indexmap::IndexMap;

use super::param::{ParamValue, json_value_to_string};
use crate::client::ApiClientError;

/// The query object of a request descriptor.
///
/// Only parameters that were actually supplied appear in it: adding a missing
/// [`ParamValue`] leaves the object untouched instead of recording an empty entry.
/// Array values are rendered form-style, repeating the key once per element.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::CallQuery;
///
/// let query = CallQuery::new()
///     .add_param("page", 1)
///     .add_param("size", None::<u32>)
///     .add_param("sort", serde_json::json!(["name,asc", "id,desc"]));
///
/// assert!(!query.contains_key("size"));
/// assert_eq!(query.to_query_string()?, "page=1&sort=name%2Casc&sort=id%2Cdesc");
/// # Ok::<(), apidesc_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallQuery {
    params: IndexMap<String, serde_json::Value>,
}

impl CallQuery {
    /// Creates an empty query object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter if it is present; missing values are skipped.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        if let Some(value) = value.into().into_value() {
            self.params.insert(name.into(), value);
        }
        self
    }

    /// Whether no parameter was added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Whether the named parameter is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// The JSON value of a parameter.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }

    /// Iterates over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> + '_ {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Renders the `application/x-www-form-urlencoded` query string.
    ///
    /// # Errors
    ///
    /// Fails if a parameter holds a nested object or array of arrays.
    pub fn to_query_string(&self) -> Result<String, ApiClientError> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (name, value) in &self.params {
            match value {
                serde_json::Value::Array(items) => {
                    for item in items {
                        pairs.push((name.as_str(), json_value_to_string(item)?));
                    }
                }
                serde_json::Value::Object(_) => {
                    return Err(ApiClientError::UnsupportedParameterValue {
                        message: "objects are not supported for query parameters".to_string(),
                        value: value.clone(),
                    });
                }
                value => pairs.push((name.as_str(), json_value_to_string(value)?)),
            }
        }
        let query = serde_urlencoded::to_string(pairs)?;
        Ok(query)
    }
}

/// Paging inputs of a list operation.
///
/// Each field is optional; the resulting query only carries the ones that are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Page size.
    pub size: Option<u32>,
    /// Sort criteria, each in the `property,direction` form.
    pub sort: Option<Vec<String>>,
}

impl Pagination {
    /// No paging at all: the server defaults apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page index.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Appends one sort criterion.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort.get_or_insert_with(Vec::new).push(sort.into());
        self
    }

    /// Whether no paging input was set.
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_none()
    }

    pub(in crate::client) fn to_query(&self) -> CallQuery {
        CallQuery::new()
            .add_param("page", self.page)
            .add_param("size", self.size)
            .add_param("sort", self.sort.as_ref())
    }
}
