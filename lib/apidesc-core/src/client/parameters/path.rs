use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Characters escaped in a path segment: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// A path template with the values of its placeholders.
///
/// Values are stored raw and percent-encoded while resolving, so an id containing
/// `/` or spaces stays inside its path segment.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::CallPath;
///
/// let path = CallPath::from("/WorkflowExecution/{id}/cancel").add_param("id", "exec 1/2");
/// assert_eq!(path.resolve()?, "/WorkflowExecution/exec%201%2F2/cancel");
/// # Ok::<(), apidesc_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    pub(in crate::client) path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Sets the value of the `{name}` placeholder, replacing any previous value.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Substitutes every placeholder and returns the encoded path.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::PathUnresolved`] if a placeholder has no value.
    pub fn resolve(&self) -> Result<String, ApiClientError> {
        PathResolved::try_from(self.clone()).map(|resolved| resolved.path)
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::default(),
        }
    }
}

#[derive(Debug)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { mut path, args } = value;

        let mut names: HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|m| m.as_str().to_string())
            .collect();

        for (name, value) in args {
            if !names.remove(&name) {
                warn!(?name, "argument name not found");
                continue;
            }
            let encoded_value = encode_path_param_value(&value);
            path = replace_path_param(&path, &name, &encoded_value);
        }

        if names.is_empty() {
            return Ok(Self { path });
        }

        let mut missings: Vec<_> = names.into_iter().collect();
        missings.sort();
        Err(ApiClientError::PathUnresolved { path, missings })
    }
}
