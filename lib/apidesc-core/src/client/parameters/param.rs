use serde::Serialize;
use serde::ser::Error as _;
use tracing::warn;

use crate::client::error::ApiClientError;

/// A caller-supplied parameter value that may be absent.
///
/// Generated clients receive their path parameters as loosely typed inputs where both
/// "not given" and `null` mean the parameter is missing. `ParamValue` keeps that
/// distinction out of the call sites: anything serializable converts into it, and
/// `None` or a value that serializes to JSON `null` is treated as missing.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::ParamValue;
///
/// assert!(ParamValue::from("42").is_present());
/// assert!(ParamValue::from(42_u64).is_present());
/// assert!(!ParamValue::from(None::<String>).is_present());
/// assert!(!ParamValue::from(serde_json::Value::Null).is_present());
/// assert!(!ParamValue::missing().is_present());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamValue(ParamState);

#[derive(Debug, Clone, Default, PartialEq)]
enum ParamState {
    #[default]
    Missing,
    Present(serde_json::Value),
    Unserializable(String),
}

impl ParamValue {
    /// A parameter that was not supplied.
    pub fn missing() -> Self {
        Self(ParamState::Missing)
    }

    /// Serializes any value into a parameter.
    ///
    /// A value that fails to serialize is logged and kept as a failure: a required
    /// parameter then reports [`ApiClientError::JsonValueError`], a query
    /// parameter is skipped.
    pub fn new<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(value) => Self::from(value),
            Err(error) => {
                warn!(%error, "failed to serialize parameter value");
                Self(ParamState::Unserializable(error.to_string()))
            }
        }
    }

    /// Whether a usable value was supplied.
    pub fn is_present(&self) -> bool {
        matches!(self.0, ParamState::Present(_))
    }

    /// Resolves the value for a required path segment.
    ///
    /// Absent, `null` and empty-string values fail with
    /// [`ApiClientError::MissingParameter`], and so do `.` and `..`: URL
    /// normalization would drop them and retarget the request.
    pub(in crate::client) fn require(
        self,
        parameter: &'static str,
        operation: &'static str,
    ) -> Result<String, ApiClientError> {
        let value = match self.0 {
            ParamState::Missing => return Err(ApiClientError::missing(parameter, operation)),
            ParamState::Unserializable(message) => {
                return Err(ApiClientError::JsonValueError(serde_json::Error::custom(
                    message,
                )));
            }
            ParamState::Present(value) => json_value_to_string(&value)?,
        };
        if matches!(value.as_str(), "" | "." | "..") {
            return Err(ApiClientError::missing(parameter, operation));
        }
        Ok(value)
    }

    pub(in crate::client) fn into_value(self) -> Option<serde_json::Value> {
        match self.0 {
            ParamState::Present(value) => Some(value),
            ParamState::Missing | ParamState::Unserializable(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self(ParamState::Present(serde_json::Value::String(value.to_string())))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self(ParamState::Present(serde_json::Value::String(value)))
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self(ParamState::Missing),
            value => Self(ParamState::Present(value)),
        }
    }
}

impl<T> From<Option<T>> for ParamValue
where
    T: Serialize,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::missing, |value| Self::new(&value))
    }
}

macro_rules! param_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self(ParamState::Present(serde_json::Value::from(value)))
                }
            }
        )*
    };
}

param_value_from_number!(i32, i64, u32, u64, usize);

/// Converts a scalar JSON value to its string form for paths and query strings.
pub(in crate::client) fn json_value_to_string(
    value: &serde_json::Value,
) -> Result<String, ApiClientError> {
    match value {
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(ApiClientError::UnsupportedParameterValue {
                message: "nested complex values not supported in parameters".to_string(),
                value: value.clone(),
            })
        }
    }
}
