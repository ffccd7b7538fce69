//! Request parameter types for building descriptors.
//!
//! - [`ParamValue`] - A possibly-missing path parameter value
//! - [`CallPath`] - Path templates (e.g., `/Task/{id}`)
//! - [`CallQuery`] and [`Pagination`] - The query object of list operations
//! - [`CallBody`] - JSON request bodies

mod param;
pub use self::param::ParamValue;

mod path;
pub use self::path::CallPath;
pub(in crate::client) use self::path::PathResolved;

mod query;
pub use self::query::{CallQuery, Pagination};

mod body;
pub use self::body::CallBody;
