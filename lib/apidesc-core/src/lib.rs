//! # Apidesc Core
//!
//! Typed request descriptors for a resource-oriented REST API.
//!
//! Every backend resource (an [`AclEntry`](models::AclEntry), a [`Build`](models::Build),
//! a [`Campaign`](models::Campaign), ...) exposes the same five operations: get one,
//! get a page, create, update and delete. Instead of sending requests, this crate
//! builds a [`RequestDescriptor`]: the URL, method, headers, JSON body and an
//! optional response transform. Executing the descriptor is left to whatever HTTP
//! layer the caller already runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use apidesc_core::models::Task;
//! use apidesc_core::{ApiClient, Pagination, RequestConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_base_url("https://api.example.com/v1")?
//!     .build()?;
//!
//! let descriptor = client.resource::<Task>().get("42", RequestConfig::new())?;
//! assert_eq!(descriptor.url.as_str(), "https://api.example.com/v1/Task/42");
//! assert_eq!(descriptor.options.method, http::Method::GET);
//!
//! let page = client
//!     .resource::<Task>()
//!     .list(Pagination::new().with_page(2).with_size(50), RequestConfig::new())?;
//! assert_eq!(page.query.to_query_string()?, "page=2&size=50");
//! # Ok(())
//! # }
//! ```
//!
//! ## Response transforms
//!
//! A transform is only attached when the caller supplies a continuation. The
//! descriptor then deserializes the response body into the resource model before
//! handing it, together with the raw response text, to the continuation:
//!
//! ```rust
//! use apidesc_core::models::Task;
//! use apidesc_core::{ApiClient, RequestConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder().build()?;
//! let config = RequestConfig::new().with_transform(|task: Task, _text: &str| task.title);
//!
//! let descriptor = client.resource::<Task>().get(7, config)?;
//! let body = serde_json::json!({ "id": "7", "title": "Write docs" });
//! let title = descriptor.apply_transform(body, "").transpose()?;
//! assert_eq!(title.as_deref(), Some("Write docs"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Action endpoints
//!
//! Some resources carry extra actions beside plain CRUD, exposed directly on
//! [`ApiClient`]: run heartbeats, workflow execution cancel/pause/resume,
//! dead-letter requeue/discard, swarm register/command/unregister and the
//! product funnel wizard (start, status, preview, publish).
//!
//! ## Errors
//!
//! Building a descriptor from a valid client fails with
//! [`ApiClientError::MissingParameter`], raised before anything is assembled, or
//! with [`ApiClientError::JsonValueError`] when a supplied value does not serialize.
//! Deserialization errors surface later, from the transform.

mod client;

pub mod models;

pub use self::client::{
    ApiClient, ApiClientBuilder, ApiClientError, Authentication, AuthenticationError, CallBody,
    CallPath, CallQuery, Continuation, CrudOperations, Endpoint, EntityRollback, EntityUpdater,
    Pagination, ParamValue, RequestBuilder, RequestConfig, RequestDescriptor, RequestOptions,
    Resource, ResourceApi, ResponseFormat, SecureString, Transform,
};
