use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::ApiClientError;

/// Caller continuation invoked with the decoded response body and the raw response text.
pub type Continuation<T, U> = Box<dyn Fn(T, &str) -> U + Send + Sync>;

/// Transform attached to a descriptor: decodes the raw JSON body, then calls the
/// caller's continuation.
pub type Transform<U> = Box<dyn Fn(Value, &str) -> Result<U, ApiClientError> + Send + Sync>;

/// Merges a freshly received entity into the previously stored one.
///
/// Called with the previous value (if any) and the new one; returns the value to store.
#[derive(Clone)]
pub struct EntityUpdater(Arc<dyn Fn(Option<&Value>, &Value) -> Value + Send + Sync>);

impl EntityUpdater {
    /// Wraps an update function.
    pub fn new<F>(update: F) -> Self
    where
        F: Fn(Option<&Value>, &Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(update))
    }

    /// Runs the update.
    pub fn apply(&self, previous: Option<&Value>, next: &Value) -> Value {
        (self.0)(previous, next)
    }
}

impl fmt::Debug for EntityUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityUpdater")
    }
}

/// Restores an entity after a failed optimistic update.
///
/// Called with the value before the optimistic update and the current value.
#[derive(Clone)]
pub struct EntityRollback(Arc<dyn Fn(Option<&Value>, Option<&Value>) -> Option<Value> + Send + Sync>);

impl EntityRollback {
    /// Wraps a rollback function.
    pub fn new<F>(rollback: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Option<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(rollback))
    }

    /// Runs the rollback.
    pub fn apply(&self, initial: Option<&Value>, current: Option<&Value>) -> Option<Value> {
        (self.0)(initial, current)
    }
}

impl fmt::Debug for EntityRollback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntityRollback")
    }
}

/// Optional per-call settings.
///
/// Everything except the transform continuation is copied unchanged into the
/// [`RequestDescriptor`](super::RequestDescriptor) for the execution layer: cache
/// metadata, the query key, entity updaters, the force flag and rollbacks.
///
/// `T` is the decoded response type of the operation and `U` what the continuation
/// produces from it.
///
/// # Examples
///
/// ```rust
/// use apidesc_core::models::Campaign;
/// use apidesc_core::{EntityUpdater, RequestConfig};
///
/// let config = RequestConfig::new()
///     .with_query_key("campaign-7")
///     .with_force(true)
///     .with_update("campaigns", EntityUpdater::new(|_previous, next| next.clone()))
///     .with_transform(|campaign: Campaign, _text: &str| campaign.name);
/// ```
pub struct RequestConfig<T, U> {
    pub(in crate::client) meta: Map<String, Value>,
    pub(in crate::client) update: IndexMap<String, EntityUpdater>,
    pub(in crate::client) query_key: Option<String>,
    pub(in crate::client) optimistic_update: IndexMap<String, EntityUpdater>,
    pub(in crate::client) force: bool,
    pub(in crate::client) rollback: IndexMap<String, EntityRollback>,
    pub(in crate::client) transform: Option<Continuation<T, U>>,
}

impl<T, U> fmt::Debug for RequestConfig<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("meta", &self.meta)
            .field("update", &self.update)
            .field("query_key", &self.query_key)
            .field("optimistic_update", &self.optimistic_update)
            .field("force", &self.force)
            .field("rollback", &self.rollback)
            .field("transform", &self.transform.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<T> RequestConfig<T, ()> {
    /// A configuration without overrides and without a transform.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, U> Default for RequestConfig<T, U> {
    fn default() -> Self {
        Self {
            meta: Map::new(),
            update: IndexMap::new(),
            query_key: None,
            optimistic_update: IndexMap::new(),
            force: false,
            rollback: IndexMap::new(),
            transform: None,
        }
    }
}

impl<T, U> RequestConfig<T, U> {
    /// Adds a metadata entry, passed through to the descriptor's `meta`.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Sets the cache key of the query.
    #[must_use]
    pub fn with_query_key(mut self, query_key: impl Into<String>) -> Self {
        self.query_key = Some(query_key.into());
        self
    }

    /// Registers how the named entity is merged once the response arrives.
    #[must_use]
    pub fn with_update(mut self, entity: impl Into<String>, updater: EntityUpdater) -> Self {
        self.update.insert(entity.into(), updater);
        self
    }

    /// Registers how the named entity is updated before the response arrives.
    #[must_use]
    pub fn with_optimistic_update(
        mut self,
        entity: impl Into<String>,
        updater: EntityUpdater,
    ) -> Self {
        self.optimistic_update.insert(entity.into(), updater);
        self
    }

    /// Registers how the named entity is restored if the request fails.
    #[must_use]
    pub fn with_rollback(mut self, entity: impl Into<String>, rollback: EntityRollback) -> Self {
        self.rollback.insert(entity.into(), rollback);
        self
    }

    /// Asks the execution layer to bypass its cache.
    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Sets the continuation receiving the decoded response body and the raw text.
    ///
    /// Only when a continuation is set does the descriptor carry a transform.
    #[must_use]
    pub fn with_transform<V, F>(self, transform: F) -> RequestConfig<T, V>
    where
        F: Fn(T, &str) -> V + Send + Sync + 'static,
    {
        let Self {
            meta,
            update,
            query_key,
            optimistic_update,
            force,
            rollback,
            transform: _,
        } = self;

        RequestConfig {
            meta,
            update,
            query_key,
            optimistic_update,
            force,
            rollback,
            transform: Some(Box::new(transform)),
        }
    }
}
