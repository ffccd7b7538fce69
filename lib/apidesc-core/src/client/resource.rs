use std::marker::PhantomData;

use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::{
    ApiClient, ApiClientError, Endpoint, Pagination, ParamValue, RequestConfig, RequestDescriptor,
};

/// Names of the five CRUD operations of a resource, e.g. `getAclEntry`, `getAclEntryList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrudOperations {
    /// Fetch one.
    pub get: &'static str,
    /// Fetch a page.
    pub list: &'static str,
    /// Create.
    pub create: &'static str,
    /// Replace.
    pub update: &'static str,
    /// Delete.
    pub delete: &'static str,
}

/// Metadata of a backend resource.
///
/// Implemented on each model type through the [`resources!`](crate::resources) table
/// rather than by hand; serde provides the wire serializer and deserializer.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the resource, e.g. `AclEntry`.
    const NAME: &'static str;
    /// Name of the body parameter in create and update, e.g. `aclEntry`.
    const BODY_PARAM: &'static str;
    /// Path of the collection, e.g. `/AclEntry`.
    const COLLECTION_PATH: &'static str;
    /// Path of one item, e.g. `/AclEntry/{id}`.
    const ITEM_PATH: &'static str;
    /// Operation names.
    const OPERATIONS: CrudOperations;
    /// Whether list operations accept `page`, `size` and `sort`.
    const PAGINATED: bool = true;
}

/// The CRUD operations of one resource type.
///
/// Obtained with [`ApiClient::resource`].
#[derive(Debug)]
pub struct ResourceApi<'a, R> {
    client: &'a ApiClient,
    resource: PhantomData<fn() -> R>,
}

impl<'a, R> ResourceApi<'a, R>
where
    R: Resource,
{
    pub(in crate::client) fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    /// `GET {base}/{Resource}/{id}`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn get<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<R, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let endpoint = Endpoint::<R>::json(R::OPERATIONS.get, Method::GET, R::ITEM_PATH);
        self.client
            .request(endpoint)
            .path_param("id", id)?
            .build(config)
    }

    /// `GET {base}/{Resource}` with the defined pagination parameters.
    ///
    /// The transform decodes the JSON array element-wise into `Vec<R>`.
    ///
    /// # Errors
    ///
    /// No parameter is required; this only fails if the client configuration is invalid.
    pub fn list<U>(
        &self,
        pagination: Pagination,
        config: RequestConfig<Vec<R>, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let endpoint =
            Endpoint::<Vec<R>>::json(R::OPERATIONS.list, Method::GET, R::COLLECTION_PATH);
        let request = self.client.request(endpoint);
        let request = if R::PAGINATED {
            request.with_query(pagination.to_query())
        } else {
            if !pagination.is_empty() {
                warn!(
                    resource = R::NAME,
                    ?pagination,
                    "pagination ignored for a non paginated resource"
                );
            }
            request
        };
        request.build(config)
    }

    /// `POST {base}/{Resource}` with the serialized object as JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `body` is `None`.
    pub fn create<U>(
        &self,
        body: Option<&R>,
        config: RequestConfig<R, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let endpoint = Endpoint::<R>::json(R::OPERATIONS.create, Method::POST, R::COLLECTION_PATH);
        self.client
            .request(endpoint)
            .json_body(R::BODY_PARAM, body)?
            .build(config)
    }

    /// `PUT {base}/{Resource}/{id}` with the serialized object as JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` or `body` is missing.
    pub fn update<U>(
        &self,
        id: impl Into<ParamValue>,
        body: Option<&R>,
        config: RequestConfig<R, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let endpoint = Endpoint::<R>::json(R::OPERATIONS.update, Method::PUT, R::ITEM_PATH);
        self.client
            .request(endpoint)
            .path_param("id", id)?
            .json_body(R::BODY_PARAM, body)?
            .build(config)
    }

    /// `DELETE {base}/{Resource}/{id}`.
    ///
    /// The response is never deserialized: a transform continuation receives the raw
    /// JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn delete<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<Value, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        let endpoint = Endpoint::passthrough(R::OPERATIONS.delete, Method::DELETE, R::ITEM_PATH);
        self.client
            .request(endpoint)
            .path_param("id", id)?
            .build(config)
    }
}
