use http::Method;

use crate::client::{ApiClient, ApiClientError, Endpoint, ParamValue, RequestConfig, RequestDescriptor};
use crate::models::{DeadLetterDiscardRequest, DeadLetterDiscardResult, DeadLetterRequeueResult};

const REQUEUE: Endpoint<DeadLetterRequeueResult> =
    Endpoint::json("requeueDeadLetter", Method::POST, "/DeadLetter/{id}/requeue");
const DISCARD: Endpoint<DeadLetterDiscardResult> =
    Endpoint::json("discardDeadLetter", Method::POST, "/DeadLetter/{id}/discard");

impl ApiClient {
    /// `POST {base}/DeadLetter/{id}/requeue`, sending a dead letter back to its queue.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn requeue_dead_letter<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<DeadLetterRequeueResult, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(REQUEUE).path_param("id", id)?.build(config)
    }

    /// `POST {base}/DeadLetter/{id}/discard` with the discard reason as body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` or the request body
    /// is missing.
    pub fn discard_dead_letter<U>(
        &self,
        id: impl Into<ParamValue>,
        request: Option<&DeadLetterDiscardRequest>,
        config: RequestConfig<DeadLetterDiscardResult, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(DISCARD)
            .path_param("id", id)?
            .json_body("deadLetterDiscardRequest", request)?
            .build(config)
    }
}
