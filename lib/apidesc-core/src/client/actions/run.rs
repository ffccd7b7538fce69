use http::Method;

use crate::client::{ApiClient, ApiClientError, Endpoint, ParamValue, RequestConfig, RequestDescriptor};
use crate::models::{RunHeartbeat, RunHeartbeatAck};

const HEARTBEAT_RUN: Endpoint<RunHeartbeatAck> =
    Endpoint::json("heartbeatRun", Method::POST, "/Run/{id}/heartbeat");

impl ApiClient {
    /// `POST {base}/Run/{id}/heartbeat`, reporting that a run is alive.
    ///
    /// The heartbeat body is optional; without one the request has no body and no
    /// `Content-Type`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn heartbeat_run<U>(
        &self,
        id: impl Into<ParamValue>,
        heartbeat: Option<&RunHeartbeat>,
        config: RequestConfig<RunHeartbeatAck, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(HEARTBEAT_RUN)
            .path_param("id", id)?
            .optional_json_body(heartbeat)?
            .build(config)
    }
}
