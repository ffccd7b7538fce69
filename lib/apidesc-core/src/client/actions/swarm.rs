use http::Method;
use serde_json::Value;

use crate::client::{ApiClient, ApiClientError, Endpoint, ParamValue, RequestConfig, RequestDescriptor};
use crate::models::{SwarmCommand, SwarmCommandResult, SwarmRegistration, SwarmRegistrationResult};

const REGISTER: Endpoint<SwarmRegistrationResult> =
    Endpoint::json("registerSwarm", Method::POST, "/Swarm/register");
const COMMAND: Endpoint<SwarmCommandResult> =
    Endpoint::json("commandSwarm", Method::POST, "/Swarm/{id}/command");
const UNREGISTER: Endpoint<Value> =
    Endpoint::passthrough("unregisterSwarm", Method::POST, "/Swarm/{id}/unregister");

impl ApiClient {
    /// `POST {base}/Swarm/register`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `registration` is `None`.
    pub fn register_swarm<U>(
        &self,
        registration: Option<&SwarmRegistration>,
        config: RequestConfig<SwarmRegistrationResult, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(REGISTER)
            .json_body("swarmRegistration", registration)?
            .build(config)
    }

    /// `POST {base}/Swarm/{id}/command`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` or `command` is missing.
    pub fn command_swarm<U>(
        &self,
        id: impl Into<ParamValue>,
        command: Option<&SwarmCommand>,
        config: RequestConfig<SwarmCommandResult, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(COMMAND)
            .path_param("id", id)?
            .json_body("swarmCommand", command)?
            .build(config)
    }

    /// `POST {base}/Swarm/{id}/unregister`.
    ///
    /// The response has no model: a transform continuation receives the raw JSON body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn unregister_swarm<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<Value, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(UNREGISTER).path_param("id", id)?.build(config)
    }
}
