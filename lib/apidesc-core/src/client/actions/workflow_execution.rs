use http::Method;

use crate::client::{ApiClient, ApiClientError, Endpoint, ParamValue, RequestConfig, RequestDescriptor};
use crate::models::WorkflowExecution;

const CANCEL: Endpoint<WorkflowExecution> = Endpoint::json(
    "cancelWorkflowExecution",
    Method::POST,
    "/WorkflowExecution/{id}/cancel",
);
const PAUSE: Endpoint<WorkflowExecution> = Endpoint::json(
    "pauseWorkflowExecution",
    Method::POST,
    "/WorkflowExecution/{id}/pause",
);
const RESUME: Endpoint<WorkflowExecution> = Endpoint::json(
    "resumeWorkflowExecution",
    Method::POST,
    "/WorkflowExecution/{id}/resume",
);

impl ApiClient {
    /// `POST {base}/WorkflowExecution/{id}/cancel`.
    ///
    /// The transform decodes the updated [`WorkflowExecution`].
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn cancel_workflow_execution<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<WorkflowExecution, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.workflow_execution_action(CANCEL, id, config)
    }

    /// `POST {base}/WorkflowExecution/{id}/pause`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn pause_workflow_execution<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<WorkflowExecution, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.workflow_execution_action(PAUSE, id, config)
    }

    /// `POST {base}/WorkflowExecution/{id}/resume`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `id` is missing.
    pub fn resume_workflow_execution<U>(
        &self,
        id: impl Into<ParamValue>,
        config: RequestConfig<WorkflowExecution, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.workflow_execution_action(RESUME, id, config)
    }

    fn workflow_execution_action<U>(
        &self,
        endpoint: Endpoint<WorkflowExecution>,
        id: impl Into<ParamValue>,
        config: RequestConfig<WorkflowExecution, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(endpoint).path_param("id", id)?.build(config)
    }
}
