use http::Method;

use crate::client::{ApiClient, ApiClientError, Endpoint, ParamValue, RequestConfig, RequestDescriptor};
use crate::models::{FunnelWizardJob, FunnelWizardRequest, FunnelWizardStatus, ProductFunnel};

const START_WIZARD: Endpoint<FunnelWizardJob> =
    Endpoint::json("startFunnelWizard", Method::POST, "/ProductFunnel/wizard");
const WIZARD_STATUS: Endpoint<FunnelWizardStatus> = Endpoint::json(
    "getFunnelWizardStatus",
    Method::GET,
    "/ProductFunnel/wizard/{wizardId}",
);
const PREVIEW: Endpoint<String> = Endpoint::html(
    "previewFunnel",
    Method::GET,
    "/ProductFunnel/wizard/{wizardId}/preview",
);
const PUBLISH: Endpoint<ProductFunnel> = Endpoint::json(
    "publishFunnel",
    Method::POST,
    "/ProductFunnel/wizard/{wizardId}/publish",
);

// Funnel wizard
impl ApiClient {
    /// `POST {base}/ProductFunnel/wizard`, starting the generation of a funnel.
    ///
    /// The wizard runs on the server; poll it with
    /// [`get_funnel_wizard_status`](Self::get_funnel_wizard_status).
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `request` is `None`.
    pub fn start_funnel_wizard<U>(
        &self,
        request: Option<&FunnelWizardRequest>,
        config: RequestConfig<FunnelWizardJob, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(START_WIZARD)
            .json_body("funnelWizardRequest", request)?
            .build(config)
    }

    /// `GET {base}/ProductFunnel/wizard/{wizardId}`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `wizard_id` is missing.
    pub fn get_funnel_wizard_status<U>(
        &self,
        wizard_id: impl Into<ParamValue>,
        config: RequestConfig<FunnelWizardStatus, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(WIZARD_STATUS)
            .path_param("wizardId", wizard_id)?
            .build(config)
    }

    /// `GET {base}/ProductFunnel/wizard/{wizardId}/preview`.
    ///
    /// The preview is an HTML page: the request asks for `text/html` and the
    /// transform hands the raw response text to the continuation.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `wizard_id` is missing.
    pub fn preview_funnel<U>(
        &self,
        wizard_id: impl Into<ParamValue>,
        config: RequestConfig<String, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(PREVIEW)
            .path_param("wizardId", wizard_id)?
            .build(config)
    }

    /// `POST {base}/ProductFunnel/wizard/{wizardId}/publish`.
    ///
    /// The transform decodes the published [`ProductFunnel`].
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::MissingParameter`] when `wizard_id` is missing.
    pub fn publish_funnel<U>(
        &self,
        wizard_id: impl Into<ParamValue>,
        config: RequestConfig<ProductFunnel, U>,
    ) -> Result<RequestDescriptor<U>, ApiClientError>
    where
        U: 'static,
    {
        self.request(PUBLISH)
            .path_param("wizardId", wizard_id)?
            .build(config)
    }
}

#[cfg(test)]
mod tests {
    use http::header::{ACCEPT, CONTENT_TYPE};
    use serde_json::{Value, json};

    use super::*;
    use crate::client::actions::test_client;
    use crate::models::FunnelWizardState;

    #[test]
    fn test_start_wizard() {
        let client = test_client();
        let request = FunnelWizardRequest {
            product_id: "prod-1".to_string(),
            goal: "sell the beta".to_string(),
            audience: None,
            options: None,
        };

        let descriptor = client
            .start_funnel_wizard(Some(&request), RequestConfig::new())
            .expect("valid descriptor");

        assert_eq!(descriptor.operation, "startFunnelWizard");
        assert_eq!(
            descriptor.url.as_str(),
            "https://api.example.com/v1/ProductFunnel/wizard"
        );
        assert_eq!(descriptor.options.headers[CONTENT_TYPE], "application/json");
        assert_eq!(
            descriptor.json_body(),
            Some(&json!({ "productId": "prod-1", "goal": "sell the beta" }))
        );
    }

    #[test]
    fn test_wizard_status_decodes_state() {
        let client = test_client();
        let config = RequestConfig::new()
            .with_transform(|status: FunnelWizardStatus, _: &str| (status.state, status.progress));

        let descriptor = client
            .get_funnel_wizard_status("wiz-9", config)
            .expect("valid descriptor");
        let decoded = descriptor
            .apply_transform(
                json!({ "wizardId": "wiz-9", "state": "generating", "progress": 60 }),
                "",
            )
            .expect("transform present")
            .expect("valid status");

        assert_eq!(
            descriptor.url.as_str(),
            "https://api.example.com/v1/ProductFunnel/wizard/wiz-9"
        );
        assert_eq!(descriptor.options.method, Method::GET);
        assert_eq!(decoded, (FunnelWizardState::Generating, Some(60)));
    }

    #[test]
    fn test_wizard_status_requires_wizard_id() {
        let client = test_client();

        let error = client
            .get_funnel_wizard_status("", RequestConfig::new())
            .expect_err("empty wizard id");

        insta::assert_snapshot!(
            error,
            @"Required parameter 'wizardId' was null or undefined when calling getFunnelWizardStatus"
        );
    }

    #[test]
    fn test_preview_hands_over_html() {
        let client = test_client();
        let config = RequestConfig::new().with_transform(|html: String, _: &str| html);

        let descriptor = client
            .preview_funnel("wiz-9", config)
            .expect("valid descriptor");
        let html = descriptor
            .apply_transform(Value::Null, "<html><body>Preview</body></html>")
            .expect("transform present")
            .expect("text is always accepted");

        assert_eq!(descriptor.options.headers[ACCEPT], "text/html");
        assert!(descriptor.body.is_none());
        assert_eq!(html, "<html><body>Preview</body></html>");
    }

    #[test]
    fn test_publish_requires_wizard_id() {
        let client = test_client();

        let error = client
            .publish_funnel(ParamValue::missing(), RequestConfig::new())
            .expect_err("missing wizard id");

        assert!(matches!(
            error,
            ApiClientError::MissingParameter {
                parameter: "wizardId",
                operation: "publishFunnel",
            }
        ));

        let descriptor = client
            .publish_funnel("wiz-9", RequestConfig::new())
            .expect("valid descriptor");

        assert_eq!(descriptor.options.method, Method::POST);
        assert_eq!(
            descriptor.url.as_str(),
            "https://api.example.com/v1/ProductFunnel/wizard/wiz-9/publish"
        );
    }
}
