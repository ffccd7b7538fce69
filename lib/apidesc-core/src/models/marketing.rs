use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub contact_ids: Vec<String>,
}

/// Message delivered to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub recipient_id: String,
    /// Delivery channel, e.g. `email`.
    pub channel: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
}

/// Callback registered for server events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    /// Subscribed event types, e.g. `run.finished`.
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub active: bool,
}

/// Sequence of landing pages leading to a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFunnel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub product_id: String,
    #[serde(default)]
    pub steps: Vec<FunnelStep>,
    /// Public URL, set once published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
}

/// One page of a [`ProductFunnel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStep {
    pub title: String,
    /// Page kind, e.g. `landing`, `checkout`.
    pub kind: String,
}

/// Input of the funnel generation wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelWizardRequest {
    pub product_id: String,
    /// What the funnel should achieve, in plain words.
    pub goal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Handle on a started wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelWizardJob {
    pub wizard_id: String,
    pub state: FunnelWizardState,
}

/// Progress of a funnel wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelWizardState {
    Pending,
    Generating,
    Ready,
    Published,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelWizardStatus {
    pub wizard_id: String,
    pub state: FunnelWizardState,
    /// Completion in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    /// Generated funnel, once `ready`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funnel: Option<ProductFunnel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
