//! Wire models of the API and the resource table.
//!
//! Models are plain serde types in camelCase. The [`resources!`](crate::resources) table
//! below turns each CRUD model into a [`Resource`](crate::Resource).

#[allow(missing_docs)]
mod account;
pub use self::account::{AclEntry, Address, Contact, Customer, Organization, Secret, Team, User};

#[allow(missing_docs)]
mod billing;
pub use self::billing::{Invoice, InvoiceLine, InvoiceStatus, Payment, Product, Subscription};

#[allow(missing_docs)]
mod delivery;
pub use self::delivery::{
    Build, BuildStatus, Deployment, Environment, Project, Release, Repository, Schedule, Task,
};

#[allow(missing_docs)]
mod marketing;
pub use self::marketing::{
    Campaign, FunnelStep, FunnelWizardJob, FunnelWizardRequest, FunnelWizardState,
    FunnelWizardStatus, Notification, ProductFunnel, Webhook,
};

#[allow(missing_docs)]
mod orchestration;
pub use self::orchestration::{
    DeadLetter, DeadLetterDiscardRequest, DeadLetterDiscardResult, DeadLetterRequeueResult,
    ExecutionStatus, Run, RunHeartbeat, RunHeartbeatAck, Swarm, SwarmCommand, SwarmCommandResult,
    SwarmRegistration, SwarmRegistrationResult, Workflow, WorkflowExecution,
};

/// Declares resource types.
///
/// Each entry names a serde model and the name of its body parameter; the path
/// segment is the type name. Resources are paginated unless `paginated: false` is
/// given. The invocation also defines `RESOURCE_NAMES`, listing the declared path
/// segments in order.
///
/// # Example
///
/// ```rust
/// use apidesc_core::{Resource, resources};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// pub struct Ticket {
///     id: Option<String>,
/// }
///
/// #[derive(Serialize, Deserialize)]
/// pub struct Label {
///     name: String,
/// }
///
/// resources! {
///     Ticket { body: "ticket" },
///     Label { body: "label", paginated: false },
/// }
///
/// assert_eq!(Ticket::ITEM_PATH, "/Ticket/{id}");
/// assert_eq!(Ticket::OPERATIONS.list, "getTicketList");
/// assert!(!Label::PAGINATED);
/// assert_eq!(RESOURCE_NAMES, &["Ticket", "Label"]);
/// ```
#[macro_export]
macro_rules! resources {
    ($( $ty:ident { body: $body:literal $(, paginated: $paginated:literal)? } ),+ $(,)?) => {
        $(
            impl $crate::Resource for $ty {
                const NAME: &'static str = stringify!($ty);
                const BODY_PARAM: &'static str = $body;
                const COLLECTION_PATH: &'static str = concat!("/", stringify!($ty));
                const ITEM_PATH: &'static str = concat!("/", stringify!($ty), "/{id}");
                const OPERATIONS: $crate::CrudOperations = $crate::CrudOperations {
                    get: concat!("get", stringify!($ty)),
                    list: concat!("get", stringify!($ty), "List"),
                    create: concat!("create", stringify!($ty)),
                    update: concat!("update", stringify!($ty)),
                    delete: concat!("delete", stringify!($ty)),
                };
                $(const PAGINATED: bool = $paginated;)?
            }
        )+

        /// Path segments of every declared resource.
        pub const RESOURCE_NAMES: &[&str] = &[$(stringify!($ty)),+];
    };
}

resources! {
    AclEntry { body: "aclEntry" },
    Address { body: "address", paginated: false },
    Build { body: "build" },
    Campaign { body: "campaign" },
    Contact { body: "contact" },
    Customer { body: "customer" },
    DeadLetter { body: "deadLetter" },
    Deployment { body: "deployment" },
    Environment { body: "environment", paginated: false },
    Invoice { body: "invoice" },
    InvoiceLine { body: "invoiceLine" },
    Notification { body: "notification" },
    Organization { body: "organization" },
    Payment { body: "payment" },
    Product { body: "product" },
    ProductFunnel { body: "productFunnel" },
    Project { body: "project" },
    Release { body: "release" },
    Repository { body: "repository" },
    Run { body: "run" },
    Schedule { body: "schedule" },
    Secret { body: "secret", paginated: false },
    Subscription { body: "subscription" },
    Swarm { body: "swarm" },
    Task { body: "task" },
    Team { body: "team" },
    User { body: "user" },
    Webhook { body: "webhook" },
    Workflow { body: "workflow" },
    WorkflowExecution { body: "workflowExecution" },
}
