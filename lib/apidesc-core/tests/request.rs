#![allow(missing_docs)]

use apidesc_core::models::{Contact, DeadLetterDiscardRequest, RESOURCE_NAMES, Task};
use apidesc_core::{
    ApiClient, CallQuery, Endpoint, Pagination, RequestConfig, RequestDescriptor, ResponseFormat,
};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use http::{Method, uri::Scheme};
use rstest::rstest;
use serde_json::json;

mod common;
pub use self::common::*;

#[rstest]
fn test_to_request_for_list(client: ApiClient) -> anyhow::Result<()> {
    let descriptor = client.resource::<Contact>().list(
        Pagination::new().with_page(1).with_sort("email,asc"),
        RequestConfig::new(),
    )?;

    let request = descriptor.to_request()?;

    assert_eq!(request.method(), &Method::GET);
    insta::assert_snapshot!(
        request.url(),
        @"https://api.x/v1/Contact?page=1&sort=email%2Casc"
    );
    assert!(request.body().is_none());

    Ok(())
}

#[rstest]
fn test_to_request_carries_json_body(authenticated_client: ApiClient) -> anyhow::Result<()> {
    let request = DeadLetterDiscardRequest {
        reason: "poison message".to_string(),
    };
    let descriptor = authenticated_client.discard_dead_letter(
        "dl-1",
        Some(&request),
        RequestConfig::new(),
    )?;

    let request = descriptor.to_request()?;

    assert_eq!(request.method(), &Method::POST);
    assert_eq!(
        request.url().as_str(),
        "https://api.x/v1/DeadLetter/dl-1/discard"
    );
    assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(request.headers()[AUTHORIZATION], "Bearer test-token");
    assert_eq!(request.headers()["x-tenant"], "acme");
    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .map(serde_json::from_slice::<serde_json::Value>)
        .transpose()?;
    assert_eq!(body, Some(json!({ "reason": "poison message" })));

    Ok(())
}

#[rstest]
fn test_credentials_are_on_every_descriptor(
    authenticated_client: ApiClient,
) -> anyhow::Result<()> {
    let descriptors = [
        authenticated_client
            .resource::<Task>()
            .get("t-1", RequestConfig::new())?
            .options,
        authenticated_client
            .resource::<Task>()
            .delete("t-1", RequestConfig::new())?
            .options,
        authenticated_client
            .requeue_dead_letter("dl-1", RequestConfig::new())?
            .options,
        authenticated_client
            .preview_funnel("wiz-1", RequestConfig::new())?
            .options,
    ];

    for options in descriptors {
        assert_eq!(options.headers[AUTHORIZATION], "Bearer test-token");
        assert!(options.headers[AUTHORIZATION].is_sensitive());
        assert_eq!(options.headers["x-tenant"], "acme");
    }

    Ok(())
}

#[rstest]
fn test_debug_does_not_leak_credentials(authenticated_client: ApiClient) -> anyhow::Result<()> {
    let descriptor = authenticated_client
        .resource::<Task>()
        .get("t-1", RequestConfig::new())?;

    let client_debug = format!("{authenticated_client:?}");
    let descriptor_debug = format!("{descriptor:?}");

    assert!(!client_debug.contains("test-token"));
    assert!(!descriptor_debug.contains("test-token"));

    Ok(())
}

#[test]
fn test_client_from_parts() -> anyhow::Result<()> {
    init_tracing();
    let client = ApiClient::builder()
        .with_scheme(Scheme::HTTPS)
        .with_host("api.x")
        .with_base_path("/v1")?
        .build()?;

    let descriptor = client.resource::<Task>().get("42", RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Task/42");

    Ok(())
}

#[rstest]
#[case::without_slash("https://api.x/v1")]
#[case::with_slash("https://api.x/v1/")]
fn test_base_url_trailing_slash(#[case] base_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::builder().with_base_url(base_url)?.build()?;

    let descriptor = client.resource::<Task>().get("42", RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Task/42");

    Ok(())
}

#[rstest]
fn test_custom_endpoint(client: ApiClient) -> anyhow::Result<()> {
    const SEARCH_TASKS: Endpoint<Vec<Task>> =
        Endpoint::json("searchTasks", Method::GET, "/Task/search");

    let descriptor = client
        .request(SEARCH_TASKS)
        .with_query(CallQuery::new().add_param("q", "docs").add_param("owner", None::<String>))
        .with_header(ACCEPT, HeaderValue::from_static("application/json"))
        .build(RequestConfig::new().with_transform(|tasks: Vec<Task>, _: &str| tasks.len()))?;

    assert_eq!(SEARCH_TASKS.format, ResponseFormat::Json);
    assert_eq!(descriptor.full_url()?.as_str(), "https://api.x/v1/Task/search?q=docs");
    assert_eq!(descriptor.options.headers[ACCEPT], "application/json");
    let count = descriptor
        .apply_transform(json!([{ "title": "a" }, { "title": "b" }]), "")
        .transpose()?;
    assert_eq!(count, Some(2));

    Ok(())
}

#[test]
fn test_client_and_descriptors_are_thread_safe() {
    fn assert_clone<T: Clone>() {}
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_clone::<ApiClient>();
    assert_send::<ApiClient>();
    assert_sync::<ApiClient>();
    assert_send::<RequestDescriptor<()>>();
    assert_send::<RequestDescriptor<String>>();
    assert_send::<RequestConfig<Task, ()>>();
}

#[rstest]
fn test_descriptor_built_on_another_thread(client: ApiClient) -> anyhow::Result<()> {
    let worker = client.clone();
    let descriptor = std::thread::spawn(move || {
        let config = RequestConfig::new().with_transform(|task: Task, _: &str| task.title);
        worker.resource::<Task>().get("t-1", config)
    })
    .join()
    .map_err(|_| anyhow::anyhow!("worker thread panicked"))??;

    let title = descriptor
        .apply_transform(json!({ "title": "from a thread" }), "")
        .transpose()?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Task/t-1");
    assert_eq!(title.as_deref(), Some("from a thread"));

    Ok(())
}

#[test]
fn test_resource_table_is_exhaustive() {
    let mut names = RESOURCE_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();

    assert_eq!(names.len(), RESOURCE_NAMES.len());
    for expected in ["AclEntry", "Address", "Build", "Campaign", "Task", "WorkflowExecution"] {
        assert!(names.contains(&expected), "{expected} is declared");
    }
}
