#![allow(missing_docs)]

use apidesc_core::models::{
    AclEntry, Address, Build, BuildStatus, Campaign, Invoice, InvoiceStatus, Task, Webhook,
};
use apidesc_core::{
    ApiClient, ApiClientError, EntityRollback, EntityUpdater, Pagination, ParamValue,
    RequestConfig, Resource,
};
use http::Method;
use http::header::CONTENT_TYPE;
use rstest::rstest;
use serde_json::json;

mod common;
pub use self::common::*;

fn task(title: &str) -> Task {
    Task {
        id: None,
        title: title.to_string(),
        assignee_id: None,
        done: false,
    }
}

#[rstest]
fn test_get_builds_item_url(client: ApiClient) -> anyhow::Result<()> {
    let descriptor = client.resource::<Task>().get("42", RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Task/42");
    assert_eq!(descriptor.options.method, Method::GET);
    assert_eq!(descriptor.operation, "getTask");
    assert!(descriptor.body.is_none());
    assert!(descriptor.query.is_empty());
    assert!(descriptor.transform.is_none());

    Ok(())
}

#[rstest]
#[case::absent(ParamValue::missing())]
#[case::none(ParamValue::from(None::<String>))]
#[case::null(ParamValue::from(serde_json::Value::Null))]
#[case::empty(ParamValue::from(""))]
#[case::dot(ParamValue::from("."))]
#[case::dot_dot(ParamValue::from(".."))]
fn test_get_rejects_missing_id(client: ApiClient, #[case] id: ParamValue) {
    let result = client.resource::<AclEntry>().get(id, RequestConfig::new());

    let Err(ApiClientError::MissingParameter {
        parameter,
        operation,
    }) = result
    else {
        panic!("expected a missing parameter error");
    };
    assert_eq!(parameter, "id");
    assert_eq!(operation, "getAclEntry");
}

#[rstest]
#[case::number(ParamValue::from(7), "https://api.x/v1/Build/7")]
#[case::space(ParamValue::from("a b"), "https://api.x/v1/Build/a%20b")]
#[case::slash(ParamValue::from("a/b"), "https://api.x/v1/Build/a%2Fb")]
#[case::query_chars(ParamValue::from("a?b#c"), "https://api.x/v1/Build/a%3Fb%23c")]
#[case::unicode(ParamValue::from("é"), "https://api.x/v1/Build/%C3%A9")]
#[case::dots(ParamValue::from("..."), "https://api.x/v1/Build/...")]
#[case::encoded_dots(ParamValue::from("%2e%2e"), "https://api.x/v1/Build/%252e%252e")]
fn test_get_percent_encodes_id(client: ApiClient, #[case] id: ParamValue, #[case] url: &str) {
    let descriptor = client
        .resource::<Build>()
        .get(id, RequestConfig::new())
        .expect("valid descriptor");

    assert_eq!(descriptor.url.as_str(), url);
}

#[rstest]
fn test_get_transform_decodes_model(client: ApiClient) -> anyhow::Result<()> {
    let config = RequestConfig::new().with_transform(|build: Build, text: &str| {
        (build.status, text.len())
    });

    let descriptor = client.resource::<Build>().get("b-1", config)?;
    let body = json!({
        "id": "b-1",
        "projectId": "p-1",
        "revision": "abc123",
        "status": "succeeded",
    });
    let decoded = descriptor.apply_transform(body, "raw text").transpose()?;

    assert_eq!(decoded, Some((BuildStatus::Succeeded, 8)));

    Ok(())
}

#[rstest]
fn test_get_transform_reports_decoding_errors(client: ApiClient) -> anyhow::Result<()> {
    let config = RequestConfig::new().with_transform(|build: Build, _: &str| build);

    let descriptor = client.resource::<Build>().get("b-1", config)?;
    let body = json!({
        "projectId": "p-1",
        "revision": "abc123",
        "status": "exploded",
    });
    let error = descriptor
        .apply_transform(body, "")
        .expect("transform present")
        .expect_err("unknown status");

    let ApiClientError::JsonError {
        operation, path, ..
    } = error
    else {
        panic!("expected a JSON error, got {error:?}");
    };
    assert_eq!(operation, "getBuild");
    assert_eq!(path, "status");

    Ok(())
}

#[rstest]
fn test_list_without_pagination(client: ApiClient) -> anyhow::Result<()> {
    let descriptor = client
        .resource::<Campaign>()
        .list(Pagination::new(), RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Campaign");
    assert_eq!(descriptor.options.method, Method::GET);
    assert_eq!(descriptor.operation, "getCampaignList");
    assert!(descriptor.query.is_empty());
    assert_eq!(descriptor.full_url()?, descriptor.url);

    Ok(())
}

#[rstest]
fn test_list_with_pagination(client: ApiClient) -> anyhow::Result<()> {
    let pagination = Pagination::new()
        .with_page(0)
        .with_size(25)
        .with_sort("name,asc")
        .with_sort("id,desc");

    let descriptor = client
        .resource::<Campaign>()
        .list(pagination, RequestConfig::new())?;

    insta::assert_snapshot!(
        descriptor.full_url()?,
        @"https://api.x/v1/Campaign?page=0&size=25&sort=name%2Casc&sort=id%2Cdesc"
    );

    Ok(())
}

#[rstest]
fn test_list_omits_undefined_keys(client: ApiClient) -> anyhow::Result<()> {
    let descriptor = client
        .resource::<Campaign>()
        .list(Pagination::new().with_size(10), RequestConfig::new())?;

    assert!(!descriptor.query.contains_key("page"));
    assert!(!descriptor.query.contains_key("sort"));
    assert_eq!(descriptor.query.to_query_string()?, "size=10");

    Ok(())
}

#[rstest]
fn test_list_ignores_pagination_for_unpaginated_resource(
    client: ApiClient,
) -> anyhow::Result<()> {
    assert!(!Address::PAGINATED);

    let descriptor = client
        .resource::<Address>()
        .list(Pagination::new().with_page(3), RequestConfig::new())?;

    assert!(descriptor.query.is_empty());
    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Address");

    Ok(())
}

#[rstest]
fn test_list_transform_decodes_each_element(client: ApiClient) -> anyhow::Result<()> {
    let config = RequestConfig::new().with_transform(|tasks: Vec<Task>, _: &str| {
        tasks.into_iter().map(|task| task.title).collect::<Vec<_>>()
    });

    let descriptor = client.resource::<Task>().list(Pagination::new(), config)?;
    let body = json!([
        { "id": "1", "title": "first" },
        { "id": "2", "title": "second", "done": true },
    ]);
    let titles = descriptor.apply_transform(body, "").transpose()?;

    assert_eq!(
        titles,
        Some(vec!["first".to_string(), "second".to_string()])
    );

    Ok(())
}

#[rstest]
fn test_create_serializes_body(client: ApiClient) -> anyhow::Result<()> {
    let invoice = Invoice {
        id: None,
        customer_id: "c-1".to_string(),
        status: InvoiceStatus::Draft,
        currency: "EUR".to_string(),
        total: 12_500,
        due_date: None,
    };

    let descriptor = client
        .resource::<Invoice>()
        .create(Some(&invoice), RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Invoice");
    assert_eq!(descriptor.options.method, Method::POST);
    assert_eq!(descriptor.options.headers[CONTENT_TYPE], "application/json");
    assert_eq!(
        descriptor.json_body(),
        Some(&json!({
            "customerId": "c-1",
            "status": "draft",
            "currency": "EUR",
            "total": 12_500,
        }))
    );

    Ok(())
}

#[rstest]
fn test_create_requires_body(client: ApiClient) {
    let result = client
        .resource::<AclEntry>()
        .create(None, RequestConfig::new());

    insta::assert_snapshot!(
        result.expect_err("missing body"),
        @"Required parameter 'aclEntry' was null or undefined when calling createAclEntry"
    );
}

#[rstest]
fn test_update_builds_put(client: ApiClient) -> anyhow::Result<()> {
    let descriptor = client
        .resource::<Task>()
        .update("t-1", Some(&task("Ship it")), RequestConfig::new())?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Task/t-1");
    assert_eq!(descriptor.options.method, Method::PUT);
    assert_eq!(descriptor.operation, "updateTask");
    assert_eq!(
        descriptor.json_body(),
        Some(&json!({ "title": "Ship it", "done": false }))
    );

    Ok(())
}

#[rstest]
#[case::missing_id(None, Some(task("x")), "id")]
#[case::missing_body(Some("t-1"), None, "task")]
#[case::missing_both(None, None, "id")]
fn test_update_requires_id_and_body(
    client: ApiClient,
    #[case] id: Option<&str>,
    #[case] body: Option<Task>,
    #[case] expected: &str,
) {
    let result = client
        .resource::<Task>()
        .update(id, body.as_ref(), RequestConfig::new());

    let Err(ApiClientError::MissingParameter {
        parameter,
        operation,
    }) = result
    else {
        panic!("expected a missing parameter error");
    };
    assert_eq!(parameter, expected);
    assert_eq!(operation, "updateTask");
}

#[rstest]
fn test_delete_never_deserializes(client: ApiClient) -> anyhow::Result<()> {
    let config = RequestConfig::new().with_transform(|body: serde_json::Value, text: &str| {
        (body, text.to_string())
    });

    let descriptor = client.resource::<Webhook>().delete("wh-1", config)?;
    let decoded = descriptor
        .apply_transform(json!("not a webhook"), "\"not a webhook\"")
        .transpose()?;

    assert_eq!(descriptor.url.as_str(), "https://api.x/v1/Webhook/wh-1");
    assert_eq!(descriptor.options.method, Method::DELETE);
    assert!(descriptor.body.is_none());
    assert!(!descriptor.options.headers.contains_key(CONTENT_TYPE));
    assert_eq!(
        decoded,
        Some((json!("not a webhook"), "\"not a webhook\"".to_string()))
    );

    Ok(())
}

#[rstest]
#[case::dot(".")]
#[case::dot_dot("..")]
fn test_delete_rejects_dot_segment_id(client: ApiClient, #[case] id: &str) {
    let result = client.resource::<Task>().delete(id, RequestConfig::new());

    insta::allow_duplicates! {
        insta::assert_snapshot!(
            result.expect_err("dot segment id").to_string(),
            @"Required parameter 'id' was null or undefined when calling deleteTask"
        );
    }
}

#[rstest]
fn test_config_is_passed_through(client: ApiClient) -> anyhow::Result<()> {
    let config = RequestConfig::new()
        .with_meta("source", json!("dashboard"))
        .with_query_key("tasks/t-1")
        .with_force(true)
        .with_update(
            "tasks",
            EntityUpdater::new(|_previous, next| next.clone()),
        )
        .with_optimistic_update(
            "tasks",
            EntityUpdater::new(|previous, _next| previous.cloned().unwrap_or_default()),
        )
        .with_rollback(
            "tasks",
            EntityRollback::new(|initial, _current| initial.cloned()),
        );

    let descriptor = client
        .resource::<Task>()
        .update("t-1", Some(&task("Ship it")), config)?;

    assert_eq!(descriptor.meta.get("source"), Some(&json!("dashboard")));
    assert_eq!(descriptor.query_key.as_deref(), Some("tasks/t-1"));
    assert!(descriptor.force);

    let next = json!({ "title": "new" });
    let updated = descriptor
        .update
        .get("tasks")
        .map(|updater| updater.apply(None, &next));
    assert_eq!(updated, Some(next.clone()));

    let optimistic = descriptor
        .optimistic_update
        .get("tasks")
        .map(|updater| updater.apply(None, &next));
    assert_eq!(optimistic, Some(serde_json::Value::Null));

    let initial = json!({ "title": "old" });
    let restored = descriptor
        .rollback
        .get("tasks")
        .and_then(|rollback| rollback.apply(Some(&initial), Some(&next)));
    assert_eq!(restored, Some(initial));

    Ok(())
}

#[rstest]
fn test_descriptors_are_independent(client: ApiClient) -> anyhow::Result<()> {
    let api = client.resource::<Task>();

    let first = api.get("1", RequestConfig::new())?;
    let second = api.get("2", RequestConfig::new())?;

    assert_eq!(first.url.as_str(), "https://api.x/v1/Task/1");
    assert_eq!(second.url.as_str(), "https://api.x/v1/Task/2");

    Ok(())
}
