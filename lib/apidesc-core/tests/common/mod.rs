use apidesc_core::{ApiClient, Authentication};
use rstest::fixture;
use tracing::info;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

pub const BASE_URL: &str = "https://api.x/v1";

#[fixture]
pub fn client() -> ApiClient {
    init_tracing();
    match ApiClient::builder().with_base_url(BASE_URL).and_then(|it| it.build()) {
        Ok(client) => client,
        Err(error) => panic!("fail to build client: {error:?}"),
    }
}

#[fixture]
pub fn authenticated_client() -> ApiClient {
    init_tracing();
    let result = ApiClient::builder()
        .with_base_url(BASE_URL)
        .map(|builder| {
            builder
                .with_authentication(Authentication::Bearer("test-token".into()))
                .with_header("X-Tenant", "acme")
        })
        .and_then(|builder| builder.build());
    match result {
        Ok(client) => client,
        Err(error) => panic!("fail to build client: {error:?}"),
    }
}
