//! Endpoints beside plain CRUD, exposed as methods of [`ApiClient`](super::ApiClient).

mod dead_letter;
mod funnel;
mod run;
mod swarm;
mod workflow_execution;

#[cfg(test)]
fn test_client() -> super::ApiClient {
    super::ApiClient::builder()
        .with_base_url("https://api.example.com/v1")
        .and_then(super::ApiClientBuilder::build)
        .expect("valid client")
}
