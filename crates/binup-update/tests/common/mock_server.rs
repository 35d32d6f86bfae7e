//! Mock server helpers for listing and download testing

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::constants::*;

/// URL of the listing page on the mock server
pub fn listing_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), LISTING_PATH)
}

/// Artifact base URL on the mock server
pub fn artifact_base(server: &MockServer) -> String {
    format!("{}/download", server.uri())
}

/// Serve `html` as the repository listing
pub async fn mock_listing(server: &MockServer, html: String) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Make the repository listing fail with `status`
pub async fn mock_listing_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve an artifact under `/download/{filename}`
pub async fn mock_artifact(server: &MockServer, filename: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/download/{}", filename)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}

/// Make an artifact download fail with `status`
pub async fn mock_artifact_status(server: &MockServer, filename: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/download/{}", filename)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
