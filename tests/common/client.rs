//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per route. Redirects are never followed so
//! tests can assert on the fallback of fragment routes.

use super::constants::*;
use reqwest::{redirect::Policy, Response};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    fn url(&self, path: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        }
    }

    // ========================================================================
    // Page
    // ========================================================================

    /// GET / with the given raw query
    pub async fn get_page(&self, query: &str) -> Response {
        self.client
            .get(self.url("/", query))
            .send()
            .await
            .expect("Page request failed")
    }

    // ========================================================================
    // Fragments
    // ========================================================================

    /// GET a fragment route the way htmx does, with `HX-Request: true`
    pub async fn get_fragment(&self, path: &str, query: &str) -> Response {
        self.client
            .get(self.url(path, query))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("Fragment request failed")
    }

    /// GET a fragment route as a plain navigation
    pub async fn get_fragment_plain(&self, path: &str, query: &str) -> Response {
        self.client
            .get(self.url(path, query))
            .send()
            .await
            .expect("Fragment request failed")
    }

    // ========================================================================
    // Static files
    // ========================================================================

    pub async fn get_static(&self, file: &str) -> Response {
        self.client
            .get(format!("{}/static/{}", self.base_url, file))
            .send()
            .await
            .expect("Static request failed")
    }
}
