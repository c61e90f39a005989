//! Common test infrastructure
//!
//! Spawns a real server on a random port and wraps reqwest with one method
//! per route. Tests should only import from this module.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{TestServer, TestClient};
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_get_page() {
//!     let server = TestServer::spawn().await;
//!     let client = TestClient::new(server.base_url.clone());
//!
//!     let response = client.get_page("count=4").await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod client;
mod constants;
mod server;

pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;

/// Counts rendered chord cells in an HTML body.
#[allow(dead_code)]
pub fn count_chords(html: &str) -> usize {
    html.matches("class=\"chord\"").count()
}

/// Extracts the root of every rendered chord cell.
#[allow(dead_code)]
pub fn chord_roots(html: &str) -> Vec<String> {
    html.split("<span class=\"root\">")
        .skip(1)
        .filter_map(|rest| rest.split("</span>").next())
        .map(str::to_string)
        .collect()
}
