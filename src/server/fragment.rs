//! Detection of partial-page requests issued by htmx.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;

pub const HX_REQUEST_HEADER: &str = "HX-Request";

/// Whether the request asked for a page fragment (`HX-Request: true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl HxRequest {
    /// Sends plain navigations to the full page with the same query, so a
    /// fragment URL opened directly still shows something complete.
    pub fn fallback(&self, raw_query: Option<&str>) -> Option<Response> {
        if self.0 {
            return None;
        }
        let location = format!("/?{}", raw_query.unwrap_or_default());
        debug!("Not a fragment request, redirecting to {}", location);
        Some((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for HxRequest {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_fragment = parts
            .headers
            .get(HX_REQUEST_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value == "true");
        Ok(HxRequest(is_fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_request_has_no_fallback() {
        assert!(HxRequest(true).fallback(Some("count=4")).is_none());
    }

    #[test]
    fn plain_request_is_redirected_with_query() {
        let response = HxRequest(false).fallback(Some("count=4&aug=on")).unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?count=4&aug=on"
        );
    }

    #[test]
    fn plain_request_without_query_goes_home() {
        let response = HxRequest(false).fallback(None).unwrap();
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/?");
    }
}
