//! Synthetic `X-RateLimit-*` response headers.

use std::convert::Infallible;

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};
use gwmock_core::RateLimitSnapshot;

/// `X-RateLimit-Limit`
pub const LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
/// `X-RateLimit-Remaining`
pub const REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
/// `X-RateLimit-Reset` (epoch seconds)
pub const RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Response part that writes the three rate-limit headers.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitHeaders(pub RateLimitSnapshot);

impl IntoResponseParts for RateLimitHeaders {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let headers = res.headers_mut();
        headers.insert(LIMIT, HeaderValue::from(self.0.limit));
        headers.insert(REMAINING, HeaderValue::from(self.0.remaining));
        headers.insert(RESET, HeaderValue::from(self.0.reset));
        Ok(res)
    }
}
