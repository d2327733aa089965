// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

const SEARCH_REQUESTS_PER_SECOND: u64 = 5;
const SEARCH_BURST: u32 = 10;

pub type SearchRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the search endpoint, keyed on the forwarded or peer IP.
/// The governor state is shared process-wide so every router built in this
/// process counts against the same buckets.
pub fn search_rate_limit_layer() -> SearchRateLimitLayer {
    static RATE_LIMITER: OnceLock<SearchRateLimitLayer> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(SEARCH_REQUESTS_PER_SECOND);
            builder.burst_size(SEARCH_BURST);
            let config = builder
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .expect("non-zero rate limit configuration");

            GovernorLayer::new(config)
        })
        .clone()
}
