// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const PER_SECOND: u64 = 2;
const BURST: u32 = 10;

/// Per-client limiter for the `/auth/*` endpoints. Shared across routers so every router
/// built in one process draws from the same buckets.
pub fn auth_rate_limit_layer() -> Option<AuthRateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<AuthRateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(PER_SECOND);
            builder.burst_size(BURST);
            let config = builder.key_extractor(SmartIpKeyExtractor).finish();
            if config.is_none() {
                tracing::warn!("invalid rate limit configuration; auth endpoints are unthrottled");
            }
            config.map(GovernorLayer::new)
        })
        .clone()
}
