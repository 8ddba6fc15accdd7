//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Applies the standard rate limiter for authenticated resource endpoints.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Limits are applied per client IP. With `behind_proxy`, the IP is read
/// from `X-Forwarded-For` / `X-Real-IP` headers; enable only when the
/// service runs behind a trusted reverse proxy. Otherwise the socket peer
/// address is used.
pub fn apply(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let conf: Arc<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> =
            Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(SmartIpKeyExtractor)
                    .per_second(2)
                    .burst_size(100)
                    .finish()
                    .expect("valid governor configuration"),
            );
        router.layer(GovernorLayer::new(conf))
    } else {
        let conf: Arc<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> =
            Arc::new(
                GovernorConfigBuilder::default()
                    .per_second(2)
                    .burst_size(100)
                    .finish()
                    .expect("valid governor configuration"),
            );
        router.layer(GovernorLayer::new(conf))
    }
}

/// Applies a stricter rate limiter for credential endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Used for account creation and token issuance to slow down credential
/// stuffing and brute-force attempts.
pub fn apply_strict(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let conf: Arc<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> =
            Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(SmartIpKeyExtractor)
                    .per_second(1)
                    .burst_size(10)
                    .finish()
                    .expect("valid governor configuration"),
            );
        router.layer(GovernorLayer::new(conf))
    } else {
        let conf: Arc<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>> =
            Arc::new(
                GovernorConfigBuilder::default()
                    .per_second(1)
                    .burst_size(10)
                    .finish()
                    .expect("valid governor configuration"),
            );
        router.layer(GovernorLayer::new(conf))
    }
}
