//! Liveness probe polled by the orchestrator and load balancer.
//! Used by: server.

use crate::config::HEALTH_BODY;

pub async fn health() -> &'static str {
    HEALTH_BODY
}
