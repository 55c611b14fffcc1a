//! IronBFT Prometheus metrics infrastructure.
//!
//! This crate provides centralized metric definitions for IronBFT components.
//! Metrics are organized by subsystem; exposing them over HTTP is the host
//! application's responsibility.

pub mod mempool;

use once_cell::sync::Lazy;
use prometheus::Registry;

/// Global Prometheus registry for all IronBFT metrics.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();

    mempool::register_metrics(&registry);

    registry
});

/// Initialize all metrics. Call once at startup.
pub fn init() {
    Lazy::force(&REGISTRY);
    tracing::info!("IronBFT metrics initialized");
}
