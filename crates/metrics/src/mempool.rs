//! Mempool metrics.

use once_cell::sync::Lazy;
use prometheus::{Counter, CounterVec, Gauge, Registry};

// Pool size
pub static MEMPOOL_TRANSACTIONS: Lazy<Gauge> = Lazy::new(|| {
    Gauge::new(
        "ironbft_mempool_transactions",
        "Transactions currently queued",
    )
    .expect("metric can be created")
});

pub static MEMPOOL_SENDERS: Lazy<Gauge> = Lazy::new(|| {
    Gauge::new(
        "ironbft_mempool_senders",
        "Distinct senders currently present",
    )
    .expect("metric can be created")
});

// Throughput
pub static MEMPOOL_TRANSACTIONS_INSERTED: Lazy<Counter> = Lazy::new(|| {
    Counter::new(
        "ironbft_mempool_transactions_inserted_total",
        "Total transactions inserted",
    )
    .expect("metric can be created")
});

pub static MEMPOOL_TRANSACTIONS_REMOVED: Lazy<Counter> = Lazy::new(|| {
    Counter::new(
        "ironbft_mempool_transactions_removed_total",
        "Total transactions removed",
    )
    .expect("metric can be created")
});

pub static MEMPOOL_TRANSACTIONS_SELECTED: Lazy<Counter> = Lazy::new(|| {
    Counter::new(
        "ironbft_mempool_transactions_selected_total",
        "Total transactions emitted by selections",
    )
    .expect("metric can be created")
});

pub static MEMPOOL_OPERATIONS_REJECTED: Lazy<CounterVec> = Lazy::new(|| {
    CounterVec::new(
        prometheus::opts!(
            "ironbft_mempool_operations_rejected_total",
            "Total rejected mempool operations"
        ),
        &["reason"], // "duplicate_nonce", "not_found"
    )
    .expect("metric can be created")
});

/// Register all mempool metrics with the given registry.
pub fn register_metrics(registry: &Registry) {
    registry
        .register(Box::new(MEMPOOL_TRANSACTIONS.clone()))
        .ok();
    registry.register(Box::new(MEMPOOL_SENDERS.clone())).ok();
    registry
        .register(Box::new(MEMPOOL_TRANSACTIONS_INSERTED.clone()))
        .ok();
    registry
        .register(Box::new(MEMPOOL_TRANSACTIONS_REMOVED.clone()))
        .ok();
    registry
        .register(Box::new(MEMPOOL_TRANSACTIONS_SELECTED.clone()))
        .ok();
    registry
        .register(Box::new(MEMPOOL_OPERATIONS_REJECTED.clone()))
        .ok();
}
