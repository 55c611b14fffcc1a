//! Transaction handle contract and insertion context.

use ironbft_types::Sender;
use std::sync::Arc;

/// Contract a transaction must satisfy to enter the pool.
///
/// The pool reads only the sender identity and the nonce; everything else
/// about the transaction is opaque and is handed back unchanged on selection.
pub trait PoolTransaction {
    /// Sender identity the transaction is attributed to.
    fn sender(&self) -> &Sender;

    /// Per-sender sequence number supplied by the caller.
    fn nonce(&self) -> u64;
}

/// Caller-supplied context consumed by `insert`.
///
/// The pool reads the priority from the context rather than from the
/// transaction, so a host can clamp or override priorities without touching
/// the handle itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxContext {
    priority: i64,
}

impl TxContext {
    /// Context carrying priority 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of the context carrying the given priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Priority the pool will attach to the next insert.
    pub fn priority(&self) -> i64 {
        self.priority
    }
}

/// A transaction adopted by the pool, together with the priority attached at
/// insertion and the pool-assigned insertion sequence number.
///
/// Entries compare equal by sequence number; the wrapped transaction is never
/// inspected beyond the [`PoolTransaction`] contract.
#[derive(Debug)]
pub struct TxEntry<T> {
    tx: Arc<T>,
    priority: i64,
    seq: u64,
}

impl<T> TxEntry<T> {
    pub(crate) fn new(tx: Arc<T>, priority: i64, seq: u64) -> Self {
        Self { tx, priority, seq }
    }

    /// The wrapped transaction.
    pub fn transaction(&self) -> &T {
        self.tx.as_ref()
    }

    /// Priority attached at insertion.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Monotonic insertion sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn share(&self) -> Arc<T> {
        Arc::clone(&self.tx)
    }
}

impl<T> Clone for TxEntry<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
            priority: self.priority,
            seq: self.seq,
        }
    }
}

impl<T> PartialEq for TxEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for TxEntry<T> {}
