//! Priority-nonce mempool.
//!
//! Stores already-validated transactions and produces, on demand, a total
//! order that honors the global priority preference without ever emitting a
//! sender's transactions out of nonce order.

use crate::config::{OnRead, PoolOptions};
use crate::error::MempoolError;
use crate::priority_index::{PriorityIndex, PriorityKey};
use crate::selector::Selector;
use crate::sender_queue::SenderQueue;
use crate::transaction::{PoolTransaction, TxContext, TxEntry};
use ironbft_metrics::mempool::{
    MEMPOOL_OPERATIONS_REJECTED, MEMPOOL_SENDERS, MEMPOOL_TRANSACTIONS,
    MEMPOOL_TRANSACTIONS_INSERTED, MEMPOOL_TRANSACTIONS_REMOVED,
};
use ironbft_types::Sender;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Predicate applied to candidate transactions during a selection.
pub type TxFilter<'a, T> = &'a dyn Fn(&T) -> bool;

/// Mempool ordering transactions by (priority, sender, nonce).
///
/// Every transaction lives in exactly two indices: its sender's nonce-ordered
/// queue and the global priority index. `insert`, `remove`, and `select` keep
/// the two in sync; all operations run on the caller's thread, and callers
/// serialize access (a selection in progress borrows the pool, so the borrow
/// checker enforces the single-writer discipline).
pub struct PriorityMempool<T> {
    senders: HashMap<Sender, SenderQueue<T>>,
    priority_index: PriorityIndex,
    seq: u64,
    on_read: Option<OnRead<T>>,
}

impl<T: PoolTransaction> PriorityMempool<T> {
    /// Empty pool with default options.
    pub fn new() -> Self {
        Self::with_options(PoolOptions::default())
    }

    /// Empty pool with the given options.
    pub fn with_options(options: PoolOptions<T>) -> Self {
        Self {
            senders: HashMap::new(),
            priority_index: PriorityIndex::new(),
            seq: 0,
            on_read: options.on_read,
        }
    }

    /// Insert an already-validated transaction.
    ///
    /// The priority is read from `ctx`, not from the transaction. Each accepted
    /// transaction receives a fresh insertion sequence number.
    ///
    /// Fails with [`MempoolError::DuplicateNonce`] when the sender already has
    /// a queued transaction at the same nonce; the pool is unchanged on
    /// failure.
    pub fn insert(&mut self, ctx: &TxContext, tx: T) -> Result<(), MempoolError> {
        let sender = tx.sender().clone();
        let nonce = tx.nonce();
        let priority = ctx.priority();

        let seq = self.seq + 1;
        let entry = TxEntry::new(Arc::new(tx), priority, seq);

        let queue = self
            .senders
            .entry(sender.clone())
            .or_insert_with(|| SenderQueue::new(sender.clone()));
        if let Err(err) = queue.insert(nonce, entry) {
            MEMPOOL_OPERATIONS_REJECTED
                .with_label_values(&["duplicate_nonce"])
                .inc();
            return Err(err);
        }
        self.seq = seq;

        trace!(sender = %sender, nonce, priority, seq, "transaction inserted");
        self.priority_index.insert(PriorityKey {
            priority,
            sender,
            nonce,
        });

        MEMPOOL_TRANSACTIONS_INSERTED.inc();
        MEMPOOL_TRANSACTIONS.set(self.priority_index.len() as f64);
        MEMPOOL_SENDERS.set(self.senders.len() as f64);
        Ok(())
    }

    /// Remove a previously inserted (or emitted) transaction.
    ///
    /// Matching is by (sender, nonce). Fails with [`MempoolError::NotFound`]
    /// when no such transaction is queued.
    pub fn remove(&mut self, tx: &T) -> Result<(), MempoolError> {
        let sender = tx.sender();
        let nonce = tx.nonce();

        let entry = self
            .senders
            .get_mut(sender)
            .and_then(|queue| queue.remove(nonce));
        let Some(entry) = entry else {
            MEMPOOL_OPERATIONS_REJECTED
                .with_label_values(&["not_found"])
                .inc();
            return Err(MempoolError::NotFound {
                sender: sender.clone(),
                nonce,
            });
        };

        if self.senders.get(sender).is_some_and(SenderQueue::is_empty) {
            self.senders.remove(sender);
        }
        self.priority_index.remove(&PriorityKey {
            priority: entry.priority(),
            sender: sender.clone(),
            nonce,
        });

        trace!(sender = %sender, nonce, seq = entry.seq(), "transaction removed");
        MEMPOOL_TRANSACTIONS_REMOVED.inc();
        MEMPOOL_TRANSACTIONS.set(self.priority_index.len() as f64);
        MEMPOOL_SENDERS.set(self.senders.len() as f64);
        Ok(())
    }

    /// Start a selection over the current contents.
    ///
    /// Returns a finite, non-restartable iterator yielding transactions in
    /// the pool's total order. The iterator borrows the pool, so no mutation
    /// can interleave with an in-progress selection; dropping the iterator
    /// cancels the selection.
    ///
    /// A transaction rejected by `filter` is not emitted and retires its
    /// sender for the remainder of the selection: later nonces of that sender
    /// cannot be emitted without creating a gap.
    pub fn select<'a>(&'a self, filter: Option<TxFilter<'a, T>>) -> Selector<'a, T> {
        Selector::new(self, filter)
    }

    /// Number of queued transactions.
    pub fn count(&self) -> usize {
        self.priority_index.len()
    }

    /// True when no transactions are queued.
    pub fn is_empty(&self) -> bool {
        self.priority_index.is_empty()
    }

    /// True when the sender has a queued transaction at `nonce`.
    pub fn contains(&self, sender: &Sender, nonce: u64) -> bool {
        self.senders
            .get(sender)
            .is_some_and(|queue| queue.get(nonce).is_some())
    }

    /// Effective priority of a sender: the maximum priority among its queued
    /// transactions, or `None` when the sender is not present.
    pub fn sender_priority(&self, sender: &Sender) -> Option<i64> {
        self.senders
            .get(sender)
            .and_then(SenderQueue::effective_priority)
    }

    /// Number of distinct senders currently present.
    pub fn sender_count(&self) -> usize {
        self.senders.len()
    }

    pub(crate) fn sender_queues(&self) -> &HashMap<Sender, SenderQueue<T>> {
        &self.senders
    }

    pub(crate) fn priority_index(&self) -> &PriorityIndex {
        &self.priority_index
    }

    pub(crate) fn on_read(&self) -> Option<&OnRead<T>> {
        self.on_read.as_ref()
    }
}

impl<T: PoolTransaction> Default for PriorityMempool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PriorityMempool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityMempool")
            .field("transactions", &self.priority_index.len())
            .field("senders", &self.senders.len())
            .field("seq", &self.seq)
            .finish()
    }
}
