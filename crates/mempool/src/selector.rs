//! Pull-based selection iterator.

use crate::mempool::{PriorityMempool, TxFilter};
use crate::priority_index::PriorityKey;
use crate::transaction::PoolTransaction;
use ironbft_metrics::mempool::MEMPOOL_TRANSACTIONS_SELECTED;
use ironbft_types::Sender;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Lazy iterator emitting transactions in the pool's total order.
///
/// The selector walks the priority index from the highest entry downward,
/// keeping a per-sender cursor at the lowest nonce not yet emitted. An index
/// entry is a candidate only when its nonce matches its sender's cursor;
/// entries above their cursor are parked behind a predecessor and are picked
/// up later, once the predecessor has been emitted.
///
/// After emitting from a sender, the walk stays on that sender's nonce chain
/// as long as the chain's next transaction outranks the next index entry
/// strictly. On a priority tie the walk falls back to the index, whose key
/// order (sender bytes ascending, then nonce) makes tie-breaking
/// deterministic.
///
/// The iterator is finite and non-restartable. It borrows the pool, so the
/// pool cannot be mutated while a selection is in progress; dropping the
/// iterator releases the borrow and cancels the remainder of the walk.
pub struct Selector<'a, T> {
    pool: &'a PriorityMempool<T>,
    filter: Option<TxFilter<'a, T>>,
    /// Scan position in the priority index; `None` until the walk starts.
    position: Option<PriorityKey>,
    /// Per-sender cursor: `Some(nonce)` is the next nonce to emit, `None`
    /// means the sender is exhausted or retired. Absent senders have not
    /// been touched yet and their cursor is the front of their queue.
    cursors: HashMap<Sender, Option<u64>>,
    /// Sender and nonce of the transaction emitted last.
    current: Option<(Sender, u64)>,
}

impl<'a, T: PoolTransaction> Selector<'a, T> {
    pub(crate) fn new(pool: &'a PriorityMempool<T>, filter: Option<TxFilter<'a, T>>) -> Self {
        debug!(
            transactions = pool.count(),
            senders = pool.sender_count(),
            filtered = filter.is_some(),
            "selection started"
        );
        Self {
            pool,
            filter,
            position: None,
            cursors: HashMap::new(),
            current: None,
        }
    }

    fn cursor(&self, sender: &Sender) -> Option<u64> {
        match self.cursors.get(sender) {
            Some(cursor) => *cursor,
            None => self
                .pool
                .sender_queues()
                .get(sender)
                .and_then(|queue| queue.peek_front().map(|(nonce, _)| nonce)),
        }
    }

    /// Priority of the next index entry after the scan position, emitted or
    /// not. Chain continuation must clear this bar strictly.
    fn next_scan_priority(&self) -> Option<i64> {
        let position = self.position.as_ref()?;
        self.pool
            .priority_index()
            .first_after(position)
            .map(|key| key.priority)
    }

    /// Next nonce of the last emitted sender's chain, when it strictly
    /// outranks everything left in the index scan.
    fn chain_candidate(&self) -> Option<(Sender, u64)> {
        let (sender, nonce) = self.current.as_ref()?;
        let queue = self.pool.sender_queues().get(sender)?;
        let (next_nonce, entry) = queue.next_after(*nonce)?;
        match self.next_scan_priority() {
            Some(bar) if entry.priority() <= bar => None,
            _ => Some((sender.clone(), next_nonce)),
        }
    }

    /// Advance the index scan to the next candidate entry: the first entry
    /// whose nonce equals its sender's cursor.
    fn advance_scan(&mut self) -> Option<(Sender, u64)> {
        loop {
            let key = match &self.position {
                Some(position) => self.pool.priority_index().first_after(position).cloned(),
                None => self.pool.priority_index().first().cloned(),
            }?;
            self.position = Some(key.clone());
            if self.cursor(&key.sender) == Some(key.nonce) {
                return Some((key.sender, key.nonce));
            }
        }
    }
}

impl<'a, T: PoolTransaction> Iterator for Selector<'a, T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (sender, nonce) = match self.chain_candidate() {
                Some(candidate) => candidate,
                None => self.advance_scan()?,
            };

            let queue = self.pool.sender_queues().get(&sender)?;
            let entry = queue.get(nonce)?;

            if let Some(filter) = self.filter {
                if !filter(entry.transaction()) {
                    // Later nonces of this sender depend on the rejected
                    // transaction; the sender is out of the walk.
                    self.cursors.insert(sender, None);
                    self.current = None;
                    continue;
                }
            }

            let next_nonce = queue.next_after(nonce).map(|(n, _)| n);
            self.cursors.insert(sender.clone(), next_nonce);
            self.current = Some((sender, nonce));

            if let Some(hook) = self.pool.on_read() {
                hook(entry.transaction());
            }
            MEMPOOL_TRANSACTIONS_SELECTED.inc();
            return Some(entry.share());
        }
    }
}
