//! Per-sender nonce-ordered queue.

use crate::error::MempoolError;
use crate::transaction::TxEntry;
use ironbft_types::Sender;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound;

/// All queued transactions of a single sender, keyed by nonce.
///
/// Nonces are unique within a queue and iterate ascending. The queue caches
/// the sender's effective priority: the maximum priority among its queued
/// transactions.
#[derive(Debug)]
pub struct SenderQueue<T> {
    sender: Sender,
    by_nonce: BTreeMap<u64, TxEntry<T>>,
    effective_priority: Option<i64>,
}

impl<T> SenderQueue<T> {
    pub(crate) fn new(sender: Sender) -> Self {
        Self {
            sender,
            by_nonce: BTreeMap::new(),
            effective_priority: None,
        }
    }

    /// The sender this queue belongs to.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Place an entry at its nonce.
    ///
    /// Fails with [`MempoolError::DuplicateNonce`] if the nonce is already
    /// occupied; the queue is unchanged on failure.
    pub(crate) fn insert(&mut self, nonce: u64, entry: TxEntry<T>) -> Result<(), MempoolError> {
        match self.by_nonce.entry(nonce) {
            Entry::Occupied(_) => Err(MempoolError::DuplicateNonce {
                sender: self.sender.clone(),
                nonce,
            }),
            Entry::Vacant(slot) => {
                let priority = entry.priority();
                self.effective_priority = Some(match self.effective_priority {
                    Some(current) => current.max(priority),
                    None => priority,
                });
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Remove and return the entry at `nonce`, recomputing the effective
    /// priority from the remaining entries.
    pub(crate) fn remove(&mut self, nonce: u64) -> Option<TxEntry<T>> {
        let removed = self.by_nonce.remove(&nonce)?;
        self.effective_priority = self.by_nonce.values().map(TxEntry::priority).max();
        Some(removed)
    }

    /// The entry with the smallest nonce, if any.
    pub fn peek_front(&self) -> Option<(u64, &TxEntry<T>)> {
        self.by_nonce.iter().next().map(|(n, e)| (*n, e))
    }

    /// The entry at an exact nonce.
    pub fn get(&self, nonce: u64) -> Option<&TxEntry<T>> {
        self.by_nonce.get(&nonce)
    }

    /// The queued entry with the smallest nonce strictly greater than
    /// `nonce`.
    pub fn next_after(&self, nonce: u64) -> Option<(u64, &TxEntry<T>)> {
        self.by_nonce
            .range((Bound::Excluded(nonce), Bound::Unbounded))
            .next()
            .map(|(n, e)| (*n, e))
    }

    /// Maximum priority among queued entries, or `None` when empty.
    pub fn effective_priority(&self) -> Option<i64> {
        self.effective_priority
    }

    /// True when no entries are queued.
    pub fn is_empty(&self) -> bool {
        self.by_nonce.is_empty()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.by_nonce.len()
    }
}
