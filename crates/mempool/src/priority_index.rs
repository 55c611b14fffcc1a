//! Global priority-ordered index.

use ironbft_types::Sender;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Bound;

/// Ordering key for the global index.
///
/// Keys sort highest priority first, then sender bytes ascending, then nonce
/// ascending. The sender/nonce components make the walk order deterministic
/// when priorities tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityKey {
    /// Priority attached at insertion.
    pub priority: i64,
    /// Sender identity.
    pub sender: Sender,
    /// Per-sender nonce.
    pub nonce: u64,
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher priority comes first
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => match self.sender.cmp(&other.sender) {
                Ordering::Equal => self.nonce.cmp(&other.nonce),
                ord => ord,
            },
            ord => ord,
        }
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered set of every queued transaction's key, walked front-to-back
/// during selection.
#[derive(Debug, Default)]
pub struct PriorityIndex {
    entries: BTreeSet<PriorityKey>,
}

impl PriorityIndex {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: PriorityKey) -> bool {
        self.entries.insert(key)
    }

    pub(crate) fn remove(&mut self, key: &PriorityKey) -> bool {
        self.entries.remove(key)
    }

    /// Iterate keys from highest priority downward.
    pub fn iter(&self) -> impl Iterator<Item = &PriorityKey> {
        self.entries.iter()
    }

    /// The first key in walk order, if any.
    pub fn first(&self) -> Option<&PriorityKey> {
        self.entries.first()
    }

    /// The first key strictly after `key` in walk order.
    pub fn first_after(&self, key: &PriorityKey) -> Option<&PriorityKey> {
        self.entries
            .range((Bound::Excluded(key), Bound::Unbounded))
            .next()
    }

    /// Number of indexed transactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
