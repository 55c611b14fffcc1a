//! IronBFT priority-nonce mempool.
//!
//! An in-memory staging area for validated transactions that produces, on
//! demand, a single linear ordering suitable for inclusion in the next block.
//! The ordering honors two constraints at once: higher-priority transactions
//! execute earlier, and a sender's transactions are always emitted in
//! ascending nonce order.
//!
//! # Architecture
//!
//! Each transaction is indexed twice: in its sender's nonce-ordered queue and
//! in a global index keyed by (priority descending, sender bytes, nonce).
//! Selection walks the global index with a cursor per sender; see
//! [`Selector`] for the algorithm.
//!
//! ## Modules
//!
//! - `error`: Error types for mempool operations
//! - `config`: Construction-time options (read observer)
//! - `transaction`: The handle contract and the insertion context
//! - `sender_queue`: Per-sender nonce-ordered queues
//! - `priority_index`: The global priority-ordered index
//! - `mempool`: The pool itself: insert, remove, select, count
//! - `selector`: The pull-based selection iterator

pub mod config;
pub mod error;
pub mod mempool;
pub mod priority_index;
pub mod selector;
pub mod sender_queue;
pub mod transaction;

pub use config::{OnRead, PoolOptions};
pub use error::MempoolError;
pub use mempool::{PriorityMempool, TxFilter};
pub use priority_index::{PriorityIndex, PriorityKey};
pub use selector::Selector;
pub use sender_queue::SenderQueue;
pub use transaction::{PoolTransaction, TxContext, TxEntry};
