//! Mempool error types.

use ironbft_types::Sender;
use thiserror::Error;

/// Errors surfaced by mempool operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MempoolError {
    /// The sender already has a queued transaction at this nonce.
    #[error("duplicate nonce {nonce} for sender {sender}")]
    DuplicateNonce {
        /// Sender whose nonce collided.
        sender: Sender,
        /// The colliding nonce.
        nonce: u64,
    },

    /// No queued transaction matches the given (sender, nonce).
    #[error("transaction not found: sender {sender}, nonce {nonce}")]
    NotFound {
        /// Sender of the missing transaction.
        sender: Sender,
        /// Nonce of the missing transaction.
        nonce: u64,
    },
}
