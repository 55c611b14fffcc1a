//! Core types for the IronBFT mempool.
//!
//! This crate provides the fundamental identity types shared by the mempool
//! and the components that feed it.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod sender;

pub use sender::Sender;
