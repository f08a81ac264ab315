//! # beck-core
//! Foundation types and chain-index traits for the Beck protocol.

pub mod chain_index;
pub mod constants;
pub mod error;
pub mod types;
