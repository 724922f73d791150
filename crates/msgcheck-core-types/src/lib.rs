//! Core types shared across msgcheck crates
//!
//! - **Correlation**: `CorrelationId` carried in message metadata
//! - **Schema constants**: Canonical field keys and event names for structured logging

pub mod correlation;
pub mod schema;

pub use correlation::CorrelationId;
