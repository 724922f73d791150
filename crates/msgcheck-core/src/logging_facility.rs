//! Structured logging facility for msgcheck
//!
//! - Single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Public entry points (the two converters and the filter builder) own
//! lifecycle logging. Recursive helpers below them only emit
//! `tracing::debug!` / `tracing::trace!`.
//!
//! ```rust
//! use msgcheck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
