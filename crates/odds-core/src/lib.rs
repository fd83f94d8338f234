//! # odds-core
//!
//! Shared definitions for the odds workspace: the error type, the
//! [`Condition`] seam between sample spaces and predicates, and small
//! serializable result types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::Condition;
pub use types::EventSummary;

/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
