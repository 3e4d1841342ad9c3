//! Workspace-base error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls, or keep them separate and wrap `CoreError` as one
//! variant.  Both patterns are acceptable; prefer whichever keeps error sites
//! clean.

use thiserror::Error;

/// Errors raised by `lift-core` validation, shared by the other `lift-*`
/// crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A building needs at least two floors for any journey to exist.
    #[error("building must have at least 2 floors, got {0}")]
    InvalidFloorCount(u32),
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
