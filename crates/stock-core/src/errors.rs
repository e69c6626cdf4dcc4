//! Cross-cutting error types for Stockroom.
//!
//! Storage errors (`DatabaseError`) live in `stock-db` and controller errors
//! (`QueryError`) in `stock-state`. The CLI converges everything into
//! `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any Stockroom crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Item lookup returned no result.
    #[error("Item not found: {id}")]
    NotFound { id: i64 },
}
