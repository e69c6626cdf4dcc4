//! Controller error types.

use stock_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    /// An update or delete was rejected by the store. The visible list was
    /// not refreshed.
    #[error("Mutation failed: {0}")]
    Mutation(#[source] DatabaseError),

    /// The first snapshot of a search could not be read.
    #[error("Query failed: {0}")]
    Query(#[source] DatabaseError),
}
