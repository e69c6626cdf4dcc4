//! Repository modules implementing store operations.
//!
//! Each module adds methods to `StockDb` via `impl StockDb` blocks.

pub mod item;
