//! # stock-core
//!
//! Core types and rules shared across all Stockroom crates:
//! - The `Item` entity stored in the `item` table
//! - Tag parsing for the loosely delimited `tags` column
//! - Amount editing rules (whole-unit steps, floored at zero)
//! - Date formatting for item timestamps
//! - Cross-cutting error types

pub mod amount;
pub mod entities;
pub mod errors;
pub mod tags;
pub mod time;
