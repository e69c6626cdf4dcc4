//! # stock-state
//!
//! The query controller between the item store and any presentation layer.
//!
//! [`QueryController`] turns user intents (search, edit amount, delete) into
//! store calls and keeps an observable list of the items the current search
//! selects, refreshed whenever the store changes.

pub mod controller;
pub mod error;

pub use controller::QueryController;
pub use error::QueryError;
