//! Entity structs for Stockroom domain objects.
//!
//! Each entity maps to a table in the libSQL database and derives
//! `Serialize`, `Deserialize`, and `JsonSchema`.

mod item;

pub use item::Item;
