use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::tags::parse_tags;

/// A single inventory record.
///
/// `tags` is kept exactly as stored (for example `["tool","hand"]`) so that
/// writing an item back never rewrites the column. Use [`Item::tag_labels`]
/// for the parsed form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub time: i64,
    pub tags: String,
    pub amount: u32,
}

impl Item {
    /// Parsed tag labels, in stored order, empty fragments dropped.
    #[must_use]
    pub fn tag_labels(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Copy of this item with a different amount. All other fields are kept.
    #[must_use]
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Copy of this item with the amount raised by one.
    #[must_use]
    pub fn incremented(&self) -> Self {
        self.with_amount(amount::increment(self.amount))
    }

    /// Copy of this item with the amount lowered by one, never below zero.
    #[must_use]
    pub fn decremented(&self) -> Self {
        self.with_amount(amount::decrement(self.amount))
    }

    /// Whether the item name contains `needle`, ignoring case.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
