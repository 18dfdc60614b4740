use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::GroceryItem;

/// A snapshot of a generated grocery list. The engine never edits one in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    /// Identifies which list this is (e.g. `2026-W42`); opaque to the engine
    /// apart from equality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn new(week_id: Option<&str>, items: Vec<GroceryItem>) -> Self {
        GroceryList {
            week_id: week_id.map(str::to_string),
            generated_at: None,
            items,
        }
    }

    pub fn find(&self, name: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut GroceryItem> {
        self.items.iter_mut().find(|i| i.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Names of items the snapshot marks as checked
    pub fn checked_names(&self) -> HashSet<String> {
        self.items
            .iter()
            .filter(|i| i.checked)
            .map(|i| i.name.clone())
            .collect()
    }
}
