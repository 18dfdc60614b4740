use serde::Serialize;

use crate::model::category::Category;
use crate::model::item::GroceryItem;

/// Items of one category, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub category: Category,
    pub items: Vec<GroceryItem>,
}

/// Partition items into category sections.
///
/// Sections come out in `Category::ALL` order and only non-empty ones are
/// emitted. Items keep their relative input order within a section, so a
/// checked-sorted input yields checked-sorted sections.
pub fn group_by_category(items: &[GroceryItem]) -> Vec<Section> {
    let mut buckets: Vec<Vec<GroceryItem>> = vec![Vec::new(); Category::ALL.len()];
    for item in items {
        buckets[item.category.rank()].push(item.clone());
    }

    Category::ALL
        .iter()
        .zip(buckets)
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| Section {
            category: *category,
            items,
        })
        .collect()
}
