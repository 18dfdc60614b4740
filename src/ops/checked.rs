use std::collections::HashSet;

use crate::model::item::GroceryItem;

/// Move items named in `checked` after all others. Stable: items keep their
/// relative order within the unchecked and checked groups.
pub fn sort_by_checked(items: Vec<GroceryItem>, checked: &HashSet<String>) -> Vec<GroceryItem> {
    let (mut unchecked, done): (Vec<_>, Vec<_>) = items
        .into_iter()
        .partition(|item| !checked.contains(&item.name));
    unchecked.extend(done);
    unchecked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn items(names: &[&str]) -> Vec<GroceryItem> {
        names
            .iter()
            .map(|n| GroceryItem::new(n, Category::Produce))
            .collect()
    }

    fn names(items: &[GroceryItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn checked_items_sink_to_bottom() {
        let sorted = sort_by_checked(items(&["Apple", "Banana", "Cherry"]), &set(&["Apple"]));
        assert_eq!(names(&sorted), vec!["Banana", "Cherry", "Apple"]);
    }

    #[test]
    fn resorting_is_a_fixed_point() {
        let checked = set(&["Apple"]);
        let once = sort_by_checked(items(&["Apple", "Banana", "Cherry"]), &checked);
        let twice = sort_by_checked(once.clone(), &checked);
        assert_eq!(once, twice);
    }

    #[test]
    fn order_within_each_group_is_kept() {
        let sorted = sort_by_checked(
            items(&["A", "B", "C", "D", "E"]),
            &set(&["D", "A", "C"]),
        );
        assert_eq!(names(&sorted), vec!["B", "E", "A", "C", "D"]);
    }

    #[test]
    fn unknown_names_in_checked_set_are_ignored() {
        let sorted = sort_by_checked(items(&["A", "B"]), &set(&["Z"]));
        assert_eq!(names(&sorted), vec!["A", "B"]);
    }

    #[test]
    fn empty_input() {
        assert!(sort_by_checked(Vec::new(), &set(&["A"])).is_empty());
    }
}
