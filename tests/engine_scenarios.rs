//! End-to-end scenarios for the list engine: a host mounts a snapshot, the
//! user toggles and reorders, and refreshed snapshots arrive in between.

use std::collections::HashSet;

use grocer::model::{Category, GroceryItem, GroceryList};
use grocer::ops::{aggregate, group_by_category, sort_by_checked};
use grocer::view::{CollectingHost, DisplayView, ListReconciler};
use pretty_assertions::assert_eq;

fn item(name: &str, category: Category) -> GroceryItem {
    GroceryItem::new(name, category)
}

fn week(items: Vec<GroceryItem>) -> GroceryList {
    GroceryList::new(Some("2026-W42"), items)
}

fn names(items: &[GroceryItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

fn dinner_party() -> GroceryList {
    week(vec![
        item("Salmon", Category::Meat)
            .with_source(Some(200.0), Some("g"), "Poke bowl")
            .with_source(Some(150.0), Some("g"), "Salmon salad"),
        item("Lemon", Category::Produce).with_quantity("2", None),
        item("Cream", Category::Dairy)
            .with_source(Some(2.0), Some("dl"), "Sauce")
            .checked(true),
        item("Dill", Category::Produce).with_source(None, Some("bunch"), "Sauce"),
        item("Rye bread", Category::Bakery),
        item("Flour", Category::Pantry)
            .with_source(Some(0.5), Some("kg"), "Crumble")
            .with_source(Some(0.3), Some("kg"), "Pancakes"),
    ])
}

#[test]
fn quantities_render_for_the_whole_list() {
    let list = dinner_party();
    let rendered: Vec<(String, String)> = list
        .items
        .iter()
        .map(|i| (i.name.clone(), aggregate(i)))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("Salmon".into(), "350 g".into()),
            ("Lemon".into(), "2".into()),
            ("Cream".into(), "2 dl".into()),
            ("Dill".into(), "".into()),
            ("Rye bread".into(), "".into()),
            ("Flour".into(), "0.8 kg".into()),
        ]
    );
}

#[test]
fn sectioned_view_is_grouped_and_checked_sorted() {
    let mut view = ListReconciler::new(dinner_party(), CollectingHost::default());
    view.toggle("Lemon");

    let DisplayView::Sections(sections) = view.display_view() else {
        panic!("expected sections");
    };
    let layout: Vec<(Category, Vec<&str>)> = sections
        .iter()
        .map(|s| (s.category, names(&s.items)))
        .collect();
    assert_eq!(
        layout,
        vec![
            (Category::Produce, vec!["Dill", "Lemon"]),
            (Category::Dairy, vec!["Cream"]),
            (Category::Bakery, vec!["Rye bread"]),
            (Category::Pantry, vec!["Flour"]),
            (Category::Meat, vec!["Salmon"]),
        ]
    );
}

#[test]
fn toggle_survives_until_snapshot_overrides_it() {
    let mut view = ListReconciler::new(dinner_party(), CollectingHost::default());

    assert_eq!(view.toggle("Salmon"), Some(true));
    let shown = view.display_items();
    assert!(shown.iter().find(|i| i.name == "Salmon").unwrap().checked);
    assert_eq!(
        names(&shown),
        vec!["Lemon", "Dill", "Rye bread", "Flour", "Salmon", "Cream"]
    );

    // The refresh raced the toggle and still says unchecked: snapshot wins.
    view.reconcile(dinner_party());
    let shown = view.display_items();
    assert!(!shown.iter().find(|i| i.name == "Salmon").unwrap().checked);
    assert_eq!(names(&shown)[0], "Salmon");

    assert_eq!(view.host().toggles, vec![("Salmon".to_string(), true)]);
}

#[test]
fn refresh_with_newly_checked_items_sorts_them_down() {
    let mut view = ListReconciler::new(dinner_party(), CollectingHost::default());
    let mut refreshed = dinner_party();
    refreshed.find_mut("Salmon").unwrap().checked = true;
    view.reconcile(refreshed);

    assert_eq!(
        names(&view.display_items()),
        vec!["Lemon", "Dill", "Rye bread", "Flour", "Salmon", "Cream"]
    );
}

#[test]
fn regenerated_items_keep_identity_by_name() {
    let mut view = ListReconciler::new(dinner_party(), CollectingHost::default());
    view.toggle("Flour");

    let mut regenerated = dinner_party();
    let flour = regenerated.find_mut("Flour").unwrap();
    flour.category = Category::Bakery;
    flour.checked = true;
    flour.quantity_sources.truncate(1);
    let report = view.reconcile(regenerated);

    assert!(report.added.is_empty());
    assert!(report.dropped.is_empty());
    let flour = view
        .display_items()
        .into_iter()
        .find(|i| i.name == "Flour")
        .unwrap();
    assert!(flour.checked);
    assert_eq!(flour.category, Category::Bakery);
    assert_eq!(aggregate(&flour), "0.5 kg");
}

/// The sectioned view flattened into one list, as a reorder session sees it.
fn flattened_sections(view: &ListReconciler<CollectingHost>) -> Vec<String> {
    let DisplayView::Sections(sections) = view.display_view() else {
        panic!("expected sections");
    };
    sections
        .into_iter()
        .flat_map(|s| s.items)
        .map(|i| i.name)
        .collect()
}

#[test]
fn reorder_round_trip_and_fresh_resnapshot() {
    let list = week(vec![
        item("C", Category::Meat),
        item("A", Category::Produce),
        item("B", Category::Dairy),
    ]);
    let mut view = ListReconciler::new(list, CollectingHost::default());

    let shown = flattened_sections(&view);
    assert_eq!(shown, vec!["A", "B", "C"]);
    assert!(view.begin_reorder());
    assert_eq!(names(&view.display_items()), shown);

    assert!(view.move_item(0, 2));
    assert!(matches!(view.display_view(), DisplayView::Reordering(_)));
    assert_eq!(names(&view.display_items()), vec!["B", "C", "A"]);
    assert!(view.commit_reorder());
    assert_eq!(view.host().reorder_names(), vec![vec!["B", "C", "A"]]);

    view.toggle("B");
    let shown = flattened_sections(&view);
    assert!(view.begin_reorder());
    assert_eq!(names(&view.display_items()), shown);
    view.move_item(5, 0);
    view.move_item(1, 1);
    assert!(view.commit_reorder());
    assert_eq!(
        view.host().reorder_names(),
        vec![vec!["B", "C", "A"], vec!["A", "B", "C"]]
    );
}

#[test]
fn pantry_items_stay_out_of_reorder_emission() {
    let host = CollectingHost::with_hidden(["Flour", "Dill"]);
    let mut view = ListReconciler::new(dinner_party(), host);
    view.begin_reorder();
    view.move_item(0, 1);
    view.commit_reorder();
    assert_eq!(
        view.host().reorder_names(),
        vec![vec!["Cream", "Lemon", "Rye bread", "Salmon"]]
    );
}

#[test]
fn stale_calls_are_harmless() {
    let mut view = ListReconciler::new(dinner_party(), CollectingHost::default());
    view.reconcile(week(vec![item("Lemon", Category::Produce)]));

    assert_eq!(view.toggle("Salmon"), None);
    assert!(!view.move_item(0, 1));
    view.begin_reorder();
    assert!(!view.move_item(3, 0));
    assert!(view.host().toggles.is_empty());
}

#[test]
fn empty_list_is_safe_everywhere() {
    let empty = week(Vec::new());
    assert!(group_by_category(&empty.items).is_empty());
    assert!(sort_by_checked(empty.items.clone(), &HashSet::new()).is_empty());

    let mut view = ListReconciler::new(empty, CollectingHost::default());
    assert!(view.display_items().is_empty());
    assert_eq!(view.display_view(), DisplayView::Sections(Vec::new()));
    view.begin_reorder();
    assert!(!view.commit_reorder());
    assert!(view.host().reorders.is_empty());
}
