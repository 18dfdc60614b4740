use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::model::category::Category;
use crate::model::item::GroceryItem;
use crate::model::list::GroceryList;
use crate::ops::checked::sort_by_checked;
use crate::ops::group::group_by_category;

use super::host::GroceryHost;
use super::reorder::ReorderSession;

/// One category section as the host should render it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub category: Category,
    pub items: Vec<GroceryItem>,
    /// How many of `items` are checked
    pub checked: usize,
    pub total: usize,
    pub collapsed: bool,
}

/// What the host should show right now
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayView {
    /// Normal mode: checked-sorted category sections
    Sections(Vec<SectionView>),
    /// Reorder mode: one flat list in the session's working order
    Reordering(Vec<GroceryItem>),
}

/// What a `reconcile` call changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<String>,
    pub dropped: Vec<String>,
    /// The snapshot belonged to a different list, so local state was reset
    pub reinitialized: bool,
}

/// Owns the local view state for one grocery list and merges refreshed
/// snapshots into it.
///
/// Checked state is two-phase: the latest snapshot's flags are authoritative,
/// and local toggles made since then are layered on top until the next
/// snapshot arrives.
pub struct ListReconciler<H: GroceryHost> {
    snapshot: GroceryList,
    snapshot_checked: HashSet<String>,
    local_checked: HashMap<String, bool>,
    manual_order: Option<Vec<String>>,
    collapsed: BTreeSet<Category>,
    reorder: ReorderSession,
    host: H,
}

impl<H: GroceryHost> ListReconciler<H> {
    pub fn new(snapshot: GroceryList, host: H) -> Self {
        let mut reconciler = ListReconciler {
            snapshot: GroceryList::default(),
            snapshot_checked: HashSet::new(),
            local_checked: HashMap::new(),
            manual_order: None,
            collapsed: BTreeSet::new(),
            reorder: ReorderSession::default(),
            host,
        };
        reconciler.initialize(snapshot);
        reconciler
    }

    /// Start over with a new list: all local state is discarded and checked
    /// state is seeded from the snapshot.
    pub fn initialize(&mut self, snapshot: GroceryList) {
        debug!(
            week = ?snapshot.week_id,
            items = snapshot.items.len(),
            "initializing grocery list view"
        );
        self.snapshot_checked = snapshot.checked_names();
        self.snapshot = snapshot;
        self.local_checked.clear();
        self.manual_order = None;
        self.collapsed.clear();
        self.reorder.cancel();
    }

    /// Merge a refreshed snapshot. The snapshot's checked flags win over any
    /// local toggles, items missing from it are dropped and new ones added.
    /// A snapshot for a different list re-initializes instead.
    pub fn reconcile(&mut self, snapshot: GroceryList) -> ReconcileReport {
        if snapshot.week_id != self.snapshot.week_id {
            let added = snapshot.items.iter().map(|i| i.name.clone()).collect();
            let dropped = self.snapshot.items.iter().map(|i| i.name.clone()).collect();
            self.initialize(snapshot);
            return ReconcileReport {
                added,
                dropped,
                reinitialized: true,
            };
        }

        let added: Vec<String> = snapshot
            .items
            .iter()
            .filter(|i| !self.snapshot.contains(&i.name))
            .map(|i| i.name.clone())
            .collect();
        let dropped: Vec<String> = self
            .snapshot
            .items
            .iter()
            .filter(|i| !snapshot.contains(&i.name))
            .map(|i| i.name.clone())
            .collect();

        let overridden = self
            .local_checked
            .iter()
            .filter(|(name, checked)| snapshot.find(name).is_some_and(|i| i.checked != **checked))
            .count();
        if overridden > 0 {
            debug!(overridden, "snapshot overrides local checked state");
        }

        self.snapshot_checked = snapshot.checked_names();
        self.snapshot = snapshot;
        self.local_checked.clear();
        self.manual_order = None;

        if self.reorder.is_active() {
            let visible = self.visible_names();
            self.reorder.sync(&visible);
        }

        debug!(
            added = added.len(),
            dropped = dropped.len(),
            "reconciled grocery list snapshot"
        );
        ReconcileReport {
            added,
            dropped,
            reinitialized: false,
        }
    }

    /// Flip an item's checked state and notify the host. Returns the new
    /// state, or None if the name is not in the current snapshot.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        if !self.snapshot.contains(name) {
            trace!(name, "toggle ignored: unknown item");
            return None;
        }
        let checked = !self.is_checked(name);
        if checked == self.snapshot_checked.contains(name) {
            self.local_checked.remove(name);
        } else {
            self.local_checked.insert(name.to_string(), checked);
        }
        debug!(name, checked, "toggled item");
        self.host.on_item_toggle(name, checked);
        Some(checked)
    }

    /// Effective checked state: local toggle if any, else the snapshot's flag
    pub fn is_checked(&self, name: &str) -> bool {
        match self.local_checked.get(name) {
            Some(checked) => *checked,
            None => self.snapshot_checked.contains(name),
        }
    }

    /// Names currently rendered as checked
    pub fn checked_names(&self) -> HashSet<String> {
        self.snapshot
            .items
            .iter()
            .filter(|i| self.is_checked(&i.name))
            .map(|i| i.name.clone())
            .collect()
    }

    /// Visible items with effective checked flags, in display order: the
    /// reorder session's working order while one is active, otherwise the
    /// base order (snapshot, or the last committed manual order) with
    /// checked items moved to the bottom.
    pub fn display_items(&self) -> Vec<GroceryItem> {
        if let Some(order) = self.reorder.order() {
            return order.iter().filter_map(|name| self.resolve(name)).collect();
        }

        let mut items: Vec<GroceryItem> = self
            .snapshot
            .items
            .iter()
            .filter(|i| !self.host.filter_out_item(&i.name))
            .map(|i| self.with_effective_checked(i))
            .collect();

        if let Some(order) = &self.manual_order {
            let rank: HashMap<&str, usize> = order
                .iter()
                .enumerate()
                .map(|(i, name)| (name.as_str(), i))
                .collect();
            items.sort_by_key(|i| rank.get(i.name.as_str()).copied().unwrap_or(usize::MAX));
        }

        sort_by_checked(items, &self.checked_names())
    }

    /// Sectioned view, or the flat reorder list while a session is active
    pub fn display_view(&self) -> DisplayView {
        let items = self.display_items();
        if self.reorder.is_active() {
            return DisplayView::Reordering(items);
        }
        let sections = group_by_category(&items)
            .into_iter()
            .map(|section| SectionView {
                checked: section.items.iter().filter(|i| i.checked).count(),
                total: section.items.len(),
                collapsed: self.collapsed.contains(&section.category),
                category: section.category,
                items: section.items,
            })
            .collect();
        DisplayView::Sections(sections)
    }

    // -----------------------------------------------------------------------
    // Reorder session
    // -----------------------------------------------------------------------

    pub fn is_reordering(&self) -> bool {
        self.reorder.is_active()
    }

    /// Enter reorder mode with the sectioned view flattened into one list,
    /// so the items stay where the user last saw them.
    /// Returns false if a session is already active.
    pub fn begin_reorder(&mut self) -> bool {
        if self.reorder.is_active() {
            return false;
        }
        let order: Vec<String> = group_by_category(&self.display_items())
            .into_iter()
            .flat_map(|section| section.items)
            .map(|i| i.name)
            .collect();
        let entered = self.reorder.enter(order);
        if entered {
            debug!("reorder session started");
        }
        entered
    }

    /// Move the item at `from` to `to` in the working order. Stale or
    /// out-of-range indices are ignored.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let moved = self.reorder.move_item(from, to);
        if !moved {
            trace!(from, to, "move ignored");
        }
        moved
    }

    /// Leave reorder mode and hand the final order to the host. Nothing is
    /// emitted for an empty session. Returns whether the host was notified.
    pub fn commit_reorder(&mut self) -> bool {
        let Some(order) = self.reorder.exit() else {
            return false;
        };
        let items: Vec<GroceryItem> = order.iter().filter_map(|name| self.resolve(name)).collect();
        debug!(items = items.len(), "reorder session committed");
        self.host.on_reorder(&items);
        self.manual_order = Some(order);
        true
    }

    /// Leave reorder mode without emitting anything.
    pub fn cancel_reorder(&mut self) {
        if self.reorder.is_active() {
            debug!("reorder session cancelled");
        }
        self.reorder.cancel();
    }

    // -----------------------------------------------------------------------
    // Collapsed categories
    // -----------------------------------------------------------------------

    /// Flip a category's collapsed state. Returns true if now collapsed.
    pub fn toggle_collapsed(&mut self, category: Category) -> bool {
        if self.collapsed.remove(&category) {
            false
        } else {
            self.collapsed.insert(category);
            true
        }
    }

    pub fn set_collapsed<I: IntoIterator<Item = Category>>(&mut self, categories: I) {
        self.collapsed = categories.into_iter().collect();
    }

    pub fn collapsed(&self) -> &BTreeSet<Category> {
        &self.collapsed
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn snapshot(&self) -> &GroceryList {
        &self.snapshot
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn visible_names(&self) -> Vec<String> {
        self.snapshot
            .items
            .iter()
            .filter(|i| !self.host.filter_out_item(&i.name))
            .map(|i| i.name.clone())
            .collect()
    }

    fn resolve(&self, name: &str) -> Option<GroceryItem> {
        self.snapshot
            .find(name)
            .map(|i| self.with_effective_checked(i))
    }

    fn with_effective_checked(&self, item: &GroceryItem) -> GroceryItem {
        let mut item = item.clone();
        item.checked = self.is_checked(&item.name);
        item
    }
}
