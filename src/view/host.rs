use std::collections::HashSet;

use crate::model::item::GroceryItem;

/// The host side of a list view: receives user intent to persist and decides
/// which items to hide. Callbacks are fire-and-forget; the engine never waits
/// on or inspects their outcome.
pub trait GroceryHost {
    /// An item's checked state was flipped locally.
    fn on_item_toggle(&mut self, name: &str, checked: bool);

    /// A reorder session was committed. Carries the full items in final order.
    fn on_reorder(&mut self, items: &[GroceryItem]);

    /// Hide an item from display without removing it from the snapshot.
    fn filter_out_item(&self, _name: &str) -> bool {
        false
    }
}

/// Host that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl GroceryHost for NoopHost {
    fn on_item_toggle(&mut self, _name: &str, _checked: bool) {}
    fn on_reorder(&mut self, _items: &[GroceryItem]) {}
}

/// Host that queues callbacks for the caller to flush later, and hides a
/// fixed set of names.
#[derive(Debug, Clone, Default)]
pub struct CollectingHost {
    pub toggles: Vec<(String, bool)>,
    pub reorders: Vec<Vec<GroceryItem>>,
    pub hidden: HashSet<String>,
}

impl CollectingHost {
    pub fn with_hidden<I, S>(hidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CollectingHost {
            hidden: hidden.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Names of each committed reorder, in emission order
    pub fn reorder_names(&self) -> Vec<Vec<String>> {
        self.reorders
            .iter()
            .map(|items| items.iter().map(|i| i.name.clone()).collect())
            .collect()
    }
}

impl GroceryHost for CollectingHost {
    fn on_item_toggle(&mut self, name: &str, checked: bool) {
        self.toggles.push((name.to_string(), checked));
    }

    fn on_reorder(&mut self, items: &[GroceryItem]) {
        self.reorders.push(items.to_vec());
    }

    fn filter_out_item(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }
}
