/// Manual reorder mode over a flat list of item names.
///
/// Entering snapshots an order; `move_item` splices it; `exit` hands back the
/// final order once and returns to inactive. Nothing carries over between
/// sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReorderSession {
    #[default]
    Inactive,
    Active {
        order: Vec<String>,
    },
}

impl ReorderSession {
    pub fn is_active(&self) -> bool {
        matches!(self, ReorderSession::Active { .. })
    }

    /// Start a session over `order`. Returns false (and changes nothing) if a
    /// session is already running.
    pub fn enter(&mut self, order: Vec<String>) -> bool {
        if self.is_active() {
            return false;
        }
        *self = ReorderSession::Active { order };
        true
    }

    /// The working order, if active
    pub fn order(&self) -> Option<&[String]> {
        match self {
            ReorderSession::Active { order } => Some(order),
            ReorderSession::Inactive => None,
        }
    }

    /// Remove the entry at `from` and reinsert it at `to`. Out-of-range
    /// indices (or an inactive session) leave the order untouched.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let ReorderSession::Active { order } = self else {
            return false;
        };
        if from >= order.len() || to >= order.len() {
            return false;
        }
        if from != to {
            let name = order.remove(from);
            order.insert(to, name);
        }
        true
    }

    /// End the session. Returns the final order when it is non-empty.
    pub fn exit(&mut self) -> Option<Vec<String>> {
        match std::mem::take(self) {
            ReorderSession::Active { order } if !order.is_empty() => Some(order),
            _ => None,
        }
    }

    /// End the session without producing an order.
    pub fn cancel(&mut self) {
        *self = ReorderSession::Inactive;
    }

    /// Align the working order with a refreshed set of visible names: drop
    /// names that disappeared, append new ones in the given order.
    pub fn sync(&mut self, visible: &[String]) {
        let ReorderSession::Active { order } = self else {
            return;
        };
        order.retain(|name| visible.contains(name));
        for name in visible {
            if !order.contains(name) {
                order.push(name.clone());
            }
        }
    }
}
