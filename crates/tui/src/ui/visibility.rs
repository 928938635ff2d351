//! One-shot "on next visible" registrations.
//!
//! A continuation registered for a widget runs once, the next time the
//! host reports that widget as appeared, and is then forgotten.

use std::collections::BTreeMap;

use crate::ui::canvas::WidgetId;

/// Registry of single-use continuations keyed by widget identity.
#[derive(Debug)]
pub struct OnceVisible<C> {
    pending: BTreeMap<WidgetId, Vec<C>>,
}

impl<C> Default for OnceVisible<C> {
    fn default() -> Self {
        Self {
            pending: BTreeMap::new(),
        }
    }
}

impl<C: PartialEq> OnceVisible<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `continuation` to run the next time `id` becomes visible.
    ///
    /// Returns `false` when an identical continuation was already waiting on `id`.
    pub fn once_visible(&mut self, id: WidgetId, continuation: C) -> bool {
        let waiting = self.pending.entry(id).or_default();
        if waiting.contains(&continuation) {
            return false;
        }
        waiting.push(continuation);
        true
    }

    /// Remove and return everything waiting on `id`, in registration order.
    pub fn take(&mut self, id: WidgetId) -> Vec<C> {
        self.pending.remove(&id).unwrap_or_default()
    }

    pub fn pending_for(&self, id: WidgetId) -> usize {
        self.pending.get(&id).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
