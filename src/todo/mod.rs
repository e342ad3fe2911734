//! In-memory to-do list state.
//!
//! [`TodoList`] owns the item list and the entry draft. Every change builds a
//! fresh [`TodoSnapshot`] and swaps it in whole, so a reader holding an older
//! snapshot never observes a half-applied update. Invalid requests (blank
//! draft, unknown id, nothing to clear) are no-ops: the current snapshot is
//! left untouched and the operation reports `false`.

mod item;

pub use item::{Item, ItemId};

use log::debug;
use std::sync::Arc;

/// Immutable view of the list and the draft at one point in time.
#[derive(Debug, Clone)]
pub struct TodoSnapshot {
    items: Arc<Vec<Item>>,
    draft: Arc<str>,
}

impl Default for TodoSnapshot {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            draft: Arc::from(""),
        }
    }
}

impl TodoSnapshot {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The clear-completed control is only enabled when something is completed
    pub fn can_clear_completed(&self) -> bool {
        self.items.iter().any(|item| item.completed)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// True when both parts are the very same allocations as `other`'s.
    ///
    /// Used for change detection: a no-op never produces a new allocation.
    pub fn same_as(&self, other: &TodoSnapshot) -> bool {
        Arc::ptr_eq(&self.items, &other.items) && Arc::ptr_eq(&self.draft, &other.draft)
    }
}

/// The to-do widget state owner.
#[derive(Debug)]
pub struct TodoList {
    current: TodoSnapshot,
    next_id: u64,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            current: TodoSnapshot::default(),
            next_id: 1,
        }
    }

    /// Cheap handle on the current state
    pub fn snapshot(&self) -> TodoSnapshot {
        self.current.clone()
    }

    pub fn items(&self) -> &[Item] {
        self.current.items()
    }

    pub fn draft(&self) -> &str {
        self.current.draft()
    }

    pub fn completed_count(&self) -> usize {
        self.current.completed_count()
    }

    pub fn total_count(&self) -> usize {
        self.current.total_count()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn can_clear_completed(&self) -> bool {
        self.current.can_clear_completed()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.current.get(id)
    }

    /// Replace the draft verbatim. Untrimmed; trimming happens on add.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if *self.current.draft == *text {
            return false;
        }
        debug!("Todo: draft set to {:?}", text);
        self.current = TodoSnapshot {
            items: Arc::clone(&self.current.items),
            draft: Arc::from(text),
        };
        true
    }

    /// Append a new item built from the trimmed draft and clear the draft.
    pub fn add_from_draft(&mut self) -> bool {
        let text = self.current.draft.trim().to_string();
        if text.is_empty() {
            return false;
        }

        let id = self.allocate_id();
        let item = Item::new(id, text);
        debug!("Todo: added item {} {:?}", id, item.text);

        let mut items = Vec::with_capacity(self.current.items.len() + 1);
        items.extend(self.current.items.iter().cloned());
        items.push(item);

        self.current = TodoSnapshot {
            items: Arc::new(items),
            draft: Arc::from(""),
        };
        true
    }

    /// Flip the completion flag of the item with `id`, keeping its position.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.current.get(id).is_none() {
            return false;
        }

        let items = self
            .current
            .items
            .iter()
            .map(|item| if item.id == id { item.toggled() } else { item.clone() })
            .collect();
        self.replace_items(items);
        debug!("Todo: toggled item {}", id);
        true
    }

    /// Remove the item with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: ItemId) -> bool {
        if self.current.get(id).is_none() {
            return false;
        }

        let items = self.current.items.iter().filter(|item| item.id != id).cloned().collect();
        self.replace_items(items);
        debug!("Todo: removed item {}", id);
        true
    }

    /// Drop every completed item, preserving the order of the rest.
    pub fn clear_completed(&mut self) -> bool {
        let removed = self.current.completed_count();
        if removed == 0 {
            return false;
        }

        let items = self.current.items.iter().filter(|item| !item.completed).cloned().collect();
        self.replace_items(items);
        debug!("Todo: cleared {} completed items", removed);
        true
    }

    fn replace_items(&mut self, items: Vec<Item>) {
        self.current = TodoSnapshot {
            items: Arc::new(items),
            draft: Arc::clone(&self.current.draft),
        };
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}
