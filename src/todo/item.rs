use std::fmt;

/// Identifier of a to-do item, unique within one [`TodoList`](super::TodoList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do entry.
///
/// `text` is always trimmed and non-empty; items are only created through
/// [`TodoList::add_from_draft`](super::TodoList::add_from_draft).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Copy of this item with the completion flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
