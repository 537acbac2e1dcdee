use std::collections::BTreeMap;

use tracing::debug;

use super::error::ItemError;
use super::types::{ShoppingItem, Timestamp};
use crate::utils::now_nanos;

/// Authoritative collection of shopping items.
///
/// Ids are handed out from a counter that only moves forward, so iterating
/// the id-ordered map yields items in insertion order.
#[derive(Debug, Default)]
pub struct ItemStore {
    next_id: u64,
    items: BTreeMap<u64, ShoppingItem>,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new item and return its freshly assigned id.
    pub fn add_item(
        &mut self,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<u64, ItemError> {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        let item = ShoppingItem::new(id, text, description, due_date, now_nanos());
        self.items.insert(id, item);
        debug!(item_id = id, "Item added");
        Ok(id)
    }

    /// Replace text, description and due date of an existing item.
    ///
    /// `id`, `completed` and `created_at` are left untouched.
    pub fn edit_item(
        &mut self,
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<(), ItemError> {
        let item = self.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.text = text;
        item.description = description;
        item.due_date = due_date;
        debug!(item_id = id, "Item edited");
        Ok(())
    }

    pub fn delete_item(&mut self, id: u64) -> Result<(), ItemError> {
        self.items.remove(&id).ok_or(ItemError::NotFound(id))?;
        debug!(item_id = id, "Item deleted");
        Ok(())
    }

    /// Mark an item completed. Completing an already completed item succeeds.
    pub fn mark_item_completed(&mut self, id: u64) -> Result<(), ItemError> {
        let item = self.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.completed = true;
        debug!(item_id = id, "Item marked completed");
        Ok(())
    }

    /// All current items in insertion order.
    #[must_use]
    pub fn get_items(&self) -> Vec<ShoppingItem> {
        self.items.values().cloned().collect()
    }

    #[must_use]
    pub fn get_item(&self, id: u64) -> Option<&ShoppingItem> {
        self.items.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `add_item` call will assign.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
