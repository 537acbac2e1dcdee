use serde::{Deserialize, Serialize};

/// Nanoseconds since the Unix epoch.
pub type Timestamp = i64;

/// A single entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Store-assigned identifier, never reused
    pub id: u64,
    /// Short label shown in the list
    pub text: String,
    /// Free-form notes, empty when not given
    #[serde(default)]
    pub description: String,
    pub completed: bool,
    /// Captured when the item is added
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
}

impl ShoppingItem {
    #[must_use]
    pub fn new(
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            text,
            description,
            completed: false,
            created_at,
            due_date,
        }
    }
}
