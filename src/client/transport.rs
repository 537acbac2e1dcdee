use async_trait::async_trait;

use super::error::ClientError;
use crate::item::{ShoppingItem, Timestamp};

/// The five store operations as seen from the client.
///
/// Store-reported failures come back as [`ClientError::Store`]; anything that
/// prevented an answer is [`ClientError::Transport`].
#[async_trait]
pub trait ItemTransport: Send {
    async fn add_item(
        &mut self,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<u64, ClientError>;

    async fn edit_item(
        &mut self,
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<(), ClientError>;

    async fn delete_item(&mut self, id: u64) -> Result<(), ClientError>;

    async fn mark_item_completed(&mut self, id: u64) -> Result<(), ClientError>;

    async fn get_items(&mut self) -> Result<Vec<ShoppingItem>, ClientError>;
}
