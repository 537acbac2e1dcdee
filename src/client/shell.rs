use tracing::{error, info, warn};

use super::error::ClientError;
use super::state::{Mutation, ShellState};
use super::transport::ItemTransport;
use crate::item::ShoppingItem;

/// Drives user actions against the store, one at a time.
///
/// Every action follows the same round trip: claim the in-flight slot, send
/// the mutation, refetch the full list on success, record the outcome, release
/// the slot. Nothing in the cached list changes before the store confirms.
pub struct ClientShell<T: ItemTransport> {
    transport: T,
    state: ShellState,
}

impl<T: ItemTransport> ClientShell<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ShellState::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Mutable access for form input and notification handling.
    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Initial fetch. A failure leaves the list empty and raises a notification.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.transport.get_items().await {
            Ok(items) => {
                self.state.apply_listing(items);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching items: {e}");
                self.state.apply_load_failure(&e);
                Err(e)
            }
        }
    }

    /// Submit the new-item form. Blank text is ignored.
    pub async fn submit_new_item(&mut self) -> Result<(), ClientError> {
        match self.state.new_item_mutation() {
            Ok(Some(mutation)) => self.perform(mutation).await,
            Ok(None) => Ok(()),
            Err(e) => self.reject(e),
        }
    }

    /// Submit the open edit dialog.
    pub async fn submit_edit(&mut self) -> Result<(), ClientError> {
        match self.state.edit_mutation() {
            Ok(Some(mutation)) => self.perform(mutation).await,
            Ok(None) => Ok(()),
            Err(e) => self.reject(e),
        }
    }

    pub async fn add_item(
        &mut self,
        text: &str,
        description: &str,
        due_date: &str,
    ) -> Result<(), ClientError> {
        let form = &mut self.state.new_item;
        form.text = text.to_string();
        form.description = description.to_string();
        form.due_date = due_date.to_string();
        self.submit_new_item().await
    }

    /// Open the edit dialog for `id`, overwrite the given fields and submit.
    ///
    /// Fields passed as `None` keep their current value.
    pub async fn edit_item(
        &mut self,
        id: u64,
        text: Option<&str>,
        description: Option<&str>,
        due_date: Option<&str>,
    ) -> Result<(), ClientError> {
        if let Err(e) = self.state.open_edit(id) {
            return self.reject(e);
        }
        if let Some(form) = self.state.edit.as_mut() {
            if let Some(text) = text {
                form.text = text.to_string();
            }
            if let Some(description) = description {
                form.description = description.to_string();
            }
            if let Some(due_date) = due_date {
                form.due_date = due_date.to_string();
            }
        }
        self.submit_edit().await
    }

    pub async fn delete_item(&mut self, id: u64) -> Result<(), ClientError> {
        self.perform(Mutation::Delete { id }).await
    }

    pub async fn complete_item(&mut self, id: u64) -> Result<(), ClientError> {
        self.perform(Mutation::Complete { id }).await
    }

    /// Refetch without mutating. Failures keep the previous snapshot.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.transport.get_items().await {
            Ok(items) => {
                self.state.apply_listing(items);
                Ok(())
            }
            Err(e) => {
                warn!("Error refreshing items: {e}");
                self.state
                    .notify(super::NotificationKind::Error, format!("Failed to refresh: {e}"));
                Err(e)
            }
        }
    }

    /// Run one mutation through the full round trip.
    pub async fn perform(&mut self, mutation: Mutation) -> Result<(), ClientError> {
        let token = match self.state.begin() {
            Ok(token) => token,
            Err(e) => return self.reject(e),
        };

        let outcome = match self.send(&mutation).await {
            Ok(()) => self.transport.get_items().await,
            Err(e) => Err(e),
        };
        let result = self.settle(&mutation, outcome);

        self.state.finish(token);
        result
    }

    async fn send(&mut self, mutation: &Mutation) -> Result<(), ClientError> {
        match mutation.clone() {
            Mutation::Add {
                text,
                description,
                due_date,
            } => {
                let id = self.transport.add_item(text, description, due_date).await?;
                info!(item_id = id, "Item added");
                Ok(())
            }
            Mutation::Edit {
                id,
                text,
                description,
                due_date,
            } => {
                self.transport
                    .edit_item(id, text, description, due_date)
                    .await
            }
            Mutation::Delete { id } => self.transport.delete_item(id).await,
            Mutation::Complete { id } => self.transport.mark_item_completed(id).await,
        }
    }

    fn settle(
        &mut self,
        mutation: &Mutation,
        outcome: Result<Vec<ShoppingItem>, ClientError>,
    ) -> Result<(), ClientError> {
        match outcome {
            Ok(items) => {
                self.state.apply_listing(items);
                self.state.apply_success(mutation);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to {} item: {e}", mutation.verb());
                self.state.apply_failure(mutation, &e);
                Err(e)
            }
        }
    }

    /// Surface an error that stopped an action before anything was sent.
    fn reject(&mut self, err: ClientError) -> Result<(), ClientError> {
        self.state
            .notify(super::NotificationKind::Error, err.to_string());
        Err(err)
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
