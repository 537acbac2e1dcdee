use tracing::debug;

use super::error::ClientError;
use crate::item::{ShoppingItem, Timestamp};
use crate::utils::{format_date, parse_date};

/// Inputs of the "add item" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemForm {
    pub text: String,
    pub description: String,
    /// Raw `YYYY-MM-DD` input, empty for no due date
    pub due_date: String,
}

/// Inputs of the edit dialog for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: u64,
    pub text: String,
    pub description: String,
    pub due_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Transient message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Proof that the holder started the action currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionToken(u64);

/// One store mutation, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Add {
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    },
    Edit {
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    },
    Delete { id: u64 },
    Complete { id: u64 },
}

impl Mutation {
    /// Short verb used in log lines and failure notifications.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "add",
            Mutation::Edit { .. } => "edit",
            Mutation::Delete { .. } => "delete",
            Mutation::Complete { .. } => "complete",
        }
    }
}

fn parse_optional_date(raw: &str) -> Result<Option<Timestamp>, ClientError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .map_err(|e| ClientError::InvalidInput(e.to_string()))
}

/// Everything the list view renders, plus the transitions between states.
///
/// `items` is only ever replaced wholesale by [`ShellState::apply_listing`];
/// failures never touch it.
#[derive(Debug, Clone)]
pub struct ShellState {
    pub items: Vec<ShoppingItem>,
    /// True until the first listing has completed or failed
    pub loading: bool,
    pub new_item: NewItemForm,
    pub edit: Option<EditForm>,
    pub notification: Option<Notification>,
    in_flight: Option<ActionToken>,
    next_token: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            new_item: NewItemForm::default(),
            edit: None,
            notification: None,
            in_flight: None,
            next_token: 0,
        }
    }

    /// Whether a mutating action is in flight; mutating controls are disabled while true.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Claim the single in-flight slot.
    pub fn begin(&mut self) -> Result<ActionToken, ClientError> {
        if self.in_flight.is_some() {
            return Err(ClientError::Busy);
        }
        let token = ActionToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.in_flight = Some(token);
        Ok(token)
    }

    /// Release the in-flight slot. A stale token leaves the current action alone.
    pub fn finish(&mut self, token: ActionToken) {
        if self.in_flight == Some(token) {
            self.in_flight = None;
        } else {
            debug!(?token, "Ignoring finish for an action that is not in flight");
        }
    }

    /// Replace the cached list with a freshly fetched snapshot.
    pub fn apply_listing(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
        self.loading = false;
    }

    /// Record a failed initial load.
    pub fn apply_load_failure(&mut self, err: &ClientError) {
        self.loading = false;
        self.notify(NotificationKind::Error, format!("Failed to load items: {err}"));
    }

    /// Record a confirmed mutation after its refetch succeeded.
    pub fn apply_success(&mut self, mutation: &Mutation) {
        let message = match mutation {
            Mutation::Add { text, .. } => {
                self.new_item = NewItemForm::default();
                format!("Added \"{text}\"")
            }
            Mutation::Edit { id, .. } => {
                if self.edit.as_ref().is_some_and(|e| e.id == *id) {
                    self.edit = None;
                }
                format!("Updated item {id}")
            }
            Mutation::Delete { id } => format!("Deleted item {id}"),
            Mutation::Complete { id } => format!("Completed item {id}"),
        };
        self.notify(NotificationKind::Info, message);
    }

    /// Record a failed mutation. The cached list and open forms are kept.
    pub fn apply_failure(&mut self, mutation: &Mutation, err: &ClientError) {
        self.notify(
            NotificationKind::Error,
            format!("Failed to {} item: {err}", mutation.verb()),
        );
    }

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notification = Some(Notification { kind, message });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Build the add mutation from the form, or `None` when the text is blank.
    pub fn new_item_mutation(&self) -> Result<Option<Mutation>, ClientError> {
        let text = self.new_item.text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(Mutation::Add {
            text: text.to_string(),
            description: self.new_item.description.trim().to_string(),
            due_date: parse_optional_date(&self.new_item.due_date)?,
        }))
    }

    /// Open the edit dialog pre-filled from the cached copy of `id`.
    pub fn open_edit(&mut self, id: u64) -> Result<(), ClientError> {
        let item = self
            .items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| ClientError::InvalidInput(format!("No item {id} in the list")))?;
        self.edit = Some(EditForm {
            id,
            text: item.text.clone(),
            description: item.description.clone(),
            due_date: item.due_date.map_or_else(String::new, format_date),
        });
        Ok(())
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Build the edit mutation from the open dialog.
    pub fn edit_mutation(&self) -> Result<Option<Mutation>, ClientError> {
        let Some(form) = &self.edit else {
            return Ok(None);
        };
        let text = form.text.trim();
        if text.is_empty() {
            return Err(ClientError::InvalidInput("Item text cannot be empty".to_string()));
        }
        Ok(Some(Mutation::Edit {
            id: form.id,
            text: text.to_string(),
            description: form.description.trim().to_string(),
            due_date: parse_optional_date(&form.due_date)?,
        }))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
