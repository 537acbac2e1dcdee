use super::*;
use crate::client::NotificationKind;
use crate::item::{ItemStore, Timestamp};
use async_trait::async_trait;

/// In-process transport over a real store, with switchable outages.
#[derive(Default)]
struct FakeTransport {
    store: ItemStore,
    fail_mutations: bool,
    fail_listing: bool,
    calls: Vec<&'static str>,
}

impl FakeTransport {
    fn down() -> ClientError {
        ClientError::Transport("unavailable".to_string())
    }

    fn mutation(&mut self, name: &'static str) -> Result<(), ClientError> {
        self.calls.push(name);
        if self.fail_mutations {
            Err(Self::down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ItemTransport for FakeTransport {
    async fn add_item(
        &mut self,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<u64, ClientError> {
        self.mutation("add")?;
        self.store
            .add_item(text, description, due_date)
            .map_err(|e| ClientError::Store(e.to_string()))
    }

    async fn edit_item(
        &mut self,
        id: u64,
        text: String,
        description: String,
        due_date: Option<Timestamp>,
    ) -> Result<(), ClientError> {
        self.mutation("edit")?;
        self.store
            .edit_item(id, text, description, due_date)
            .map_err(|e| ClientError::Store(e.to_string()))
    }

    async fn delete_item(&mut self, id: u64) -> Result<(), ClientError> {
        self.mutation("delete")?;
        self.store
            .delete_item(id)
            .map_err(|e| ClientError::Store(e.to_string()))
    }

    async fn mark_item_completed(&mut self, id: u64) -> Result<(), ClientError> {
        self.mutation("complete")?;
        self.store
            .mark_item_completed(id)
            .map_err(|e| ClientError::Store(e.to_string()))
    }

    async fn get_items(&mut self) -> Result<Vec<ShoppingItem>, ClientError> {
        self.calls.push("list");
        if self.fail_listing {
            Err(Self::down())
        } else {
            Ok(self.store.get_items())
        }
    }
}

async fn loaded_shell(texts: &[&str]) -> ClientShell<FakeTransport> {
    let mut transport = FakeTransport::default();
    for text in texts {
        transport
            .store
            .add_item((*text).to_string(), String::new(), None)
            .unwrap();
    }
    let mut shell = ClientShell::new(transport);
    shell.load().await.unwrap();
    shell.transport_mut().calls.clear();
    shell
}

#[tokio::test]
async fn test_load_fetches_snapshot() {
    let shell = loaded_shell(&["milk", "eggs"]).await;
    assert!(!shell.state().loading);
    assert_eq!(shell.state().items.len(), 2);
}

#[tokio::test]
async fn test_load_failure_raises_notification() {
    let mut transport = FakeTransport::default();
    transport.fail_listing = true;
    let mut shell = ClientShell::new(transport);

    assert!(shell.load().await.is_err());
    assert!(!shell.state().loading);
    assert!(shell.state().items.is_empty());
    assert_eq!(
        shell.state().notification.as_ref().map(|n| n.kind),
        Some(NotificationKind::Error)
    );
}

#[tokio::test]
async fn test_add_refetches_and_clears_form() {
    let mut shell = loaded_shell(&[]).await;

    shell.add_item("milk", "", "").await.unwrap();

    assert_eq!(shell.transport_mut().calls, vec!["add", "list"]);
    let items = &shell.state().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "milk");
    assert!(!items[0].completed);
    assert!(items[0].due_date.is_none());
    assert!(shell.state().new_item.text.is_empty());
    assert!(!shell.state().is_busy());
}

#[tokio::test]
async fn test_blank_add_sends_nothing() {
    let mut shell = loaded_shell(&[]).await;
    shell.add_item("  ", "ignored", "").await.unwrap();
    assert!(shell.transport_mut().calls.is_empty());
    assert!(shell.state().notification.is_none());
}

#[tokio::test]
async fn test_invalid_due_date_sends_nothing() {
    let mut shell = loaded_shell(&[]).await;
    let err = shell.add_item("milk", "", "soon").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));
    assert!(shell.transport_mut().calls.is_empty());
    assert!(shell.state().notification.is_some());
}

#[tokio::test]
async fn test_complete_then_complete_again() {
    let mut shell = loaded_shell(&["milk"]).await;
    let id = shell.state().items[0].id;

    shell.complete_item(id).await.unwrap();
    assert!(shell.state().items[0].completed);

    shell.complete_item(id).await.unwrap();
    assert!(shell.state().items[0].completed);
}

#[tokio::test]
async fn test_store_error_keeps_cache_and_skips_refetch() {
    let mut shell = loaded_shell(&["milk"]).await;
    let before = shell.state().items.clone();

    let err = shell.delete_item(42).await.unwrap_err();

    assert_eq!(err, ClientError::Store("Item not found: 42".to_string()));
    assert_eq!(shell.transport_mut().calls, vec!["delete"]);
    assert_eq!(shell.state().items, before);
    assert!(!shell.state().is_busy());
    let note = shell.state().notification.clone().unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert!(note.message.contains("Item not found: 42"));
}

#[tokio::test]
async fn test_transport_error_keeps_cache() {
    let mut shell = loaded_shell(&["milk"]).await;
    let before = shell.state().items.clone();
    shell.transport_mut().fail_mutations = true;

    let id = before[0].id;
    assert!(matches!(
        shell.complete_item(id).await,
        Err(ClientError::Transport(_))
    ));
    assert_eq!(shell.state().items, before);
    assert!(!shell.state().is_busy());
}

#[tokio::test]
async fn test_refetch_failure_keeps_old_snapshot() {
    let mut shell = loaded_shell(&["milk"]).await;
    let before = shell.state().items.clone();
    shell.transport_mut().fail_listing = true;

    assert!(shell.add_item("eggs", "", "").await.is_err());

    // The store took the add, but the view only moves on a confirmed listing
    assert_eq!(shell.state().items, before);
    assert_eq!(shell.transport_mut().store.len(), 2);
    assert_eq!(shell.state().new_item.text, "eggs");
}

#[tokio::test]
async fn test_edit_updates_only_given_fields() {
    let mut shell = loaded_shell(&["bread"]).await;
    let id = shell.state().items[0].id;

    shell
        .edit_item(id, None, Some("sourdough"), Some("2024-03-01"))
        .await
        .unwrap();

    let item = &shell.state().items[0];
    assert_eq!(item.text, "bread");
    assert_eq!(item.description, "sourdough");
    assert_eq!(item.due_date, Some(1_709_251_200_000_000_000));
    assert!(shell.state().edit.is_none());
}

#[tokio::test]
async fn test_edit_unknown_id_sends_nothing() {
    let mut shell = loaded_shell(&["bread"]).await;
    assert!(shell.edit_item(7, Some("x"), None, None).await.is_err());
    assert!(shell.transport_mut().calls.is_empty());
}

#[tokio::test]
async fn test_delete_removes_item_from_view() {
    let mut shell = loaded_shell(&["bread", "milk"]).await;
    let id = shell.state().items[0].id;

    shell.delete_item(id).await.unwrap();

    let texts: Vec<&str> = shell.state().items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, vec!["milk"]);
    assert_eq!(
        shell.state().notification.as_ref().map(|n| n.message.as_str()),
        Some(format!("Deleted item {id}").as_str())
    );
}

#[tokio::test]
async fn test_perform_while_busy_is_rejected() {
    let mut shell = loaded_shell(&["milk"]).await;
    let token = shell.state_mut().begin().unwrap();

    let err = shell.complete_item(0).await.unwrap_err();

    assert_eq!(err, ClientError::Busy);
    assert!(shell.transport_mut().calls.is_empty());
    shell.state_mut().finish(token);
    assert!(!shell.state().is_busy());
}

#[tokio::test]
async fn test_refresh_failure_keeps_snapshot() {
    let mut shell = loaded_shell(&["milk"]).await;
    let before = shell.state().items.clone();
    shell.transport_mut().fail_listing = true;
    assert!(shell.refresh().await.is_err());
    assert_eq!(shell.state().items, before);
}
