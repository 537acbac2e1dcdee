#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use common::spawn_server;
use shopping_list_daemon::client::{render_list, NotificationKind};
use shopping_list_daemon::{ClientError, ClientShell, ItemTransport};

#[tokio::test]
async fn test_transport_add_and_list() {
    let server = spawn_server().await;
    let mut transport = server.transport().await;

    let milk = transport
        .add_item("milk".to_string(), String::new(), None)
        .await
        .unwrap();
    let eggs = transport
        .add_item("eggs".to_string(), "free range".to_string(), None)
        .await
        .unwrap();
    assert_eq!((milk, eggs), (0, 1));

    let items = transport.get_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].description, "free range");
    assert_eq!(server.store.read().await.len(), 2);
}

#[tokio::test]
async fn test_transport_not_found_is_store_error() {
    let server = spawn_server().await;
    let mut transport = server.transport().await;

    let err = transport.delete_item(5).await.unwrap_err();
    assert_eq!(err, ClientError::Store("Item not found: 5".to_string()));
}

#[tokio::test]
async fn test_shell_round_trip_through_daemon() {
    let server = spawn_server().await;
    let mut shell = ClientShell::new(server.transport().await);

    shell.load().await.unwrap();
    assert!(!shell.state().loading);
    assert!(shell.state().items.is_empty());

    shell.add_item("cake", "chocolate", "2024-03-01").await.unwrap();
    shell.add_item("milk", "", "").await.unwrap();
    shell.complete_item(0).await.unwrap();
    shell
        .edit_item(1, Some("oat milk"), None, None)
        .await
        .unwrap();

    let view = render_list(shell.state());
    assert!(view.contains("[x] 0   cake - chocolate (due 2024-03-01)"), "{view}");
    assert!(view.contains("[ ] 1   oat milk"), "{view}");
    assert!(view.contains("Updated item 1"), "{view}");
}

#[tokio::test]
async fn test_shell_sees_changes_from_other_clients_after_refetch() {
    let server = spawn_server().await;
    let mut shell = ClientShell::new(server.transport().await);
    let mut other = server.transport().await;

    shell.load().await.unwrap();
    other
        .add_item("bread".to_string(), String::new(), None)
        .await
        .unwrap();
    assert!(shell.state().items.is_empty());

    shell.add_item("milk", "", "").await.unwrap();
    let texts: Vec<&str> = shell
        .state()
        .items
        .iter()
        .map(|i| i.text.as_str())
        .collect();
    assert_eq!(texts, ["bread", "milk"]);
}

#[tokio::test]
async fn test_shell_failed_delete_keeps_cache() {
    let server = spawn_server().await;
    let mut shell = ClientShell::new(server.transport().await);
    shell.add_item("milk", "", "").await.unwrap();

    let err = shell.delete_item(7).await.unwrap_err();
    assert!(matches!(err, ClientError::Store(_)));
    assert_eq!(shell.state().items.len(), 1);
    let note = shell.state().notification.as_ref().unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.message, "Failed to delete item: Item not found: 7");
    assert!(!shell.state().is_busy());
}

#[tokio::test]
async fn test_daemon_info_reports_count() {
    let server = spawn_server().await;
    let mut transport = server.transport().await;
    transport
        .add_item("milk".to_string(), String::new(), None)
        .await
        .unwrap();

    let info = transport.daemon_info().await.unwrap();
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(info.item_count, 1);
}

#[tokio::test]
async fn test_shutdown_stops_server() {
    let server = spawn_server().await;
    let mut transport = server.transport().await;

    let resp = transport.shutdown(0).await.unwrap();
    assert!(resp.success);
    drop(transport);

    let joined = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop in time");
    assert!(joined.unwrap().is_ok());
}
