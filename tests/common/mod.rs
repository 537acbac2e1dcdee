//! Common test utilities

use std::sync::Arc;

use futures::stream;
use shopping_list_daemon::server::proto::shopping_list_server::ShoppingListServer;
use shopping_list_daemon::server::{
    new_shared_store, SharedStore, ShoppingListService, ShutdownSignal,
};
use shopping_list_daemon::GrpcTransport;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tonic::transport::Server;

/// A daemon serving on an ephemeral local port for the life of a test.
pub struct TestServer {
    pub url: String,
    pub store: SharedStore,
    pub handle: JoinHandle<Result<(), tonic::transport::Error>>,
}

impl TestServer {
    #[allow(dead_code)] // Not every test file talks through the client
    pub async fn transport(&self) -> GrpcTransport {
        GrpcTransport::connect(self.url.clone())
            .await
            .expect("Failed to connect to test server")
    }
}

/// Start a daemon on 127.0.0.1:0 and return once it is accepting connections.
pub async fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let store = new_shared_store();
    let (shutdown_tx, mut shutdown_rx) = watch::channel(ShutdownSignal::None);
    let service = ShoppingListService::new(store.clone(), Arc::new(shutdown_tx), None);

    let incoming = Box::pin(stream::unfold(listener, |listener| async move {
        let conn = listener.accept().await.map(|(socket, _)| socket);
        Some((conn, listener))
    }));

    let handle = tokio::spawn(
        Server::builder()
            .add_service(ShoppingListServer::new(service))
            .serve_with_incoming_shutdown(incoming, async move {
                while shutdown_rx.changed().await.is_ok() {
                    if *shutdown_rx.borrow() == ShutdownSignal::Shutdown {
                        break;
                    }
                }
            }),
    );

    TestServer {
        url: format!("http://{addr}"),
        store,
        handle,
    }
}
