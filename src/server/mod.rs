//! gRPC surface of the item store.
//!
//! [`ShoppingListService`] owns the shared [`ItemStore`](crate::item::ItemStore)
//! and a shutdown channel; each RPC is delegated to a function in
//! [`handlers`] so handlers can be exercised without a transport.

pub mod convert_entity;
pub mod error_mapping;
pub mod handlers;
pub mod structured_error;
mod trait_impl;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{watch, RwLock};

use crate::item::ItemStore;

// Import generated protobuf types
pub mod proto {
    #![allow(clippy::pedantic)]
    #![allow(clippy::all)]
    tonic::include_proto!("shopping_list");
}

/// File descriptor set for gRPC reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("shopping_list_descriptor");

/// The item store as shared between concurrent RPCs.
pub type SharedStore = Arc<RwLock<ItemStore>>;

/// Signal type for daemon shutdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutdownSignal {
    None,
    Shutdown,
}

pub struct ShoppingListService {
    store: SharedStore,
    shutdown_tx: Arc<watch::Sender<ShutdownSignal>>,
    exe_path: Option<PathBuf>,
}

impl ShoppingListService {
    #[must_use]
    pub fn new(
        store: SharedStore,
        shutdown_tx: Arc<watch::Sender<ShutdownSignal>>,
        exe_path: Option<PathBuf>,
    ) -> Self {
        Self {
            store,
            shutdown_tx,
            exe_path,
        }
    }

    /// Handle to the store this service mutates.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

/// Create an empty store ready to be handed to a [`ShoppingListService`].
#[must_use]
pub fn new_shared_store() -> SharedStore {
    Arc::new(RwLock::new(ItemStore::new()))
}
