// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod cli;
pub mod client;
pub mod cors;
pub mod grpc_logging;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod server;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use client::{ClientError, ClientShell, GrpcTransport, ItemTransport, ShellState};
pub use item::{ItemError, ItemStore, ShoppingItem, Timestamp};
pub use server::{new_shared_store, SharedStore, ShoppingListService, ShutdownSignal};
pub use user_config::{load_user_config, UserConfig};
