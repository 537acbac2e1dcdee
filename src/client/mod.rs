//! Client shell for the shopping-list daemon.
//!
//! [`ShellState`] holds everything the view needs: the last fetched snapshot,
//! form inputs, the in-flight action guard and a transient notification.
//! [`ClientShell`] drives one action at a time against an [`ItemTransport`]
//! and refetches the whole list after every confirmed mutation.

mod error;
mod grpc;
mod render;
mod shell;
mod state;
mod transport;

pub use error::ClientError;
pub use grpc::GrpcTransport;
pub use render::{render_item, render_list};
pub use shell::ClientShell;
pub use state::{
    ActionToken, EditForm, Mutation, NewItemForm, Notification, NotificationKind, ShellState,
};
pub use transport::ItemTransport;
