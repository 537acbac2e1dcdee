//! Shopping-list item domain.
//!
//! [`ItemStore`] owns the authoritative collection of [`ShoppingItem`]s and
//! performs every mutation. It is a plain owned value; the server wraps it in
//! a lock and hands it to whatever serves requests.

pub mod error;
pub mod store;
pub mod types;

pub use error::ItemError;
pub use store::ItemStore;
pub use types::{ShoppingItem, Timestamp};
