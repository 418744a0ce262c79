//! In-memory inventory store
//!
//! This module provides:
//! - Model definitions
//! - The session-owned record store with CRUD operations
//! - The pure query engine behind the inventory list

pub mod inventory;
pub mod models;
pub mod query;

pub use inventory::InventoryStore;
pub use models::*;
pub use query::{query_visible, SortDir, SortFilterRequest, SortKey, ViewState};
