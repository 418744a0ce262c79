//! Services module
//!
//! Business logic services that coordinate between commands and the store.

pub mod inventory;
pub mod session;

pub use inventory::{InventoryService, SupplyPage};
pub use session::SessionService;
