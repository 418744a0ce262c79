//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use std::sync::Mutex;

use crate::services::{InventoryService, SessionService};
use crate::store::InventoryStore;

/// Central application state holding all services.
///
/// The state backs exactly one interactive session; commands run on Tauri's
/// thread pool, so the services sit behind plain mutexes. No finer locking
/// is needed for a single-user desktop tool.
pub struct AppState {
    pub inventory: Mutex<InventoryService>,
    pub session: Mutex<SessionService>,
}

impl AppState {
    /// State seeded with the demo inventory shown at startup
    pub fn new() -> Self {
        Self::with_store(InventoryStore::seeded())
    }

    pub fn with_store(store: InventoryStore) -> Self {
        Self {
            inventory: Mutex::new(InventoryService::new(store)),
            session: Mutex::new(SessionService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application setup - called once on startup
#[cfg(feature = "tauri")]
pub fn setup(app: &mut tauri::App) -> crate::error::Result<()> {
    use tauri::Manager;

    tracing::info!("Initializing application state");
    app.manage(AppState::new());
    tracing::info!("Application initialized successfully");

    Ok(())
}
