//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `supplies`: Supply CRUD and the list view's query commands
//! - `session`: Login/logout for the welcome screen

pub mod session;
pub mod supplies;

// Re-export all commands for convenient registration in main.rs
pub use session::*;
pub use supplies::*;

use std::sync::{Mutex, MutexGuard};

use crate::error::{AppError, Result};

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::Generic("Application state lock poisoned".to_string()))
}

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub fn get_app_info() -> AppInfo {
    AppInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub version: String,
}
