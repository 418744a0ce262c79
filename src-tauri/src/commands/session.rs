//! Session commands
//!
//! Login and logout for the welcome screen.

use tauri::State;

use super::lock;
use crate::app::AppState;
use crate::error::Result;

/// Log in with any non-empty credentials
#[tauri::command]
pub fn login(state: State<'_, AppState>, username: String, password: String) -> Result<String> {
    lock(&state.session)?.login(&username, &password)
}

/// End the current session
#[tauri::command]
pub fn logout(state: State<'_, AppState>) -> Result<()> {
    lock(&state.session)?.logout();
    Ok(())
}

/// The logged-in user, if any
#[tauri::command]
pub fn current_user(state: State<'_, AppState>) -> Result<Option<String>> {
    Ok(lock(&state.session)?.current_user().map(String::from))
}
