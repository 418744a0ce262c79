//! Supply commands
//!
//! CRUD operations and list view queries for supplies.

use tauri::State;

use super::lock;
use crate::app::AppState;
use crate::error::Result;
use crate::services::SupplyPage;
use crate::store::{
    Category, CreateSupplyRequest, SortFilterRequest, Supply, Unit, UpdateSupplyRequest, ViewState,
};

/// Fixed choices for the add/edit form combo boxes
#[derive(serde::Serialize)]
pub struct FormOptions {
    pub categories: Vec<&'static str>,
    pub units: Vec<&'static str>,
}

#[tauri::command]
pub fn get_form_options() -> FormOptions {
    FormOptions {
        categories: Category::ALL.iter().map(Category::label).collect(),
        units: Unit::ALL.iter().map(Unit::label).collect(),
    }
}

/// Current view state, used to pre-fill the sort & filter dialog
#[tauri::command]
pub fn get_view_state(state: State<'_, AppState>) -> Result<ViewState> {
    Ok(lock(&state.inventory)?.view().clone())
}

/// Create a new supply from the add form
#[tauri::command]
pub fn create_supply(state: State<'_, AppState>, req: CreateSupplyRequest) -> Result<Supply> {
    lock(&state.inventory)?.create_supply(req)
}

/// Get a supply by id for the detail view
#[tauri::command]
pub fn get_supply(state: State<'_, AppState>, id: u64) -> Result<Supply> {
    lock(&state.inventory)?.get_supply(id)
}

/// Apply edits from the edit form
#[tauri::command]
pub fn update_supply(state: State<'_, AppState>, req: UpdateSupplyRequest) -> Result<Supply> {
    lock(&state.inventory)?.update_supply(req)
}

/// Delete a supply (after the frontend's confirmation dialog)
#[tauri::command]
pub fn delete_supply(state: State<'_, AppState>, id: u64) -> Result<()> {
    lock(&state.inventory)?.delete_supply(id)
}

/// The currently visible page of the inventory list
#[tauri::command]
pub fn query_supplies(state: State<'_, AppState>) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.current_page())
}

/// Submit the search box
#[tauri::command]
pub fn set_search(state: State<'_, AppState>, query: String) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.set_search(&query))
}

/// Apply the sort & filter dialog
#[tauri::command]
pub fn apply_sort_filter(state: State<'_, AppState>, req: SortFilterRequest) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.apply_sort_filter(req))
}

/// The sort & filter dialog's "Clear all"
#[tauri::command]
pub fn clear_filters(state: State<'_, AppState>) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.clear_filters())
}

/// Jump to a page of the inventory list
#[tauri::command]
pub fn set_page(state: State<'_, AppState>, index: usize) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.set_page(index))
}

#[tauri::command]
pub fn next_page(state: State<'_, AppState>) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.next_page())
}

#[tauri::command]
pub fn prev_page(state: State<'_, AppState>) -> Result<SupplyPage> {
    Ok(lock(&state.inventory)?.prev_page())
}

/// Change how many supplies are shown per page
#[tauri::command]
pub fn set_page_size(state: State<'_, AppState>, size: usize) -> Result<SupplyPage> {
    lock(&state.inventory)?.set_page_size(size)
}
