//! Inventory service
//!
//! High-level business logic for supplies: validation at the form boundary,
//! CRUD against the in-memory store, and the view-state command handlers
//! behind the inventory list. Each handler mutates state and returns a
//! result; rendering is entirely the frontend's concern.

use serde::Serialize;

use crate::config::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::error::{AppError, Result};
use crate::store::{
    query_visible, CreateSupplyRequest, InventoryStore, SortFilterRequest, Supply, SupplyDraft,
    UpdateSupplyRequest, ViewState,
};

/// One rendered page of the inventory list
#[derive(Debug, Clone, Serialize)]
pub struct SupplyPage {
    pub items: Vec<Supply>,
    /// Count of supplies passing the filters, before pagination
    pub total_matches: usize,
    pub page_index: usize,
    pub page_count: usize,
}

/// Service owning the supply store and the list view state for one session
pub struct InventoryService {
    store: InventoryStore,
    view: ViewState,
}

impl InventoryService {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
        }
    }

    // ===== CRUD =====

    /// Create a new supply from the add form
    pub fn create_supply(&mut self, req: CreateSupplyRequest) -> Result<Supply> {
        tracing::info!("Creating supply: {}", req.name);

        let draft = validate_draft(&req)?;
        let supply = self.store.create(draft);

        tracing::info!("Supply created successfully: {}", supply.id);
        Ok(supply)
    }

    /// Get a supply by id
    pub fn get_supply(&self, id: u64) -> Result<Supply> {
        self.store
            .find_by_id(id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    /// Apply edits from the edit form. Every provided field is validated
    /// before any of them is applied, so a rejected edit leaves the record
    /// untouched.
    pub fn update_supply(&mut self, req: UpdateSupplyRequest) -> Result<Supply> {
        tracing::debug!("Updating supply: {}", req.id);

        let name = req.name.as_deref().map(validate_name).transpose()?;
        let category = req
            .category
            .as_deref()
            .map(|c| c.trim().parse())
            .transpose()?;
        let quantity = req.quantity.map(validate_quantity).transpose()?;
        let unit = req.unit.as_deref().map(|u| u.trim().parse()).transpose()?;
        let tags = req.tags.as_deref().map(parse_tags);

        let updated = self.store.update_with(req.id, |s| {
            if let Some(name) = name {
                s.name = name;
            }
            if let Some(category) = category {
                s.category = category;
            }
            if let Some(quantity) = quantity {
                s.quantity = quantity;
            }
            if let Some(unit) = unit {
                s.unit = unit;
            }
            if let Some(color) = req.color {
                s.color = color.trim().to_string();
            }
            if let Some(brand) = req.brand {
                s.brand = brand.trim().to_string();
            }
            if let Some(tags) = tags {
                s.tags = tags;
            }
            if let Some(notes) = req.notes {
                s.notes = notes.trim().to_string();
            }
        })?;

        self.clamp_page_index();
        tracing::debug!("Supply updated successfully: {}", updated.id);
        Ok(updated)
    }

    /// Delete a supply
    pub fn delete_supply(&mut self, id: u64) -> Result<()> {
        tracing::info!("Deleting supply: {}", id);

        self.store.delete(id)?;
        self.clamp_page_index();

        tracing::info!("Supply deleted successfully: {}", id);
        Ok(())
    }

    // ===== List view commands =====

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Submit the search box; resets to the first page
    pub fn set_search(&mut self, query: &str) -> SupplyPage {
        self.view.search_query = query.trim().to_string();
        self.view.page_index = 0;
        self.current_page()
    }

    /// Apply the sort & filter dialog atomically; resets to the first page
    pub fn apply_sort_filter(&mut self, req: SortFilterRequest) -> SupplyPage {
        self.view.sort_by = req.sort_by;
        self.view.sort_dir = req.sort_dir;
        self.view.filter_categories = req.filter_categories;
        self.view.filter_units = req.filter_units;
        self.view.filter_color = req.filter_color.trim().to_string();
        self.view.filter_tags = req.filter_tags.trim().to_string();
        self.view.page_index = 0;
        self.current_page()
    }

    /// The dialog's "Clear all": search, sort, and filters back to defaults
    pub fn clear_filters(&mut self) -> SupplyPage {
        self.view.clear();
        self.current_page()
    }

    /// Jump to a page, clamped to the last non-empty page
    pub fn set_page(&mut self, index: usize) -> SupplyPage {
        let last = self.page_count().saturating_sub(1);
        self.view.page_index = index.min(last);
        self.current_page()
    }

    pub fn next_page(&mut self) -> SupplyPage {
        self.set_page(self.view.page_index.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> SupplyPage {
        self.set_page(self.view.page_index.saturating_sub(1))
    }

    pub fn set_page_size(&mut self, size: usize) -> Result<SupplyPage> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(AppError::Validation(format!(
                "Page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"
            )));
        }
        self.view.page_size = size;
        self.clamp_page_index();
        Ok(self.current_page())
    }

    /// The currently visible page plus totals, for rendering
    pub fn current_page(&self) -> SupplyPage {
        let (items, total_matches) = query_visible(self.store.supplies(), &self.view);
        SupplyPage {
            items,
            total_matches,
            page_index: self.view.page_index,
            page_count: page_count_for(total_matches, self.view.page_size),
        }
    }

    fn page_count(&self) -> usize {
        let (_, total) = query_visible(self.store.supplies(), &self.view);
        page_count_for(total, self.view.page_size)
    }

    // The pure engine never self-corrects an out-of-range page index; the
    // service re-clamps after any change that can shrink the filtered total.
    fn clamp_page_index(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.view.page_index > last {
            self.view.page_index = last;
        }
    }
}

fn page_count_for(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    Ok(name.to_string())
}

fn validate_quantity(quantity: f64) -> Result<f64> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(AppError::Validation(
            "Quantity must be a number ≥ 0".to_string(),
        ));
    }
    Ok(quantity)
}

/// Split a comma-separated form field into trimmed, non-empty tags
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn validate_draft(req: &CreateSupplyRequest) -> Result<SupplyDraft> {
    let name = validate_name(&req.name)?;
    let category = req.category.trim().parse()?;
    let unit = req.unit.trim().parse()?;
    let quantity = validate_quantity(req.quantity)?;

    Ok(SupplyDraft {
        name,
        category,
        quantity,
        unit,
        color: req.color.trim().to_string(),
        brand: req.brand.trim().to_string(),
        tags: parse_tags(&req.tags),
        notes: req.notes.trim().to_string(),
    })
}
