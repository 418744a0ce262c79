//! Application configuration constants
//!
//! Central location for configuration constants and validation boundaries
//! used throughout the application.

// ===== Inventory List =====

/// Number of supplies shown per page of the inventory list
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Smallest allowed page size.
/// A page size of zero would make every page empty and the page count
/// undefined.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest allowed page size.
/// Keeps a single render of the list bounded.
pub const MAX_PAGE_SIZE: usize = 100;
