//! Inventory models
//!
//! Rust structs representing inventory entities.
//! All models use serde for serialization to the frontend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fixed set of supply categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Yarn,
    Fabric,
    Tool,
    Notion,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Yarn,
        Category::Fabric,
        Category::Tool,
        Category::Notion,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Yarn => "Yarn",
            Category::Fabric => "Fabric",
            Category::Tool => "Tool",
            Category::Notion => "Notion",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yarn" => Ok(Category::Yarn),
            "Fabric" => Ok(Category::Fabric),
            "Tool" => Ok(Category::Tool),
            "Notion" => Ok(Category::Notion),
            "Other" => Ok(Category::Other),
            "" => Err(AppError::Validation("Category is required".to_string())),
            other => Err(AppError::Validation(format!(
                "Unknown category: {other}. Valid categories are Yarn, Fabric, Tool, Notion, Other"
            ))),
        }
    }
}

/// Fixed set of quantity units, serialized as their short form labels
/// ("skein", "g", "m", "yd", "pair", "pcs").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "skein")]
    Skein,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "yd")]
    Yard,
    #[serde(rename = "pair")]
    Pair,
    #[serde(rename = "pcs")]
    Piece,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Skein,
        Unit::Gram,
        Unit::Meter,
        Unit::Yard,
        Unit::Pair,
        Unit::Piece,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Skein => "skein",
            Unit::Gram => "g",
            Unit::Meter => "m",
            Unit::Yard => "yd",
            Unit::Pair => "pair",
            Unit::Piece => "pcs",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skein" => Ok(Unit::Skein),
            "g" => Ok(Unit::Gram),
            "m" => Ok(Unit::Meter),
            "yd" => Ok(Unit::Yard),
            "pair" => Ok(Unit::Pair),
            "pcs" => Ok(Unit::Piece),
            "" => Err(AppError::Validation("Unit is required".to_string())),
            other => Err(AppError::Validation(format!(
                "Unknown unit: {other}. Valid units are skein, g, m, yd, pair, pcs"
            ))),
        }
    }
}

/// A craft supply inventory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supply {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: Unit,
    pub color: String,
    pub brand: String,
    /// Insertion-ordered; order is preserved but not significant for matching
    pub tags: Vec<String>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a new supply, produced by the service layer.
/// The store never sees unvalidated form input.
#[derive(Debug, Clone)]
pub struct SupplyDraft {
    pub name: String,
    pub category: Category,
    pub quantity: f64,
    pub unit: Unit,
    pub color: String,
    pub brand: String,
    pub tags: Vec<String>,
    pub notes: String,
}

/// Create supply request, as submitted by the add form.
/// Category, unit, and tags arrive as raw strings and are parsed during
/// validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSupplyRequest {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub brand: String,
    /// Comma-separated, as typed in the form
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub notes: String,
}

/// Update supply request from the edit form. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSupplyRequest {
    pub id: u64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub tags: Option<String>,
    pub notes: Option<String>,
}
