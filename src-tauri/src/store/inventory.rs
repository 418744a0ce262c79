//! In-memory inventory store
//!
//! Owns the authoritative supply collection for one interactive session.
//! All state is transient; nothing survives process exit. Tests construct
//! independent instances, so the store is never a process-wide singleton.

use chrono::{DateTime, TimeZone, Utc};

use super::models::{Category, Supply, SupplyDraft, Unit};
use crate::error::{AppError, Result};

/// Session-owned supply collection with CRUD operations
#[derive(Debug, Clone)]
pub struct InventoryStore {
    supplies: Vec<Supply>,
    next_id: u64,
}

impl InventoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            supplies: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with the demo inventory shown at startup
    pub fn seeded() -> Self {
        let supplies = seed_supplies();
        // Ids are assigned monotonically and never reused within a session,
        // so the counter continues past the highest seeded id.
        let next_id = supplies.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self { supplies, next_id }
    }

    /// Add a validated supply to the collection, assigning the next unused id
    /// and stamping both timestamps.
    pub fn create(&mut self, draft: SupplyDraft) -> Supply {
        let now = Utc::now();
        let supply = Supply {
            id: self.next_id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            unit: draft.unit,
            color: draft.color,
            brand: draft.brand,
            tags: draft.tags,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.supplies.push(supply.clone());

        tracing::debug!("Created supply: {}", supply.id);
        supply
    }

    /// Apply `mutate` to the supply with the given id and refresh its
    /// `updated_at` timestamp. Fails without touching the collection when the
    /// id is absent.
    pub fn update_with(
        &mut self,
        id: u64,
        mutate: impl FnOnce(&mut Supply),
    ) -> Result<Supply> {
        let supply = self
            .supplies
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound(id))?;

        mutate(supply);
        supply.updated_at = Utc::now();

        tracing::debug!("Updated supply: {}", id);
        Ok(supply.clone())
    }

    /// Remove the supply with the given id. Deleted ids are never reassigned.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let before = self.supplies.len();
        self.supplies.retain(|s| s.id != id);
        if self.supplies.len() == before {
            return Err(AppError::NotFound(id));
        }

        tracing::debug!("Deleted supply: {}", id);
        Ok(())
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Supply> {
        self.supplies.iter().find(|s| s.id == id)
    }

    /// The full collection, in insertion order
    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn len(&self) -> usize {
        self.supplies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supplies.is_empty()
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // Seed dates are fixed, valid calendar dates.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

fn seed_supply(
    id: u64,
    name: &str,
    category: Category,
    quantity: f64,
    unit: Unit,
    color: &str,
    brand: &str,
    tag_list: &[&str],
    notes: &str,
    updated: DateTime<Utc>,
) -> Supply {
    Supply {
        id,
        name: name.to_string(),
        category,
        quantity,
        unit,
        color: color.to_string(),
        brand: brand.to_string(),
        tags: tags(tag_list),
        notes: notes.to_string(),
        created_at: updated,
        updated_at: updated,
    }
}

/// Demo inventory used as the startup data set
fn seed_supplies() -> Vec<Supply> {
    vec![
        seed_supply(
            1,
            "DK Yarn Blue",
            Category::Yarn,
            3.0,
            Unit::Skein,
            "Blue",
            "Cascade",
            &["dk", "wool", "blue"],
            "For winter hat project.",
            seed_date(2026, 1, 19),
        ),
        seed_supply(
            2,
            "Cotton Fabric",
            Category::Fabric,
            2.5,
            Unit::Yard,
            "White",
            "Kona",
            &["cotton", "white", "quilting"],
            "For quilt borders.",
            seed_date(2026, 1, 19),
        ),
        seed_supply(
            3,
            "4mm Needles",
            Category::Tool,
            1.0,
            Unit::Pair,
            "",
            "",
            &[],
            "",
            seed_date(2026, 1, 15),
        ),
        seed_supply(
            4,
            "Worsted Yarn Red",
            Category::Yarn,
            2.0,
            Unit::Skein,
            "Red",
            "Lion Brand",
            &["worsted", "acrylic", "red"],
            "Scarf project.",
            seed_date(2026, 1, 20),
        ),
        seed_supply(
            5,
            "Cotton Batting",
            Category::Fabric,
            1.0,
            Unit::Yard,
            "Natural",
            "Warm & Natural",
            &["batting", "quilt"],
            "Low loft.",
            seed_date(2026, 1, 22),
        ),
        seed_supply(
            6,
            "Zipper 9-inch",
            Category::Notion,
            4.0,
            Unit::Piece,
            "Black",
            "YKK",
            &["zipper", "bags", "notion"],
            "For pouches.",
            seed_date(2026, 1, 18),
        ),
        seed_supply(
            7,
            "All-Purpose Thread",
            Category::Notion,
            200.0,
            Unit::Gram,
            "Ivory",
            "Gutermann",
            &["poly", "thread"],
            "500m spool; approx weight for tracking.",
            seed_date(2026, 1, 23),
        ),
        seed_supply(
            8,
            "Elastic 1-inch",
            Category::Notion,
            5.0,
            Unit::Meter,
            "White",
            "Dritz",
            &["elastic", "waistband"],
            "Non-roll.",
            seed_date(2026, 1, 21),
        ),
        seed_supply(
            9,
            "Embroidery Floss Set",
            Category::Notion,
            24.0,
            Unit::Piece,
            "Assorted",
            "DMC",
            &["floss", "embroidery", "assorted"],
            "24-skein assorted pack.",
            seed_date(2026, 1, 17),
        ),
        seed_supply(
            10,
            "Rotary Cutter Blades 45mm",
            Category::Tool,
            5.0,
            Unit::Piece,
            "",
            "Olfa",
            &["rotary", "blades", "cutting"],
            "Replacement blades.",
            seed_date(2026, 1, 24),
        ),
        seed_supply(
            11,
            "Pins – Glass Head",
            Category::Notion,
            100.0,
            Unit::Piece,
            "Assorted",
            "Clover",
            &["pins", "notion"],
            "Heat-resistant heads.",
            seed_date(2026, 1, 16),
        ),
        seed_supply(
            12,
            "Linen Fabric Natural",
            Category::Fabric,
            1.75,
            Unit::Yard,
            "Natural",
            "Robert Kaufman",
            &["linen", "garment"],
            "Pre-washed.",
            seed_date(2026, 1, 25),
        ),
        seed_supply(
            13,
            "Blocking Mats",
            Category::Tool,
            9.0,
            Unit::Piece,
            "Gray",
            "KnitIQ",
            &["blocking", "knitting"],
            "Interlocking tiles for blocking.",
            seed_date(2026, 1, 26),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> SupplyDraft {
        SupplyDraft {
            name: name.to_string(),
            category: Category::Yarn,
            quantity: 1.0,
            unit: Unit::Skein,
            color: String::new(),
            brand: String::new(),
            tags: Vec::new(),
            notes: String::new(),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = InventoryStore::new();
        let a = store.create(draft("A"));
        let b = store.create(draft("B"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = InventoryStore::new();
        let a = store.create(draft("A"));
        store.delete(a.id).unwrap();

        let b = store.create(draft("B"));
        assert_eq!(b.id, 2);
        assert!(store.find_by_id(a.id).is_none());
    }

    #[test]
    fn update_refreshes_updated_at() {
        let mut store = InventoryStore::new();
        let created = store.create(draft("A"));

        std::thread::sleep(std::time::Duration::from_millis(2));
        let updated = store
            .update_with(created.id, |s| s.name = "Renamed".to_string())
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_missing_id_leaves_collection_unchanged() {
        let mut store = InventoryStore::new();
        store.create(draft("A"));

        let err = store
            .update_with(99, |s| s.name = "nope".to_string())
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(99)));
        assert_eq!(store.find_by_id(1).unwrap().name, "A");
    }

    #[test]
    fn delete_missing_id_is_not_found() {
        let mut store = InventoryStore::new();
        assert!(matches!(store.delete(7), Err(AppError::NotFound(7))));
    }

    #[test]
    fn seeded_store_has_demo_inventory() {
        let store = InventoryStore::seeded();
        assert_eq!(store.len(), 13);
        assert_eq!(store.find_by_id(2).unwrap().name, "Cotton Fabric");

        // Next id continues past the seed data
        let mut store = store;
        let created = store.create(draft("New"));
        assert_eq!(created.id, 14);
    }
}
