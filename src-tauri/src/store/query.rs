//! Inventory query engine
//!
//! The filter → sort → paginate pipeline behind the inventory list. The
//! engine is a pure read over a borrowed supply slice and view state; it
//! never mutates either. Callers re-clamp the page index when the filtered
//! total changes; an out-of-range index simply yields an empty page.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::models::{Category, Supply, Unit};
use crate::config::DEFAULT_PAGE_SIZE;

/// Sort key for the inventory list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-folded lexicographic; also the fallback when no sort was chosen
    #[default]
    Name,
    Quantity,
    Updated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

/// Ephemeral search/sort/filter/pagination parameters for one session.
/// Empty filter sets and empty filter strings mean "no restriction".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_dir: SortDir,
    #[serde(default)]
    pub filter_categories: BTreeSet<Category>,
    #[serde(default)]
    pub filter_units: BTreeSet<Unit>,
    #[serde(default)]
    pub filter_color: String,
    #[serde(default)]
    pub filter_tags: String,
    pub page_size: usize,
    /// Zero-based
    pub page_index: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_by: SortKey::default(),
            sort_dir: SortDir::default(),
            filter_categories: BTreeSet::new(),
            filter_units: BTreeSet::new(),
            filter_color: String::new(),
            filter_tags: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
        }
    }
}

impl ViewState {
    /// Reset search, sort, and filters to their defaults, keeping page size.
    pub fn clear(&mut self) {
        let page_size = self.page_size;
        *self = Self {
            page_size,
            ..Self::default()
        };
    }
}

/// Payload of the sort & filter dialog's Apply action
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SortFilterRequest {
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub sort_dir: SortDir,
    #[serde(default)]
    pub filter_categories: BTreeSet<Category>,
    #[serde(default)]
    pub filter_units: BTreeSet<Unit>,
    #[serde(default)]
    pub filter_color: String,
    #[serde(default)]
    pub filter_tags: String,
}

fn matches_filters(supply: &Supply, view: &ViewState) -> bool {
    // Search across name, category, and tags
    let query = view.search_query.trim().to_lowercase();
    if !query.is_empty() {
        let haystack = format!(
            "{} {} {}",
            supply.name,
            supply.category,
            supply.tags.join(" ")
        )
        .to_lowercase();
        if !haystack.contains(&query) {
            return false;
        }
    }

    if !view.filter_categories.is_empty() && !view.filter_categories.contains(&supply.category) {
        return false;
    }
    if !view.filter_units.is_empty() && !view.filter_units.contains(&supply.unit) {
        return false;
    }
    // A supply with no color recorded fails any non-empty color filter
    if !view.filter_color.is_empty()
        && !supply
            .color
            .to_lowercase()
            .contains(&view.filter_color.to_lowercase())
    {
        return false;
    }
    // Substring match in the joined tags
    if !view.filter_tags.is_empty()
        && !supply
            .tags
            .join(" ")
            .to_lowercase()
            .contains(&view.filter_tags.to_lowercase())
    {
        return false;
    }

    true
}

fn compare_by_key(a: &Supply, b: &Supply, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Quantity => a.quantity.total_cmp(&b.quantity),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
    }
}

/// Apply the view's filters, sort, and pagination to `supplies`.
///
/// Returns the visible page and the total number of supplies that passed the
/// filter step (before pagination). The sort is stable in both directions:
/// supplies comparing equal on the key keep their relative order from the
/// input collection, because descending order reverses the key comparison
/// rather than the sorted sequence.
pub fn query_visible(supplies: &[Supply], view: &ViewState) -> (Vec<Supply>, usize) {
    let mut rows: Vec<&Supply> = supplies
        .iter()
        .filter(|s| matches_filters(s, view))
        .collect();

    rows.sort_by(|a, b| {
        let ord = compare_by_key(a, b, view.sort_by);
        match view.sort_dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });

    let total = rows.len();
    let start = view.page_index.saturating_mul(view.page_size);
    let end = (start.saturating_add(view.page_size)).min(total);
    let page = if start >= total {
        Vec::new()
    } else {
        rows[start..end].iter().map(|s| (*s).clone()).collect()
    };

    (page, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn supply(id: u64, name: &str, category: Category, quantity: f64) -> Supply {
        let when = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::days(id as i64);
        Supply {
            id,
            name: name.to_string(),
            category,
            quantity,
            unit: Unit::Piece,
            color: String::new(),
            brand: String::new(),
            tags: Vec::new(),
            notes: String::new(),
            created_at: when,
            updated_at: when,
        }
    }

    fn with_tags(mut s: Supply, tags: &[&str]) -> Supply {
        s.tags = tags.iter().map(|t| t.to_string()).collect();
        s
    }

    fn with_color(mut s: Supply, color: &str) -> Supply {
        s.color = color.to_string();
        s
    }

    #[test]
    fn empty_view_matches_everything_in_name_order() {
        let supplies = vec![
            supply(1, "Zinc Buttons", Category::Notion, 5.0),
            supply(2, "Ash Yarn", Category::Yarn, 2.0),
        ];

        let (page, total) = query_visible(&supplies, &ViewState::default());

        assert_eq!(total, 2);
        assert_eq!(page[0].name, "Ash Yarn");
        assert_eq!(page[1].name, "Zinc Buttons");
    }

    #[test]
    fn search_matches_name_or_tags_case_insensitively() {
        let supplies = vec![
            supply(1, "Cotton Fabric", Category::Fabric, 1.0),
            with_tags(supply(2, "Quilt Scraps", Category::Fabric, 1.0), &["cotton"]),
            supply(3, "Wool Yarn", Category::Yarn, 1.0),
        ];

        let view = ViewState {
            search_query: "cotton".to_string(),
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert_eq!(total, 2);
        assert!(page.iter().all(|s| s.name != "Wool Yarn"));
    }

    #[test]
    fn search_matches_category_label() {
        let supplies = vec![
            supply(1, "Clips", Category::Notion, 10.0),
            supply(2, "Shears", Category::Tool, 1.0),
        ];

        let view = ViewState {
            search_query: " notion ".to_string(), // trimmed before matching
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Clips");
    }

    #[test]
    fn all_filters_must_hold() {
        let supplies = vec![
            with_color(supply(1, "DK Yarn", Category::Yarn, 3.0), "Blue"),
            with_color(supply(2, "Sock Yarn", Category::Yarn, 1.0), "Red"),
            with_color(supply(3, "Blue Fabric", Category::Fabric, 2.0), "Blue"),
        ];

        let view = ViewState {
            filter_categories: BTreeSet::from([Category::Yarn]),
            filter_color: "blue".to_string(),
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert_eq!(total, 1);
        assert_eq!(page[0].name, "DK Yarn");
    }

    #[test]
    fn unit_filter_restricts_matches() {
        let mut a = supply(1, "Thread", Category::Notion, 200.0);
        a.unit = Unit::Gram;
        let b = supply(2, "Buttons", Category::Notion, 12.0);

        let view = ViewState {
            filter_units: BTreeSet::from([Unit::Gram]),
            ..ViewState::default()
        };
        let (page, total) = query_visible(&[a, b], &view);

        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Thread");
    }

    #[test]
    fn color_filter_excludes_supplies_without_color() {
        let supplies = vec![
            with_color(supply(1, "Fat Quarter", Category::Fabric, 1.0), "Sky Blue"),
            supply(2, "Needles", Category::Tool, 1.0), // color == ""
        ];

        let view = ViewState {
            filter_color: "blue".to_string(),
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert_eq!(total, 1);
        assert_eq!(page[0].name, "Fat Quarter");
    }

    #[test]
    fn tag_filter_is_substring_of_joined_tags() {
        let supplies = vec![
            with_tags(supply(1, "Floss", Category::Notion, 24.0), &["embroidery", "assorted"]),
            with_tags(supply(2, "Elastic", Category::Notion, 5.0), &["waistband"]),
        ];

        let view = ViewState {
            filter_tags: "broid".to_string(),
            ..ViewState::default()
        };
        let (_, total) = query_visible(&supplies, &view);

        assert_eq!(total, 1);
    }

    #[test]
    fn sort_by_quantity_descending() {
        let supplies = vec![
            supply(1, "A", Category::Other, 2.0),
            supply(2, "B", Category::Other, 10.0),
            supply(3, "C", Category::Other, 0.5),
        ];

        let view = ViewState {
            sort_by: SortKey::Quantity,
            sort_dir: SortDir::Desc,
            ..ViewState::default()
        };
        let (page, _) = query_visible(&supplies, &view);

        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn sort_by_updated_is_chronological() {
        // `supply` derives updated_at from the id, so id order is time order
        let supplies = vec![
            supply(3, "Newest", Category::Other, 1.0),
            supply(1, "Oldest", Category::Other, 1.0),
            supply(2, "Middle", Category::Other, 1.0),
        ];

        let view = ViewState {
            sort_by: SortKey::Updated,
            ..ViewState::default()
        };
        let (page, _) = query_visible(&supplies, &view);

        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Oldest", "Middle", "Newest"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys_in_both_directions() {
        let supplies = vec![
            supply(1, "First", Category::Other, 5.0),
            supply(2, "Second", Category::Other, 5.0),
            supply(3, "Third", Category::Other, 1.0),
        ];

        let asc = ViewState {
            sort_by: SortKey::Quantity,
            ..ViewState::default()
        };
        let (page, _) = query_visible(&supplies, &asc);
        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Third", "First", "Second"]);

        // Descending reverses key order only; ties keep input order
        let desc = ViewState {
            sort_by: SortKey::Quantity,
            sort_dir: SortDir::Desc,
            ..ViewState::default()
        };
        let (page, _) = query_visible(&supplies, &desc);
        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn name_sort_is_case_folded() {
        let supplies = vec![
            supply(1, "zinc buttons", Category::Notion, 1.0),
            supply(2, "Ash Yarn", Category::Yarn, 1.0),
            supply(3, "BATTING", Category::Fabric, 1.0),
        ];

        let (page, _) = query_visible(&supplies, &ViewState::default());
        let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ash Yarn", "BATTING", "zinc buttons"]);
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let supplies: Vec<Supply> = (1..=13)
            .map(|i| supply(i, &format!("Item {i:02}"), Category::Other, 1.0))
            .collect();

        let view = ViewState {
            page_index: 1,
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert_eq!(total, 13);
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].name, "Item 11");
        assert_eq!(page[2].name, "Item 13");
    }

    #[test]
    fn page_length_law_holds_for_every_index() {
        let supplies: Vec<Supply> = (1..=13)
            .map(|i| supply(i, &format!("Item {i:02}"), Category::Other, 1.0))
            .collect();

        for page_index in 0..5 {
            let view = ViewState {
                page_index,
                page_size: 4,
                ..ViewState::default()
            };
            let (page, total) = query_visible(&supplies, &view);

            let expected = total
                .saturating_sub(page_index * 4)
                .min(4);
            assert_eq!(page.len(), expected, "page_index={page_index}");
            assert_eq!(total, 13);
        }
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let supplies = vec![supply(1, "Only", Category::Other, 1.0)];

        let view = ViewState {
            page_index: 10,
            ..ViewState::default()
        };
        let (page, total) = query_visible(&supplies, &view);

        assert!(page.is_empty());
        assert_eq!(total, 1);
    }

    #[test]
    fn total_ignores_pagination() {
        let supplies: Vec<Supply> = (1..=25)
            .map(|i| supply(i, &format!("Item {i:02}"), Category::Other, 1.0))
            .collect();

        for page_index in [0, 1, 2, 9] {
            let view = ViewState {
                page_index,
                ..ViewState::default()
            };
            let (_, total) = query_visible(&supplies, &view);
            assert_eq!(total, 25);
        }
    }
}
