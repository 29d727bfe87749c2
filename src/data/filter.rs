use std::collections::BTreeSet;

use super::model::StartupDataset;

// ---------------------------------------------------------------------------
// Filter predicate: category membership, year range, free-text search
// ---------------------------------------------------------------------------

/// Active filter selections.
///
/// `categories` holds the *selected* categories: a record passes only when
/// its category is in the set, so an empty set hides everything (matches
/// deselecting every sector in the UI). The year range is inclusive on both
/// ends. An empty search string means "no text filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub year_range: (i32, i32),
    pub search: String,
}

/// Initialise a [`FilterState`] that shows everything: all categories
/// selected, year range spanning the whole dataset.
pub fn init_filter_state(dataset: &StartupDataset) -> FilterState {
    FilterState {
        categories: dataset.categories.iter().cloned().collect(),
        year_range: dataset.year_bounds.unwrap_or((0, 0)),
        search: String::new(),
    }
}

/// Return indices of startups that pass all active filters.
pub fn filtered_indices(dataset: &StartupDataset, filters: &FilterState) -> Vec<usize> {
    let needle = filters.search.trim().to_lowercase();
    let (year_lo, year_hi) = filters.year_range;

    dataset
        .startups
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            if !filters.categories.contains(&s.category) {
                return false;
            }
            if s.year < year_lo || s.year > year_hi {
                return false;
            }
            if !needle.is_empty() && !s.matches_search(&needle) {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Startup;

    fn dataset() -> StartupDataset {
        let make = |name: &str, loc: &str, desc: &str, year: i32, cat: &str| Startup {
            name: name.to_string(),
            location: loc.to_string(),
            description: desc.to_string(),
            year,
            category: cat.to_string(),
            money_text: String::new(),
            funding_b: 0.0,
            valuation_b: 0.0,
        };
        StartupDataset::from_startups(vec![
            make("NeuroForge", "San Francisco", "Frontier models", 2021, "Foundation Models"),
            make("Lumen AI", "London", "Multilingual LLMs", 2022, "Foundation Models"),
            make("Servomind", "Tokyo", "Warehouse robots", 2019, "Robotics"),
        ])
    }

    #[test]
    fn default_state_shows_everything() {
        let ds = dataset();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2]);
    }

    #[test]
    fn category_filter() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.categories.remove("Foundation Models");
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);

        // nothing selected → nothing visible
        filters.categories.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn year_range_is_inclusive() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.year_range = (2021, 2022);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);
        filters.year_range = (2019, 2019);
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);
    }

    #[test]
    fn search_matches_name_description_and_location_case_insensitively() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);

        filters.search = "LUMEN".to_string();
        assert_eq!(filtered_indices(&ds, &filters), vec![1]);

        filters.search = "tokyo".to_string();
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);

        filters.search = "models".to_string();
        assert_eq!(filtered_indices(&ds, &filters), vec![0]);

        filters.search = "quantum".to_string();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn filters_combine() {
        let ds = dataset();
        let mut filters = init_filter_state(&ds);
        filters.search = "o".to_string(); // matches all three somewhere
        filters.year_range = (2020, 2022);
        filters.categories.remove("Robotics");
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);
    }
}
