// ---------------------------------------------------------------------------
// Startup – one flattened record of the source mapping
// ---------------------------------------------------------------------------

/// A single startup record, flattened out of the category-keyed source file.
///
/// `funding_b` and `valuation_b` are derived once at ingestion from
/// `money_text` and are always finite and non-negative; records are not
/// mutated afterwards. There is no primary key, duplicate names are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Startup {
    pub name: String,
    pub location: String,
    pub description: String,
    pub year: i32,
    /// Grouping key the record was listed under in the source file.
    pub category: String,
    /// Raw free-form funding description (may be empty or "N/A").
    pub money_text: String,
    /// Disclosed funding in billions, 0.0 when unknown/unparseable.
    pub funding_b: f64,
    /// Estimated valuation in billions, 0.0 when unknown/unparseable.
    pub valuation_b: f64,
}

impl Startup {
    /// Case-insensitive substring match against name, description and
    /// location. `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }

    /// Funding as a percentage of valuation, clamped to 0–100.
    /// Zero when no valuation is known.
    pub fn capitalization_pct(&self) -> f64 {
        if self.valuation_b > 0.0 {
            (self.funding_b / self.valuation_b.max(1.0) * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    /// The leading segment of the money text, for compact display.
    /// "Raised $1.2B • Valuation: $6B" → "Raised $1.2B".
    pub fn funding_short(&self) -> &str {
        self.money_text
            .split(['•', '|'])
            .next()
            .unwrap_or("")
            .trim()
    }
}

// ---------------------------------------------------------------------------
// StartupDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full flattened dataset with pre-computed indices for the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupDataset {
    /// All startups (rows), in ingestion order.
    pub startups: Vec<Startup>,
    /// Sorted unique category names.
    pub categories: Vec<String>,
    /// (min, max) founding year across all records, None when empty.
    pub year_bounds: Option<(i32, i32)>,
}

impl StartupDataset {
    /// Build category and year indices from the flattened records.
    pub fn from_startups(startups: Vec<Startup>) -> Self {
        let mut categories: Vec<String> = startups
            .iter()
            .map(|s| s.category.clone())
            .collect();
        categories.sort();
        categories.dedup();

        let year_bounds = startups.iter().map(|s| s.year).fold(None, |acc: Option<(i32, i32)>, y| {
            Some(match acc {
                None => (y, y),
                Some((lo, hi)) => (lo.min(y), hi.max(y)),
            })
        });

        StartupDataset {
            startups,
            categories,
            year_bounds,
        }
    }

    /// Number of startups.
    pub fn len(&self) -> usize {
        self.startups.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.startups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str, year: i32) -> Startup {
        Startup {
            name: name.to_string(),
            location: "Berlin".to_string(),
            description: "Foundation models".to_string(),
            year,
            category: category.to_string(),
            money_text: String::new(),
            funding_b: 0.0,
            valuation_b: 0.0,
        }
    }

    #[test]
    fn indices_are_sorted_and_deduplicated() {
        let ds = StartupDataset::from_startups(vec![
            record("b", "Robotics", 2021),
            record("a", "Agents", 2019),
            record("c", "Robotics", 2024),
        ]);
        assert_eq!(ds.categories, vec!["Agents", "Robotics"]);
        assert_eq!(ds.year_bounds, Some((2019, 2024)));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = StartupDataset::from_startups(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.categories.is_empty());
        assert_eq!(ds.year_bounds, None);
    }

    #[test]
    fn capitalization_is_clamped() {
        let mut s = record("x", "Agents", 2020);
        s.funding_b = 1.2;
        s.valuation_b = 6.0;
        assert!((s.capitalization_pct() - 20.0).abs() < 1e-9);

        // funding above valuation clamps to 100
        s.funding_b = 9.0;
        s.valuation_b = 3.0;
        assert_eq!(s.capitalization_pct(), 100.0);

        // no valuation → 0
        s.valuation_b = 0.0;
        assert_eq!(s.capitalization_pct(), 0.0);
    }

    #[test]
    fn funding_short_takes_leading_segment() {
        let mut s = record("x", "Agents", 2020);
        s.money_text = "Raised $1.2B • Valuation: $6B".to_string();
        assert_eq!(s.funding_short(), "Raised $1.2B");
        s.money_text = "$500M".to_string();
        assert_eq!(s.funding_short(), "$500M");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let s = record("NeuroForge", "Agents", 2020);
        assert!(s.matches_search("neuro"));
        assert!(s.matches_search("berlin"));
        assert!(s.matches_search("foundation"));
        assert!(!s.matches_search("quantum"));
    }
}
