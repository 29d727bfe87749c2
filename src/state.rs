use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::CategoryColors;
use crate::data::filter::{FilterState, filtered_indices, init_filter_state};
use crate::data::loader::DatasetCache;
use crate::data::model::StartupDataset;

/// Default location of the startup source file.
pub const DEFAULT_DATA_PATH: &str = "data/startups.json";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a source file has been read).
    pub dataset: Option<Arc<StartupDataset>>,

    /// Memoized loader; unchanged files are not re-flattened.
    pub cache: DatasetCache,

    /// Source file the dataset was loaded from.
    pub data_path: PathBuf,

    /// Active category / year / search selections.
    pub filters: FilterState,

    /// Indices of startups passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Per-category colours shared by panels, charts and cards.
    pub category_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            cache: DatasetCache::default(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            category_colors: CategoryColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// State with the default source file already loaded (or an empty
    /// dataset plus a status message when it is missing).
    pub fn with_initial_load() -> Self {
        let mut state = Self::default();
        let path = state.data_path.clone();
        state.reload_from(&path);
        state
    }

    /// (Re)load the dataset from `path` through the cache and reset the UI
    /// state around it.
    pub fn reload_from(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        match self.cache.load(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} startups across {} categories from {}",
                    dataset.len(),
                    dataset.categories.len(),
                    path.display()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: Arc<StartupDataset>) {
        self.filters = init_filter_state(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.category_colors = CategoryColors::new(&dataset.categories);
        self.status_message = if dataset.is_empty() {
            Some(format!(
                "Data source not found or empty. Please ensure '{}' exists.",
                self.data_path.display()
            ))
        } else {
            None
        };
        self.dataset = Some(dataset);
    }

    /// Whether a non-empty dataset is loaded.
    pub fn has_data(&self) -> bool {
        self.dataset.as_ref().is_some_and(|ds| !ds.is_empty())
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Toggle a single category in the sector filter.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.filters.categories.remove(category) {
            self.filters.categories.insert(category.to_string());
        }
        self.refilter();
    }

    /// Select every category.
    pub fn select_all_categories(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filters.categories = ds.categories.iter().cloned().collect();
            self.refilter();
        }
    }

    /// Deselect every category.
    pub fn select_no_categories(&mut self) {
        self.filters.categories.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Startup;

    fn dataset() -> Arc<StartupDataset> {
        let make = |name: &str, cat: &str, year: i32| Startup {
            name: name.to_string(),
            location: String::new(),
            description: String::new(),
            year,
            category: cat.to_string(),
            money_text: String::new(),
            funding_b: 0.0,
            valuation_b: 0.0,
        };
        Arc::new(StartupDataset::from_startups(vec![
            make("a", "Agents", 2020),
            make("b", "Robotics", 2022),
        ]))
    }

    #[test]
    fn set_dataset_resets_filters_and_visibility() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.filters.year_range, (2020, 2022));
        assert_eq!(state.filters.categories.len(), 2);
        assert!(state.status_message.is_none());
        assert!(state.has_data());
    }

    #[test]
    fn empty_dataset_surfaces_a_notice() {
        let mut state = AppState::default();
        state.set_dataset(Arc::new(StartupDataset::default()));
        assert!(!state.has_data());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn category_toggles_refilter() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.toggle_category("Agents");
        assert_eq!(state.visible_indices, vec![1]);

        state.toggle_category("Agents");
        assert_eq!(state.visible_indices, vec![0, 1]);

        state.select_no_categories();
        assert!(state.visible_indices.is_empty());

        state.select_all_categories();
        assert_eq!(state.visible_indices, vec![0, 1]);
    }
}
