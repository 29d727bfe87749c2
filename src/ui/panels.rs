use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: sector checkboxes, founding-year window,
/// free-text search.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) if !ds.is_empty() => ds.clone(),
        _ => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Sector filter ----
            let n_selected = state.filters.categories.len();
            let n_total = dataset.categories.len();
            let header_text = format!("Sectors  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("sectors")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_categories();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_categories();
                        }
                    });

                    for category in &dataset.categories {
                        let mut checked = state.filters.categories.contains(category);
                        let text = RichText::new(category)
                            .color(state.category_colors.color_for(category));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_category(category);
                        }
                    }
                });
            ui.separator();

            // ---- Founding window ----
            ui.strong("Founding window");
            let (min_year, max_year) = dataset.year_bounds.unwrap_or((0, 0));
            let (mut lo, mut hi) = state.filters.year_range;
            let mut changed = false;
            changed |= ui
                .add(Slider::new(&mut lo, min_year..=max_year).text("From"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut hi, min_year..=max_year).text("To"))
                .changed();
            if changed {
                state.filters.year_range = (lo, hi.max(lo));
                state.refilter();
            }
            ui.separator();

            // ---- Search ----
            ui.strong("Search");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.filters.search)
                    .hint_text("Name, tech or location…"),
            );
            if response.changed() {
                state.refilter();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                let path = state.data_path.clone();
                state.reload_from(&path);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} startups tracked, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open startup dataset")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(&path);
    }
}
