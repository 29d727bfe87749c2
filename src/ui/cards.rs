use eframe::egui::{ProgressBar, RichText, ScrollArea, Ui};

use crate::data::model::Startup;
use crate::state::AppState;

/// Cards per row in the grid.
const GRID_COLUMNS: usize = 3;

// ---------------------------------------------------------------------------
// Startup card grid
// ---------------------------------------------------------------------------

/// Render the filtered startups as a scrollable card grid.
pub fn card_grid(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong(format!("Identified Entities: {}", state.visible_indices.len()));
    ui.add_space(4.0);

    if state.visible_indices.is_empty() {
        ui.label("No startups match the current filters.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in state.visible_indices.chunks(GRID_COLUMNS) {
                ui.columns(GRID_COLUMNS, |cols| {
                    for (slot, &idx) in row.iter().enumerate() {
                        startup_card(&mut cols[slot], state, &dataset.startups[idx]);
                    }
                });
            }
        });
}

fn startup_card(ui: &mut Ui, state: &AppState, startup: &Startup) {
    let sector_color = state.category_colors.color_for(&startup.category);

    ui.group(|ui: &mut Ui| {
        ui.set_width(ui.available_width());

        ui.label(RichText::new(&startup.name).heading().strong());
        ui.label(RichText::new(&startup.location).weak());
        ui.label(RichText::new(&startup.description).italics());
        ui.add_space(4.0);

        let funding = startup.funding_short();
        ui.label(format!(
            "Funding: {}",
            if funding.is_empty() { "N/A" } else { funding }
        ));
        ui.label(format!("Est. Val: ${:.1}B", startup.valuation_b));

        let pct = startup.capitalization_pct();
        ui.add(
            ProgressBar::new((pct / 100.0) as f32)
                .text(format!("Capitalization Ratio: {pct:.1}%")),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!("#{}", startup.category))
                    .color(sector_color)
                    .small(),
            );
            ui.label(RichText::new(format!("Est. {}", startup.year)).weak().small());
        });
    });
}
