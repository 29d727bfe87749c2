use eframe::egui;

use crate::state::AppState;
use crate::ui::{cards, charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StartupUniverseApp {
    pub state: AppState,
}

impl Default for StartupUniverseApp {
    fn default() -> Self {
        Self {
            state: AppState::with_initial_load(),
        }
    }
}

impl eframe::App for StartupUniverseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.state.has_data() {
                // Missing/empty source: a notice instead of metrics.
                let notice = self
                    .state
                    .status_message
                    .clone()
                    .unwrap_or_else(|| "Open a dataset to explore startups  (File → Open…)".to_string());
                ui.centered_and_justified(|ui| {
                    ui.heading(notice);
                });
                return;
            }

            charts::summary_row(ui, &self.state);
            ui.separator();
            ui.columns(2, |cols| {
                charts::valuation_leaderboard(&mut cols[0], &self.state);
                charts::sector_mix(&mut cols[1], &self.state);
            });
            ui.separator();
            cards::card_grid(ui, &self.state);
        });
    }
}
