use std::collections::BTreeMap;

use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

/// How many startups the valuation leaderboard shows.
const LEADERBOARD_SIZE: usize = 15;

// ---------------------------------------------------------------------------
// Summary metrics row
// ---------------------------------------------------------------------------

/// Aggregates over the currently visible startups: count, total disclosed
/// funding, mean estimated valuation (all in $B).
pub fn summary_row(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let count = state.visible_indices.len();
    let total_funding: f64 = state
        .visible_indices
        .iter()
        .map(|&i| dataset.startups[i].funding_b)
        .sum();
    let avg_valuation = if count == 0 {
        0.0
    } else {
        state
            .visible_indices
            .iter()
            .map(|&i| dataset.startups[i].valuation_b)
            .sum::<f64>()
            / count as f64
    };

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Startups Tracked", &count.to_string());
        metric(&mut cols[1], "Total Funding", &format!("${total_funding:.1}B"));
        metric(&mut cols[2], "Avg. Valuation", &format!("${avg_valuation:.2}B"));
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).heading());
    });
}

// ---------------------------------------------------------------------------
// Valuation leaderboard
// ---------------------------------------------------------------------------

/// Bar chart of the top visible startups by estimated valuation.
/// Startups without a known valuation are excluded.
pub fn valuation_leaderboard(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Valuation Leaderboard");

    let mut top: Vec<usize> = state
        .visible_indices
        .iter()
        .copied()
        .filter(|&i| dataset.startups[i].valuation_b > 0.0)
        .collect();
    top.sort_by(|&a, &b| {
        dataset.startups[b]
            .valuation_b
            .total_cmp(&dataset.startups[a].valuation_b)
    });
    top.truncate(LEADERBOARD_SIZE);

    if top.is_empty() {
        ui.label("No valuations in the current selection.");
        return;
    }

    let bars: Vec<Bar> = top
        .iter()
        .enumerate()
        .map(|(rank, &i)| {
            let s = &dataset.startups[i];
            Bar::new(rank as f64, s.valuation_b)
                .width(0.7)
                .name(&s.name)
                .fill(state.category_colors.color_for(&s.category))
        })
        .collect();

    Plot::new("valuation_leaderboard")
        .height(260.0)
        .y_axis_label("Valuation ($B)")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Sector mix
// ---------------------------------------------------------------------------

/// Bar chart of visible startup counts per sector.
pub fn sector_mix(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong("Sector Mix");

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in &state.visible_indices {
        *counts.entry(dataset.startups[i].category.as_str()).or_default() += 1;
    }

    if counts.is_empty() {
        ui.label("No startups in the current selection.");
        return;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(pos, (category, &n))| {
            Bar::new(pos as f64, n as f64)
                .width(0.7)
                .name(format!("{category} ({n})"))
                .fill(state.category_colors.color_for(category))
        })
        .collect();

    Plot::new("sector_mix")
        .height(260.0)
        .y_axis_label("Startups")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
