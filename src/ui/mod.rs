/// Presentation layer: filter panels, summary metrics, charts, card grid.
pub mod cards;
pub mod charts;
pub mod panels;
