//! Top toolbar and bottom status bar

use crate::app::UiEvent;
use crate::constants::layout::MODEL_SELECTOR_WIDTH;
use crate::state::AppState;
use crate::widgets::{ModelSelector, YearSlider};

/// Model and year controls
pub fn render_toolbar(state: &AppState, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
    profiling::scope!("render_toolbar");

    ui.horizontal(|ui| {
        if let Some(model) = ModelSelector::new(state.data.models_available(), &state.view.selected_model)
            .width(MODEL_SELECTOR_WIDTH)
            .show(ui)
        {
            events.push(UiEvent::ModelChanged(model));
        }

        ui.separator();

        if let Some(year) = YearSlider::new(state.view.selected_year, state.year_range()).show(ui) {
            events.push(UiEvent::YearChanged(year));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("❓").on_hover_text("Help (H / F1)").clicked() {
                events.push(UiEvent::ToggleHelp);
            }
        });
    });
}

/// Error message, or a summary of what is loaded
pub fn render_status_bar(state: &AppState, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        if let Some(message) = &state.ui.error_message {
            ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", message));
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                events.push(UiEvent::DismissError);
            }
            return;
        }

        let (first, last) = state.year_range();
        let (lo, hi) = state.data.temperature_range();
        ui.label(format!(
            "Observations: {} | Regions: {} | Models: {} | Years: {}–{} | Range: {:.1}–{:.1} °C",
            state.data.observation_count(),
            state.map.regions().len(),
            state.data.models_available().len(),
            first,
            last,
            lo,
            hi
        ));
        let clamped = state
            .map
            .color_scale()
            .clamped_count(state.map.regions().iter().filter_map(|r| r.fill.temperature()));
        if clamped > 0 {
            ui.separator();
            ui.label(format!("{} regions beyond the color scale", clamped));
        }
    });
}
