//! Keyboard and mouse help window

use crate::app::UiEvent;
use crate::state::AppState;

pub fn render_help_dialog(state: &AppState, ctx: &egui::Context, events: &mut Vec<UiEvent>) {
    if state.ui.show_help {
        egui::Window::new("⌨ Help")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Map");
                ui.label("Hover a state - Show its temperature");
                ui.label("Click a state - Open its drill-down chart");
                ui.label("Click it again - Close the chart");
                ui.label("Grey states have no data for the chosen model and year");

                ui.separator();
                ui.heading("Controls");
                ui.label("Model - Choose the climate model");
                ui.label("Year - Recolor the map; moves the marker in an open chart");
                ui.label("Legend - Hover a row to highlight its states");

                ui.separator();
                ui.heading("Keyboard");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                if ui.button("Close").clicked() {
                    events.push(UiEvent::CloseHelp);
                }
            });
    }
}
