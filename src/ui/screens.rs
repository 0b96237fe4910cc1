//! Full-window screens shown before the map is ready

use crate::error::AtlasError;

pub fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.spinner();
        ui.label("Loading dataset and boundaries…");
    });
}

/// Nothing else is drawn once loading has failed
pub fn render_fatal_error(error: &AtlasError, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading(error.title());
        ui.colored_label(ui.visuals().error_fg_color, error.user_message());
        if error.is_load_error() {
            ui.add_space(8.0);
            ui.label("Check the --data and --boundaries paths and restart.");
        }
    });
}
