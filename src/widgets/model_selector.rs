//! Model dropdown

use egui::{ComboBox, Ui};

/// ComboBox over the dataset's models; reports the newly chosen one
pub struct ModelSelector<'a> {
    models: &'a [String],
    selected: &'a str,
    width: f32,
}

impl<'a> ModelSelector<'a> {
    pub fn new(models: &'a [String], selected: &'a str) -> Self {
        Self {
            models,
            selected,
            width: 160.0,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Show the widget; `Some(model)` when the user picked a different model
    pub fn show(self, ui: &mut Ui) -> Option<String> {
        let mut chosen = None;
        ui.label("Model:");
        ComboBox::from_id_salt("model_selector")
            .selected_text(self.selected)
            .width(self.width)
            .show_ui(ui, |ui| {
                for model in self.models {
                    if ui
                        .selectable_label(model == self.selected, model.as_str())
                        .clicked()
                        && model != self.selected
                    {
                        chosen = Some(model.clone());
                    }
                }
            });
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_change_without_interaction() {
        let ctx = egui::Context::default();
        let models = vec!["A".to_string(), "B".to_string()];
        let mut chosen = Some(String::new());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                chosen = ModelSelector::new(&models, "A").width(200.0).show(ui);
            });
        });
        assert_eq!(chosen, None);
    }
}
