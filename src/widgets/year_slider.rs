//! Year slider with its label

use egui::{Slider, Ui};

pub struct YearSlider {
    year: i32,
    range: (i32, i32),
}

impl YearSlider {
    pub fn new(year: i32, range: (i32, i32)) -> Self {
        Self { year, range }
    }

    /// Show the widget; `Some(year)` when the slider moved
    pub fn show(self, ui: &mut Ui) -> Option<i32> {
        let mut year = self.year;
        ui.label("Year:");
        let response = ui.add(
            Slider::new(&mut year, self.range.0..=self.range.1)
                .step_by(1.0)
                .show_value(false),
        );
        ui.strong(year.to_string());
        (response.changed() && year != self.year).then_some(year)
    }
}
