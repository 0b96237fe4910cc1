//! Reusable UI widgets for Climate Atlas

mod model_selector;
mod year_slider;

pub use model_selector::ModelSelector;
pub use year_slider::YearSlider;
