//! Current model, year and selection

use crate::constants::text::PROMPT_UNSELECTED;

/// The single view state shared by the controls, map and drill-down
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Model shown on the map and in the drill-down
    pub selected_model: String,

    /// Year shown on the map and marked in the drill-down
    pub selected_year: i32,

    /// Region whose drill-down is open, at most one
    pub selected_region: Option<String>,

    /// Legend is hidden while a region is selected
    pub legend_visible: bool,
}

impl ViewState {
    pub fn new(selected_model: impl Into<String>, selected_year: i32) -> Self {
        Self {
            selected_model: selected_model.into(),
            selected_year,
            selected_region: None,
            legend_visible: true,
        }
    }

    /// Instruction shown above the map
    pub fn prompt(&self) -> String {
        match &self.selected_region {
            Some(region) => format!("Click {} to deselect", region),
            None => PROMPT_UNSELECTED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_follows_selection() {
        let mut view = ViewState::new("A", 2015);
        assert_eq!(view.prompt(), PROMPT_UNSELECTED);
        assert!(view.legend_visible);

        view.selected_region = Some("Ohio".to_string());
        assert_eq!(view.prompt(), "Click Ohio to deselect");
    }
}
