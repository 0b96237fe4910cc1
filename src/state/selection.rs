//! Click-to-drill-down state machine
//!
//! `Unselected --click(r)--> Selected(r) --click(r)--> Unselected`. A click on
//! a different region while one is selected does nothing, and a region
//! without data cannot be selected.

use std::collections::BTreeMap;

use crate::data::DataModel;
use crate::error::Result;
use crate::geometry;
use crate::state::{MapView, SubplotView, ViewState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

/// Outcome of a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Selected(String),
    Deselected(String),
    Ignored,
}

/// The components a transition touches, borrowed from the app state
pub struct Targets<'a> {
    pub data: &'a DataModel,
    pub map: &'a mut MapView,
    pub subplot: &'a mut SubplotView,
    pub view: &'a mut ViewState,
}

pub struct SelectionController {
    state: Selection,
    /// Reposition target, fractions of the view box
    target: [f64; 2],
    /// Extra leftward shift per region, percent of the view box width
    offsets: BTreeMap<String, f64>,
}

impl SelectionController {
    pub fn new(target: [f64; 2], offsets: BTreeMap<String, f64>) -> Self {
        Self {
            state: Selection::Unselected,
            target,
            offsets,
        }
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            Selection::Selected(region) => Some(region),
            Selection::Unselected => None,
        }
    }

    /// Handle a click on `region`
    ///
    /// Lookups happen before anything is mutated, so a failed selection
    /// leaves every component as it was.
    pub fn click(&mut self, region: &str, targets: Targets<'_>) -> Result<Transition> {
        match self.selected().map(str::to_string) {
            None if !targets.map.has_data(region) => {
                log::debug!("ignoring click on '{}': no data", region);
                Ok(Transition::Ignored)
            }
            None => {
                let model = targets.view.selected_model.clone();
                let series = targets.data.series_for(&model, region)?;
                let national = targets.data.national_series(&model)?.to_vec();

                let Some(bounds) = targets.map.region(region).and_then(|r| r.bounds) else {
                    return Ok(Transition::Ignored);
                };
                let offset = self.offsets.get(region).copied().unwrap_or(0.0);
                let translation =
                    geometry::reposition(&bounds, targets.map.viewport(), self.target, offset);

                targets.map.select(region, translation);
                targets
                    .subplot
                    .render(series, national, region, &model, targets.view.selected_year);
                targets.view.selected_region = Some(region.to_string());
                targets.view.legend_visible = false;

                log::debug!("selected '{}'", region);
                self.state = Selection::Selected(region.to_string());
                Ok(Transition::Selected(region.to_string()))
            }
            Some(current) if current == region => {
                targets.map.deselect();
                targets.subplot.clear();
                targets.view.selected_region = None;
                targets.view.legend_visible = true;

                log::debug!("deselected '{}'", region);
                self.state = Selection::Unselected;
                Ok(Transition::Deselected(region.to_string()))
            }
            Some(current) => {
                log::debug!("ignoring click on '{}' while '{}' is selected", region, current);
                Ok(Transition::Ignored)
            }
        }
    }

    /// Re-render the open drill-down under the newly selected model
    pub fn model_changed(&self, targets: Targets<'_>) -> Result<()> {
        let Some(region) = self.selected() else {
            return Ok(());
        };
        let model = targets.view.selected_model.clone();
        let series = targets.data.series_for(&model, region)?;
        let national = targets.data.national_series(&model)?.to_vec();
        targets
            .subplot
            .render(series, national, region, &model, targets.view.selected_year);
        Ok(())
    }

    /// Move the drill-down's year marker
    pub fn year_changed(&self, year: i32, subplot: &mut SubplotView) {
        if self.selected().is_some() {
            subplot.update_year_indicator(year);
        }
    }
}
