//! Application state management
//!
//! `AppState` owns the loaded data and every view component. All changes go
//! through its methods so that the map is always recolored before the
//! drill-down is touched.

mod map;
mod selection;
mod subplot;
mod ui;
mod view;

pub use map::{Fill, MapRegion, MapView, RegionStyle};
pub use selection::{Selection, SelectionController, Targets, Transition};
pub use subplot::{SubplotContent, SubplotView, YearIndicator};
pub use ui::UiState;
pub use view::ViewState;

use crate::color_scale::ColorScale;
use crate::config::AtlasConfig;
use crate::constants::map::VIEW_BOX;
use crate::data::DataModel;
use crate::error::{AtlasError, Result};

/// Main application state container, built once both inputs have loaded
pub struct AppState {
    pub data: DataModel,
    pub view: ViewState,
    pub map: MapView,
    pub subplot: SubplotView,
    pub selection: SelectionController,
    pub ui: UiState,
}

impl AppState {
    /// Default view is the first model at the earliest year
    pub fn new(data: DataModel, config: &AtlasConfig) -> Result<Self> {
        let model = data
            .models_available()
            .first()
            .cloned()
            .ok_or(AtlasError::EmptyDataset { what: "Model list" })?;
        let year = data
            .years_available()
            .first()
            .copied()
            .ok_or(AtlasError::EmptyDataset { what: "Year list" })?;

        let mainland = data.mainland_regions(&config.excluded_regions);
        let map = MapView::render(&mainland, ColorScale::default(), VIEW_BOX);

        let mut state = Self {
            data,
            view: ViewState::new(model, year),
            map,
            subplot: SubplotView::new(),
            selection: SelectionController::new(
                config.reposition_target,
                config.region_offsets.clone(),
            ),
            ui: UiState::new(),
        };
        state.refresh_map()?;

        log::info!(
            "atlas ready: {} observations, {} regions on the map, {} models, years {}-{}",
            state.data.observation_count(),
            state.map.regions().len(),
            state.data.models_available().len(),
            state.year_range().0,
            state.year_range().1
        );
        Ok(state)
    }

    /// Inclusive slider range
    pub fn year_range(&self) -> (i32, i32) {
        let years = self.data.years_available();
        match (years.first(), years.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (self.view.selected_year, self.view.selected_year),
        }
    }

    /// Recolor the map for the current model and year
    pub fn refresh_map(&mut self) -> Result<()> {
        let lookup = self
            .data
            .observations_for(&self.view.selected_model, self.view.selected_year)?;
        self.map.update(&lookup);
        Ok(())
    }

    /// Switch model: recolor, then re-render an open drill-down
    pub fn set_model(&mut self, model: &str) -> Result<()> {
        if !self.data.has_model(model) {
            return Err(AtlasError::UnknownModel {
                model: model.to_string(),
            });
        }
        self.view.selected_model = model.to_string();
        self.refresh_map()?;

        let result = self.selection.model_changed(Targets {
            data: &self.data,
            map: &mut self.map,
            subplot: &mut self.subplot,
            view: &mut self.view,
        });
        if result.is_err() {
            self.subplot.clear();
        }
        result
    }

    /// Switch year: recolor, then move the drill-down's marker
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        let (lo, hi) = self.year_range();
        let year = year.clamp(lo, hi);
        self.view.selected_year = year;
        self.refresh_map()?;
        self.selection.year_changed(year, &mut self.subplot);
        Ok(())
    }

    pub fn click_region(&mut self, region: &str) -> Result<Transition> {
        self.selection.click(
            region,
            Targets {
                data: &self.data,
                map: &mut self.map,
                subplot: &mut self.subplot,
                view: &mut self.view,
            },
        )
    }

    pub fn hover_region(&mut self, region: Option<&str>) {
        self.map.set_hovered_region(region);
    }

    pub fn hover_legend(&mut self, bucket: Option<usize>) {
        self.map.set_hovered_bucket(bucket);
    }
}
