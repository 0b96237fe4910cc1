//! Application shell: load phases, event dispatch and frame layout

use eframe::App;
use egui::{CentralPanel, TopBottomPanel, UiBuilder};
use egui_extras::{Size, StripBuilder};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::AtlasConfig;
use crate::constants::layout::{LEGEND_WIDTH, PROMPT_HEIGHT, STANDARD_PADDING, SUBPLOT_FRACTION};
use crate::data::{BackgroundLoader, DataModel, Observation, Region};
use crate::error::{AtlasError, Result};
use crate::state::AppState;
use crate::ui;

/// Something the user did this frame, applied after drawing
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ModelChanged(String),
    YearChanged(i32),
    RegionHovered(Option<String>),
    LegendHovered(Option<usize>),
    RegionClicked(String),
    ToggleHelp,
    CloseHelp,
    DismissError,
}

/// Where the app is in its lifetime
pub enum LoadPhase {
    Loading(BackgroundLoader),
    Ready(Box<AppState>),
    Failed(AtlasError),
}

pub struct ClimateAtlas {
    phase: LoadPhase,
    config: AtlasConfig,
}

impl ClimateAtlas {
    /// Start loading both inputs in the background
    pub fn new(config: AtlasConfig, data_path: PathBuf, boundaries_path: PathBuf) -> Self {
        Self {
            phase: LoadPhase::Loading(BackgroundLoader::spawn(data_path, boundaries_path)),
            config,
        }
    }

    fn poll_loader(&mut self) {
        let LoadPhase::Loading(loader) = &mut self.phase else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };

        self.phase = match result.and_then(|inputs| self.build_state(inputs.observations, inputs.regions)) {
            Ok(state) => LoadPhase::Ready(Box::new(state)),
            Err(e) => {
                log::error!("failed to load inputs: {}", e);
                LoadPhase::Failed(e)
            }
        };
    }

    fn build_state(
        &self,
        observations: Vec<Observation>,
        regions: Vec<Region>,
    ) -> Result<AppState> {
        let data = DataModel::load(observations, regions)?;
        AppState::new(data, &self.config)
    }

    /// Apply this frame's events in order
    pub fn dispatch(state: &mut AppState, events: Vec<UiEvent>) {
        for event in events {
            log::debug!("dispatch {:?}", event);
            let result = match event {
                UiEvent::ModelChanged(model) => state.set_model(&model),
                UiEvent::YearChanged(year) => state.set_year(year),
                UiEvent::RegionClicked(region) => state.click_region(&region).map(|_| ()),
                UiEvent::RegionHovered(region) => {
                    state.hover_region(region.as_deref());
                    Ok(())
                }
                UiEvent::LegendHovered(bucket) => {
                    state.hover_legend(bucket);
                    Ok(())
                }
                UiEvent::ToggleHelp => {
                    state.ui.toggle_help();
                    Ok(())
                }
                UiEvent::CloseHelp => {
                    state.ui.show_help = false;
                    Ok(())
                }
                UiEvent::DismissError => {
                    state.ui.clear_error();
                    Ok(())
                }
            };
            if let Err(e) = result {
                log::warn!("{}", e);
                state.ui.set_error(e.user_message());
            }
        }
    }

    fn render_ready(state: &mut AppState, ctx: &egui::Context) {
        let mut events = Vec::new();

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                events.push(UiEvent::ToggleHelp);
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(UiEvent::CloseHelp);
            }
        });

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::render_toolbar(state, ui, &mut events);
        });

        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(state, ui, &mut events);
        });

        CentralPanel::default().show(ctx, |ui| {
            StripBuilder::new(ui)
                .size(Size::exact(PROMPT_HEIGHT))
                .size(Size::remainder())
                .vertical(|mut strip| {
                    strip.cell(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(state.view.prompt());
                        });
                    });

                    strip.cell(|ui| {
                        let area = ui.max_rect();
                        ui::render_map(state, ui, &mut events);

                        if state.view.legend_visible {
                            let legend_rect = egui::Rect::from_min_size(
                                egui::pos2(area.right() - LEGEND_WIDTH - STANDARD_PADDING, area.top() + STANDARD_PADDING),
                                egui::vec2(LEGEND_WIDTH, area.height() - 2.0 * STANDARD_PADDING),
                            );
                            ui.scope_builder(UiBuilder::new().max_rect(legend_rect), |ui| {
                                ui::render_legend(state, ui, &mut events);
                            });
                        }

                        if state.subplot.is_open() {
                            let width = area.width() * SUBPLOT_FRACTION;
                            let subplot_rect = egui::Rect::from_min_max(
                                egui::pos2(area.right() - width, area.top()),
                                area.max,
                            );
                            ui.scope_builder(UiBuilder::new().max_rect(subplot_rect), |ui| {
                                ui::render_subplot(state, ui);
                            });
                        }
                    });
                });
        });

        ui::render_help_dialog(state, ctx, &mut events);

        Self::dispatch(state, events);
    }
}

impl App for ClimateAtlas {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();
        profiling::scope!("ClimateAtlas::update");

        self.poll_loader();

        match &mut self.phase {
            LoadPhase::Loading(_) => {
                CentralPanel::default().show(ctx, |ui| {
                    ui::render_loading(ui);
                });
                ctx.request_repaint_after(Duration::from_millis(50));
            }
            LoadPhase::Failed(error) => {
                CentralPanel::default().show(ctx, |ui| {
                    ui::render_fatal_error(error, ui);
                });
            }
            LoadPhase::Ready(state) => Self::render_ready(state, ctx),
        }
    }
}
