//! Color legend overlay

use egui::{Frame, Sense, Stroke, Vec2};

use crate::app::UiEvent;
use crate::constants::layout::{LEGEND_ROW_HEIGHT, LEGEND_SWATCH_WIDTH, LEGEND_WIDTH};
use crate::constants::map::{BASE_OPACITY, STROKE_COLOR};
use crate::constants::text::LEGEND_TITLE;
use crate::state::AppState;

/// Threshold legend, warmest first, hover-linked with the map
pub fn render_legend(state: &AppState, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
    profiling::scope!("render_legend");

    let map = &state.map;
    let highlighted = map.highlighted_bucket();
    let mut hovered_row = None;

    Frame::popup(ui.style()).show(ui, |ui| {
        ui.set_width(LEGEND_WIDTH);
        ui.strong(LEGEND_TITLE);
        ui.add_space(4.0);

        for entry in map.color_scale().legend() {
            let (rect, response) =
                ui.allocate_exact_size(Vec2::new(LEGEND_WIDTH, LEGEND_ROW_HEIGHT), Sense::hover());
            let raised = highlighted == Some(entry.bucket);

            let swatch = egui::Rect::from_min_size(
                rect.min + Vec2::new(0.0, 2.0),
                Vec2::new(LEGEND_SWATCH_WIDTH, LEGEND_ROW_HEIGHT - 4.0),
            );
            let fill = if raised {
                entry.color
            } else {
                entry.color.gamma_multiply(BASE_OPACITY)
            };
            let stroke = Stroke::new(if raised { 2.0 } else { 0.5 }, STROKE_COLOR);
            let painter = ui.painter();
            painter.rect_filled(swatch, 2.0, fill);
            painter.rect_stroke(swatch, 2.0, stroke, egui::StrokeKind::Inside);

            let text_color = if raised {
                ui.visuals().strong_text_color()
            } else {
                ui.visuals().text_color()
            };
            painter.text(
                egui::pos2(swatch.right() + 8.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                &entry.label,
                egui::FontId::proportional(13.0),
                text_color,
            );

            if response.hovered() {
                hovered_row = Some(entry.bucket);
            }
        }
    });

    if hovered_row != map.hovered_bucket() {
        events.push(UiEvent::LegendHovered(hovered_row));
    }
}
