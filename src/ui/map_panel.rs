//! The choropleth itself: filled regions, outlines and pointer handling

use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::app::UiEvent;
use crate::constants::map::STROKE_COLOR;
use crate::constants::text::NO_DATA;
use crate::state::{AppState, MapRegion};

/// Uniform fit of the map's view box into a screen rectangle
#[derive(Debug, Clone, Copy)]
struct ViewTransform {
    origin: Pos2,
    scale: f32,
}

impl ViewTransform {
    fn fit(rect: Rect, viewport: [f64; 2]) -> Self {
        let scale = (rect.width() / viewport[0] as f32).min(rect.height() / viewport[1] as f32);
        let size = Vec2::new(viewport[0] as f32, viewport[1] as f32) * scale;
        Self {
            origin: rect.center() - size / 2.0,
            scale,
        }
    }

    fn to_screen(&self, p: [f64; 2], offset: [f64; 2]) -> Pos2 {
        self.origin + Vec2::new((p[0] + offset[0]) as f32, (p[1] + offset[1]) as f32) * self.scale
    }

    fn to_view(&self, pos: Pos2) -> [f64; 2] {
        let local = (pos - self.origin) / self.scale;
        [local.x as f64, local.y as f64]
    }
}

/// Paint the choropleth and turn pointer input into events
pub fn render_map(state: &AppState, ui: &mut egui::Ui, events: &mut Vec<UiEvent>) {
    profiling::scope!("render_map");

    let map = &state.map;
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
    let transform = ViewTransform::fit(response.rect, map.viewport());

    // highlighted regions last so their heavier outline sits on top
    let mut order: Vec<usize> = (0..map.regions().len())
        .filter(|&i| map.regions()[i].visible)
        .collect();
    order.sort_by_key(|&i| map.style(i).highlighted);

    for index in order {
        let region = &map.regions()[index];
        let style = map.style(index);
        let offset = region
            .translation
            .map(|t| t.to_units(map.viewport()))
            .unwrap_or([0.0, 0.0]);
        let stroke = Stroke::new(style.stroke_width, STROKE_COLOR);

        let mut mesh = Mesh::default();
        mesh.vertices.extend(region.mesh.vertices.iter().map(|&p| Vertex {
            pos: transform.to_screen(p, offset),
            uv: WHITE_UV,
            color: style.fill,
        }));
        for triangle in &region.mesh.triangles {
            mesh.indices.extend(triangle.iter().map(|&i| i as u32));
        }
        painter.add(Shape::mesh(mesh));

        for polygon in region.shape.iter() {
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                let outline: Vec<Pos2> = ring
                    .coords()
                    .map(|c| transform.to_screen([c.x, c.y], offset))
                    .collect();
                painter.add(Shape::closed_line(outline, stroke));
            }
        }
    }

    let hovered: Option<&MapRegion> = response
        .hover_pos()
        .and_then(|pos| map.hit_test(transform.to_view(pos)));

    let current = map.hovered_region().map(|r| r.name.as_str());
    let now = hovered.map(|r| r.name.as_str());
    if current != now {
        events.push(UiEvent::RegionHovered(now.map(str::to_string)));
    }

    if let Some(region) = hovered {
        let temperature = region.fill.temperature();
        response.clone().on_hover_ui_at_pointer(|ui| {
            ui.strong(&region.name);
            match temperature {
                Some(t) => {
                    ui.horizontal(|ui| {
                        ui.colored_label(map.color_scale().color_for(t), "■");
                        ui.label(format!("{:.2} °C", t));
                    });
                }
                None => {
                    ui.label(NO_DATA);
                }
            }
        });
    }

    if response.clicked() {
        if let Some(region) = response
            .interact_pointer_pos()
            .and_then(|pos| map.hit_test(transform.to_view(pos)))
        {
            events.push(UiEvent::RegionClicked(region.name.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_transform_round_trip() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(500.0, 600.0));
        let transform = ViewTransform::fit(rect, [1000.0, 600.0]);
        // width-limited: half scale, letterboxed vertically
        assert_eq!(transform.scale, 0.5);
        assert_eq!(transform.to_screen([0.0, 0.0], [0.0, 0.0]), Pos2::new(10.0, 170.0));
        let back = transform.to_view(Pos2::new(260.0, 320.0));
        assert!((back[0] - 500.0).abs() < 1e-3 && (back[1] - 300.0).abs() < 1e-3);
    }
}
