//! Projected region shapes and their fill, hover and selection state

use egui::Color32;
use geo::{BoundingRect, Contains, MultiPolygon, Point, Rect};
use std::collections::HashMap;

use crate::color_scale::ColorScale;
use crate::constants::map::{BASE_OPACITY, BASE_STROKE, HOVER_OPACITY, HOVER_STROKE};
use crate::constants::scale::NO_DATA;
use crate::data::Region;
use crate::geometry::{self, FillMesh, Projection, Translation};

/// Fill layer of a region, set by [`MapView::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Bucket { index: usize, temperature: f64 },
    NoData,
}

impl Fill {
    pub fn bucket(&self) -> Option<usize> {
        match self {
            Fill::Bucket { index, .. } => Some(*index),
            Fill::NoData => None,
        }
    }

    pub fn temperature(&self) -> Option<f64> {
        match self {
            Fill::Bucket { temperature, .. } => Some(*temperature),
            Fill::NoData => None,
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self, Fill::Bucket { .. })
    }
}

#[derive(Debug, Clone)]
pub struct MapRegion {
    pub name: String,
    /// Outline in view box coordinates
    pub shape: MultiPolygon<f64>,
    pub mesh: FillMesh,
    /// `None` for a shape with no points
    pub bounds: Option<Rect<f64>>,
    pub fill: Fill,
    pub selected: bool,
    pub visible: bool,
    /// Set while the region is moved aside for the drill-down
    pub translation: Option<Translation>,
}

/// Resolved paint parameters for one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub fill: Color32,
    pub stroke_width: f32,
    pub highlighted: bool,
}

/// The choropleth: one shape per region, colored for the current model and year
pub struct MapView {
    regions: Vec<MapRegion>,
    color_scale: ColorScale,
    viewport: [f64; 2],
    hovered_region: Option<usize>,
    hovered_bucket: Option<usize>,
}

impl MapView {
    /// Project every region into `viewport` and start them all as "no data"
    pub fn render(regions: &[Region], color_scale: ColorScale, viewport: [f64; 2]) -> Self {
        profiling::scope!("MapView::render");

        let projection = Projection::fit(geometry::extent(regions.iter().map(|r| &r.shape)), viewport);

        let regions = regions
            .iter()
            .map(|region| {
                let shape = projection.project_shape(&region.shape);
                MapRegion {
                    name: region.name.clone(),
                    mesh: geometry::triangulate(&shape),
                    bounds: shape.bounding_rect(),
                    shape,
                    fill: Fill::NoData,
                    selected: false,
                    visible: true,
                    translation: None,
                }
            })
            .collect();

        Self {
            regions,
            color_scale,
            viewport,
            hovered_region: None,
            hovered_bucket: None,
        }
    }

    /// Recolor from a region -> temperature lookup; absent regions get "no data"
    ///
    /// Only the fill layer changes, so hover and selection survive.
    pub fn update(&mut self, lookup: &HashMap<String, f64>) {
        profiling::scope!("MapView::update");
        for region in &mut self.regions {
            region.fill = match lookup.get(&region.name) {
                Some(&temperature) => Fill::Bucket {
                    index: self.color_scale.bucket_for(temperature),
                    temperature,
                },
                None => Fill::NoData,
            };
        }
    }

    pub fn regions(&self) -> &[MapRegion] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&MapRegion> {
        self.regions.iter().find(|r| r.name == name)
    }

    fn region_mut(&mut self, name: &str) -> Option<&mut MapRegion> {
        self.regions.iter_mut().find(|r| r.name == name)
    }

    pub fn color_scale(&self) -> &ColorScale {
        &self.color_scale
    }

    pub fn viewport(&self) -> [f64; 2] {
        self.viewport
    }

    /// Whether a click on `name` should reach the selection logic
    pub fn has_data(&self, name: &str) -> bool {
        self.region(name).is_some_and(|r| r.fill.has_data())
    }

    pub fn set_hovered_region(&mut self, name: Option<&str>) {
        self.hovered_region = name.and_then(|n| self.regions.iter().position(|r| r.name == n));
    }

    pub fn set_hovered_bucket(&mut self, bucket: Option<usize>) {
        self.hovered_bucket = bucket;
    }

    pub fn hovered_bucket(&self) -> Option<usize> {
        self.hovered_bucket
    }

    pub fn hovered_region(&self) -> Option<&MapRegion> {
        self.hovered_region.and_then(|i| self.regions.get(i))
    }

    /// Legend entry to raise: the hovered region's bucket, else the hovered legend row
    pub fn highlighted_bucket(&self) -> Option<usize> {
        self.hovered_region()
            .and_then(|r| r.fill.bucket())
            .or(self.hovered_bucket)
    }

    fn is_highlighted(&self, index: usize) -> bool {
        if self.hovered_region == Some(index) {
            return true;
        }
        match (self.hovered_bucket, self.regions[index].fill.bucket()) {
            (Some(hovered), Some(bucket)) => hovered == bucket,
            _ => false,
        }
    }

    /// Paint parameters for the region at `index`
    pub fn style(&self, index: usize) -> RegionStyle {
        let region = &self.regions[index];
        let highlighted = self.is_highlighted(index);
        let base = region
            .fill
            .bucket()
            .map(|b| self.color_scale.bucket_color(b))
            .unwrap_or(NO_DATA);
        let opacity = if highlighted { HOVER_OPACITY } else { BASE_OPACITY };
        RegionStyle {
            fill: base.gamma_multiply(opacity),
            stroke_width: if highlighted { HOVER_STROKE } else { BASE_STROKE },
            highlighted,
        }
    }

    /// Topmost visible region under a view box point
    pub fn hit_test(&self, point: [f64; 2]) -> Option<&MapRegion> {
        self.regions.iter().rev().filter(|r| r.visible).find(|region| {
            let [dx, dy] = region
                .translation
                .map(|t| t.to_units(self.viewport))
                .unwrap_or([0.0, 0.0]);
            region.shape.contains(&Point::new(point[0] - dx, point[1] - dy))
        })
    }

    /// Mark `name` selected and hide every region that is not
    pub fn select(&mut self, name: &str, translation: Translation) -> bool {
        let Some(region) = self.region_mut(name) else {
            return false;
        };
        region.selected = true;
        region.translation = Some(translation);
        for region in &mut self.regions {
            region.visible = region.selected;
        }
        true
    }

    /// Clear any selection and show every region in place
    pub fn deselect(&mut self) {
        for region in &mut self.regions {
            region.selected = false;
            region.visible = true;
            region.translation = None;
        }
    }
}
