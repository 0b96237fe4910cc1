//! Planar helpers for the map: projection, fill triangulation, repositioning

use geo::{
    BoundingRect, Coord, MapCoords, MultiPolygon, Rect, RemoveRepeatedPoints, TriangulateEarcut,
    coord,
};

/// Smallest rectangle covering both
fn merge_rects(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

/// Combined bounds of a set of shapes; `None` when every shape is empty
pub fn extent<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes
        .into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(merge_rects)
}

/// Identity projection scaled to fit a view box, north up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    translate: [f64; 2],
    height: f64,
}

impl Projection {
    /// Fit `extent` into `[0, size.0] x [0, size.1]`, centered
    pub fn fit(extent: Option<Rect<f64>>, size: [f64; 2]) -> Self {
        let [w, h] = size;
        let Some(extent) = extent else {
            return Self {
                scale: 1.0,
                translate: [0.0, 0.0],
                height: h,
            };
        };

        let sx = if extent.width() > 0.0 { w / extent.width() } else { f64::INFINITY };
        let sy = if extent.height() > 0.0 { h / extent.height() } else { f64::INFINITY };
        let scale = if sx.is_finite() || sy.is_finite() { sx.min(sy) } else { 1.0 };
        Self {
            scale,
            translate: [
                (w - scale * (extent.min().x + extent.max().x)) / 2.0,
                (h - scale * (extent.min().y + extent.max().y)) / 2.0,
            ],
            height: h,
        }
    }

    pub fn project(&self, c: Coord<f64>) -> Coord<f64> {
        coord! {
            x: self.scale * c.x + self.translate[0],
            y: self.height - (self.scale * c.y + self.translate[1]),
        }
    }

    pub fn project_shape(&self, shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        let projection = *self;
        shape.map_coords(move |c| projection.project(c))
    }
}

/// Triangles covering a shape, holes cut out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillMesh {
    pub vertices: Vec<[f64; 2]>,
    pub triangles: Vec<[usize; 3]>,
}

/// Earcut every polygon of `shape` into one mesh
///
/// Repeated vertices are dropped first; earcut copes with collinear runs,
/// concave notches and interior rings.
pub fn triangulate(shape: &MultiPolygon<f64>) -> FillMesh {
    let mut mesh = FillMesh::default();
    for polygon in shape.remove_repeated_points().iter() {
        // a closed ring needs three distinct points plus the closing one
        if polygon.exterior().0.len() < 4 {
            continue;
        }
        let raw = polygon.earcut_triangles_raw();
        let base = mesh.vertices.len();
        mesh.vertices
            .extend(raw.vertices.chunks_exact(2).map(|xy| [xy[0], xy[1]]));
        mesh.triangles.extend(
            raw.triangle_indices
                .chunks_exact(3)
                .map(|t| [base + t[0], base + t[1], base + t[2]]),
        );
    }
    mesh
}

/// Offset of a selected region, in percent of the view box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl Translation {
    /// Back to view box units
    pub fn to_units(&self, viewport: [f64; 2]) -> [f64; 2] {
        [
            self.x_percent / 100.0 * viewport[0],
            self.y_percent / 100.0 * viewport[1],
        ]
    }
}

/// Move a shape's center onto `target` (fractions of the viewport), then
/// shift left by `offset` percent
pub fn reposition(bounds: &Rect<f64>, viewport: [f64; 2], target: [f64; 2], offset: f64) -> Translation {
    let target_x = viewport[0] * target[0];
    let target_y = viewport[1] * target[1];
    let center = bounds.center();
    Translation {
        x_percent: (target_x - center.x) / viewport[0] * 100.0 - offset,
        y_percent: (target_y - center.y) / viewport[1] * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Centroid, Contains, Point, Polygon, Triangle, polygon};

    fn triangles(mesh: &FillMesh) -> Vec<Triangle<f64>> {
        mesh.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| coord! { x: mesh.vertices[i][0], y: mesh.vertices[i][1] });
                Triangle::new(a, b, c)
            })
            .collect()
    }

    /// Total area matches the shape and every triangle lies inside it
    fn assert_fill_matches(shape: &MultiPolygon<f64>) -> Vec<Triangle<f64>> {
        let mesh = triangulate(shape);
        let tris = triangles(&mesh);
        let area: f64 = tris.iter().map(|t| t.unsigned_area()).sum();
        assert!(
            (area - shape.unsigned_area()).abs() < 1e-9,
            "fill area {} != shape area {}",
            area,
            shape.unsigned_area()
        );
        for t in tris.iter().filter(|t| t.unsigned_area() > 1e-12) {
            assert!(shape.contains(&t.centroid()), "triangle {:?} spills outside", t);
        }
        tris
    }

    fn u_shape() -> Polygon<f64> {
        // 3x3 with a 1x2 notch from the top, extra points along the bottom
        polygon![
            (x: 0.0, y: 0.0),
            (x: 0.5, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.5, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 3.0, y: 0.0),
            (x: 3.0, y: 3.0),
            (x: 2.0, y: 3.0),
            (x: 2.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 3.0),
            (x: 0.0, y: 3.0),
        ]
    }

    #[test]
    fn test_projection_fits_and_flips() {
        let extent = Rect::new(coord! { x: -120.0, y: 30.0 }, coord! { x: -70.0, y: 50.0 });
        let projection = Projection::fit(Some(extent), [1000.0, 600.0]);
        // width-limited: 1000 / 50 = 20 per degree, 400 units tall, centered
        assert_eq!(projection.project(coord! { x: -120.0, y: 50.0 }), coord! { x: 0.0, y: 100.0 });
        assert_eq!(projection.project(coord! { x: -70.0, y: 30.0 }), coord! { x: 1000.0, y: 500.0 });
    }

    #[test]
    fn test_extent_merges_and_skips_empty() {
        let a = MultiPolygon::new(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]]);
        let b = MultiPolygon::new(vec![polygon![(x: 4.0, y: -2.0), (x: 5.0, y: 0.0), (x: 4.0, y: 1.0)]]);
        let empty = MultiPolygon::<f64>::new(Vec::new());
        let rect = extent([&a, &empty, &b]).unwrap();
        assert_eq!(rect.min(), coord! { x: 0.0, y: -2.0 });
        assert_eq!(rect.max(), coord! { x: 5.0, y: 1.0 });
        assert!(extent([&empty]).is_none());
    }

    #[test]
    fn test_triangulate_notch_with_collinear_edge() {
        let shape = MultiPolygon::new(vec![u_shape()]);
        let tris = assert_fill_matches(&shape);
        assert!((shape.unsigned_area() - 7.0).abs() < 1e-9);
        let notch = Point::new(1.5, 2.0);
        assert!(!shape.contains(&notch));
        assert!(tris.iter().all(|t| !t.contains(&notch)));
    }

    #[test]
    fn test_triangulate_repeated_vertices() {
        let shape = MultiPolygon::new(vec![polygon![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 1.0),
            (x: 2.0, y: 1.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ]]);
        assert_fill_matches(&shape);
    }

    #[test]
    fn test_triangulate_cuts_holes() {
        let shape = MultiPolygon::new(vec![polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 4.0, y: 4.0), (x: 6.0, y: 4.0), (x: 6.0, y: 6.0), (x: 4.0, y: 6.0)]],
        )]);
        let tris = assert_fill_matches(&shape);
        assert!((shape.unsigned_area() - 96.0).abs() < 1e-9);
        let center = Point::new(5.0, 5.0);
        assert!(tris.iter().all(|t| !t.contains(&center)));
    }

    #[test]
    fn test_triangulate_multipolygon_and_degenerate() {
        let shape = MultiPolygon::new(vec![
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
            polygon![(x: 3.0, y: 0.0), (x: 4.0, y: 0.0), (x: 3.0, y: 1.0)],
        ]);
        let mesh = triangulate(&shape);
        assert_eq!(mesh.triangles.len(), 3);
        assert_fill_matches(&shape);

        let line = MultiPolygon::new(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]]);
        assert!(triangulate(&line).triangles.is_empty());
    }

    #[test]
    fn test_projected_shape_keeps_fill_consistent() {
        let shape = MultiPolygon::new(vec![u_shape()]);
        let projection = Projection::fit(shape.bounding_rect(), [1000.0, 600.0]);
        let projected = projection.project_shape(&shape);
        assert_fill_matches(&projected);
    }

    #[test]
    fn test_reposition_to_target() {
        let bounds = Rect::new(coord! { x: 400.0, y: 200.0 }, coord! { x: 600.0, y: 300.0 });
        let t = reposition(&bounds, [1000.0, 600.0], [0.05, 0.375], 0.0);
        assert!((t.x_percent - -45.0).abs() < 1e-9);
        assert!((t.y_percent - 0.0).abs() < 1e-9);

        let shifted = reposition(&bounds, [1000.0, 600.0], [0.05, 0.375], 4.0);
        assert!((shifted.x_percent - -49.0).abs() < 1e-9);
        assert!((shifted.to_units([1000.0, 600.0])[0] - -490.0).abs() < 1e-9);
    }
}
