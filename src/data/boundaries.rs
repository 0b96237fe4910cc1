//! GeoJSON boundary loading

use geo::{MultiPolygon, Polygon};
use geojson::{GeoJson, Value};
use std::path::Path;

use crate::data::Region;
use crate::error::{AtlasError, Result};

/// Property keys checked for a feature's display name, in order
const NAME_KEYS: [&str; 2] = ["name", "NAME"];

pub fn load_regions(path: &Path) -> Result<Vec<Region>> {
    profiling::scope!("load_regions");
    let text = std::fs::read_to_string(path)?;
    parse_regions(&text)
}

/// Parse a FeatureCollection of `Polygon` / `MultiPolygon` features
pub fn parse_regions(text: &str) -> Result<Vec<Region>> {
    let geojson: GeoJson = text.parse()?;
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(AtlasError::MalformedRegion {
                index: 0,
                reason: "expected a FeatureCollection".to_string(),
            });
        }
    };

    let mut regions = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.iter().enumerate() {
        let name = NAME_KEYS
            .iter()
            .find_map(|key| feature.property(key).and_then(|v| v.as_str()))
            .ok_or_else(|| AtlasError::MalformedRegion {
                index,
                reason: "feature has no name property".to_string(),
            })?;

        let geometry = feature.geometry.as_ref().ok_or_else(|| AtlasError::MalformedRegion {
            index,
            reason: format!("'{}' has no geometry", name),
        })?;

        let shape = match &geometry.value {
            value @ Value::Polygon(_) => MultiPolygon::new(vec![Polygon::try_from(value)?]),
            value @ Value::MultiPolygon(_) => MultiPolygon::try_from(value)?,
            _ => {
                log::warn!("skipping '{}': geometry is not a polygon", name);
                continue;
            }
        };

        regions.push(Region {
            name: name.to_string(),
            shape,
        });
    }

    log::debug!("parsed {} boundary features", regions.len());
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    const COLLECTION: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Colorado"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-109.0, 41.0], [-102.0, 41.0], [-102.0, 37.0], [-109.0, 37.0], [-109.0, 41.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"NAME": "Hawaii"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-155.0, 19.0], [-154.8, 19.5], [-155.5, 20.0], [-155.0, 19.0]]],
                        [[[-156.0, 20.5], [-156.2, 20.9], [-156.5, 20.6], [-156.0, 20.5]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Nowhere"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let regions = parse_regions(COLLECTION).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name, "Colorado");
        assert_eq!(regions[0].shape.0.len(), 1);
        let colorado = &regions[0].shape.0[0];
        assert_eq!(colorado.exterior().0.len(), 5);
        assert_eq!(colorado.exterior().0[1], coord! { x: -102.0, y: 41.0 });
        assert_eq!(regions[1].name, "Hawaii");
        assert_eq!(regions[1].shape.0.len(), 2);
    }

    #[test]
    fn test_polygon_keeps_interior_rings() {
        let text = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"name": "Maryland"},
             "geometry": {"type": "Polygon", "coordinates": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
                [[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]]
             ]}}
        ]}"#;
        let regions = parse_regions(text).unwrap();
        assert_eq!(regions[0].shape.0[0].interiors().len(), 1);
    }

    #[test]
    fn test_feature_without_name() {
        let text = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {},
             "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}
        ]}"#;
        assert!(matches!(
            parse_regions(text),
            Err(AtlasError::MalformedRegion { index: 0, .. })
        ));
    }

    #[test]
    fn test_not_geojson() {
        assert!(matches!(parse_regions("{\"hello\": 1}"), Err(AtlasError::GeoJson(_))));
    }
}
