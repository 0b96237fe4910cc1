//! Indexed observations and boundaries

use geo::MultiPolygon;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{AtlasError, Result};

/// One row of the dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub state: String,
    pub model: String,
    pub year: i32,
    pub temperature: f64,
}

impl Observation {
    pub fn new(state: impl Into<String>, model: impl Into<String>, year: i32, temperature: f64) -> Self {
        Self {
            state: state.into(),
            model: model.into(),
            year,
            temperature,
        }
    }
}

/// A named boundary feature, in lon/lat
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub shape: MultiPolygon<f64>,
}

/// A `(year, temperature)` pair of a time series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

impl YearValue {
    pub fn point(&self) -> [f64; 2] {
        [self.year as f64, self.value]
    }
}

/// Observations and boundaries, indexed once at load
#[derive(Debug, Clone)]
pub struct DataModel {
    observations: Vec<Observation>,
    regions: Vec<Region>,
    models: Vec<String>,
    years: Vec<i32>,
    national: HashMap<String, Vec<YearValue>>,
}

impl DataModel {
    /// Validate and index the two inputs
    pub fn load(observations: Vec<Observation>, regions: Vec<Region>) -> Result<Self> {
        profiling::scope!("DataModel::load");

        if observations.is_empty() {
            return Err(AtlasError::EmptyDataset { what: "Observation set" });
        }
        if regions.is_empty() {
            return Err(AtlasError::EmptyDataset { what: "Boundary set" });
        }

        for (row, obs) in observations.iter().enumerate() {
            if obs.state.trim().is_empty() {
                return Err(AtlasError::MalformedRow { row, field: "state" });
            }
            if obs.model.trim().is_empty() {
                return Err(AtlasError::MalformedRow { row, field: "model" });
            }
            if !obs.temperature.is_finite() {
                return Err(AtlasError::MalformedRow { row, field: "tas_degree" });
            }
        }

        for (index, region) in regions.iter().enumerate() {
            if region.name.trim().is_empty() {
                return Err(AtlasError::MalformedRegion {
                    index,
                    reason: "missing name".to_string(),
                });
            }
            if region.shape.iter().all(|p| p.exterior().0.len() < 4) {
                return Err(AtlasError::MalformedRegion {
                    index,
                    reason: format!("'{}' has no usable polygon", region.name),
                });
            }
        }

        let mut seen = HashSet::new();
        let models: Vec<String> = observations
            .iter()
            .filter(|obs| seen.insert(obs.model.as_str()))
            .map(|obs| obs.model.clone())
            .collect();

        let mut years: Vec<i32> = observations.iter().map(|obs| obs.year).collect();
        years.sort_unstable();
        years.dedup();

        let national = models
            .iter()
            .map(|model| (model.clone(), national_mean(&observations, model)))
            .collect();

        Ok(Self {
            observations,
            regions,
            models,
            years,
            national,
        })
    }

    /// Distinct model identifiers in first-seen order
    pub fn models_available(&self) -> &[String] {
        &self.models
    }

    /// Distinct years, ascending
    pub fn years_available(&self) -> &[i32] {
        &self.years
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.national.contains_key(model)
    }

    /// Yearly mean across all regions for a model
    pub fn national_series(&self, model: &str) -> Result<&[YearValue]> {
        self.national
            .get(model)
            .map(Vec::as_slice)
            .ok_or_else(|| AtlasError::UnknownModel {
                model: model.to_string(),
            })
    }

    /// Temperature per region for one `(model, year)`; regions without a row are absent
    pub fn observations_for(&self, model: &str, year: i32) -> Result<HashMap<String, f64>> {
        profiling::scope!("DataModel::observations_for");
        if !self.has_model(model) {
            return Err(AtlasError::UnknownModel {
                model: model.to_string(),
            });
        }
        Ok(self
            .observations
            .iter()
            .filter(|obs| obs.model == model && obs.year == year)
            .map(|obs| (obs.state.clone(), obs.temperature))
            .collect())
    }

    /// One region's series under a model, ascending by year
    pub fn series_for(&self, model: &str, region: &str) -> Result<Vec<YearValue>> {
        if !self.has_model(model) {
            return Err(AtlasError::UnknownModel {
                model: model.to_string(),
            });
        }
        let mut series: Vec<YearValue> = self
            .observations
            .iter()
            .filter(|obs| obs.model == model && obs.state == region)
            .map(|obs| YearValue {
                year: obs.year,
                value: obs.temperature,
            })
            .collect();
        if series.is_empty() {
            return Err(AtlasError::UnknownRegion {
                model: model.to_string(),
                region: region.to_string(),
            });
        }
        series.sort_by_key(|point| point.year);
        Ok(series)
    }

    /// Boundary features drawn on the map
    pub fn mainland_regions<S: AsRef<str>>(&self, excluded: &[S]) -> Vec<Region> {
        self.regions
            .iter()
            .filter(|region| !excluded.iter().any(|name| name.as_ref() == region.name))
            .cloned()
            .collect()
    }

    /// Lowest and highest temperature in the dataset
    pub fn temperature_range(&self) -> (f64, f64) {
        self.observations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), obs| {
                (lo.min(obs.temperature), hi.max(obs.temperature))
            })
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }
}

fn national_mean(observations: &[Observation], model: &str) -> Vec<YearValue> {
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for obs in observations.iter().filter(|obs| obs.model == model) {
        let entry = groups.entry(obs.year).or_insert((0.0, 0));
        entry.0 += obs.temperature;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(year, (sum, count))| YearValue {
            year,
            value: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use geo::polygon;

    pub(crate) fn square(name: &str, x: f64, y: f64) -> Region {
        Region {
            name: name.to_string(),
            shape: MultiPolygon::new(vec![polygon![
                (x: x, y: y),
                (x: x + 1.0, y: y),
                (x: x + 1.0, y: y + 1.0),
                (x: x, y: y + 1.0),
            ]]),
        }
    }

    pub(crate) fn scenario() -> DataModel {
        let observations = vec![
            Observation::new("X", "A", 2015, 5.0),
            Observation::new("X", "A", 2016, 7.0),
            Observation::new("Y", "A", 2015, 9.0),
            Observation::new("Y", "A", 2016, 11.0),
            Observation::new("X", "B", 2015, 20.0),
            Observation::new("X", "B", 2016, 22.0),
        ];
        DataModel::load(observations, vec![square("X", 0.0, 0.0), square("Y", 2.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_models_in_first_seen_order() {
        let observations = vec![
            Observation::new("X", "zeta", 2016, 1.0),
            Observation::new("X", "alpha", 2015, 1.0),
            Observation::new("Y", "zeta", 2015, 1.0),
        ];
        let model = DataModel::load(observations, vec![square("X", 0.0, 0.0)]).unwrap();
        assert_eq!(model.models_available(), &["zeta".to_string(), "alpha".to_string()]);
        assert_eq!(model.years_available(), &[2015, 2016]);
    }

    #[test]
    fn test_national_series() {
        let model = scenario();
        let series = model.national_series("A").unwrap();
        assert_eq!(
            series,
            &[
                YearValue { year: 2015, value: 7.0 },
                YearValue { year: 2016, value: 9.0 }
            ]
        );
    }

    #[test]
    fn test_national_series_omits_empty_years() {
        let observations = vec![
            Observation::new("X", "A", 2017, 4.0),
            Observation::new("X", "A", 2015, 2.0),
            Observation::new("X", "B", 2016, 100.0),
        ];
        let model = DataModel::load(observations, vec![square("X", 0.0, 0.0)]).unwrap();
        let years: Vec<i32> = model.national_series("A").unwrap().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2015, 2017]);
        assert!(model.national_series("A").unwrap().iter().all(|p| p.value != 0.0));
    }

    #[test]
    fn test_excluded_regions_still_count_toward_national_mean() {
        let observations = vec![
            Observation::new("Texas", "A", 2015, 20.0),
            Observation::new("Alaska", "A", 2015, -4.0),
        ];
        let model = DataModel::load(
            observations,
            vec![square("Texas", 0.0, 0.0), square("Alaska", 5.0, 5.0)],
        )
        .unwrap();
        assert_eq!(model.national_series("A").unwrap()[0].value, 8.0);
        let mainland = model.mainland_regions(&["Alaska"]);
        assert_eq!(mainland.len(), 1);
        assert_eq!(mainland[0].name, "Texas");
    }

    #[test]
    fn test_unknown_model() {
        let model = scenario();
        assert!(matches!(
            model.national_series("C"),
            Err(AtlasError::UnknownModel { .. })
        ));
        assert!(matches!(
            model.observations_for("C", 2015),
            Err(AtlasError::UnknownModel { .. })
        ));
    }

    #[test]
    fn test_observations_for_only_returns_matching_pairs() {
        let model = scenario();
        let lookup = model.observations_for("B", 2015).unwrap();
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("X"), Some(&20.0));
        assert!(!lookup.contains_key("Y"));

        let lookup = model.observations_for("A", 2030).unwrap();
        assert!(lookup.is_empty());
    }

    #[test]
    fn test_series_for_sorted_by_year() {
        let observations = vec![
            Observation::new("X", "A", 2017, 3.0),
            Observation::new("X", "A", 2015, 1.0),
            Observation::new("X", "A", 2016, 2.0),
        ];
        let model = DataModel::load(observations, vec![square("X", 0.0, 0.0)]).unwrap();
        let series = model.series_for("A", "X").unwrap();
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2015, 2016, 2017]);
    }

    #[test]
    fn test_series_for_unknown_region() {
        let model = scenario();
        assert!(matches!(
            model.series_for("B", "Y"),
            Err(AtlasError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn test_load_rejects_empty_and_malformed() {
        assert!(matches!(
            DataModel::load(Vec::new(), vec![square("X", 0.0, 0.0)]),
            Err(AtlasError::EmptyDataset { .. })
        ));
        assert!(matches!(
            DataModel::load(vec![Observation::new("X", "A", 2015, 1.0)], Vec::new()),
            Err(AtlasError::EmptyDataset { .. })
        ));
        assert!(matches!(
            DataModel::load(
                vec![Observation::new("X", "", 2015, 1.0)],
                vec![square("X", 0.0, 0.0)]
            ),
            Err(AtlasError::MalformedRow { row: 0, field: "model" })
        ));
        assert!(matches!(
            DataModel::load(
                vec![Observation::new("X", "A", 2015, f64::NAN)],
                vec![square("X", 0.0, 0.0)]
            ),
            Err(AtlasError::MalformedRow { field: "tas_degree", .. })
        ));
        let sliver = Region {
            name: "X".to_string(),
            shape: MultiPolygon::new(vec![polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)]]),
        };
        assert!(matches!(
            DataModel::load(vec![Observation::new("X", "A", 2015, 1.0)], vec![sliver]),
            Err(AtlasError::MalformedRegion { index: 0, .. })
        ));
    }

    #[test]
    fn test_temperature_range() {
        assert_eq!(scenario().temperature_range(), (5.0, 22.0));
    }
}
