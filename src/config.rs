//! Command line arguments and the JSON configuration file

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{AtlasError, Result};

#[derive(Parser, Debug, Default)]
#[command(
    name = "climate-atlas",
    version,
    about = "Choropleth of projected U.S. state temperatures"
)]
pub struct Args {
    /// CSV with state, model, year and tas_degree columns
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// GeoJSON FeatureCollection of state boundaries
    #[arg(long)]
    pub boundaries: Option<PathBuf>,

    /// Configuration file (defaults to ./climate-atlas.json when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub data_path: Option<PathBuf>,
    pub boundaries_path: Option<PathBuf>,
    /// Regions kept in the data but left off the map
    pub excluded_regions: Vec<String>,
    /// Where a selected region is moved, as fractions of the view box
    pub reposition_target: [f64; 2],
    /// Extra leftward shift (percent of view box width) per selected region
    pub region_offsets: BTreeMap<String, f64>,
    pub window_size: [f32; 2],
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            boundaries_path: None,
            excluded_regions: constants::map::EXCLUDED_REGIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            reposition_target: constants::map::REPOSITION_TARGET,
            region_offsets: default_region_offsets(),
            window_size: constants::layout::WINDOW_SIZE,
        }
    }
}

/// Hand-tuned offsets so that each state's outline sits clear of the chart
fn default_region_offsets() -> BTreeMap<String, f64> {
    const TABLE: &[(f64, &[&str])] = &[
        (5.0, &["Montana", "Texas"]),
        (4.25, &["Oklahoma", "Nebraska", "Florida", "North Carolina"]),
        (
            4.0,
            &[
                "California",
                "Kansas",
                "South Dakota",
                "North Dakota",
                "Tennessee",
                "Michigan",
                "Kentucky",
                "Virginia",
            ],
        ),
        (3.5, &["Oregon", "Washington", "Colorado", "Minnesota", "Wyoming"]),
        (2.5, &["Iowa", "Missouri", "Nevada", "Idaho", "New York"]),
        (2.0, &["Illinois", "Wisconsin", "Pennsylvania", "Arizona", "New Mexico"]),
        (
            1.5,
            &[
                "Utah",
                "Arkansas",
                "Louisiana",
                "Mississippi",
                "Alabama",
                "Georgia",
                "South Carolina",
                "West Virginia",
                "Ohio",
                "Maryland",
            ],
        ),
        (1.0, &["Indiana", "Massachusetts", "Maine"]),
    ];

    TABLE
        .iter()
        .flat_map(|(offset, names)| names.iter().map(move |name| (name.to_string(), *offset)))
        .collect()
}

impl AtlasConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str::<AtlasConfig>(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit `--config` must exist; the default file is optional
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                log::info!("reading configuration from {}", path.display());
                Self::load(path)?
            }
            None => {
                let default = Path::new(constants::config::CONFIG_FILE);
                if default.exists() {
                    log::info!("reading configuration from {}", default.display());
                    Self::load(default)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_args(args);
        Ok(config)
    }

    /// Command line paths win over the file
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(path) = &args.data {
            self.data_path = Some(path.clone());
        }
        if let Some(path) = &args.boundaries {
            self.boundaries_path = Some(path.clone());
        }
    }

    fn validate(&self) -> Result<()> {
        if self
            .reposition_target
            .iter()
            .any(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
        {
            return Err(AtlasError::Config(format!(
                "reposition_target must lie within [0, 1], got {:?}",
                self.reposition_target
            )));
        }
        if let Some((name, _)) = self.region_offsets.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AtlasError::Config(format!("offset for '{}' is not a number", name)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AtlasConfig::default();
        assert_eq!(config.excluded_regions, vec!["Alaska", "Hawaii", "Puerto Rico"]);
        assert_eq!(config.reposition_target, [0.05, 0.375]);
        assert_eq!(config.region_offsets["Texas"], 5.0);
        assert_eq!(config.region_offsets["Maine"], 1.0);
        assert!(!config.region_offsets.contains_key("Delaware"));
        assert_eq!(config.region_offsets.len(), 42);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_path": "tas.csv", "region_offsets": {{"Texas": 1.25}}}}"#
        )
        .unwrap();
        let config = AtlasConfig::load(file.path()).unwrap();
        assert_eq!(config.data_path, Some(PathBuf::from("tas.csv")));
        assert_eq!(config.region_offsets["Texas"], 1.25);
        assert!(!config.region_offsets.contains_key("Montana"));
        assert_eq!(config.window_size, constants::layout::WINDOW_SIZE);
    }

    #[test]
    fn test_args_override_file() {
        let mut config = AtlasConfig {
            data_path: Some(PathBuf::from("file.csv")),
            boundaries_path: Some(PathBuf::from("file.json")),
            ..AtlasConfig::default()
        };
        let args = Args {
            data: Some(PathBuf::from("cli.csv")),
            ..Args::default()
        };
        config.apply_args(&args);
        assert_eq!(config.data_path, Some(PathBuf::from("cli.csv")));
        assert_eq!(config.boundaries_path, Some(PathBuf::from("file.json")));
    }

    #[test]
    fn test_rejects_bad_target() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"reposition_target": [1.5, 0.2]}}"#).unwrap();
        assert!(matches!(
            AtlasConfig::load(file.path()),
            Err(AtlasError::Config(_))
        ));
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::try_parse_from(["climate-atlas", "--data", "a.csv", "--boundaries", "b.json"]).unwrap();
        assert_eq!(args.data, Some(PathBuf::from("a.csv")));
        assert_eq!(args.boundaries, Some(PathBuf::from("b.json")));
        assert!(args.config.is_none());
    }
}
