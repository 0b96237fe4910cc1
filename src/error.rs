//! Error types for Climate Atlas
//!
//! Every fallible operation in the crate returns [`AtlasError`]; the UI turns
//! it into a status-bar message via [`AtlasError::user_message`].

use thiserror::Error;

/// Main error type for Climate Atlas operations
#[derive(Error, Debug)]
pub enum AtlasError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Boundary file could not be parsed as GeoJSON
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Column not found in the dataset
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Observations or boundaries were empty
    #[error("{what} is empty")]
    EmptyDataset { what: &'static str },

    /// A row is missing a required field
    #[error("Row {row} is malformed: missing or invalid '{field}'")]
    MalformedRow { row: usize, field: &'static str },

    /// A boundary feature is unusable
    #[error("Region #{index} is malformed: {reason}")]
    MalformedRegion { index: usize, reason: String },

    /// Model identifier not present in the dataset
    #[error("Unknown model '{model}'")]
    UnknownModel { model: String },

    /// No observations for the region under the model
    #[error("No observations for region '{region}' under model '{model}'")]
    UnknownRegion { model: String, region: String },

    /// Insufficient data for operation
    #[error("Insufficient data: {operation} requires at least {required} points, but got {actual}")]
    InsufficientData {
        operation: String,
        required: usize,
        actual: usize,
    },

    /// Regression over points that all share one x value
    #[error("Cannot fit a trend: all {count} points share the same year")]
    DegenerateTrend { count: usize },

    /// Window / event loop failure
    #[error("UI error: {0}")]
    Ui(String),
}

/// Result type alias for Climate Atlas operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// UI-friendly error message formatting
impl AtlasError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            AtlasError::FileIo(e) => format!("File error: {}", e),
            AtlasError::Polars(e) => format!("Data error: {}", e),
            AtlasError::GeoJson(e) => format!("Boundary file error: {}", e),
            AtlasError::Json(e) => format!("JSON error: {}", e),
            AtlasError::Config(msg) => format!("Config error: {}", msg),
            AtlasError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            AtlasError::EmptyDataset { what } => format!("{} is empty", what),
            AtlasError::MalformedRow { row, field } => {
                format!("Row {} has no valid '{}'", row, field)
            }
            AtlasError::MalformedRegion { index, reason } => {
                format!("Boundary #{}: {}", index, reason)
            }
            AtlasError::UnknownModel { model } => format!("Model '{}' is not in the dataset", model),
            AtlasError::UnknownRegion { model, region } => {
                format!("{} has no data under {}", region, model)
            }
            AtlasError::InsufficientData {
                operation,
                required,
                actual,
            } => {
                format!(
                    "{} requires {} points, but only {} available",
                    operation, required, actual
                )
            }
            AtlasError::DegenerateTrend { count } => {
                format!("Trend undefined: {} points in a single year", count)
            }
            AtlasError::Ui(msg) => msg.clone(),
        }
    }

    /// Get a short title for the error (for the fatal screen and status bar)
    pub fn title(&self) -> &'static str {
        match self {
            AtlasError::FileIo(_) => "File Error",
            AtlasError::Polars(_) => "Data Error",
            AtlasError::GeoJson(_) => "Boundary Error",
            AtlasError::Json(_) => "JSON Error",
            AtlasError::Config(_) => "Configuration Error",
            AtlasError::ColumnNotFound { .. } => "Column Not Found",
            AtlasError::EmptyDataset { .. } => "Empty Dataset",
            AtlasError::MalformedRow { .. } => "Malformed Row",
            AtlasError::MalformedRegion { .. } => "Malformed Region",
            AtlasError::UnknownModel { .. } => "Unknown Model",
            AtlasError::UnknownRegion { .. } => "Unknown Region",
            AtlasError::InsufficientData { .. } => "Insufficient Data",
            AtlasError::DegenerateTrend { .. } => "Degenerate Trend",
            AtlasError::Ui(_) => "UI Error",
        }
    }

    /// Whether the error happened while loading the inputs
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            AtlasError::FileIo(_)
                | AtlasError::Polars(_)
                | AtlasError::GeoJson(_)
                | AtlasError::ColumnNotFound { .. }
                | AtlasError::EmptyDataset { .. }
                | AtlasError::MalformedRow { .. }
                | AtlasError::MalformedRegion { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AtlasError::UnknownRegion {
            model: "ACCESS-CM2".to_string(),
            region: "Texas".to_string(),
        };
        assert_eq!(err.user_message(), "Texas has no data under ACCESS-CM2");
        assert_eq!(err.title(), "Unknown Region");

        let err = AtlasError::InsufficientData {
            operation: "Linear trend".to_string(),
            required: 2,
            actual: 1,
        };
        assert_eq!(
            err.user_message(),
            "Linear trend requires 2 points, but only 1 available"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AtlasError = io_err.into();
        assert!(matches!(err, AtlasError::FileIo(_)));
        assert!(err.is_load_error());
    }

    #[test]
    fn test_lookup_errors_are_not_load_errors() {
        let err = AtlasError::UnknownModel { model: "X".into() };
        assert!(!err.is_load_error());
    }
}
