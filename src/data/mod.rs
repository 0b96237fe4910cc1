pub mod boundaries;
pub mod loader;
pub mod model;
pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use boundaries::load_regions;
pub use loader::BackgroundLoader;
pub use model::{DataModel, Observation, Region, YearValue};
pub use source::load_observations;
pub use stats::{LinearTrend, TrendComparison, series_trend};
