//! Least-squares trends and the state-versus-nation comparison

use crate::constants::numeric::EPSILON;
use crate::data::YearValue;
use crate::error::{AtlasError, Result};

/// Ordinary least-squares line through a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Warming per ten years
    pub fn decade_slope(&self) -> f64 {
        self.slope * 10.0
    }
}

/// Fit `y = slope * x + intercept` by least squares
pub fn linear_trend(points: &[[f64; 2]]) -> Result<LinearTrend> {
    let n = points.len();
    if n < 2 {
        return Err(AtlasError::InsufficientData {
            operation: "Linear trend".to_string(),
            required: 2,
            actual: n,
        });
    }

    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), &[x, y]| (sx + x, sy + y, sxy + x * y, sxx + x * x),
    );
    let n = n as f64;
    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < EPSILON {
        return Err(AtlasError::DegenerateTrend { count: points.len() });
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(LinearTrend { slope, intercept })
}

/// Trend of a year series
pub fn series_trend(series: &[YearValue]) -> Result<LinearTrend> {
    let points: Vec<[f64; 2]> = series.iter().map(YearValue::point).collect();
    linear_trend(&points)
}

/// A region's warming rate against the national one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendComparison {
    pub region_decade_slope: f64,
    pub national_decade_slope: f64,
}

impl TrendComparison {
    pub fn from_trends(region: &LinearTrend, national: &LinearTrend) -> Self {
        Self {
            region_decade_slope: region.decade_slope(),
            national_decade_slope: national.decade_slope(),
        }
    }

    /// Strictly greater; equal slopes count as slower
    pub fn rising_faster(&self) -> bool {
        self.region_decade_slope > self.national_decade_slope
    }

    pub fn verdict(&self) -> &'static str {
        if self.rising_faster() {
            "Rising faster than the U.S. average"
        } else {
            "Rising slower than the U.S. average"
        }
    }

    /// One-line summary shown under the drill-down title
    pub fn summary(&self, region: &str, model: &str, years: (i32, i32)) -> String {
        format!(
            "{} warming at {:.2}°C per decade under {} ({}–{}). {} ({:.2}°C).",
            region,
            self.region_decade_slope,
            model,
            years.0,
            years.1,
            self.verdict(),
            self.national_decade_slope
        )
    }
}
