//! Drill-down chart content: a region's series against the national one

use crate::constants::subplot::{CURVE_SAMPLES, NICE_TICKS, Y_PADDING};
use crate::curve;
use crate::data::{LinearTrend, TrendComparison, YearValue, series_trend};
use crate::scale;

/// Everything the chart draws for one (region, model) pair
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotContent {
    pub region: String,
    pub model: String,
    pub state_series: Vec<YearValue>,
    pub national_series: Vec<YearValue>,
    /// Smoothed polylines, sampled from the series
    pub state_curve: Vec<[f64; 2]>,
    pub national_curve: Vec<[f64; 2]>,
    pub x_domain: [f64; 2],
    pub y_domain: [f64; 2],
    pub title: String,
    pub summary: String,
    pub comparison: Option<TrendComparison>,
    /// Regression lines, absent for series too short to fit
    pub state_trend: Option<LinearTrend>,
    pub national_trend: Option<LinearTrend>,
}

/// Vertical marker at the slider's year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearIndicator {
    pub year: i32,
}

impl YearIndicator {
    pub fn label(&self) -> String {
        format!("Year: {}", self.year)
    }
}

/// Drill-down panel state; empty until a region is selected
#[derive(Debug, Default)]
pub struct SubplotView {
    content: Option<SubplotContent>,
    indicator: Option<YearIndicator>,
    renders: usize,
}

impl SubplotView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any previous content with the given series
    pub fn render(
        &mut self,
        state_series: Vec<YearValue>,
        national_series: Vec<YearValue>,
        region: &str,
        model: &str,
        year: i32,
    ) {
        profiling::scope!("SubplotView::render");

        let years = state_series
            .iter()
            .chain(national_series.iter())
            .map(|p| p.year as f64);
        let x_domain = scale::extent(years)
            .map(|[lo, hi]| scale::nice_domain(lo, hi, NICE_TICKS))
            .unwrap_or([year as f64, year as f64]);

        let values = state_series
            .iter()
            .chain(national_series.iter())
            .map(|p| p.value);
        let y_domain = scale::extent(values)
            .map(|[lo, hi]| scale::nice_domain(lo - Y_PADDING, hi + Y_PADDING, NICE_TICKS))
            .unwrap_or([0.0, 1.0]);

        let first = state_series.first().map(|p| p.year).unwrap_or(year);
        let last = state_series.last().map(|p| p.year).unwrap_or(year);
        let title = format!(
            "Average Annual Near Surface Temperature of {} ({} ~ {})",
            region, first, last
        );

        // single-point series have no trend
        let fit = |series: &[YearValue]| {
            if series.len() < 2 {
                return None;
            }
            series_trend(series)
                .map_err(|e| log::warn!("no trend for {} under {}: {}", region, model, e))
                .ok()
        };
        let state_trend = fit(&state_series);
        let national_trend = fit(&national_series);
        let comparison = state_trend
            .zip(national_trend)
            .map(|(s, n)| TrendComparison::from_trends(&s, &n));
        let summary = match &comparison {
            Some(c) => c.summary(region, model, (first, last)),
            None => format!("Not enough data to estimate a trend for {} under {}.", region, model),
        };

        let points = |series: &[YearValue]| series.iter().map(YearValue::point).collect::<Vec<_>>();
        let state_curve = curve::monotone_x(&points(&state_series), CURVE_SAMPLES);
        let national_curve = curve::monotone_x(&points(&national_series), CURVE_SAMPLES);

        self.content = Some(SubplotContent {
            region: region.to_string(),
            model: model.to_string(),
            state_series,
            national_series,
            state_curve,
            national_curve,
            x_domain,
            y_domain,
            title,
            summary,
            comparison,
            state_trend,
            national_trend,
        });
        self.indicator = Some(YearIndicator { year });
        self.renders += 1;
        log::debug!("subplot render #{} for {} under {}", self.renders, region, model);
    }

    /// Move the year marker without rebuilding the chart
    pub fn update_year_indicator(&mut self, year: i32) {
        if self.content.is_some() {
            self.indicator = Some(YearIndicator { year });
        }
    }

    pub fn clear(&mut self) {
        self.content = None;
        self.indicator = None;
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&SubplotContent> {
        self.content.as_ref()
    }

    pub fn indicator(&self) -> Option<YearIndicator> {
        self.indicator
    }

    /// Number of full renders so far
    #[cfg(test)]
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(i32, f64)]) -> Vec<YearValue> {
        points
            .iter()
            .map(|&(year, value)| YearValue { year, value })
            .collect()
    }

    #[test]
    fn test_render_domains_and_text() {
        let mut subplot = SubplotView::new();
        subplot.render(
            series(&[(2015, 5.0), (2016, 7.0)]),
            series(&[(2015, 7.0), (2016, 9.0)]),
            "X",
            "A",
            2015,
        );
        let content = subplot.content().unwrap();
        assert_eq!(content.x_domain, [2015.0, 2016.0]);
        // [4.7, 9.3] rounded outward to half degrees
        assert_eq!(content.y_domain, [4.5, 9.5]);
        assert_eq!(
            content.title,
            "Average Annual Near Surface Temperature of X (2015 ~ 2016)"
        );
        assert_eq!(
            content.summary,
            "X warming at 20.00°C per decade under A (2015–2016). \
             Rising slower than the U.S. average (20.00°C)."
        );
        assert_eq!(subplot.indicator().unwrap().label(), "Year: 2015");
        let trend = content.state_trend.unwrap();
        assert!((trend.predict(2016.0) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_year_indicator_moves_without_render() {
        let mut subplot = SubplotView::new();
        subplot.update_year_indicator(2050);
        assert!(subplot.indicator().is_none());

        subplot.render(
            series(&[(2015, 5.0), (2100, 9.0)]),
            series(&[(2015, 6.0), (2100, 8.0)]),
            "X",
            "A",
            2015,
        );
        let before = subplot.content().cloned();
        subplot.update_year_indicator(2050);
        assert_eq!(subplot.indicator(), Some(YearIndicator { year: 2050 }));
        assert_eq!(subplot.content().cloned(), before);
        assert_eq!(subplot.render_count(), 1);
    }

    #[test]
    fn test_single_point_series() {
        let mut subplot = SubplotView::new();
        subplot.render(
            series(&[(2015, 5.0)]),
            series(&[(2015, 7.0), (2016, 9.0)]),
            "X",
            "A",
            2015,
        );
        let content = subplot.content().unwrap();
        assert!(content.comparison.is_none());
        assert!(content.state_trend.is_none());
        assert!(content.national_trend.is_some());
        assert!(content.summary.starts_with("Not enough data"));
        assert_eq!(content.state_curve, vec![[2015.0, 5.0]]);
    }

    #[test]
    fn test_clear() {
        let mut subplot = SubplotView::new();
        subplot.render(series(&[(2015, 5.0)]), Vec::new(), "X", "A", 2015);
        assert!(subplot.is_open());
        subplot.clear();
        assert!(!subplot.is_open());
        assert!(subplot.indicator().is_none());
    }
}
