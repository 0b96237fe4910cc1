//! Threshold color scale and its legend

use egui::Color32;

use crate::constants::scale::{NO_DATA, PALETTE, THRESHOLDS};

/// One row of the legend
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub bucket: usize,
    pub color: Color32,
    pub label: String,
}

/// Fixed cut points partitioning temperature into ordered buckets
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    thresholds: Vec<f64>,
    colors: Vec<Color32>,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(THRESHOLDS.to_vec(), PALETTE.to_vec())
    }
}

impl ColorScale {
    /// `colors` must hold exactly one more entry than `thresholds`
    pub fn new(thresholds: Vec<f64>, colors: Vec<Color32>) -> Self {
        debug_assert_eq!(colors.len(), thresholds.len() + 1);
        debug_assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        Self { thresholds, colors }
    }

    /// Index of the bucket holding `temperature`; a cut point belongs to the bucket above it
    pub fn bucket_for(&self, temperature: f64) -> usize {
        self.thresholds.partition_point(|&cut| cut <= temperature)
    }

    pub fn color_for(&self, temperature: f64) -> Color32 {
        self.colors[self.bucket_for(temperature)]
    }

    pub fn bucket_color(&self, bucket: usize) -> Color32 {
        self.colors.get(bucket).copied().unwrap_or(NO_DATA)
    }

    pub fn bucket_label(&self, bucket: usize) -> String {
        let last = self.colors.len() - 1;
        match bucket {
            0 => format!("< {}", self.thresholds[0]),
            b if b >= last => format!("> {}", self.thresholds[last - 1]),
            b => format!("{}–{}", self.thresholds[b - 1], self.thresholds[b]),
        }
    }

    /// Legend rows, warmest first
    pub fn legend(&self) -> Vec<LegendEntry> {
        (0..self.colors.len())
            .rev()
            .map(|bucket| LegendEntry {
                bucket,
                color: self.colors[bucket],
                label: self.bucket_label(bucket),
            })
            .collect()
    }

    /// How many values fall outside the scale's cut points
    pub fn clamped_count(&self, values: impl IntoIterator<Item = f64>) -> usize {
        let lo = self.thresholds[0];
        let hi = self.thresholds[self.thresholds.len() - 1];
        values.into_iter().filter(|&v| v < lo || v > hi).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_fall_in_adjacent_buckets() {
        let scale = ColorScale::default();
        for (i, &cut) in THRESHOLDS.iter().enumerate() {
            assert_eq!(scale.bucket_for(cut - 1e-6), i);
            assert_eq!(scale.bucket_for(cut + 1e-6), i + 1);
            assert_eq!(scale.bucket_for(cut), i + 1);
        }
    }

    #[test]
    fn test_clamping() {
        let scale = ColorScale::default();
        assert_eq!(scale.color_for(-40.0), PALETTE[0]);
        assert_eq!(scale.color_for(55.0), PALETTE[8]);
    }

    #[test]
    fn test_monotonic() {
        let scale = ColorScale::default();
        let mut previous = 0;
        for step in 0..300 {
            let bucket = scale.bucket_for(-5.0 + step as f64 * 0.125);
            assert!(bucket >= previous);
            previous = bucket;
        }
    }

    #[test]
    fn test_labels() {
        let scale = ColorScale::default();
        assert_eq!(scale.bucket_label(0), "< 3");
        assert_eq!(scale.bucket_label(1), "3–6");
        assert_eq!(scale.bucket_label(7), "21–24");
        assert_eq!(scale.bucket_label(8), "> 24");
    }

    #[test]
    fn test_legend_is_descending() {
        let legend = ColorScale::default().legend();
        assert_eq!(legend.len(), 9);
        assert_eq!(legend[0].bucket, 8);
        assert_eq!(legend[0].color, PALETTE[8]);
        assert_eq!(legend[8].label, "< 3");
    }

    #[test]
    fn test_colors_are_distinct() {
        for (i, a) in PALETTE.iter().enumerate() {
            assert_ne!(*a, NO_DATA);
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
