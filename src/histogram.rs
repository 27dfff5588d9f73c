//! Frequency histogram of defect diameters over a fixed display range.

use crate::types::DefectRecord;
use serde::{Deserialize, Serialize};

/// Bin count and range for the diameter histogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistogramConfig {
    pub bins: usize,
    pub range_mm: [f64; 2],
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bins: 40,
            range_mm: [0.08, 0.43],
        }
    }
}

impl HistogramConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.bins == 0 {
            return Err("histogram requires at least one bin".to_string());
        }
        let [lo, hi] = self.range_mm;
        if !(lo.is_finite() && hi.is_finite() && hi > lo) {
            return Err(format!("histogram range [{lo}, {hi}] is empty"));
        }
        Ok(())
    }
}

/// Equal-width histogram over `[lo, hi]`; the last bin includes `hi`.
///
/// Values outside the range are tallied separately instead of being dropped.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiameterHistogram {
    range_mm: [f64; 2],
    bin_width: f64,
    counts: Vec<usize>,
    underflow: usize,
    overflow: usize,
}

impl DiameterHistogram {
    /// # Panics
    ///
    /// Panics if `config` fails [`HistogramConfig::validate`].
    pub fn new(config: &HistogramConfig) -> Self {
        assert!(
            config.validate().is_ok(),
            "diameter histogram requires a valid config: {config:?}"
        );
        let [lo, hi] = config.range_mm;
        Self {
            range_mm: config.range_mm,
            bin_width: (hi - lo) / config.bins as f64,
            counts: vec![0; config.bins],
            underflow: 0,
            overflow: 0,
        }
    }

    pub fn from_defects(config: &HistogramConfig, defects: &[DefectRecord]) -> Self {
        let mut hist = Self::new(config);
        for d in defects {
            hist.accumulate(d.diameter_mm);
        }
        hist
    }

    pub fn accumulate(&mut self, diameter_mm: f64) {
        let [lo, hi] = self.range_mm;
        if !diameter_mm.is_finite() {
            return;
        }
        if diameter_mm < lo {
            self.underflow += 1;
            return;
        }
        if diameter_mm > hi {
            self.overflow += 1;
            return;
        }
        let idx = (((diameter_mm - lo) / self.bin_width) as usize).min(self.counts.len() - 1);
        self.counts[idx] += 1;
    }

    pub fn bins(&self) -> &[usize] {
        &self.counts
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// `bins + 1` edges from `lo` to `hi`.
    pub fn bin_edges(&self) -> Vec<f64> {
        let lo = self.range_mm[0];
        (0..=self.counts.len())
            .map(|i| lo + i as f64 * self.bin_width)
            .collect()
    }

    pub fn underflow(&self) -> usize {
        self.underflow
    }

    pub fn overflow(&self) -> usize {
        self.overflow
    }

    /// All accumulated values, in range or not.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.underflow + self.overflow
    }
}
