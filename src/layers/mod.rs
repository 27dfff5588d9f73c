//! Per-layer aggregation and pass/fail classification.

mod classifier;

pub use classifier::{classify_layers, LayerThresholds};

use crate::types::LayerSummary;
use serde::Serialize;

/// Counts of passing and failing layers, split by the rule that failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictTally {
    pub pass: usize,
    pub fail: usize,
    pub count_fail: usize,
    pub diameter_fail: usize,
}

impl VerdictTally {
    pub fn from_layers(layers: &[LayerSummary]) -> Self {
        layers.iter().fold(Self::default(), |mut t, s| {
            if s.overall_verdict.is_fail() {
                t.fail += 1;
            } else {
                t.pass += 1;
            }
            t.count_fail += usize::from(s.count_verdict.is_fail());
            t.diameter_fail += usize::from(s.diameter_verdict.is_fail());
            t
        })
    }
}

/// Layer numbers whose overall verdict is `Fail`, ascending.
pub fn failing_layers(layers: &[LayerSummary]) -> Vec<u32> {
    layers
        .iter()
        .filter(|s| s.overall_verdict.is_fail())
        .map(|s| s.layer)
        .collect()
}
