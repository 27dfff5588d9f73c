use nalgebra::Point3;
use serde::Serialize;

/// Pass/Fail classification of a measured quantity against a fixed threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Verdict {
    #[default]
    Pass,
    Fail,
}

impl Verdict {
    /// `Fail` when the threshold was exceeded.
    pub fn from_exceeded(exceeded: bool) -> Self {
        if exceeded {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Combined verdict: fails if either side fails.
    pub fn or(self, other: Verdict) -> Self {
        Verdict::from_exceeded(self.is_fail() || other.is_fail())
    }

    pub fn is_fail(self) -> bool {
        self == Verdict::Fail
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Pass => "Pass",
            Verdict::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end of the layer range a raw layer index was folded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerClamp {
    /// Centre lies at or below the base plane (raw index <= 0).
    Below,
    /// Centre lies above the last layer (raw index > layer count).
    Above,
}

/// One detected void, in physical units.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectRecord {
    pub diameter_mm: f64,
    /// Centre in millimetres; `z` is measured from the base plane.
    pub center: Point3<f64>,
    /// Build layer, 1-based.
    pub layer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamp: Option<LayerClamp>,
}

/// Per-layer aggregate with pass/fail verdicts.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerSummary {
    pub layer: u32,
    pub defect_count: usize,
    /// `None` when the layer holds no defects.
    pub max_diameter_mm: Option<f64>,
    pub count_verdict: Verdict,
    pub diameter_verdict: Verdict,
    pub overall_verdict: Verdict,
}

impl LayerSummary {
    /// Maximum diameter with empty layers reported as zero.
    pub fn max_diameter_or_zero(&self) -> f64 {
        self.max_diameter_mm.unwrap_or(0.0)
    }
}
