use crate::types::{DefectRecord, LayerClamp};
use serde::Serialize;

/// Row and clamping counts for one specimen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenDiagnostics {
    pub rows: usize,
    /// Defects at or below the base plane, folded into the first layer.
    pub clamped_below: usize,
    /// Defects above the last layer, folded into it.
    pub clamped_above: usize,
}

impl SpecimenDiagnostics {
    pub fn from_defects(defects: &[DefectRecord]) -> Self {
        let mut diag = Self {
            rows: defects.len(),
            ..Default::default()
        };
        for d in defects {
            match d.clamp {
                Some(LayerClamp::Below) => diag.clamped_below += 1,
                Some(LayerClamp::Above) => diag.clamped_above += 1,
                None => {}
            }
        }
        diag
    }
}
