use crate::types::{DefectRecord, LayerSummary, Verdict};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Fixed quality limits applied to every layer. Both comparisons are strict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayerThresholds {
    /// A layer fails when it holds more defects than this.
    pub max_defect_count: usize,
    /// A layer fails when its largest defect exceeds this diameter.
    pub max_diameter_mm: f64,
}

impl Default for LayerThresholds {
    fn default() -> Self {
        Self {
            max_defect_count: 5,
            max_diameter_mm: 0.2,
        }
    }
}

impl LayerThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.max_diameter_mm.is_finite() && self.max_diameter_mm >= 0.0) {
            return Err(format!(
                "thresholds.maxDiameterMm must be a non-negative number, got {}",
                self.max_diameter_mm
            ));
        }
        Ok(())
    }

    pub fn classify(
        &self,
        layer: u32,
        defect_count: usize,
        max_diameter_mm: Option<f64>,
    ) -> LayerSummary {
        let count_verdict = Verdict::from_exceeded(defect_count > self.max_defect_count);
        let diameter_verdict =
            Verdict::from_exceeded(max_diameter_mm.is_some_and(|d| d > self.max_diameter_mm));
        LayerSummary {
            layer,
            defect_count,
            max_diameter_mm,
            count_verdict,
            diameter_verdict,
            overall_verdict: count_verdict.or(diameter_verdict),
        }
    }
}

#[derive(Clone, Copy, Default)]
struct LayerAccumulator {
    count: usize,
    max_diameter: Option<f64>,
}

impl LayerAccumulator {
    fn push(&mut self, diameter: f64) {
        self.count += 1;
        self.max_diameter = Some(match self.max_diameter {
            Some(m) => m.max(diameter),
            None => diameter,
        });
    }
}

/// Groups defects by layer and classifies every layer in `1..=layer_count`.
///
/// The result is dense: one entry per layer, ascending, empty layers included.
pub fn classify_layers(
    records: &[DefectRecord],
    layer_count: u32,
    thresholds: &LayerThresholds,
) -> Vec<LayerSummary> {
    let mut acc = vec![LayerAccumulator::default(); layer_count as usize];
    let mut skipped = 0usize;
    for rec in records {
        match rec.layer.checked_sub(1).and_then(|i| acc.get_mut(i as usize)) {
            Some(slot) => slot.push(rec.diameter_mm),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(
            "classify_layers ignored {} records outside layers 1..={}",
            skipped, layer_count
        );
    }

    let summaries: Vec<LayerSummary> = acc
        .iter()
        .zip(1u32..)
        .map(|(a, layer)| thresholds.classify(layer, a.count, a.max_diameter))
        .collect();
    debug!(
        "classify_layers: {} records over {} layers, {} failing",
        records.len(),
        summaries.len(),
        summaries.iter().filter(|s| s.overall_verdict.is_fail()).count()
    );
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn defect(layer: u32, diameter_mm: f64) -> DefectRecord {
        DefectRecord {
            diameter_mm,
            center: Point3::origin(),
            layer,
            clamp: None,
        }
    }

    #[test]
    fn layer_with_one_large_defect_fails_on_diameter() {
        let records = vec![defect(7, 0.1), defect(7, 0.25), defect(7, 0.05)];
        let layers = classify_layers(&records, 284, &LayerThresholds::default());
        let l7 = &layers[6];
        assert_eq!(l7.layer, 7);
        assert_eq!(l7.defect_count, 3);
        assert_eq!(l7.max_diameter_mm, Some(0.25));
        assert_eq!(l7.count_verdict, Verdict::Pass);
        assert_eq!(l7.diameter_verdict, Verdict::Fail);
        assert_eq!(l7.overall_verdict, Verdict::Fail);
    }

    #[test]
    fn six_defects_fail_on_count_five_pass() {
        let mut records: Vec<_> = (0..6).map(|_| defect(2, 0.1)).collect();
        records.extend((0..5).map(|_| defect(3, 0.1)));
        let layers = classify_layers(&records, 10, &LayerThresholds::default());
        assert_eq!(layers[1].count_verdict, Verdict::Fail);
        assert_eq!(layers[1].overall_verdict, Verdict::Fail);
        assert_eq!(layers[2].count_verdict, Verdict::Pass);
        assert_eq!(layers[2].overall_verdict, Verdict::Pass);
    }

    #[test]
    fn threshold_diameter_itself_passes() {
        let layers = classify_layers(&[defect(1, 0.2)], 1, &LayerThresholds::default());
        assert_eq!(layers[0].diameter_verdict, Verdict::Pass);
    }

    #[test]
    fn empty_input_is_dense_and_passing() {
        let layers = classify_layers(&[], 284, &LayerThresholds::default());
        assert_eq!(layers.len(), 284);
        for (i, s) in layers.iter().enumerate() {
            assert_eq!(s.layer as usize, i + 1);
            assert_eq!(s.defect_count, 0);
            assert_eq!(s.max_diameter_mm, None);
            assert_eq!(s.overall_verdict, Verdict::Pass);
        }
    }

    #[test]
    fn zero_diameter_defect_is_distinct_from_empty() {
        let layers = classify_layers(&[defect(4, 0.0)], 5, &LayerThresholds::default());
        assert_eq!(layers[3].max_diameter_mm, Some(0.0));
        assert_eq!(layers[4].max_diameter_mm, None);
    }

    #[test]
    fn out_of_range_records_are_ignored() {
        let records = [defect(0, 0.3), defect(9, 0.3)];
        let layers = classify_layers(&records, 5, &LayerThresholds::default());
        assert!(layers.iter().all(|s| s.defect_count == 0));
    }
}
