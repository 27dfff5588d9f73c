use crate::diagnostics::{SpecimenDiagnostics, TimingBreakdown};
use crate::error::Result;
use crate::histogram::DiameterHistogram;
use crate::layers::{LayerThresholds, VerdictTally};
use crate::scan::ScanGeometry;
use crate::table::{defect_table, write_json_file, DefectTableRow};
use crate::types::{DefectRecord, LayerSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Derived tables of one specimen. Immutable once built.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecimenReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub defects: Vec<DefectRecord>,
    /// Dense, ascending by layer.
    pub layers: Vec<LayerSummary>,
    pub histogram: DiameterHistogram,
    pub tally: VerdictTally,
    pub failing_layers: Vec<u32>,
    pub diagnostics: SpecimenDiagnostics,
    pub timing: TimingBreakdown,
}

impl SpecimenReport {
    /// Per-defect rows rounded for display.
    pub fn display_table(&self) -> Vec<DefectTableRow> {
        defect_table(&self.defects)
    }

    /// Summary of a 1-based layer, if it exists.
    pub fn layer(&self, layer: u32) -> Option<&LayerSummary> {
        let idx = layer.checked_sub(1)? as usize;
        self.layers.get(idx).filter(|s| s.layer == layer)
    }
}

/// Output of one inspection run across all configured specimens.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    pub geometry: ScanGeometry,
    pub thresholds: LayerThresholds,
    pub specimens: Vec<SpecimenReport>,
    pub timing: TimingBreakdown,
}

impl InspectionReport {
    pub fn specimen(&self, name: &str) -> Option<&SpecimenReport> {
        self.specimens.iter().find(|s| s.name == name)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
    }
}
