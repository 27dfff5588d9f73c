use crate::types::{DefectRecord, LayerSummary};
use serde::Serialize;

/// Decimal places used for tabular display.
pub const DISPLAY_DECIMALS: i32 = 3;

/// Rounds to `decimals` places with ties away from zero, not to even: `0.0625` shows as `0.063`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Per-defect row as shown in the data table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DefectTableRow {
    #[serde(rename = "Diameter [mm]")]
    pub diameter_mm: f64,
    #[serde(rename = "Center x [mm]")]
    pub center_x_mm: f64,
    #[serde(rename = "Center y [mm]")]
    pub center_y_mm: f64,
    #[serde(rename = "Center z [mm]")]
    pub center_z_mm: f64,
    #[serde(rename = "Layer#")]
    pub layer: u32,
}

impl From<&DefectRecord> for DefectTableRow {
    fn from(rec: &DefectRecord) -> Self {
        Self {
            diameter_mm: round_to(rec.diameter_mm, DISPLAY_DECIMALS),
            center_x_mm: round_to(rec.center.x, DISPLAY_DECIMALS),
            center_y_mm: round_to(rec.center.y, DISPLAY_DECIMALS),
            center_z_mm: round_to(rec.center.z, DISPLAY_DECIMALS),
            layer: rec.layer,
        }
    }
}

impl DefectTableRow {
    pub const HEADER: [&'static str; 5] = [
        "Diameter [mm]",
        "Center x [mm]",
        "Center y [mm]",
        "Center z [mm]",
        "Layer#",
    ];

    /// Tab-separated line with three decimals.
    pub fn to_tsv(&self) -> String {
        format!(
            "{:.3}\t{:.3}\t{:.3}\t{:.3}\t{}",
            self.diameter_mm, self.center_x_mm, self.center_y_mm, self.center_z_mm, self.layer
        )
    }
}

pub fn defect_table(records: &[DefectRecord]) -> Vec<DefectTableRow> {
    records.iter().map(DefectTableRow::from).collect()
}

/// Tab-separated line for a layer summary; empty layers print `-` as maximum.
pub fn layer_tsv(summary: &LayerSummary) -> String {
    let max_d = summary
        .max_diameter_mm
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        summary.layer,
        summary.defect_count,
        max_d,
        summary.count_verdict,
        summary.diameter_verdict,
        summary.overall_verdict
    )
}

pub const LAYER_HEADER: [&str; 6] = ["Layer#", "Porosity#", "maxD", "#Fail", "DFail", "Fail"];
