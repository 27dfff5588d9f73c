//! Voxel-to-millimetre transform and build-layer assignment.
//!
//! A scan export addresses each void by integer voxel indices. The mapper
//! scales them by the voxel pitch, shifts `z` so the base plane sits at zero,
//! and assigns the centre to a build layer of fixed thickness:
//!
//! `layer = ceil(z / thickness)`, folded into `1..=layer_count`.

mod mapper;

pub use mapper::LayerMapper;

use serde::{Deserialize, Serialize};

/// Edge length of one voxel in millimetres.
pub const VOXEL_PITCH_MM: f64 = 0.03228;
/// Height of the build plate below the first layer, in millimetres.
pub const BASE_HEIGHT_MM: f64 = 2.45;
/// Number of build layers in a specimen.
pub const LAYER_COUNT: u32 = 284;
/// Specimen height in millimetres, split evenly over [`LAYER_COUNT`] layers.
pub const SPECIMEN_HEIGHT_MM: f64 = 51.0;

/// Physical parameters of the scan and the printed specimen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanGeometry {
    pub voxel_pitch_mm: f64,
    pub base_height_mm: f64,
    pub layer_thickness_mm: f64,
    pub layer_count: u32,
}

impl Default for ScanGeometry {
    fn default() -> Self {
        Self {
            voxel_pitch_mm: VOXEL_PITCH_MM,
            base_height_mm: BASE_HEIGHT_MM,
            layer_thickness_mm: SPECIMEN_HEIGHT_MM / LAYER_COUNT as f64,
            layer_count: LAYER_COUNT,
        }
    }
}

impl ScanGeometry {
    /// Rejects geometries that cannot produce a layer index.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.voxel_pitch_mm.is_finite() && self.voxel_pitch_mm > 0.0) {
            return Err(format!("voxelPitchMm must be positive, got {}", self.voxel_pitch_mm));
        }
        if !self.base_height_mm.is_finite() {
            return Err("baseHeightMm must be finite".to_string());
        }
        if !(self.layer_thickness_mm.is_finite() && self.layer_thickness_mm > 0.0) {
            return Err(format!(
                "layerThicknessMm must be positive, got {}",
                self.layer_thickness_mm
            ));
        }
        if self.layer_count == 0 {
            return Err("layerCount must be at least 1".to_string());
        }
        Ok(())
    }
}
