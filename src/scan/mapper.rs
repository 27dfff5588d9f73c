use super::ScanGeometry;
use crate::table::RawDefectRow;
use crate::types::{DefectRecord, LayerClamp};
use log::{debug, warn};
use nalgebra::Point3;

/// Converts raw voxel-index rows into physical defect records.
#[derive(Clone, Debug, Default)]
pub struct LayerMapper {
    geometry: ScanGeometry,
}

impl LayerMapper {
    pub fn new(geometry: ScanGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &ScanGeometry {
        &self.geometry
    }

    /// Physical centre of a voxel-indexed point, `z` relative to the base plane.
    pub fn center_mm(&self, voxel: [f64; 3]) -> Point3<f64> {
        let p = self.geometry.voxel_pitch_mm;
        Point3::new(
            p * voxel[0],
            p * voxel[1],
            p * voxel[2] - self.geometry.base_height_mm,
        )
    }

    /// Layer containing height `z_mm`, folded into `1..=layer_count`.
    ///
    /// Returns the clamp direction when the raw index fell outside the range.
    pub fn layer_for_z(&self, z_mm: f64) -> (u32, Option<LayerClamp>) {
        let count = self.geometry.layer_count;
        let raw = (z_mm / self.geometry.layer_thickness_mm).ceil();
        if raw > count as f64 {
            (count, Some(LayerClamp::Above))
        } else if raw < 1.0 {
            (1, Some(LayerClamp::Below))
        } else {
            (raw as u32, None)
        }
    }

    pub fn map_row(&self, row: &RawDefectRow) -> DefectRecord {
        let center = self.center_mm(row.voxel);
        let (layer, clamp) = self.layer_for_z(center.z);
        match clamp {
            Some(LayerClamp::Below) => warn!(
                "line {}: centre z={:.4} mm lies at or below the base plane, assigned to layer 1",
                row.line, center.z
            ),
            Some(LayerClamp::Above) => debug!(
                "line {}: centre z={:.4} mm lies above the last layer, assigned to layer {}",
                row.line, center.z, layer
            ),
            None => {}
        }
        DefectRecord {
            diameter_mm: row.diameter_mm,
            center,
            layer,
            clamp,
        }
    }

    pub fn map_rows(&self, rows: &[RawDefectRow]) -> Vec<DefectRecord> {
        let records: Vec<DefectRecord> = rows.iter().map(|row| self.map_row(row)).collect();
        debug!("LayerMapper::map_rows mapped {} rows", records.len());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(voxel: [f64; 3]) -> RawDefectRow {
        RawDefectRow {
            line: 2,
            diameter_mm: 0.1,
            voxel,
        }
    }

    #[test]
    fn voxel_100_maps_to_layer_5() {
        let mapper = LayerMapper::default();
        let rec = mapper.map_row(&row([0.0, 0.0, 100.0]));
        assert!((rec.center.z - 0.778).abs() < 1e-9);
        assert_eq!(rec.layer, 5);
        assert_eq!(rec.clamp, None);
    }

    #[test]
    fn xy_scale_by_pitch() {
        let mapper = LayerMapper::default();
        let c = mapper.center_mm([10.0, 20.0, 0.0]);
        assert!((c.x - 0.3228).abs() < 1e-12);
        assert!((c.y - 0.6456).abs() < 1e-12);
        assert!((c.z + 2.45).abs() < 1e-12);
    }

    #[test]
    fn high_layers_fold_into_last() {
        let mapper = LayerMapper::default();
        let (layer, clamp) = mapper.layer_for_z(60.0);
        assert_eq!(layer, 284);
        assert_eq!(clamp, Some(LayerClamp::Above));

        let (layer, clamp) = mapper.layer_for_z(50.9);
        assert_eq!(layer, 284);
        assert_eq!(clamp, None);
    }

    #[test]
    fn base_plane_and_below_fold_into_first() {
        let mapper = LayerMapper::default();
        assert_eq!(mapper.layer_for_z(0.0), (1, Some(LayerClamp::Below)));
        assert_eq!(mapper.layer_for_z(-1.3), (1, Some(LayerClamp::Below)));
        assert_eq!(mapper.layer_for_z(0.01), (1, None));
    }

    #[test]
    fn map_row_flags_both_ends() {
        let mapper = LayerMapper::default();
        let below = mapper.map_row(&row([0.0, 0.0, 20.0]));
        assert!(below.center.z < 0.0);
        assert_eq!((below.layer, below.clamp), (1, Some(LayerClamp::Below)));

        let above = mapper.map_row(&row([0.0, 0.0, 2000.0]));
        assert_eq!((above.layer, above.clamp), (284, Some(LayerClamp::Above)));
    }

    #[test]
    fn layer_boundary_belongs_to_lower_layer() {
        let mapper = LayerMapper::default();
        let t = mapper.geometry().layer_thickness_mm;
        assert_eq!(mapper.layer_for_z(2.0 * t).0, 2);
        assert_eq!(mapper.layer_for_z(2.0 * t + 1e-9).0, 3);
    }
}
