use porosity_layers::ScanGeometry;
use std::fmt::Write;

pub const HEADER: &str = "Index,Label,Diameter [mm],Center x [voxel],Center y [voxel],Center z [voxel]";

/// One synthetic void: diameter and voxel indices.
#[derive(Clone, Copy, Debug)]
pub struct Void {
    pub diameter_mm: f64,
    pub voxel: [i64; 3],
}

/// Voxel `z` index whose centre lies in the middle of `layer`.
pub fn voxel_z_for_layer(geometry: &ScanGeometry, layer: u32) -> i64 {
    let z_mm = (layer as f64 - 0.5) * geometry.layer_thickness_mm;
    ((z_mm + geometry.base_height_mm) / geometry.voxel_pitch_mm).round() as i64
}

/// Void of `diameter_mm` in the middle of `layer`, near the cylinder axis.
pub fn void_in_layer(geometry: &ScanGeometry, layer: u32, diameter_mm: f64) -> Void {
    Void {
        diameter_mm,
        voxel: [310, 295, voxel_z_for_layer(geometry, layer)],
    }
}

/// Renders voids in the scanner's export format.
pub fn scan_csv(voids: &[Void]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (i, v) in voids.iter().enumerate() {
        writeln!(
            out,
            "{},pore,{:.4},{},{},{}",
            i + 1,
            v.diameter_mm,
            v.voxel[0],
            v.voxel[1],
            v.voxel[2]
        )
        .unwrap();
    }
    out
}

/// Deterministic scatter of voids through the whole specimen height,
/// including a few above the last layer.
pub fn scattered_voids(count: usize, seed: u64) -> Vec<Void> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };
    (0..count)
        .map(|_| Void {
            diameter_mm: 0.08 + 0.3 * next(),
            voxel: [
                (150.0 + 300.0 * next()) as i64,
                (150.0 + 300.0 * next()) as i64,
                (80.0 + 1700.0 * next()) as i64,
            ],
        })
        .collect()
}
