mod common;

use common::synthetic_scan::{scan_csv, scattered_voids};
use porosity_layers::table::{parse_table, TableLayout};
use porosity_layers::{Inspector, LayerMapper, Verdict};

fn inspect_seed(seed: u64, count: usize) -> porosity_layers::SpecimenReport {
    let text = scan_csv(&scattered_voids(count, seed));
    let rows = parse_table(&text, &TableLayout::default()).unwrap();
    Inspector::default().inspect_table("synthetic", &rows)
}

#[test]
fn layer_indices_stay_in_range() {
    for seed in 0..8 {
        let report = inspect_seed(seed, 400);
        assert!(report
            .defects
            .iter()
            .all(|d| (1..=284).contains(&d.layer)));
    }
}

#[test]
fn summary_is_dense_sorted_and_conserves_counts() {
    for seed in 0..8 {
        let report = inspect_seed(seed, 400);
        assert_eq!(report.layers.len(), 284);
        for (i, s) in report.layers.iter().enumerate() {
            assert_eq!(s.layer as usize, i + 1);
        }
        let total: usize = report.layers.iter().map(|s| s.defect_count).sum();
        assert_eq!(total, report.defects.len());
    }
}

#[test]
fn overall_verdict_matches_rules() {
    for seed in 0..8 {
        let report = inspect_seed(seed, 900);
        for s in &report.layers {
            let expect_fail = s.defect_count > 5 || s.max_diameter_or_zero() > 0.2;
            assert_eq!(s.overall_verdict == Verdict::Fail, expect_fail, "layer {}", s.layer);
            assert_eq!(s.max_diameter_mm.is_none(), s.defect_count == 0);
        }
    }
}

#[test]
fn max_diameter_is_the_layer_maximum() {
    let report = inspect_seed(3, 600);
    for s in &report.layers {
        let expected = report
            .defects
            .iter()
            .filter(|d| d.layer == s.layer)
            .map(|d| d.diameter_mm)
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |m| m.max(d))));
        assert_eq!(s.max_diameter_mm, expected);
    }
}

#[test]
fn pipeline_is_idempotent() {
    let a = inspect_seed(11, 500);
    let b = inspect_seed(11, 500);
    assert_eq!(a.defects, b.defects);
    assert_eq!(a.layers, b.layers);
    assert_eq!(a.histogram, b.histogram);
}

#[test]
fn mapper_reproduces_reference_point() {
    let mapper = LayerMapper::default();
    let c = mapper.center_mm([0.0, 0.0, 100.0]);
    assert!((c.z - 0.778).abs() < 1e-9);
    assert_eq!(mapper.layer_for_z(c.z), (5, None));
}
