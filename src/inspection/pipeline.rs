use super::report::{InspectionReport, SpecimenReport};
use crate::config::InspectionConfig;
use crate::diagnostics::{elapsed_ms, SpecimenDiagnostics, StageTiming, TimingBreakdown};
use crate::error::{InspectError, Result};
use crate::histogram::{DiameterHistogram, HistogramConfig};
use crate::layers::{classify_layers, failing_layers, LayerThresholds, VerdictTally};
use crate::scan::{LayerMapper, ScanGeometry};
use crate::table::{read_table, RawDefectRow, TableLayout};
use log::{debug, info};
use std::path::Path;
use std::time::Instant;

/// Parameters shared by every specimen of a run.
#[derive(Clone, Debug, Default)]
pub struct InspectionParams {
    pub geometry: ScanGeometry,
    pub thresholds: LayerThresholds,
    pub histogram: HistogramConfig,
}

impl InspectionParams {
    /// Rejects geometry, thresholds, or histogram settings that cannot be inspected with.
    pub fn validate(&self) -> Result<()> {
        self.geometry.validate().map_err(InspectError::Config)?;
        self.thresholds.validate().map_err(InspectError::Config)?;
        self.histogram.validate().map_err(InspectError::Config)?;
        Ok(())
    }
}

impl From<&InspectionConfig> for InspectionParams {
    fn from(cfg: &InspectionConfig) -> Self {
        Self {
            geometry: cfg.geometry.clone(),
            thresholds: cfg.thresholds.clone(),
            histogram: cfg.histogram.clone(),
        }
    }
}

/// Maps and classifies specimens. Holds no state between specimens.
#[derive(Clone, Debug, Default)]
pub struct Inspector {
    mapper: LayerMapper,
    params: InspectionParams,
}

impl Inspector {
    pub fn new(params: InspectionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            mapper: LayerMapper::new(params.geometry.clone()),
            params,
        })
    }

    pub fn params(&self) -> &InspectionParams {
        &self.params
    }

    /// Builds the report of one specimen from already-parsed rows.
    pub fn inspect_table(&self, name: &str, rows: &[RawDefectRow]) -> SpecimenReport {
        let mut timing = TimingBreakdown::default();
        let defects = timing.time("map", || self.mapper.map_rows(rows));
        let layers = timing.time("classify", || {
            classify_layers(
                &defects,
                self.params.geometry.layer_count,
                &self.params.thresholds,
            )
        });
        let histogram = timing.time("histogram", || {
            DiameterHistogram::from_defects(&self.params.histogram, &defects)
        });
        timing.close();

        let diagnostics = SpecimenDiagnostics::from_defects(&defects);
        let tally = VerdictTally::from_layers(&layers);
        info!(
            "{}: {} defects, {} of {} layers failing",
            name,
            defects.len(),
            tally.fail,
            layers.len()
        );
        if diagnostics.clamped_below > 0 || diagnostics.clamped_above > 0 {
            info!(
                "{}: {} centres below the base plane, {} above the last layer",
                name, diagnostics.clamped_below, diagnostics.clamped_above
            );
        }

        SpecimenReport {
            name: name.to_string(),
            source: None,
            failing_layers: failing_layers(&layers),
            defects,
            layers,
            histogram,
            tally,
            diagnostics,
            timing,
        }
    }

    /// Reads a scan export and builds its report.
    pub fn inspect_file(
        &self,
        name: &str,
        path: &Path,
        layout: &TableLayout,
    ) -> Result<SpecimenReport> {
        let start = Instant::now();
        let rows = read_table(path, layout)?;
        let parse_ms = elapsed_ms(start);
        debug!("{}: parsed {} rows from {}", name, rows.len(), path.display());

        let mut report = self.inspect_table(name, &rows);
        report.source = Some(path.to_path_buf());
        report.timing.stages.insert(0, StageTiming::new("parse", parse_ms));
        report.timing.close();
        Ok(report)
    }
}

/// Inspects every configured specimen once and returns the immutable report.
pub fn run(config: &InspectionConfig) -> Result<InspectionReport> {
    config.validate()?;
    let start = Instant::now();
    let inspector = Inspector::new(InspectionParams::from(config))?;
    let mut timing = TimingBreakdown::default();
    let mut specimens = Vec::with_capacity(config.specimens.len());
    for source in &config.specimens {
        let report = inspector.inspect_file(&source.name, &source.input, &config.table)?;
        timing.push(source.name.clone(), report.timing.total_ms);
        specimens.push(report);
    }
    timing.total_ms = elapsed_ms(start);

    Ok(InspectionReport {
        geometry: config.geometry.clone(),
        thresholds: config.thresholds.clone(),
        specimens,
        timing,
    })
}
