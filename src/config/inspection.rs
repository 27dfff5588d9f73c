use crate::error::{InspectError, Result};
use crate::histogram::HistogramConfig;
use crate::inspection::InspectionParams;
use crate::layers::LayerThresholds;
use crate::scan::ScanGeometry;
use crate::table::TableLayout;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// One scanned specimen and its porosity export.
#[derive(Clone, Debug, Deserialize)]
pub struct SpecimenSource {
    pub name: String,
    pub input: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub report_json: PathBuf,
}

/// Top-level config of an inspection run.
#[derive(Clone, Debug, Deserialize)]
pub struct InspectionConfig {
    pub specimens: Vec<SpecimenSource>,
    #[serde(default)]
    pub table: TableLayout,
    #[serde(default)]
    pub geometry: ScanGeometry,
    #[serde(default)]
    pub thresholds: LayerThresholds,
    #[serde(default)]
    pub histogram: HistogramConfig,
    pub output: OutputConfig,
}

impl InspectionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.specimens.is_empty() {
            return Err(InspectError::Config("no specimens configured".to_string()));
        }
        let mut seen = HashSet::new();
        for s in &self.specimens {
            if !seen.insert(s.name.as_str()) {
                return Err(InspectError::Config(format!(
                    "duplicate specimen name '{}'",
                    s.name
                )));
            }
        }
        InspectionParams::from(self).validate()
    }

    /// Resolves relative input and output paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for s in &mut self.specimens {
            if s.input.is_relative() {
                s.input = base.join(&s.input);
            }
        }
        if self.output.report_json.is_relative() {
            self.output.report_json = base.join(&self.output.report_json);
        }
    }
}

/// Loads and validates a config; relative paths are taken from the config's directory.
pub fn load_config(path: &Path) -> Result<InspectionConfig> {
    let data = fs::read_to_string(path).map_err(|e| InspectError::from_io(path, e))?;
    let mut config: InspectionConfig = serde_json::from_str(&data)
        .map_err(|e| InspectError::Config(format!("failed to parse {}: {e}", path.display())))?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    config.validate()?;
    Ok(config)
}
