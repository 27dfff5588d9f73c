#![doc = include_str!("../README.md")]

// Core pipeline
pub mod inspection;
pub mod layers;
pub mod scan;
pub mod types;

// Input/output boundary and run plumbing
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod histogram;
pub mod table;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{InspectError, Result};
pub use crate::inspection::{run, InspectionReport, Inspector, SpecimenReport};
pub use crate::layers::{classify_layers, LayerThresholds};
pub use crate::scan::{LayerMapper, ScanGeometry};
pub use crate::types::{DefectRecord, LayerClamp, LayerSummary, Verdict};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for scripts and tools.
///
/// ```no_run
/// use porosity_layers::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> porosity_layers::Result<()> {
/// let inspector = Inspector::default();
/// let report = inspector.inspect_file("Cylinder 1", Path::new("cylinder1.csv"), &TableLayout::default())?;
/// println!("failing layers: {:?}", report.failing_layers);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::table::TableLayout;
    pub use crate::{Inspector, LayerSummary, SpecimenReport, Verdict};
}
