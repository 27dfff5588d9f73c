//! Run diagnostics attached to every inspection report.
//!
//! - [`timing`] records how long each stage (parse, map, classify, histogram) took.
//! - [`specimen`] counts rows and layer clamping per specimen, so anomalous
//!   centres below the base plane stay visible in the output.

pub mod specimen;
pub mod timing;

pub use specimen::SpecimenDiagnostics;
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
