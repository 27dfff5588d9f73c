//! End-to-end inspection of scanned specimens.
//!
//! Each specimen is processed once, eagerly: rows are read and validated,
//! mapped to physical centres and build layers, then grouped into a dense
//! per-layer summary with pass/fail verdicts. The resulting
//! [`InspectionReport`] is an immutable value handed to whatever renders it.

mod pipeline;
mod report;

pub use pipeline::{run, InspectionParams, Inspector};
pub use report::{InspectionReport, SpecimenReport};
