//! JSON configuration of inspection runs.

pub mod inspection;

pub use inspection::{load_config, InspectionConfig, OutputConfig, SpecimenSource};
