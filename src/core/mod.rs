pub mod analyzer;
pub mod engine;
pub mod exporter;

pub use crate::domain::model::{AnalysisResult, ExportOptions, ExportOutcome};
pub use crate::domain::ports::Sink;
pub use crate::utils::error::Result;
