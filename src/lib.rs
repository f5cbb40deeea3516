pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{DownloadSink, FileSink};
pub use crate::core::analyzer::{analyze, list_properties};
pub use crate::core::engine::ExportEngine;
pub use domain::model::{
    AnalysisOutcome, AnalysisResult, DeliveryReceipt, ExportEnvelope, ExportMetadata,
    ExportOptions, ExportOutcome, TypeTag,
};
pub use domain::ports::Sink;
pub use utils::error::{ExportError, Result};
