use crate::domain::model::ExportOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "record-profiler")]
#[command(about = "Schema introspection and JSON export for loosely-typed record collections")]
pub struct CliConfig {
    /// JSON file holding the input collection; a built-in sample is used when omitted
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "export.json")]
    pub filename: String,

    /// Field name the original collection is nested under in the artifact
    #[arg(long, default_value = "data")]
    pub data_field: String,

    #[arg(long, help = "Skip the metadata block")]
    pub no_metadata: bool,

    #[arg(long, help = "Skip the embedded schema analysis")]
    pub no_analysis: bool,

    #[arg(long, help = "Skip the timestamp")]
    pub no_timestamp: bool,

    #[arg(long, help = "Emit compact JSON instead of pretty-printed")]
    pub compact: bool,

    /// TOML file with an [export] table layered over the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// Only list the deduplicated property names, without exporting
    #[arg(long)]
    pub list_only: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            filename: self.filename.clone(),
            include_metadata: !self.no_metadata,
            include_analysis: !self.no_analysis,
            add_timestamp: !self.no_timestamp,
            pretty_print: !self.compact,
            data_field: self.data_field.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("filename", &self.filename)?;
        validation::validate_non_empty_string("data_field", &self.data_field)?;

        if let Some(input) = &self.input {
            validation::validate_file_extensions("input", std::slice::from_ref(input), &["json"])?;
        }
        if let Some(config) = &self.config {
            validation::validate_file_extensions("config", std::slice::from_ref(config), &["toml"])?;
        }

        Ok(())
    }
}
