use crate::core::exporter;
use crate::domain::model::{DeliveryReceipt, ExportEnvelope, ExportOptions, ExportOutcome};
use crate::domain::ports::Sink;
use serde_json::Value;

/// Orchestrates analyze -> build -> serialize -> deliver. Every fault along
/// the way is converted into an `ExportOutcome` here; nothing escapes to the
/// caller as an error.
pub struct ExportEngine<S: Sink> {
    sink: S,
}

impl<S: Sink> ExportEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Fixed-shape export: metadata + analysis + data, pretty-printed.
    pub fn export_simple(&self, input: Option<&Value>, destination_name: &str) -> ExportOutcome {
        let envelope = exporter::build_simple(input);
        self.deliver(&envelope, destination_name, true, exporter::total_items(input))
    }

    /// Configurable export: sections and formatting per `options`.
    pub fn export_custom(&self, input: Option<&Value>, options: &ExportOptions) -> ExportOutcome {
        let envelope = exporter::build_custom(input, options);
        self.deliver(
            &envelope,
            &options.filename,
            options.pretty_print,
            exporter::total_items(input),
        )
    }

    fn deliver(
        &self,
        envelope: &ExportEnvelope,
        destination_name: &str,
        pretty_print: bool,
        total_items: usize,
    ) -> ExportOutcome {
        tracing::debug!("delivering export artifact '{}'", destination_name);

        let attempt = exporter::serialize(envelope, pretty_print)
            .and_then(|payload| self.sink.deliver(&payload, destination_name));

        match attempt {
            Ok(receipt) => {
                match &receipt {
                    DeliveryReceipt::File { path } => {
                        println!("✅ Data exported successfully to: {}", path.display());
                    }
                    DeliveryReceipt::Download { filename } => {
                        println!("✅ Download initiated for: {}", filename);
                    }
                }
                println!("📊 Exported {} items", total_items);
                ExportOutcome::delivered(receipt)
            }
            Err(e) => {
                tracing::error!("export of '{}' failed: {}", destination_name, e);
                eprintln!("❌ Error exporting to JSON: {}", e);
                ExportOutcome::failed(e.to_string())
            }
        }
    }
}
