// Adapters layer: concrete sink implementations for the environments the tool runs in.

pub mod download_sink;
pub mod file_sink;

pub use download_sink::{Blob, DownloadSink, DownloadTrigger};
pub use file_sink::FileSink;

use crate::domain::ports::Sink;
use crate::utils::error::{ExportError, Result};

/// Composition-root dispatch: a durable filesystem wins over an interactive
/// download, and having neither is an environment fault, not a silent no-op.
pub fn select_sink(
    filesystem: Option<FileSink>,
    interactive: Option<Box<dyn Sink>>,
) -> Result<Box<dyn Sink>> {
    if let Some(sink) = filesystem {
        return Ok(Box::new(sink));
    }
    if let Some(sink) = interactive {
        return Ok(sink);
    }
    Err(ExportError::EnvironmentError {
        message: "neither a filesystem nor an interactive download capability is available"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sink_prefers_filesystem() {
        let sink = select_sink(Some(FileSink::new(".")), None);
        assert!(sink.is_ok());
    }

    #[test]
    fn test_select_sink_without_capabilities_is_environment_fault() {
        let result = select_sink(None, None);
        assert!(matches!(
            result,
            Err(ExportError::EnvironmentError { .. })
        ));
    }
}
