use crate::domain::model::DeliveryReceipt;
use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Durable-filesystem destination. The artifact lands at
/// `<base_path>/<destination_name>`, parent directories included.
#[derive(Debug, Clone)]
pub struct FileSink {
    base_path: PathBuf,
}

impl FileSink {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Sink rooted at the current working directory.
    pub fn current_dir() -> Result<Self> {
        Ok(Self {
            base_path: std::env::current_dir()?,
        })
    }
}

impl Sink for FileSink {
    fn deliver(&self, payload: &[u8], destination_name: &str) -> Result<DeliveryReceipt> {
        let full_path = self.base_path.join(destination_name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, payload)?;
        tracing::debug!(
            "wrote {} bytes to {}",
            payload.len(),
            full_path.display()
        );

        Ok(DeliveryReceipt::File { path: full_path })
    }
}
