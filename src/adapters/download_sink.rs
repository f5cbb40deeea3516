use crate::domain::model::DeliveryReceipt;
use crate::domain::ports::Sink;
use crate::utils::error::Result;

pub const DOWNLOAD_MIME_TYPE: &str = "application/json";

/// Memory-backed binary object handed to the download trigger. Its buffer
/// lives exactly as long as the delivering scope: `DownloadSink::deliver`
/// drops it before returning, so no handle outlives the triggering call.
#[derive(Debug)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: &'static str,
}

impl Blob {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: DOWNLOAD_MIME_TYPE,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Host hook that presents the user-facing save of a blob under a filename.
/// Embedders supply this; tests substitute a recording double.
pub trait DownloadTrigger: Send + Sync {
    fn trigger(&self, filename: &str, blob: &Blob) -> Result<()>;
}

/// Interactive destination: wraps the payload in a `Blob`, fires the trigger,
/// and releases the blob before reporting the receipt.
pub struct DownloadSink<T: DownloadTrigger> {
    trigger: T,
}

impl<T: DownloadTrigger> DownloadSink<T> {
    pub fn new(trigger: T) -> Self {
        Self { trigger }
    }
}

impl<T: DownloadTrigger> Sink for DownloadSink<T> {
    fn deliver(&self, payload: &[u8], destination_name: &str) -> Result<DeliveryReceipt> {
        let blob = Blob::new(payload.to_vec());
        self.trigger.trigger(destination_name, &blob)?;
        drop(blob);

        Ok(DeliveryReceipt::Download {
            filename: destination_name.to_string(),
        })
    }
}
