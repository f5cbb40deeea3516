use crate::domain::model::DeliveryReceipt;
use crate::utils::error::Result;

/// Destination for a serialized export artifact.
///
/// Implementations report faults as errors; the engine converts them into an
/// `ExportOutcome` at its boundary, so callers never see an unhandled fault.
pub trait Sink: Send + Sync {
    fn deliver(&self, payload: &[u8], destination_name: &str) -> Result<DeliveryReceipt>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn deliver(&self, payload: &[u8], destination_name: &str) -> Result<DeliveryReceipt> {
        (**self).deliver(payload, destination_name)
    }
}
