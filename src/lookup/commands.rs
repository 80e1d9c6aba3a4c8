use super::client::LookupError;
use super::record::LookupRecord;

/// Commands understood by the background lookup worker.
#[derive(Debug)]
pub(crate) enum LookupCommand {
    /// Fetch the record for an identifier.
    Fetch {
        /// Identifier that allows the UI to correlate responses with the
        /// originating submission.
        id: u64,
        /// User supplied identifier, substituted into the request path.
        identifier: String,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Resolution of a lookup, emitted back to the UI layer.
#[derive(Debug)]
pub(crate) struct LookupResponse {
    /// Identifier matching the [`LookupCommand::Fetch`] that produced it.
    pub(crate) id: u64,
    pub(crate) result: Result<LookupRecord, LookupError>,
}
