use thiserror::Error;

/// Errors produced while handing a packed archive to a sink
///
/// The packer itself cannot fail; only the sink boundary can. A sink
/// failure is recoverable: the session state it was exported from is
/// left untouched so the caller may retry.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The sink backend is missing or cannot be initialized
    #[error("Archive sink unavailable: {reason}")]
    SinkUnavailable { reason: String },
    /// The sink accepted the archive but failed while writing it
    #[error("Failed to write archive: {reason}")]
    WriteFailed { reason: String },
    /// I/O error from a sink that writes to a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    #[must_use]
    pub fn sink_unavailable(reason: &str) -> Self {
        Self::SinkUnavailable {
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn write_failed(reason: &str) -> Self {
        Self::WriteFailed {
            reason: reason.to_string(),
        }
    }
}
