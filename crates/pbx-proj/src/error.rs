use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from writing a project document to storage.
///
/// Delete and write failures are distinct variants so callers can tell
/// which operation failed; the underlying I/O error is preserved as the
/// source.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination exists and overwriting was not requested.
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Deleting the existing destination failed.
    #[error("failed to delete existing file {path}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the encoded payload failed.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
