//! Persistence: flushing a project document through an external encoder.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::WriteError;
use crate::proj::Proj;

/// External serializer for project documents.
///
/// The graph core does not own the on-disk text format; it only requires
/// one operation from whoever does. Determinism for an unchanged graph is
/// desirable but not required.
pub trait ProjEncoder {
    /// Serialize the whole document to its on-disk form.
    fn encode(&self, proj: &Proj) -> String;
}

impl Proj {
    /// Write the encoded document to `path`.
    ///
    /// When the destination exists: with `overwrite` set it is deleted
    /// first, otherwise the call fails with
    /// [`WriteError::DestinationExists`] and the existing content is left
    /// untouched. Delete and write failures propagate as distinct errors.
    ///
    /// There is no atomic rename: a failure between delete and write can
    /// leave no file at `path`.
    pub fn write<E>(&self, path: &Path, overwrite: bool, encoder: &E) -> Result<(), WriteError>
    where
        E: ProjEncoder + ?Sized,
    {
        let output = encoder.encode(self);

        if path.exists() {
            if !overwrite {
                return Err(WriteError::DestinationExists {
                    path: path.to_path_buf(),
                });
            }
            fs::remove_file(path).map_err(|source| WriteError::Delete {
                path: path.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, output).map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), objects = self.objects.len(), "project file written");
        Ok(())
    }
}
