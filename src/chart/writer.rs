//! All-or-nothing image output.
//!
//! Painters write into a temporary file created next to the destination; only
//! a fully written file is renamed into place. Dropping a [`StagedOutput`]
//! without committing removes the temporary file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::RenderError;

#[derive(Debug)]
pub struct StagedOutput {
    file: NamedTempFile,
    destination: PathBuf,
}

impl StagedOutput {
    /// Create the temporary file in the destination's directory.
    ///
    /// The temporary name keeps `extension` so extension-driven encoders pick
    /// the right format. On unix the file is opened with mode `0o666` minus the
    /// process umask, like any other newly created file.
    ///
    /// # Errors
    /// Returns [`RenderError::Unwritable`] if the directory is missing or not writable.
    pub fn create(destination: &Path, extension: &str) -> Result<Self, RenderError> {
        let dir = parent_dir(destination);
        let suffix = format!(".{extension}");
        let mut builder = tempfile::Builder::new();
        builder.prefix(".wordtally-").suffix(&suffix);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let file = builder
            .tempfile_in(&dir)
            .map_err(|source| RenderError::Unwritable { path: dir, source })?;

        Ok(Self {
            file,
            destination: destination.to_path_buf(),
        })
    }

    /// Path of the temporary file painters should write to.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// # Errors
    /// Returns [`RenderError::Unwritable`] if the bytes cannot be written.
    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), RenderError> {
        let dir = parent_dir(&self.destination);
        self.file
            .write_all(bytes)
            .and_then(|()| self.file.flush())
            .map_err(|source| RenderError::Unwritable { path: dir, source })
    }

    /// Move the finished file to its destination, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`RenderError::Unwritable`] if the rename fails; the temporary
    /// file is removed in that case.
    pub fn commit(self) -> Result<PathBuf, RenderError> {
        let Self { file, destination } = self;
        file.persist(&destination)
            .map_err(|err| RenderError::Unwritable {
                path: destination.clone(),
                source: err.error,
            })?;
        Ok(destination)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
