//! JSON file corpus store.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;
use crate::synthetic::SyntheticExample;

/// Flat-file store holding the synthetic corpus as one JSON array.
///
/// Every save rewrites the whole file: the array is written to a uniquely
/// named temporary file in the same directory which is then renamed over
/// the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    /// Create a store for the given file path. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The corpus file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the corpus with `examples`.
    ///
    /// Creates missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if encoding fails and
    /// [`StorageError::Io`] if any filesystem step fails.
    pub async fn save(&self, examples: &[SyntheticExample]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(examples).map_err(|e| {
            StorageError::Serialization {
                message: e.to_string(),
            }
        })?;

        // Create parent directories if they don't exist
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(parent, &e))?;
                parent.to_path_buf()
            }
            _ => PathBuf::from("."),
        };

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &target, json.as_bytes()))
            .await
            .map_err(|e| StorageError::Io {
                path: self.path.display().to_string(),
                message: format!("save task failed: {e}"),
            })?
            .map_err(|(path, e)| self.io_error(&path, &e))?;

        tracing::info!(
            path = %self.path.display(),
            examples = examples.len(),
            "Saved corpus"
        );
        Ok(())
    }

    /// Read the whole corpus.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CorpusNotFound`] if the file does not exist,
    /// [`StorageError::Io`] if it cannot be read, and
    /// [`StorageError::Serialization`] if it is not a valid corpus.
    pub async fn load(&self) -> Result<Vec<SyntheticExample>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::CorpusNotFound {
                    path: self.path.display().to_string(),
                });
            }
            Err(e) => return Err(self.io_error(&self.path, &e)),
        };

        let examples: Vec<SyntheticExample> =
            serde_json::from_str(&raw).map_err(|e| StorageError::Serialization {
                message: format!("{}: {e}", self.path.display()),
            })?;

        tracing::info!(
            path = %self.path.display(),
            examples = examples.len(),
            "Loaded corpus"
        );
        Ok(examples)
    }

    /// Read the corpus, treating an absent file as an empty corpus.
    ///
    /// # Errors
    ///
    /// Same as [`CorpusStore::load`], except that a missing file is `Ok`.
    pub async fn load_or_empty(&self) -> Result<Vec<SyntheticExample>, StorageError> {
        match self.load().await {
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "No corpus yet");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn io_error(&self, path: &Path, err: &std::io::Error) -> StorageError {
        tracing::warn!(corpus = %self.path.display(), error = %err, "Corpus I/O failed");
        StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// Write `contents` to a uniquely named file in `dir`, then rename it over
/// `target`. The temporary file is removed if any step fails.
fn write_atomically(
    dir: &Path,
    target: &Path,
    contents: &[u8],
) -> Result<(), (PathBuf, std::io::Error)> {
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| (dir.to_path_buf(), e))?;
    let temp_path = temp.path().to_path_buf();
    temp.write_all(contents).map_err(|e| (temp_path.clone(), e))?;
    temp.as_file().sync_all().map_err(|e| (temp_path, e))?;
    temp.persist(target)
        .map_err(|e| (target.to_path_buf(), std::io::Error::from(e)))?;
    Ok(())
}
