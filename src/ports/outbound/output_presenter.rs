use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A fully rendered output file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub content: String,
    pub executable: bool,
}

impl GeneratedArtifact {
    pub fn new(path: impl AsRef<Path>, content: String) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            content,
            executable: false,
        }
    }

    /// Marks the artifact as a script that should carry the executable bit
    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// OutputPresenter port for persisting generated artifacts
///
/// This port abstracts the output destination where the build script and
/// the patched documentation end up.
pub trait OutputPresenter {
    /// Writes the artifact, replacing any previous content
    ///
    /// # Returns
    /// The absolute path of the written file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination is a symbolic link
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, artifact: &GeneratedArtifact) -> Result<PathBuf>;

    /// Writes several artifacts as one unit
    ///
    /// Implementations should reject the whole set before writing anything
    /// when one destination is unusable. The default writes them in order.
    fn present_all(&self, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
        artifacts
            .iter()
            .map(|artifact| self.present(artifact))
            .collect()
    }
}
