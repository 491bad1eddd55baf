use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Raw content of one docker-compose fragment, with the path it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDocument {
    pub path: PathBuf,
    pub content: String,
}

impl FragmentDocument {
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }
}

/// FragmentReader port for enumerating docker-compose fragments
///
/// This port abstracts the file system operations needed to list and read
/// the `*.yml` / `*.yaml` files of a fragment directory.
pub trait FragmentReader {
    /// Reads every fragment of the directory
    ///
    /// # Arguments
    /// * `fragments_dir` - Directory holding the fragment files
    ///
    /// # Returns
    /// The fragments sorted by file name. Subdirectories are not descended into.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The directory does not exist or is not a directory
    /// - A fragment cannot be read due to permissions or I/O errors
    fn read_fragments(&self, fragments_dir: &Path) -> Result<Vec<FragmentDocument>>;
}
