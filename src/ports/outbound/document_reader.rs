use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for loading the Markdown document to patch
pub trait DocumentReader {
    /// Reads the whole document as UTF-8 text
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable or not a regular file
    fn read_document(&self, path: &Path) -> Result<String>;
}
