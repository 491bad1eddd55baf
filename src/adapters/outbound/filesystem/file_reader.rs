use crate::ports::outbound::{DocumentReader, FragmentDocument, FragmentReader};
use crate::shared::error::BuildHelperError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as docker-compose fragments
const FRAGMENT_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both FragmentReader and DocumentReader ports,
/// providing file system access for compose fragments and the Markdown
/// document to patch.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Lists fragment files directly inside `dir`, sorted by file name
    fn list_fragment_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let not_found = |reason: String| BuildHelperError::FragmentDirectoryNotFound {
            path: dir.to_path_buf(),
            reason,
        };

        if !dir.exists() {
            return Err(not_found("Directory does not exist".to_string()).into());
        }
        if !dir.is_dir() {
            return Err(not_found("Not a directory".to_string()).into());
        }

        let entries = fs::read_dir(dir).map_err(|e| not_found(format!("Failed to list directory: {}", e)))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| not_found(format!("Failed to list directory: {}", e)))?;
            let path = entry.path();
            if path.is_dir() || !Self::is_fragment_file(&path) {
                continue;
            }
            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    fn is_fragment_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FRAGMENT_EXTENSIONS.contains(&ext))
    }
}

impl FragmentReader for FileSystemReader {
    fn read_fragments(&self, fragments_dir: &Path) -> Result<Vec<FragmentDocument>> {
        self.list_fragment_files(fragments_dir)?
            .into_iter()
            .map(|path| {
                let content = self.safe_read_file(&path, "fragment").map_err(|e| {
                    BuildHelperError::FileReadError {
                        path: path.clone(),
                        details: e.to_string(),
                    }
                })?;
                Ok(FragmentDocument::new(path, content))
            })
            .collect()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_document(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path, "Markdown document").map_err(|e| {
            BuildHelperError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
