use crate::ports::outbound::{GeneratedArtifact, OutputPresenter};
use crate::shared::error::BuildHelperError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing generated artifacts to files
///
/// This adapter implements the OutputPresenter port. Content goes to a
/// temporary file in the destination directory which is then renamed over
/// the destination, so readers never observe a half-written file.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl Into<String>) -> BuildHelperError {
        BuildHelperError::FileWriteError {
            path: path.to_path_buf(),
            details: details.into(),
        }
    }

    /// Directory the temporary file is created in; `""` means the working directory
    fn parent_directory(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        let parent = Self::parent_directory(path);
        if !parent.is_dir() {
            return Err(Self::write_error(
                path,
                format!("Parent directory does not exist: {}", parent.display()),
            )
            .into());
        }
        Ok(())
    }

    /// Security validation before writing: an existing destination must not be a symlink
    fn validate_output_security(path: &Path) -> Result<()> {
        let Ok(metadata) = fs::symlink_metadata(path) else {
            return Ok(());
        };

        if metadata.is_symlink() {
            return Err(Self::write_error(
                path,
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
            )
            .into());
        }
        if metadata.is_dir() {
            return Err(Self::write_error(path, "Output path is a directory").into());
        }
        Ok(())
    }

    #[cfg(unix)]
    fn apply_permissions(temp_file: &NamedTempFile, artifact: &GeneratedArtifact) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        // Temporary files are created 0600; keep what the destination had
        let mut mode = fs::metadata(&artifact.path)
            .map(|metadata| metadata.permissions().mode() & 0o777)
            .unwrap_or(0o644);
        if artifact.executable {
            mode |= 0o111;
        }

        temp_file
            .as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .map_err(|e| Self::write_error(&artifact.path, e.to_string()))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn apply_permissions(_temp_file: &NamedTempFile, _artifact: &GeneratedArtifact) -> Result<()> {
        Ok(())
    }
}

impl FileSystemWriter {
    /// Writes the content to a temporary file next to the destination
    fn stage(artifact: &GeneratedArtifact) -> Result<NamedTempFile> {
        let path = artifact.path.as_path();

        // Security validations
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        let mut temp_file = NamedTempFile::new_in(Self::parent_directory(path))
            .map_err(|e| Self::write_error(path, e.to_string()))?;
        temp_file
            .write_all(artifact.content.as_bytes())
            .map_err(|e| Self::write_error(path, e.to_string()))?;
        temp_file
            .flush()
            .map_err(|e| Self::write_error(path, e.to_string()))?;
        Self::apply_permissions(&temp_file, artifact)?;
        Ok(temp_file)
    }

    /// Renames the staged file over the destination and returns its absolute path
    fn commit(temp_file: NamedTempFile, path: &Path) -> Result<PathBuf> {
        temp_file
            .persist(path)
            .map_err(|e| Self::write_error(path, e.error.to_string()))?;

        let absolute = fs::canonicalize(path).map_err(|e| Self::write_error(path, e.to_string()))?;
        Ok(absolute)
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        let staged = Self::stage(artifact)?;
        Self::commit(staged, &artifact.path)
    }

    /// Validates every destination and stages every temporary file before
    /// the first rename, so a rejected destination leaves all outputs untouched
    fn present_all(&self, artifacts: &[GeneratedArtifact]) -> Result<Vec<PathBuf>> {
        for artifact in artifacts {
            Self::validate_parent_directory(&artifact.path)?;
            Self::validate_output_security(&artifact.path)?;
        }

        let staged = artifacts
            .iter()
            .map(Self::stage)
            .collect::<Result<Vec<_>>>()?;

        staged
            .into_iter()
            .zip(artifacts)
            .map(|(temp_file, artifact)| Self::commit(temp_file, &artifact.path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build-all.sh");

        let writer = FileSystemWriter::new();
        let written = writer
            .present(&GeneratedArtifact::new(&output_path, "#!/bin/bash\n".to_string()))
            .unwrap();

        assert!(written.is_absolute());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "#!/bin/bash\n");
    }

    #[test]
    fn test_file_writer_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("README.md");
        fs::write(&output_path, "old content that is longer").unwrap();

        let writer = FileSystemWriter::new();
        writer
            .present(&GeneratedArtifact::new(&output_path, "new".to_string()))
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new();
        let result = writer.present(&GeneratedArtifact::new(
            "/nonexistent/directory/build-all.sh",
            "content".to_string(),
        ));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_executable_script() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("build-all.sh");

        let writer = FileSystemWriter::new();
        writer
            .present(&GeneratedArtifact::new(&output_path, "#!/bin/bash\n".to_string()).executable())
            .unwrap();

        let mode = fs::metadata(&output_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_keeps_document_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("README.md");
        fs::write(&output_path, "old").unwrap();
        fs::set_permissions(&output_path, fs::Permissions::from_mode(0o640)).unwrap();

        let writer = FileSystemWriter::new();
        writer
            .present(&GeneratedArtifact::new(&output_path, "new".to_string()))
            .unwrap();

        let mode = fs::metadata(&output_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.sh");
        let link = temp_dir.path().join("build-all.sh");
        fs::write(&target, "original").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let writer = FileSystemWriter::new();
        let err = writer
            .present(&GeneratedArtifact::new(&link, "new".to_string()))
            .unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_present_all_writes_every_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build-all.sh");
        let readme = temp_dir.path().join("README.md");

        let writer = FileSystemWriter::new();
        let written = writer
            .present_all(&[
                GeneratedArtifact::new(&script, "#!/bin/bash\n".to_string()).executable(),
                GeneratedArtifact::new(&readme, "| Image |\n".to_string()),
            ])
            .unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(&script).unwrap(), "#!/bin/bash\n");
        assert_eq!(fs::read_to_string(&readme).unwrap(), "| Image |\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_present_all_rejected_document_leaves_script_unwritten() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build-all.sh");
        let target = temp_dir.path().join("target.md");
        let readme = temp_dir.path().join("README.md");
        fs::write(&target, "original").unwrap();
        std::os::unix::fs::symlink(&target, &readme).unwrap();

        let writer = FileSystemWriter::new();
        let err = writer
            .present_all(&[
                GeneratedArtifact::new(&script, "#!/bin/bash\n".to_string()).executable(),
                GeneratedArtifact::new(&readme, "new".to_string()),
            ])
            .unwrap_err();

        assert!(err.to_string().contains("symbolic link"));
        assert!(!script.exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
        // No staged temporary file is left behind
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_present_all_missing_parent_leaves_script_unwritten() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("build-all.sh");

        let writer = FileSystemWriter::new();
        let result = writer.present_all(&[
            GeneratedArtifact::new(&script, "#!/bin/bash\n".to_string()),
            GeneratedArtifact::new(temp_dir.path().join("missing/README.md"), "new".to_string()),
        ]);

        assert!(result.is_err());
        assert!(!script.exists());
    }
}
