use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Generation is all-or-nothing, so every application failure maps to the
/// same code; clap reports argument errors with its own code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Script (and documentation, when requested) generated
    Success = 0,
    /// Any fatal error: unresolvable image, broken link, I/O, bad fragment
    GenerationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::GenerationFailed => write!(f, "Generation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// A Dockerfile link that failed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub image: String,
    pub url: String,
    pub reason: String,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.image, self.url, self.reason)
    }
}

fn list_broken_links(links: &[BrokenLink]) -> String {
    links
        .iter()
        .map(|link| format!("  - {}", link))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Application-specific errors for build script generation.
///
/// Every variant is fatal to the run; nothing is written once one is raised.
#[derive(Debug, Error)]
pub enum BuildHelperError {
    #[error("Failed to parse docker-compose fragment: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the fragment is a valid YAML mapping")]
    FragmentParseError { path: PathBuf, details: String },

    #[error("Missing image info: {image}\n\n💡 Hint: Add a recipe for this image to the resolution table")]
    ResolutionError { image: String },

    #[error("{count} broken Dockerfile link(s) detected:\n{}\n\n💡 Hint: Check that the image tag matches an existing git ref in the upstream repository", list_broken_links(.links))]
    BrokenLinks {
        count: usize,
        links: Vec<BrokenLink>,
    },

    #[error("Markdown document has no status table: {path}\nReason: the line starting with \"{marker}\" was not found\n\n💡 Hint: Add a table header line starting with \"{marker}\" where the table should be generated")]
    DocumentFormatError { path: PathBuf, marker: String },

    #[error("Fragment directory not found: {path}\nReason: {reason}\n\n💡 Hint: Pass the directory explicitly with --fragments")]
    FragmentDirectoryNotFound { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}

impl BuildHelperError {
    pub fn broken_links(links: Vec<BrokenLink>) -> Self {
        BuildHelperError::BrokenLinks {
            count: links.len(),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GenerationFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::GenerationFailed),
            "Generation Failed (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_fragment_parse_error_display() {
        let error = BuildHelperError::FragmentParseError {
            path: PathBuf::from("/fragments/bitcoin.yml"),
            details: "did not find expected key".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse docker-compose fragment"));
        assert!(display.contains("/fragments/bitcoin.yml"));
        assert!(display.contains("did not find expected key"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_resolution_error_display() {
        let error = BuildHelperError::ResolutionError {
            image: "someone/unknown:1.0".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("Missing image info: someone/unknown:1.0"));
    }

    #[test]
    fn test_broken_links_display_lists_every_link() {
        let error = BuildHelperError::broken_links(vec![
            BrokenLink {
                image: "lnd:0.5".to_string(),
                url: "https://github.com/btcpayserver/lnd/raw/basedon-0.5/linuxamd64.Dockerfile"
                    .to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            },
            BrokenLink {
                image: "tor:0.3".to_string(),
                url: "https://github.com/btcpayserver/dockerfile-deps/raw/Tor/0.3/linuxamd64.Dockerfile"
                    .to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            },
        ]);
        let display = format!("{}", error);
        assert!(display.starts_with("2 broken Dockerfile link(s) detected"));
        assert!(display.contains("lnd:0.5"));
        assert!(display.contains("tor:0.3"));
        assert!(display.contains("HTTP 404 Not Found"));
    }

    #[test]
    fn test_document_format_error_display() {
        let error = BuildHelperError::DocumentFormatError {
            path: PathBuf::from("README.md"),
            marker: "| Image |".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("README.md"));
        assert!(display.contains("\"| Image |\""));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BuildHelperError::FileWriteError {
            path: PathBuf::from("/test/build-all.sh"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/build-all.sh"));
        assert!(display.contains("Permission denied"));
    }
}
