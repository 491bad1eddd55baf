use std::fmt;

/// Target CPU platform of a container build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    Amd64,
    Arm32v7,
    Arm64v8,
}

impl Architecture {
    /// All architectures in script and table column order
    pub const ALL: [Architecture; 3] = [
        Architecture::Amd64,
        Architecture::Arm32v7,
        Architecture::Arm64v8,
    ];

    /// `uname -m` output of a host that should use this architecture's Dockerfile.
    ///
    /// amd64 is the unconditional default, so it has no machine string.
    pub fn host_machine(self) -> Option<&'static str> {
        match self {
            Architecture::Amd64 => None,
            Architecture::Arm32v7 => Some("armv7l"),
            Architecture::Arm64v8 => Some("aarch64"),
        }
    }

    /// Column label in the Markdown status table
    pub fn column_label(self) -> &'static str {
        match self {
            Architecture::Amd64 => "x64",
            Architecture::Arm32v7 => "arm32v7",
            Architecture::Arm64v8 => "arm64v8",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Architecture::Amd64 => write!(f, "amd64"),
            Architecture::Arm32v7 => write!(f, "arm32v7"),
            Architecture::Arm64v8 => write!(f, "arm64v8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_machine() {
        assert_eq!(Architecture::Amd64.host_machine(), None);
        assert_eq!(Architecture::Arm32v7.host_machine(), Some("armv7l"));
        assert_eq!(Architecture::Arm64v8.host_machine(), Some("aarch64"));
    }

    #[test]
    fn test_column_labels_in_order() {
        let labels: Vec<_> = Architecture::ALL.iter().map(|a| a.column_label()).collect();
        assert_eq!(labels, vec!["x64", "arm32v7", "arm64v8"]);
    }
}
