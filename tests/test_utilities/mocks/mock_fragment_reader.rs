use dockerfile_build_helper::prelude::*;
use std::path::{Path, PathBuf};

/// Mock FragmentReader serving in-memory fragments
#[derive(Default)]
pub struct MockFragmentReader {
    fragments: Vec<FragmentDocument>,
    should_fail: bool,
}

impl MockFragmentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragment(mut self, name: &str, content: &str) -> Self {
        self.fragments
            .push(FragmentDocument::new(PathBuf::from(name), content.to_string()));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            fragments: Vec::new(),
            should_fail: true,
        }
    }
}

impl FragmentReader for MockFragmentReader {
    fn read_fragments(&self, fragments_dir: &Path) -> Result<Vec<FragmentDocument>> {
        if self.should_fail {
            anyhow::bail!("Mock failure: cannot read {}", fragments_dir.display());
        }
        Ok(self.fragments.clone())
    }
}
