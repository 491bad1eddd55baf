//! Status table read model
//!
//! One row per distinct image, split into the officially supported group
//! and the community group.

use crate::build_planning::domain::Architecture;

/// View representation of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRowView {
    /// Image without its tag (`user/name` or `name`)
    pub image: String,
    pub tag: String,
    /// Browse link per architecture, in [`Architecture::ALL`] order;
    /// `None` renders as an unavailable cell
    pub dockerfile_links: [Option<String>; 3],
    pub git_repository: String,
    pub docker_hub_url: String,
}

impl ImageRowView {
    pub fn dockerfile_link(&self, architecture: Architecture) -> Option<&str> {
        let index = Architecture::ALL
            .iter()
            .position(|arch| *arch == architecture)?;
        self.dockerfile_links[index].as_deref()
    }
}

/// Read model for the documentation status table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTableReadModel {
    pub supported: Vec<ImageRowView>,
    pub community: Vec<ImageRowView>,
}

impl StatusTableReadModel {
    /// Rows in rendering order: supported first, then community
    pub fn rows(&self) -> impl Iterator<Item = &ImageRowView> {
        self.supported.iter().chain(self.community.iter())
    }

    pub fn len(&self) -> usize {
        self.supported.len() + self.community.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
