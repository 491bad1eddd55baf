use crate::build_planning::domain::{Architecture, BuildInfo, ImageReference};
use std::collections::HashMap;

/// Pure function from an image tag to a git ref or Dockerfile path
pub type TagFn = fn(&str) -> String;

/// How one field of a recipe is derived from the image tag
#[derive(Clone, Copy)]
pub enum Derivation {
    Fixed(&'static str),
    FromTag(TagFn),
}

impl Derivation {
    pub fn apply(&self, tag: &str) -> String {
        match self {
            Derivation::Fixed(value) => (*value).to_string(),
            Derivation::FromTag(derive) => derive(tag),
        }
    }
}

impl std::fmt::Debug for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Derivation::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Derivation::FromTag(_) => f.write_str("FromTag(..)"),
        }
    }
}

/// Shorthand for a value that does not depend on the tag
pub fn fixed(value: &'static str) -> Derivation {
    Derivation::Fixed(value)
}

/// Shorthand for a value computed from the tag
pub fn from_tag(derive: TagFn) -> Derivation {
    Derivation::FromTag(derive)
}

/// Recipe - how to build every tag of one image from source
#[derive(Debug, Clone)]
pub struct Recipe {
    git_repository: &'static str,
    git_ref: Derivation,
    amd64: Option<Derivation>,
    arm32v7: Option<Derivation>,
    arm64v8: Option<Derivation>,
    officially_supported: bool,
}

impl Recipe {
    pub fn new(git_repository: &'static str, git_ref: Derivation) -> Self {
        Self {
            git_repository,
            git_ref,
            amd64: None,
            arm32v7: None,
            arm64v8: None,
            officially_supported: false,
        }
    }

    pub fn amd64(mut self, dockerfile: Derivation) -> Self {
        self.amd64 = Some(dockerfile);
        self
    }

    pub fn arm32v7(mut self, dockerfile: Derivation) -> Self {
        self.arm32v7 = Some(dockerfile);
        self
    }

    pub fn arm64v8(mut self, dockerfile: Derivation) -> Self {
        self.arm64v8 = Some(dockerfile);
        self
    }

    /// Sets all three Dockerfiles at once, the usual case for multi-arch images
    pub fn multi_arch(self, amd64: Derivation, arm32v7: Derivation, arm64v8: Derivation) -> Self {
        self.amd64(amd64).arm32v7(arm32v7).arm64v8(arm64v8)
    }

    pub fn supported(mut self) -> Self {
        self.officially_supported = true;
        self
    }

    fn dockerfile(&self, architecture: Architecture) -> Option<&Derivation> {
        match architecture {
            Architecture::Amd64 => self.amd64.as_ref(),
            Architecture::Arm32v7 => self.arm32v7.as_ref(),
            Architecture::Arm64v8 => self.arm64v8.as_ref(),
        }
    }

    /// Applies the recipe to a concrete image reference
    pub fn build_info(&self, image: &ImageReference) -> BuildInfo {
        let tag = image.tag();
        let info = BuildInfo::new(image.clone(), self.git_repository, self.git_ref.apply(tag))
            .with_official_support(self.officially_supported);

        Architecture::ALL.iter().fold(info, |info, arch| {
            match self.dockerfile(*arch) {
                Some(derivation) => info.with_dockerfile(*arch, derivation.apply(tag)),
                None => info,
            }
        })
    }
}

/// RecipeTable - exact, case-sensitive lookup from `user/name` or `name` to a recipe
#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    recipes: HashMap<&'static str, Recipe>,
}

impl RecipeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipe; a later entry for the same key replaces the earlier one
    pub fn insert(&mut self, key: &'static str, recipe: Recipe) {
        self.recipes.insert(key, recipe);
    }

    pub fn get(&self, key: &str) -> Option<&Recipe> {
        self.recipes.get(key)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl FromIterator<(&'static str, Recipe)> for RecipeTable {
    fn from_iter<I: IntoIterator<Item = (&'static str, Recipe)>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}
