use super::recipe::RecipeTable;
use super::recipe_table::default_recipes;
use crate::build_planning::domain::{BuildInfo, ImageReference};
use crate::shared::error::BuildHelperError;
use crate::shared::Result;

/// ImageResolver service mapping image references to build recipes
///
/// Pure lookup plus string formatting; the same reference always resolves
/// to the same BuildInfo.
pub struct ImageResolver {
    recipes: RecipeTable,
}

impl ImageResolver {
    /// Creates a resolver backed by the built-in resolution table
    pub fn new() -> Self {
        Self::with_recipes(default_recipes())
    }

    pub fn with_recipes(recipes: RecipeTable) -> Self {
        Self { recipes }
    }

    /// Keys tried in order: `user/name`, then `name` alone
    pub fn candidate_keys(image: &ImageReference) -> [String; 2] {
        [
            format!("{}/{}", image.user(), image.name()),
            image.name().to_string(),
        ]
    }

    /// Resolves an image, or `None` when no candidate key is in the table
    pub fn resolve(&self, image: &ImageReference) -> Option<BuildInfo> {
        Self::candidate_keys(image)
            .iter()
            .find_map(|key| self.recipes.get(key))
            .map(|recipe| recipe.build_info(image))
    }

    /// Like [`resolve`](Self::resolve), but an unknown image is a `ResolutionError`
    pub fn try_resolve(&self, image: &ImageReference) -> Result<BuildInfo> {
        self.resolve(image).ok_or_else(|| {
            BuildHelperError::ResolutionError {
                image: image.to_string(),
            }
            .into()
        })
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}
