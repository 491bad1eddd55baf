mod fragment_scanner;
mod image_resolver;
mod recipe;
mod recipe_table;

pub use fragment_scanner::FragmentScanner;
pub use image_resolver::ImageResolver;
pub use recipe::{fixed, from_tag, Derivation, Recipe, RecipeTable, TagFn};
pub use recipe_table::default_recipes;
