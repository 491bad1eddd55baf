mod tag_transform;

pub use tag_transform::TagTransform;
