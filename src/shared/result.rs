/// Result alias used throughout the crate; domain failures are
/// `BuildHelperError` values carried inside `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
