/// Result alias used by every layer of dpkg-diff.
/// Typed `DiffError`s are wrapped into `anyhow::Error` as they propagate.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
