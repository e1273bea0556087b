/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: file system, the dpkg
/// process and the console.
pub mod outbound;
