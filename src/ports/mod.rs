/// Ports module defining interfaces for hexagonal architecture
///
/// dpkg-diff has a single driving entry point (the CLI), so only
/// outbound (driven) ports are modelled.
pub mod outbound;
