/// Domain layer for package listing comparison
///
/// Pure logic with no I/O: listing records, the diff model,
/// and the parser and differ services that produce them.
pub mod domain;
pub mod services;
