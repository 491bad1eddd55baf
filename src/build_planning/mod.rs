/// Build planning core: image references, build recipes and link verification
///
/// Pure domain logic with no I/O; fragments arrive as already-read documents
/// and link reachability is decided by an outbound port.
pub mod domain;
pub mod policies;
pub mod services;
