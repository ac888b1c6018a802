/// Ports module defining interfaces for hexagonal architecture
///
/// The resolution engine is driven directly through its use case, so only
/// outbound ports (driven ports - infrastructure interfaces) live here.
pub mod outbound;
