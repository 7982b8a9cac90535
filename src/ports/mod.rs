/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe everything the application core
/// needs from the outside world: reading the environment file, querying the
/// package index, scanning sources and presenting output.
pub mod outbound;
