/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what drivers (the CLI) call into; outbound ports are
/// what the application core needs from the outside world.
pub mod inbound;
pub mod outbound;
