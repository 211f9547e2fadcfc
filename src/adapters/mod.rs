/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the network, the filesystem,
/// and the terminal.
pub mod outbound;
