/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// file and stdin access, the template engine and the console.
pub mod outbound;
