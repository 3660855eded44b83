// Mods
mod global;
mod handle;
mod registry;

// Tests
#[cfg(test)]
mod tests;

// Re-exports
pub use global::{
	clear,
	provide,
	provide_default,
	registry,
	resolve,
};
pub use handle::ServiceHandle;
pub use registry::ServiceRegistry;
