use once_cell::sync::Lazy;

use crate::{
	handle::ServiceHandle,
	registry::ServiceRegistry,
};


// The process-wide registry instance. Created empty on first access.
static GLOBAL_REGISTRY: Lazy<ServiceRegistry> = Lazy::new(ServiceRegistry::new);

/// Returns the process-wide registry. Prefer passing a [`ServiceRegistry`]
/// through your program's composition point where practical; this accessor
/// exists for the code paths that cannot be wired that way.
pub fn registry() -> &'static ServiceRegistry {
	return &GLOBAL_REGISTRY;
}

/// Registers `instance` with the process-wide registry. First registration
/// for a type wins; see [`ServiceRegistry::provide`].
pub fn provide<T: Sync + Send + 'static>(instance: T) {
	GLOBAL_REGISTRY.provide(instance);
}

/// Registers a default-constructed `T` with the process-wide registry.
pub fn provide_default<T: Default + Sync + Send + 'static>() {
	GLOBAL_REGISTRY.provide_default::<T>();
}

/// Resolves a shared handle from the process-wide registry; see
/// [`ServiceRegistry::resolve`].
pub fn resolve<T: Default + Sync + Send + 'static>() -> ServiceHandle<T> {
	return GLOBAL_REGISTRY.resolve::<T>();
}

/// Empties the process-wide registry. Used primarily to reset state between
/// test runs.
pub fn clear() {
	GLOBAL_REGISTRY.clear();
}
