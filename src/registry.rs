use std::{
	any::{
		Any,
		TypeId,
		type_name,
	},
	sync::Arc,
};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::handle::ServiceHandle;


/// # Type-keyed singleton registry.
///
/// A `ServiceRegistry` stores at most one instance per concrete type and
/// hands out shared handles to it, so unrelated parts of a program can reach
/// the same instance without being wired together explicitly.
///
/// ## Registration semantics
///
/// The first `provide` call for a type establishes the instance; later calls
/// for the same type are ignored and their candidate instance is dropped.
/// This keeps defensive registration at multiple call sites from clobbering
/// an instance that is already in use.
///
/// ## Resolution semantics
///
/// `resolve` never fails and never signals absence. When no instance was
/// provided for the requested type, it hands out a fresh default-constructed
/// instance that is *not* inserted into the registry. Callers that need to
/// tell the registered instance apart from such a fallback can compare
/// handles with [`ServiceHandle::ptr_eq`].
///
/// ## Locking
///
/// All operations are serialized behind an `RwLock` scoped only around the
/// map access. Returned handles are never covered by the lock, and fallback
/// construction happens after it is released.
pub struct ServiceRegistry {
	instances: RwLock<FxHashMap<TypeId, Arc<Box<dyn Any + Sync + Send>>>>,
}

impl ServiceRegistry {

	/// Creates a new, empty registry.
	pub fn new() -> ServiceRegistry {
		return ServiceRegistry {
			instances: RwLock::new(FxHashMap::default()),
		};
	}

	/// Registers `instance` as the shared instance for its type. If one was
	/// already provided, the earlier instance stays authoritative and
	/// `instance` is dropped.
	pub fn provide<T: Sync + Send + 'static>(&self, instance: T) {
		let mut instances = self.instances.write();
		if instances.contains_key(&TypeId::of::<T>()) {
			log::debug!("{} is already provided, keeping the existing instance", type_name::<T>());
			return;
		}

		let instance: Box<dyn Any + Sync + Send> = Box::new(instance);
		instances.insert(TypeId::of::<T>(), Arc::new(instance));
	}

	/// Registers a default-constructed instance of `T`. The candidate is
	/// constructed up front and dropped if `T` was already provided.
	pub fn provide_default<T: Default + Sync + Send + 'static>(&self) {
		self.provide(T::default());
	}

	/// Returns a shared handle to the instance provided for `T`, or a handle
	/// to a fresh `T::default()` if none was provided. The fallback is not
	/// inserted into the registry; repeated calls without a prior `provide`
	/// yield independent instances.
	pub fn resolve<T: Default + Sync + Send + 'static>(&self) -> ServiceHandle<T> {
		let registered = {
			let instances = self.instances.read();
			instances.get(&TypeId::of::<T>()).map(Arc::clone)
		};

		if let Some(registered) = registered {
			if let Some(handle) = ServiceHandle::new(registered) {
				return handle;
			}
		}

		log::trace!("no {} provided, handing out a default instance", type_name::<T>());
		return ServiceHandle::detached(T::default());
	}

	/// Releases the registry's hold on every registered instance and empties
	/// the registry. Handles resolved earlier stay valid for as long as their
	/// holders keep them.
	pub fn clear(&self) {
		let mut instances = self.instances.write();
		let released = instances.len();
		instances.clear();
		drop(instances);

		log::debug!("released {} registered instances", released);
	}

}

impl Default for ServiceRegistry {
	fn default() -> Self {
		return ServiceRegistry::new();
	}
}
