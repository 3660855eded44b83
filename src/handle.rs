use std::{
	ops::Deref,
	sync::Arc,
	any::{
		TypeId,
		Any,
	},
	marker::PhantomData,
};


/// Shared handle to a service instance. Holds ownership of an arc to allow
/// access to the typed instance via deref without de-allocating. Cloning a
/// handle adds another holder of the instance; the instance is dropped when
/// the last holder (a handle or the registry) lets go.
pub struct ServiceHandle<T: 'static>(Arc<Box<dyn Any + Sync + Send>>, PhantomData<T>);

impl<T: Sync + Send + 'static> ServiceHandle<T> {

	/// Creates a new `ServiceHandle` from an `Arc` containing an `Any` value.
	/// Returns `None` if the value is not a `T`.
	pub(crate) fn new(instance: Arc<Box<dyn Any + Sync + Send>>) -> Option<ServiceHandle<T>> {
		if (**instance).type_id() == TypeId::of::<T>() {
			return Some(ServiceHandle(instance, PhantomData));
		} else {
			return None;
		}
	}

	/// Wraps a freshly-constructed instance that no registry holds. Used for
	/// the fallback returned when no instance was provided.
	pub(crate) fn detached(instance: T) -> ServiceHandle<T> {
		let instance: Box<dyn Any + Sync + Send> = Box::new(instance);
		return ServiceHandle(Arc::new(instance), PhantomData);
	}

	/// Returns `true` if both handles refer to the same underlying instance.
	pub fn ptr_eq(this: &ServiceHandle<T>, other: &ServiceHandle<T>) -> bool {
		return Arc::ptr_eq(&this.0, &other.0);
	}

}

impl<T: 'static> Clone for ServiceHandle<T> {
	fn clone(&self) -> Self {
		return ServiceHandle(Arc::clone(&self.0), PhantomData);
	}
}

impl<T: 'static> Deref for ServiceHandle<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		// Type checking is done during instantiation, so we can just cast the existing pointer
		return unsafe { &*(&**self.0 as *const dyn Any as *const T) };
	}
}
