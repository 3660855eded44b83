use crate::{
	ServiceHandle,
	global,
};

#[derive(Default)]
struct Clock {
	tz: String,
}

// The process-wide registry is shared across the whole test binary, so the
// full lifecycle runs in one test to keep the harness' parallel execution
// away from it.
#[test]
fn global_registry_lifecycle() {
	global::clear();

	// No provide yet: fallback instance
	let fallback: ServiceHandle<Clock> = global::resolve();
	assert_eq!(fallback.tz, "");

	// First provide wins
	global::provide(Clock { tz: String::from("UTC") });
	global::provide(Clock { tz: String::from("CET") });

	let clock: ServiceHandle<Clock> = global::resolve();
	let again: ServiceHandle<Clock> = global::resolve();
	assert_eq!(clock.tz, "UTC");
	assert!(ServiceHandle::ptr_eq(&clock, &again));
	assert!(!ServiceHandle::ptr_eq(&clock, &fallback));

	// The accessor exposes the same underlying registry
	let registry = global::registry();
	let via_registry: ServiceHandle<Clock> = registry.resolve();
	assert!(ServiceHandle::ptr_eq(&via_registry, &clock));

	// Clear resets registrations but does not invalidate old handles
	global::clear();
	let fresh: ServiceHandle<Clock> = global::resolve();
	assert_eq!(fresh.tz, "");
	assert!(!ServiceHandle::ptr_eq(&fresh, &clock));
	assert_eq!(clock.tz, "UTC");
}
