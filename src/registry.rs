//! Double-initialization guard.
//!
//! One widget may be attached per bound element. The guard is an explicit
//! registry mapping element identity to a live attachment; re-attachment is
//! rejected instead of silently ignored. This is the only process-wide state
//! in the crate.

/// A registry of attached keys.
///
/// Generic over the key so the guard logic is testable without a DOM; the
/// WASM layer keys it by element identity.
#[derive(Debug, Default)]
pub struct AttachRegistry<K> {
	entries: Vec<K>,
}

impl<K: PartialEq> AttachRegistry<K> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
		}
	}

	/// Registers `key`, or returns `false` if it is already registered.
	pub fn try_register(&mut self, key: K) -> bool {
		if self.entries.contains(&key) {
			return false;
		}
		self.entries.push(key);
		true
	}

	/// Whether `key` is registered.
	pub fn is_registered(&self, key: &K) -> bool {
		self.entries.contains(key)
	}

	/// Removes `key` from the registry.
	pub fn release(&mut self, key: &K) {
		self.entries.retain(|entry| entry != key);
	}

	/// Number of registered keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// A DOM element compared by JavaScript object identity.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct ElementKey(web_sys::Element);

#[cfg(target_arch = "wasm32")]
impl ElementKey {
	/// Wraps an element for identity comparison.
	pub fn new(element: &web_sys::Element) -> Self {
		Self(element.clone())
	}
}

#[cfg(target_arch = "wasm32")]
impl PartialEq for ElementKey {
	fn eq(&self, other: &Self) -> bool {
		js_sys::Object::is(self.0.as_ref(), other.0.as_ref())
	}
}

#[cfg(target_arch = "wasm32")]
thread_local! {
	static REGISTRY: std::cell::RefCell<AttachRegistry<ElementKey>> =
		std::cell::RefCell::new(AttachRegistry::new());
}

/// Registers `element` in the process-wide guard.
///
/// Returns `false` when a widget is already attached to it.
#[cfg(target_arch = "wasm32")]
pub fn register_element(element: &web_sys::Element) -> bool {
	REGISTRY.with(|registry| registry.borrow_mut().try_register(ElementKey::new(element)))
}
