//! Callback types for widget event hooks.
//!
//! User code observes the widget through four optional, synchronous hooks:
//! tag added, tag removed, value changed, and validation error. Each hook has
//! exactly one named slot in [`TagCallbacks`]; there is no dynamic handler
//! lookup.

use std::sync::Arc;

use crate::error::TagError;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable while
/// providing a stable reference for the lifetime of the widget.
///
/// ## Example
///
/// ```ignore
/// let on_error = Callback::new(|err: TagError| {
///     trace_log!(true, "rejected: {}", err.kind());
/// });
/// ```
// Conditional Send + Sync bounds: WASM handlers capture Rc'd widget state and
// cannot be Sync; native handlers must be shareable across test threads.
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (non-WASM version).
///
/// See the WASM version for full documentation. This version requires
/// `Send + Sync` bounds so handlers can be exercised from native tests.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Payload of the value-changed hook.
///
/// `value` is the full serialized field value after the mutation; it is the
/// supported integration point for reading the committed tag set. `last_tag`
/// is the tag that was just appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
	/// The serialized, delimiter-joined field value.
	pub value: String,
	/// The most recently committed tag.
	pub last_tag: String,
}

/// The optional event hooks for one widget instance.
///
/// At most one handler per event; all handlers are invoked synchronously at
/// the point of the corresponding mutation and their return values are
/// ignored.
///
/// ## Example
///
/// ```ignore
/// let callbacks = TagCallbacks {
///     on_add_tag: Some(Callback::new(|tag| { /* ... */ })),
///     ..TagCallbacks::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagCallbacks {
	/// Invoked with the committed tag after a successful add, when the add
	/// operation was asked to fire callbacks.
	pub on_add_tag: Option<Callback<String>>,
	/// Invoked with the removed value after a removal.
	pub on_remove_tag: Option<Callback<String>>,
	/// Invoked after `on_add_tag` with the serialized value and the last tag.
	pub on_change: Option<Callback<ChangeEvent>>,
	/// Invoked with the rejection reason when a validated add fails.
	pub on_error: Option<Callback<TagError>>,
}

impl TagCallbacks {
	/// Creates an empty callback set.
	pub fn new() -> Self {
		Self::default()
	}
}
