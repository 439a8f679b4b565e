//! Thin DOM abstraction layer.
//!
//! Wraps the handful of `web-sys` operations the widget needs behind a small,
//! error-returning surface: window/document lookup, event type names, and a
//! RAII [`EventHandle`] that detaches its listener on drop.
//!
//! Everything here is WASM-only at runtime; the types themselves compile on
//! native targets so the rest of the crate can be unit tested without a
//! browser.

use thiserror::Error;

/// Errors raised by low-level DOM operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// Failed to create an element.
	#[error("failed to create element")]
	CreateElementFailed,
	/// Failed to set an attribute.
	#[error("failed to set attribute")]
	SetAttributeFailed,
	/// Failed to append a child element.
	#[error("failed to append child")]
	AppendChildFailed,
	/// Failed to attach an event listener.
	#[error("failed to attach event listener")]
	AttachListenerFailed,
}

/// Event types the widget listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Mouse click.
	Click,
	/// Key pressed down.
	KeyDown,
	/// Character key press.
	KeyPress,
	/// Key released.
	KeyUp,
	/// Element gained focus.
	Focus,
	/// Element lost focus.
	Blur,
	/// Committed value change.
	Change,
	/// Clipboard paste.
	Paste,
}

impl EventType {
	/// The DOM event name for `addEventListener`.
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Click => "click",
			EventType::KeyDown => "keydown",
			EventType::KeyPress => "keypress",
			EventType::KeyUp => "keyup",
			EventType::Focus => "focus",
			EventType::Blur => "blur",
			EventType::Change => "change",
			EventType::Paste => "paste",
		}
	}
}

/// Returns the global window object.
#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, DomError> {
	web_sys::window().ok_or(DomError::NoWindow)
}

/// Returns the global document object.
#[cfg(target_arch = "wasm32")]
pub fn document() -> Result<web_sys::Document, DomError> {
	window()?.document().ok_or(DomError::NoDocument)
}

/// RAII handle for an attached event listener.
///
/// Keeps the backing `Closure` alive for as long as the handle exists and
/// detaches the listener when dropped. The widget replaces chip handles
/// wholesale on every re-render, which detaches the stale listeners of the
/// previous chip generation.
#[cfg(target_arch = "wasm32")]
pub struct EventHandle {
	target: web_sys::EventTarget,
	event: &'static str,
	closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl EventHandle {
	/// Attaches `handler` to `target` for the given event type.
	pub fn attach(
		target: &web_sys::EventTarget,
		event_type: EventType,
		handler: impl FnMut(web_sys::Event) + 'static,
	) -> Result<Self, DomError> {
		use wasm_bindgen::JsCast;

		let closure =
			wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
		target
			.add_event_listener_with_callback(event_type.as_str(), closure.as_ref().unchecked_ref())
			.map_err(|_| DomError::AttachListenerFailed)?;
		Ok(Self {
			target: target.clone(),
			event: event_type.as_str(),
			closure,
		})
	}

	/// The DOM event name this handle listens for.
	pub fn event(&self) -> &'static str {
		self.event
	}
}

#[cfg(target_arch = "wasm32")]
impl Drop for EventHandle {
	fn drop(&mut self) {
		use wasm_bindgen::JsCast;

		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
	}
}

#[cfg(target_arch = "wasm32")]
impl std::fmt::Debug for EventHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EventHandle")
			.field("event", &self.event)
			.finish()
	}
}

/// Placeholder event handle for non-WASM targets.
///
/// Carries only the event name so registry bookkeeping stays testable.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct EventHandle {
	event: &'static str,
}

#[cfg(not(target_arch = "wasm32"))]
impl EventHandle {
	/// Creates a placeholder handle for the given event type.
	pub fn placeholder(event_type: EventType) -> Self {
		Self {
			event: event_type.as_str(),
		}
	}

	/// The DOM event name this handle listens for.
	pub fn event(&self) -> &'static str {
		self.event
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_event_type_names() {
		assert_eq!(EventType::Click.as_str(), "click");
		assert_eq!(EventType::KeyDown.as_str(), "keydown");
		assert_eq!(EventType::KeyPress.as_str(), "keypress");
		assert_eq!(EventType::KeyUp.as_str(), "keyup");
		assert_eq!(EventType::Focus.as_str(), "focus");
		assert_eq!(EventType::Blur.as_str(), "blur");
		assert_eq!(EventType::Change.as_str(), "change");
		assert_eq!(EventType::Paste.as_str(), "paste");
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_placeholder_handle() {
		let handle = EventHandle::placeholder(EventType::Click);
		assert_eq!(handle.event(), "click");
	}

	#[test]
	fn test_dom_error_display() {
		assert!(DomError::NoDocument.to_string().contains("document"));
	}
}
