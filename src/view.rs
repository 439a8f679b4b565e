//! Minimal view tree for the widget markup.
//!
//! The widget builds its container, chips, and dropdown as [`View`] values.
//! `render_to_string` serves the markup-contract tests on native targets;
//! `mount` creates the real DOM nodes on WASM and attaches any event handlers,
//! returning their RAII handles.

use std::sync::Arc;

use crate::dom::EventType;

/// Type alias for view event handler functions.
#[cfg(target_arch = "wasm32")]
pub type ViewEventHandler = Arc<dyn Fn(web_sys::Event) + 'static>;

/// Type alias for view event handler functions (non-WASM placeholder).
#[cfg(not(target_arch = "wasm32"))]
pub type ViewEventHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// A renderable node: an element or a text node.
#[derive(Debug)]
pub enum View {
	/// A DOM element.
	Element(ElementView),
	/// A text node.
	Text(String),
}

impl View {
	/// Creates a text view.
	pub fn text(content: impl Into<String>) -> Self {
		Self::Text(content.into())
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_inner(&mut output);
		output
	}

	fn render_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(&el.tag);
				for (name, value) in &el.attrs {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape::encode_double_quoted_attribute(value));
					output.push('"');
				}
				if el.is_void {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in &el.children {
						child.render_inner(output);
					}
					output.push_str("</");
					output.push_str(&el.tag);
					output.push('>');
				}
			}
			View::Text(text) => {
				output.push_str(&html_escape::encode_text(text));
			}
		}
	}

	/// Creates the DOM subtree under `parent` and attaches event handlers.
	///
	/// Returns the listener handles; dropping them detaches the listeners, so
	/// the caller owns the lifetime of the subtree's interactivity.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(
		self,
		parent: &web_sys::Element,
	) -> Result<Vec<crate::dom::EventHandle>, crate::dom::DomError> {
		let mut handles = Vec::new();
		self.mount_inner(parent, &mut handles)?;
		Ok(handles)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(
		self,
		parent: &web_sys::Element,
		handles: &mut Vec<crate::dom::EventHandle>,
	) -> Result<(), crate::dom::DomError> {
		use crate::dom::{DomError, EventHandle, document};

		match self {
			View::Element(el) => {
				let doc = document()?;
				let element = doc
					.create_element(&el.tag)
					.map_err(|_| DomError::CreateElementFailed)?;
				for (name, value) in el.attrs {
					element
						.set_attribute(&name, &value)
						.map_err(|_| DomError::SetAttributeFailed)?;
				}
				for (event_type, handler) in el.event_handlers {
					let handle = EventHandle::attach(&element, event_type, move |event| {
						handler(event);
					})?;
					handles.push(handle);
				}
				for child in el.children {
					child.mount_inner(&element, handles)?;
				}
				parent
					.append_child(&element)
					.map_err(|_| DomError::AppendChildFailed)?;
			}
			View::Text(text) => {
				let doc = document()?;
				let node = doc.create_text_node(&text);
				parent
					.append_child(&node)
					.map_err(|_| DomError::AppendChildFailed)?;
			}
		}
		Ok(())
	}
}

/// A DOM element in the view tree.
pub struct ElementView {
	tag: String,
	attrs: Vec<(String, String)>,
	children: Vec<View>,
	is_void: bool,
	event_handlers: Vec<(EventType, ViewEventHandler)>,
}

impl std::fmt::Debug for ElementView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl ElementView {
	/// Creates an element view for `tag`.
	pub fn new(tag: impl Into<String>) -> Self {
		let tag = tag.into();
		let is_void = matches!(tag.as_str(), "input" | "br" | "img");
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a text child.
	pub fn text(mut self, content: impl Into<String>) -> Self {
		self.children.push(View::text(content));
		self
	}

	/// Adds a child element.
	pub fn child(mut self, child: ElementView) -> Self {
		self.children.push(View::Element(child));
		self
	}

	/// Adds an event handler, attached when the view is mounted.
	pub fn on(mut self, event_type: EventType, handler: ViewEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Wraps the element in a [`View`].
	pub fn into_view(self) -> View {
		View::Element(self)
	}
}
