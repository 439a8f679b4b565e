//! Entry-field autosizing.
//!
//! An offscreen probe `span` mirrors the entry field's font metrics; the field
//! width is set to the probe's measured content width plus a fixed comfort
//! zone. The arming logic is pure state ([`AutosizeState`]); the probe itself
//! is WASM-only.
//!
//! Known quirk, kept on purpose: measurement only arms the first time the
//! field is observed non-empty after a reset. Keypress events fire before the
//! character is inserted, so the first character typed into a freshly cleared
//! field is never measured and the width lags one step.

/// Pure arming state of the autosize helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutosizeState {
	armed: bool,
}

impl AutosizeState {
	/// Creates a disarmed state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Observes the field content at keypress time.
	///
	/// Arms measurement once the field is seen non-empty; an empty field
	/// leaves the state untouched.
	pub fn observe(&mut self, value: &str) {
		if !value.is_empty() {
			self.armed = true;
		}
	}

	/// Whether key-release measurement is active.
	pub fn is_armed(&self) -> bool {
		self.armed
	}

	/// Disarms after a commit resets the field.
	pub fn reset(&mut self) {
		self.armed = false;
	}
}

/// The field width for a measured content width.
pub fn target_width(measured: u32, comfort_zone: u32) -> u32 {
	measured.saturating_add(comfort_zone)
}

/// The offscreen measuring element.
///
/// Created lazily, once per widget instance, and appended to `<body>` with the
/// id `{widget_id}-tester`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug)]
pub struct Probe {
	element: web_sys::HtmlElement,
}

#[cfg(target_arch = "wasm32")]
impl Probe {
	/// Creates the probe, copying the entry field's font metrics.
	pub fn create(
		widget_id: &str,
		input: &web_sys::HtmlInputElement,
	) -> Result<Self, crate::dom::DomError> {
		use wasm_bindgen::JsCast;

		use crate::dom::{DomError, document, window};

		let document = document()?;
		let element: web_sys::HtmlElement = document
			.create_element("span")
			.map_err(|_| DomError::CreateElementFailed)?
			.dyn_into()
			.map_err(|_| DomError::CreateElementFailed)?;
		element
			.set_attribute("id", &format!("{widget_id}-tester"))
			.map_err(|_| DomError::SetAttributeFailed)?;

		let style = element.style();
		let _ = style.set_property("position", "absolute");
		let _ = style.set_property("top", "-9999px");
		let _ = style.set_property("left", "-9999px");
		let _ = style.set_property("width", "auto");
		let _ = style.set_property("white-space", "nowrap");
		if let Ok(Some(computed)) = window()?.get_computed_style(input) {
			for property in ["font-size", "font-family", "font-weight", "letter-spacing"] {
				if let Ok(value) = computed.get_property_value(property) {
					let _ = style.set_property(property, &value);
				}
			}
		}

		let body = document.body().ok_or(DomError::AppendChildFailed)?;
		body.append_child(&element)
			.map_err(|_| DomError::AppendChildFailed)?;

		Ok(Self { element })
	}

	/// Measures the rendered width of `content` in the field's font.
	pub fn measure(&self, content: &str) -> u32 {
		self.element.set_text_content(Some(content));
		self.element.offset_width().max(0) as u32
	}

	/// Returns the probe to automatic width after a commit.
	pub fn reset(&self) {
		let _ = self.element.style().set_property("width", "auto");
	}
}
