//! The DOM widget.
//!
//! [`TagsInput::attach`] binds one widget to a text input: it hides the source
//! field, mounts the container markup next to it, hydrates the tag list from
//! the field's current value, and wires the input, chip, and autocomplete
//! event handlers. Every mutation flows through the [`TagEngine`] and is then
//! mirrored back into the DOM (field value, chip list, invalid marker).
//!
//! Handlers capture the shared widget state by `Rc`, so dropping the returned
//! handle leaves the widget alive on the page; there is no teardown
//! operation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::autosize::{AutosizeState, Probe, target_width};
use crate::callback::{ChangeEvent, TagCallbacks};
use crate::config::{SuggestionSource, TagsInputOptions};
use crate::dom::{self, DomError, EventHandle, EventType};
use crate::engine::{AddOptions, TagEngine, decode_tag};
use crate::error::{AttachError, TagError};
use crate::input::{is_commit_key, is_remove_last_key, suggestion_visible};
use crate::registry;
use crate::render;
use crate::suggest::SuggestionList;
use crate::trace_log;

thread_local! {
	static WIDGET_COUNTER: Cell<u64> = const { Cell::new(0) };
}

fn next_widget_id() -> String {
	WIDGET_COUNTER.with(|counter| {
		let next = counter.get() + 1;
		counter.set(next);
		format!("tags-input-{next}")
	})
}

/// CSS selector for the first class token of a configured class list.
fn class_selector(class: &str) -> String {
	format!(".{}", class.split_whitespace().next().unwrap_or(class))
}

struct Inner {
	id: String,
	options: TagsInputOptions,
	engine: TagEngine,
	// User hooks. Dispatched by the widget once every state borrow is
	// released, so a hook may re-enter the widget through a clone of the
	// handle without tripping the RefCell.
	callbacks: TagCallbacks,
	source: web_sys::HtmlInputElement,
	tag_container: web_sys::Element,
	form_input: Option<web_sys::HtmlInputElement>,
	autocomplete_list: Option<web_sys::Element>,
	autosize: AutosizeState,
	probe: Option<Probe>,
	// RAII listener handles. The static set lives for the widget's lifetime;
	// chip handles are replaced wholesale on every re-render.
	static_handles: Vec<EventHandle>,
	chip_handles: Vec<EventHandle>,
	autocomplete_handles: Vec<EventHandle>,
}

/// A live tags input bound to one source field.
///
/// Cloning the handle is cheap; all clones drive the same widget.
#[derive(Clone)]
pub struct TagsInput {
	inner: Rc<RefCell<Inner>>,
}

impl TagsInput {
	/// Attaches a widget to `source`.
	///
	/// Builds the container markup next to the source field, hydrates the tag
	/// list from its current value, and wires all event handlers. Fails with
	/// [`AttachError::AlreadyAttached`] when a widget is already bound to this
	/// element.
	pub fn attach(
		source: web_sys::HtmlInputElement,
		options: TagsInputOptions,
		callbacks: TagCallbacks,
	) -> Result<Self, AttachError> {
		let source_el: &web_sys::Element = source.as_ref();
		if !registry::register_element(source_el) {
			return Err(AttachError::AlreadyAttached);
		}

		let id = next_widget_id();
		trace_log!(options.debug, "attach {} {:?}", id, options);

		// The engine itself stays quiet; the widget owns hook dispatch so it
		// can defer it until no borrow is held.
		let mut engine = TagEngine::from_options(&options, TagCallbacks::default());

		// Build and place the container markup.
		let document = dom::document().map_err(AttachError::Dom)?;
		let holder = document
			.create_element("div")
			.map_err(|_| AttachError::Dom(DomError::CreateElementFailed))?;
		render::container_view(&options, &id)
			.into_view()
			.mount(&holder)
			.map_err(AttachError::Dom)?;
		let container = holder
			.first_element_child()
			.ok_or(AttachError::Dom(DomError::CreateElementFailed))?;
		source_el
			.insert_adjacent_element("afterend", &container)
			.map_err(|_| AttachError::Detached)?;

		let tag_container = container
			.query_selector(&class_selector(&options.classes.tag_container))
			.ok()
			.flatten()
			.ok_or(AttachError::Dom(DomError::CreateElementFailed))?;
		let form_input = if options.interactive {
			container
				.query_selector(&class_selector(&options.classes.form_input))
				.ok()
				.flatten()
				.and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
		} else {
			None
		};

		// Hydrate from a pre-filled field.
		let existing = source.value();
		if !existing.is_empty() {
			engine.import_tags(&existing);
		}

		if options.hide {
			let _ = source.style().set_property("display", "none");
		}

		let probe = match (&form_input, options.interactive && options.autosize) {
			(Some(input), true) => Probe::create(&id, input).ok(),
			_ => None,
		};

		let widget = Self {
			inner: Rc::new(RefCell::new(Inner {
				id,
				options,
				engine,
				callbacks,
				source,
				tag_container,
				form_input,
				autocomplete_list: None,
				autosize: AutosizeState::new(),
				probe,
				static_handles: Vec::new(),
				chip_handles: Vec::new(),
				autocomplete_handles: Vec::new(),
			})),
		};

		sync_field(&widget.inner);
		render_chips(&widget.inner)?;
		wire_events(&widget.inner, &container)?;
		start_autocomplete(&widget.inner)?;

		Ok(widget)
	}

	/// The widget's generated id, also used on the entry field.
	pub fn id(&self) -> String {
		self.inner.borrow().id.clone()
	}

	/// The serialized, delimiter-joined field value.
	pub fn value(&self) -> String {
		self.inner.borrow().engine.serialize()
	}

	/// The committed tags in insertion order.
	pub fn tags(&self) -> Vec<String> {
		self.inner.borrow().engine.tags().to_vec()
	}

	/// Case-insensitive membership test.
	pub fn tag_exists(&self, value: &str) -> bool {
		self.inner.borrow().engine.tag_exists(value)
	}

	/// Validates and commits one tag programmatically.
	pub fn add_tag(&self, value: &str) -> Result<(), TagError> {
		self.add_tag_with(value, AddOptions::default())
	}

	/// Validates and commits one tag with explicit per-call options.
	pub fn add_tag_with(&self, value: &str, options: AddOptions) -> Result<(), TagError> {
		commit_tag(&self.inner, value, options).map(|_| ())
	}

	/// Removes every tag exactly equal to the percent-decoded `value`.
	///
	/// Returns how many tags were removed.
	pub fn remove_tag(&self, value: &str) -> usize {
		remove_and_refresh(&self.inner, value)
	}

	/// Clears the field and re-imports a delimited string.
	pub fn import_tags(&self, raw: &str) {
		self.inner.borrow_mut().engine.import_tags(raw);
		sync_field(&self.inner);
		let _ = render_chips(&self.inner);
	}
}

impl std::fmt::Debug for TagsInput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.borrow();
		let listeners = inner.static_handles.len()
			+ inner.chip_handles.len()
			+ inner.autocomplete_handles.len();
		f.debug_struct("TagsInput")
			.field("id", &inner.id)
			.field("tags", &inner.engine.tags())
			.field("autocomplete", &inner.autocomplete_list.is_some())
			.field("listeners", &listeners)
			.finish()
	}
}

/// Mirrors the engine state into the bound field.
fn sync_field(inner: &Rc<RefCell<Inner>>) {
	let inner = inner.borrow();
	inner.source.set_value(&inner.engine.serialize());
}

/// Full-replace re-render of the chip list.
fn render_chips(rc: &Rc<RefCell<Inner>>) -> Result<(), AttachError> {
	let (options, tags, tag_container) = {
		let inner = rc.borrow();
		(
			inner.options.clone(),
			inner.engine.tags().to_vec(),
			inner.tag_container.clone(),
		)
	};

	tag_container.set_inner_html("");
	let mut new_handles = Vec::new();
	for tag in tags {
		render::chip_view(&options, &tag)
			.into_view()
			.mount(&tag_container)
			.map_err(AttachError::Dom)?;
		// The remove control is the chip's last child; clicks elsewhere on
		// the chip must not remove it.
		let button = tag_container
			.last_element_child()
			.and_then(|chip| chip.last_element_child());
		if let Some(button) = button {
			let handle = EventHandle::attach(button.as_ref(), EventType::Click, {
				let rc = Rc::clone(rc);
				let tag = tag.clone();
				move |_event| {
					remove_and_refresh(&rc, &tag);
				}
			})
			.map_err(AttachError::Dom)?;
			new_handles.push(handle);
		}
	}
	rc.borrow_mut().chip_handles = new_handles;
	Ok(())
}

fn remove_and_refresh(rc: &Rc<RefCell<Inner>>, value: &str) -> usize {
	let removed = rc.borrow_mut().engine.remove_tag(value);
	sync_field(rc);
	let _ = render_chips(rc);
	// Fires whether or not anything matched, with the decoded value, after
	// the DOM already mirrors the new state and no borrow is held.
	let on_remove = rc.borrow().callbacks.on_remove_tag.clone();
	if let Some(cb) = on_remove {
		cb.call(decode_tag(value));
	}
	removed
}

fn mark_invalid(rc: &Rc<RefCell<Inner>>) {
	let inner = rc.borrow();
	if let Some(input) = &inner.form_input {
		let _ = input
			.class_list()
			.add_1(&inner.options.classes.form_input_invalid);
	}
}

/// Clears the entry field and focuses or blurs it after a successful add.
fn apply_add_success(rc: &Rc<RefCell<Inner>>, focus: bool) {
	sync_field(rc);
	let _ = render_chips(rc);
	let inner = rc.borrow();
	if let Some(input) = &inner.form_input {
		input.set_value("");
		if focus {
			let _ = input.focus();
		} else {
			let _ = input.blur();
		}
	}
}

/// Runs one add through the engine and mirrors the outcome into the DOM.
///
/// The user hooks fire last, once the DOM reflects the new state and every
/// borrow is released, so a hook may re-enter the widget through a clone of
/// the handle.
fn commit_tag(rc: &Rc<RefCell<Inner>>, raw: &str, options: AddOptions) -> Result<String, TagError> {
	let result = rc.borrow_mut().engine.add_tag(raw, options);
	match &result {
		Ok(tag) => {
			apply_add_success(rc, options.focus);
			if options.fire_callbacks {
				let (callbacks, value) = {
					let inner = rc.borrow();
					(inner.callbacks.clone(), inner.engine.serialize())
				};
				if let Some(cb) = &callbacks.on_add_tag {
					cb.call(tag.clone());
				}
				if let Some(cb) = &callbacks.on_change {
					cb.call(ChangeEvent {
						value,
						last_tag: tag.clone(),
					});
				}
			}
		}
		Err(err) => {
			if options.value_checks {
				mark_invalid(rc);
				let on_error = rc.borrow().callbacks.on_error.clone();
				if let Some(cb) = on_error {
					cb.call(*err);
				}
			}
		}
	}
	result
}

/// A commit keypress: gate on min/max length, add, reset autosize.
fn handle_commit(rc: &Rc<RefCell<Inner>>) {
	let Some(input) = rc.borrow().form_input.clone() else {
		return;
	};
	let value = input.value();
	let length_ok = {
		let inner = rc.borrow();
		inner.options.length_permitted(value.chars().count())
	};

	if length_ok {
		let _ = commit_tag(
			rc,
			&value,
			AddOptions::default().focus(true).fire_callbacks(true),
		);
	}

	let mut inner = rc.borrow_mut();
	inner.autosize.reset();
	if let Some(probe) = &inner.probe {
		probe.reset();
	}
}

/// Static event wiring for one widget instance.
fn wire_events(rc: &Rc<RefCell<Inner>>, container: &web_sys::Element) -> Result<(), AttachError> {
	let (options, form_input) = {
		let inner = rc.borrow();
		(inner.options.clone(), inner.form_input.clone())
	};
	if !options.interactive {
		return Ok(());
	}
	let Some(input) = form_input else {
		return Ok(());
	};

	let mut handles = Vec::new();

	// Clicking anywhere on the control focuses the entry field.
	handles.push(
		EventHandle::attach(container.as_ref(), EventType::Click, {
			let input = input.clone();
			move |_event| {
				let _ = input.focus();
			}
		})
		.map_err(AttachError::Dom)?,
	);

	// Delimiter/Enter commits; any other printable keypress feeds autosize.
	handles.push(
		EventHandle::attach(input.as_ref(), EventType::KeyPress, {
			let rc = Rc::clone(rc);
			let input = input.clone();
			let delimiter = options.delimiter;
			let autosize = options.autosize;
			move |event| {
				let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(|e| e.key())
				else {
					return;
				};
				if is_commit_key(&key, delimiter) {
					event.prevent_default();
					handle_commit(&rc);
				} else if autosize {
					let value = input.value();
					rc.borrow_mut().autosize.observe(&value);
				}
			}
		})
		.map_err(AttachError::Dom)?,
	);

	// Backspace on an empty field deletes the last chip; with uniqueness on,
	// any keystroke clears the invalid marker.
	handles.push(
		EventHandle::attach(input.as_ref(), EventType::KeyDown, {
			let rc = Rc::clone(rc);
			let input = input.clone();
			let unique = options.unique;
			let remove_with_backspace = options.remove_with_backspace;
			let invalid_class = options.classes.form_input_invalid.clone();
			let label_selector = class_selector(&options.classes.tag_label);
			move |event| {
				if unique {
					let _ = input.class_list().remove_1(&invalid_class);
				}
				let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(|e| e.key())
				else {
					return;
				};
				if is_remove_last_key(&key, &input.value(), remove_with_backspace) {
					event.prevent_default();
					let last_label = rc
						.borrow()
						.tag_container
						.last_element_child()
						.and_then(|chip| chip.query_selector(&label_selector).ok().flatten())
						.and_then(|label| label.text_content());
					if let Some(text) = last_label {
						remove_and_refresh(&rc, &text);
					}
					let _ = input.focus();
				}
			}
		})
		.map_err(AttachError::Dom)?,
	);

	// Armed content measurement for autosize, on key release and paste.
	if options.autosize {
		for event_type in [EventType::KeyUp, EventType::Paste] {
			handles.push(
				EventHandle::attach(input.as_ref(), event_type, {
					let rc = Rc::clone(rc);
					let input = input.clone();
					let comfort_zone = options.comfort_zone;
					move |_event| {
						let inner = rc.borrow();
						if !inner.autosize.is_armed() {
							return;
						}
						if let Some(probe) = &inner.probe {
							let width = target_width(probe.measure(&input.value()), comfort_zone);
							let _ = input.style().set_property("width", &format!("{width}px"));
						}
					}
				})
				.map_err(AttachError::Dom)?,
			);
		}
	}

	rc.borrow_mut().static_handles = handles;
	Ok(())
}

/// Brings up the autocomplete controller for the configured source.
fn start_autocomplete(rc: &Rc<RefCell<Inner>>) -> Result<(), AttachError> {
	let source = {
		let inner = rc.borrow();
		if !inner.options.interactive {
			return Ok(());
		}
		inner.options.auto_complete.source.clone()
	};
	match source {
		SuggestionSource::None => Ok(()),
		SuggestionSource::Inline(_) => init_autocomplete(rc),
		SuggestionSource::Remote(url) => {
			fetch_suggestions(rc, url);
			Ok(())
		}
	}
}

/// One-shot suggestion fetch; failure leaves autocomplete inert.
fn fetch_suggestions(rc: &Rc<RefCell<Inner>>, url: String) {
	let rc = Rc::clone(rc);
	wasm_bindgen_futures::spawn_local(async move {
		let debug = rc.borrow().options.debug;
		match fetch_suggestion_payload(&url).await {
			Ok(list) => {
				trace_log!(debug, "suggestion fetch resolved: {} items", list.len());
				rc.borrow_mut().engine.set_suggestions(list);
				let _ = init_autocomplete(&rc);
			}
			Err(message) => {
				trace_log!(debug, "suggestion fetch failed: {message}");
			}
		}
	});
}

async fn fetch_suggestion_payload(url: &str) -> Result<SuggestionList, String> {
	let response = reqwest::get(url).await.map_err(|err| err.to_string())?;
	let body = response.text().await.map_err(|err| err.to_string())?;
	SuggestionList::from_json(&body).map_err(|err| err.to_string())
}

/// Mounts the dropdown and wires selection, filtering, and visibility.
fn init_autocomplete(rc: &Rc<RefCell<Inner>>) -> Result<(), AttachError> {
	let (options, id, input, suggestions) = {
		let inner = rc.borrow();
		let Some(input) = inner.form_input.clone() else {
			return Ok(());
		};
		let Some(suggestions) = inner.engine.suggestions().cloned() else {
			return Ok(());
		};
		(inner.options.clone(), inner.id.clone(), input, suggestions)
	};

	let document = dom::document().map_err(AttachError::Dom)?;
	let holder = document
		.create_element("div")
		.map_err(|_| AttachError::Dom(DomError::CreateElementFailed))?;
	render::autocomplete_view(&options, &id, &suggestions)
		.into_view()
		.mount(&holder)
		.map_err(AttachError::Dom)?;
	let list = holder
		.first_element_child()
		.ok_or(AttachError::Dom(DomError::CreateElementFailed))?;

	let input_el: &web_sys::Element = input.as_ref();
	input_el
		.insert_adjacent_element("afterend", &list)
		.map_err(|_| AttachError::Dom(DomError::AppendChildFailed))?;

	let list_id = format!("{id}-autocomplete");
	let selected_id = format!("{list_id}-selected");
	for (name, value) in [
		("role", "combobox"),
		("aria-autocomplete", "list"),
		("aria-owns", list_id.as_str()),
		("aria-activedescendant", selected_id.as_str()),
	] {
		input_el
			.set_attribute(name, value)
			.map_err(|_| AttachError::Dom(DomError::SetAttributeFailed))?;
	}

	let mut handles = Vec::new();

	let items = list.children();
	for index in 0..items.length() {
		let Some(item) = items.item(index) else {
			continue;
		};
		let label = item.text_content().unwrap_or_default();

		handles.push(
			EventHandle::attach(item.as_ref(), EventType::Click, {
				let rc = Rc::clone(rc);
				let input = input.clone();
				let label = label.clone();
				move |_event| {
					select_suggestion(&rc, &input, &label);
				}
			})
			.map_err(AttachError::Dom)?,
		);

		handles.push(
			EventHandle::attach(item.as_ref(), EventType::KeyDown, {
				let rc = Rc::clone(rc);
				let input = input.clone();
				let label = label.clone();
				move |event| {
					let is_enter = event
						.dyn_ref::<web_sys::KeyboardEvent>()
						.is_some_and(|e| e.key() == "Enter");
					if is_enter {
						select_suggestion(&rc, &input, &label);
					}
				}
			})
			.map_err(AttachError::Dom)?,
		);

		// Exactly one item carries the selected id at a time.
		handles.push(
			EventHandle::attach(item.as_ref(), EventType::Focus, {
				let selected_id = selected_id.clone();
				move |event| {
					if let Ok(document) = dom::document() {
						if let Some(previous) = document.get_element_by_id(&selected_id) {
							let _ = previous.remove_attribute("id");
						}
					}
					let target = event
						.target()
						.and_then(|t| t.dyn_into::<web_sys::Element>().ok());
					if let Some(target) = target {
						let _ = target.set_attribute("id", &selected_id);
					}
				}
			})
			.map_err(AttachError::Dom)?,
		);
	}

	// Dropdown visibility follows field emptiness and focus.
	for event_type in [EventType::KeyUp, EventType::Focus] {
		handles.push(
			EventHandle::attach(input.as_ref(), event_type, {
				let input = input.clone();
				let list = list.clone();
				move |_event| {
					let hidden = if input.value().is_empty() {
						"true"
					} else {
						"false"
					};
					let _ = list.set_attribute("aria-hidden", hidden);
				}
			})
			.map_err(AttachError::Dom)?,
		);
	}
	handles.push(
		EventHandle::attach(input.as_ref(), EventType::Blur, {
			let list = list.clone();
			move |_event| {
				let _ = list.set_attribute("aria-hidden", "true");
			}
		})
		.map_err(AttachError::Dom)?,
	);

	// Substring filtering of the dropdown items.
	for event_type in [EventType::KeyUp, EventType::Change, EventType::Paste] {
		handles.push(
			EventHandle::attach(input.as_ref(), event_type, {
				let input = input.clone();
				let list = list.clone();
				move |_event| {
					filter_items(&list, &input.value());
				}
			})
			.map_err(AttachError::Dom)?,
		);
	}

	let mut inner = rc.borrow_mut();
	inner.autocomplete_list = Some(list);
	inner.autocomplete_handles = handles;
	Ok(())
}

/// Commits a dropdown selection.
///
/// The entry field is cleared before validation runs, so a rejected
/// selection (for example a duplicate under uniqueness) leaves the field
/// empty.
fn select_suggestion(rc: &Rc<RefCell<Inner>>, input: &web_sys::HtmlInputElement, label: &str) {
	input.set_value("");
	let _ = commit_tag(
		rc,
		label,
		AddOptions::default().focus(true).fire_callbacks(true),
	);
}

/// Toggles each dropdown item's visibility against the field content.
fn filter_items(list: &web_sys::Element, query: &str) {
	let items = list.children();
	for index in 0..items.length() {
		let Some(item) = items.item(index) else {
			continue;
		};
		let text = item.text_content().unwrap_or_default();
		let hidden = if suggestion_visible(&text, query) {
			"false"
		} else {
			"true"
		};
		let _ = item.set_attribute("aria-hidden", hidden);
	}
}
