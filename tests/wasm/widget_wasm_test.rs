//! Browser-level widget tests, run under wasm-bindgen-test.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use tags_input::callback::{Callback, ChangeEvent, TagCallbacks};
use tags_input::config::TagsInputOptions;
use tags_input::engine::AddOptions;
use tags_input::error::{AttachError, TagError};
use tags_input::widget::TagsInput;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_field(value: &str) -> web_sys::HtmlInputElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let field: web_sys::HtmlInputElement = document
		.create_element("input")
		.unwrap()
		.dyn_into()
		.unwrap();
	field.set_value(value);
	document.body().unwrap().append_child(&field).unwrap();
	field
}

fn container_of(field: &web_sys::HtmlInputElement) -> web_sys::Element {
	let sibling: &web_sys::Element = field.as_ref();
	sibling.next_element_sibling().unwrap()
}

fn entry_of(field: &web_sys::HtmlInputElement) -> web_sys::HtmlInputElement {
	container_of(field)
		.query_selector(".tag-input__input")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap()
}

fn keyboard_event(kind: &str, key: &str) -> web_sys::KeyboardEvent {
	let init = web_sys::KeyboardEventInit::new();
	init.set_key(key);
	init.set_bubbles(true);
	init.set_cancelable(true);
	web_sys::KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap()
}

fn chip_labels(container: &web_sys::Element) -> Vec<String> {
	let nodes = container
		.query_selector_all(".tag-input__label")
		.unwrap();
	(0..nodes.length())
		.filter_map(|i| nodes.item(i).and_then(|n| n.text_content()))
		.collect()
}

#[wasm_bindgen_test]
fn attach_builds_container_and_hides_field() {
	let field = fresh_field("");
	let widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let container = container_of(&field);
	assert_eq!(container.class_name(), "tag-input");
	assert!(container.query_selector(".tag-input__input").unwrap().is_some());
	assert_eq!(field.style().get_property_value("display").unwrap(), "none");
	assert!(widget.tags().is_empty());
}

#[wasm_bindgen_test]
fn attach_hydrates_prefilled_value_as_chips() {
	let field = fresh_field("milk,eggs");
	let widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	assert_eq!(widget.tags(), vec!["milk", "eggs"]);
	assert_eq!(field.value(), "milk,eggs");
	assert_eq!(chip_labels(&container_of(&field)), vec!["milk", "eggs"]);
}

#[wasm_bindgen_test]
fn second_attach_to_same_field_is_rejected() {
	let field = fresh_field("");
	let _first = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let second = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	);
	assert!(matches!(second, Err(AttachError::AlreadyAttached)));
}

#[wasm_bindgen_test]
fn programmatic_add_updates_field_and_chips() {
	let field = fresh_field("");
	let widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	widget.add_tag("milk").unwrap();
	widget.add_tag("eggs").unwrap();
	assert!(widget.add_tag("MILK").is_err());

	assert_eq!(widget.value(), "milk,eggs");
	assert_eq!(field.value(), "milk,eggs");
	assert_eq!(chip_labels(&container_of(&field)), vec!["milk", "eggs"]);
}

#[wasm_bindgen_test]
fn remove_and_import_rebuild_the_chip_list() {
	let field = fresh_field("a,b,a");
	let widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	assert_eq!(widget.remove_tag("a"), 2);
	assert_eq!(field.value(), "b");
	assert_eq!(chip_labels(&container_of(&field)), vec!["b"]);

	widget.import_tags("x,y");
	assert_eq!(field.value(), "x,y");
	assert_eq!(chip_labels(&container_of(&field)), vec!["x", "y"]);
}

#[wasm_bindgen_test]
fn delimiter_keypress_commits_the_entry_field() {
	let field = fresh_field("");
	let _widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let entry = entry_of(&field);
	entry.set_value("milk");
	entry.dispatch_event(&keyboard_event("keypress", ",")).unwrap();

	assert_eq!(field.value(), "milk");
	assert_eq!(chip_labels(&container_of(&field)), vec!["milk"]);
	assert_eq!(entry.value(), "");
}

#[wasm_bindgen_test]
fn enter_keypress_commits_like_the_delimiter() {
	let field = fresh_field("");
	let _widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let entry = entry_of(&field);
	entry.set_value("eggs");
	entry
		.dispatch_event(&keyboard_event("keypress", "Enter"))
		.unwrap();

	assert_eq!(field.value(), "eggs");
	assert_eq!(entry.value(), "");
}

#[wasm_bindgen_test]
fn backspace_on_empty_entry_removes_last_chip() {
	let field = fresh_field("milk,eggs");
	let _widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let entry = entry_of(&field);
	assert_eq!(entry.value(), "");
	entry
		.dispatch_event(&keyboard_event("keydown", "Backspace"))
		.unwrap();

	assert_eq!(field.value(), "milk");
	assert_eq!(chip_labels(&container_of(&field)), vec!["milk"]);

	// A non-empty entry field leaves the chip list alone.
	entry.set_value("e");
	entry
		.dispatch_event(&keyboard_event("keydown", "Backspace"))
		.unwrap();
	assert_eq!(field.value(), "milk");
}

#[wasm_bindgen_test]
fn hooks_may_reenter_the_widget_through_a_stored_handle() {
	let field = fresh_field("");
	let slot: Rc<RefCell<Option<TagsInput>>> = Rc::new(RefCell::new(None));
	let observed = Rc::new(RefCell::new(Vec::new()));

	let callbacks = TagCallbacks {
		on_change: Some(Callback::new({
			let slot = Rc::clone(&slot);
			let observed = Rc::clone(&observed);
			move |_event: ChangeEvent| {
				if let Some(widget) = slot.borrow().as_ref() {
					observed.borrow_mut().push(widget.value());
				}
			}
		})),
		on_error: Some(Callback::new({
			let slot = Rc::clone(&slot);
			let observed = Rc::clone(&observed);
			move |_err: TagError| {
				if let Some(widget) = slot.borrow().as_ref() {
					observed.borrow_mut().push(widget.value());
				}
			}
		})),
		..TagCallbacks::default()
	};

	let widget = TagsInput::attach(field.clone(), TagsInputOptions::default(), callbacks).unwrap();
	*slot.borrow_mut() = Some(widget.clone());

	widget
		.add_tag_with("milk", AddOptions::default().fire_callbacks(true))
		.unwrap();
	// A duplicate commit takes the on_error path with the handle stored.
	assert!(widget.add_tag("MILK").is_err());

	assert_eq!(*observed.borrow(), vec!["milk", "milk"]);
}

#[wasm_bindgen_test]
fn interactive_commit_fires_change_hook() {
	let field = fresh_field("");
	let changes = Rc::new(RefCell::new(Vec::new()));
	let callbacks = TagCallbacks {
		on_change: Some(Callback::new({
			let changes = Rc::clone(&changes);
			move |event: ChangeEvent| changes.borrow_mut().push(event)
		})),
		..TagCallbacks::default()
	};
	let _widget =
		TagsInput::attach(field.clone(), TagsInputOptions::default(), callbacks).unwrap();

	let entry = entry_of(&field);
	entry.set_value("milk");
	entry.dispatch_event(&keyboard_event("keypress", ",")).unwrap();

	let changes = changes.borrow();
	assert_eq!(changes.len(), 1);
	assert_eq!(changes[0].value, "milk");
	assert_eq!(changes[0].last_tag, "milk");
}

#[wasm_bindgen_test]
fn paste_measures_width_when_armed() {
	let field = fresh_field("");
	let _widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let entry = entry_of(&field);
	// A keypress over a non-empty field arms measurement.
	entry.set_value("m");
	entry.dispatch_event(&keyboard_event("keypress", "i")).unwrap();

	entry.set_value("milk");
	let paste = web_sys::Event::new("paste").unwrap();
	entry.dispatch_event(&paste).unwrap();

	let width = entry.style().get_property_value("width").unwrap();
	assert!(width.ends_with("px"));
}

#[wasm_bindgen_test]
fn chip_remove_control_carries_accessible_labels() {
	let field = fresh_field("milk");
	let _widget = TagsInput::attach(
		field.clone(),
		TagsInputOptions::default(),
		TagCallbacks::default(),
	)
	.unwrap();

	let button = container_of(&field)
		.query_selector(".tag-input__remove")
		.unwrap()
		.unwrap();
	assert_eq!(button.get_attribute("title").unwrap(), "Remove tag 'milk'");
	assert_eq!(
		button.get_attribute("aria-label").unwrap(),
		"Remove tag 'milk'"
	);
	assert_eq!(button.get_attribute("type").unwrap(), "button");
}
