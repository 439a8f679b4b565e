//! End-to-end flows through the DOM-free core: options, engine, callbacks,
//! and rendered markup together.

use std::sync::{Arc, Mutex};

use rstest::rstest;
use tags_input::callback::{Callback, ChangeEvent, TagCallbacks};
use tags_input::config::{AutoCompleteOptions, SuggestionSource, TagsInputOptions};
use tags_input::engine::{AddOptions, TagEngine};
use tags_input::error::TagError;
use tags_input::render;
use tags_input::suggest::Suggestion;

#[derive(Debug, Default)]
struct Recorded {
	added: Vec<String>,
	removed: Vec<String>,
	changes: Vec<ChangeEvent>,
	errors: Vec<&'static str>,
}

fn recording_callbacks() -> (TagCallbacks, Arc<Mutex<Recorded>>) {
	let recorded = Arc::new(Mutex::new(Recorded::default()));
	let callbacks = TagCallbacks {
		on_add_tag: Some(Callback::new({
			let recorded = Arc::clone(&recorded);
			move |tag: String| recorded.lock().unwrap().added.push(tag)
		})),
		on_remove_tag: Some(Callback::new({
			let recorded = Arc::clone(&recorded);
			move |tag: String| recorded.lock().unwrap().removed.push(tag)
		})),
		on_change: Some(Callback::new({
			let recorded = Arc::clone(&recorded);
			move |event: ChangeEvent| recorded.lock().unwrap().changes.push(event)
		})),
		on_error: Some(Callback::new({
			let recorded = Arc::clone(&recorded);
			move |err: TagError| recorded.lock().unwrap().errors.push(err.kind())
		})),
	};
	(callbacks, recorded)
}

#[test]
fn test_grocery_list_session() {
	let (callbacks, recorded) = recording_callbacks();
	let mut engine = TagEngine::from_options(&TagsInputOptions::default(), callbacks);

	// Hydration from a pre-filled field.
	engine.import_tags("milk,eggs");
	assert_eq!(engine.tags(), ["milk", "eggs"]);

	// Manual commits, one fired through the callback path.
	engine.add_tag("bread", AddOptions::default()).unwrap();
	engine
		.add_tag("butter", AddOptions::default().fire_callbacks(true))
		.unwrap();

	// A duplicate differing only in case is rejected.
	assert_eq!(
		engine.add_tag("MILK", AddOptions::default()),
		Err(TagError::NotUnique)
	);

	// Backspace-style removal of the most recent chip.
	let last = engine.last_tag().map(str::to_string).unwrap();
	assert_eq!(engine.remove_tag(&last), 1);

	assert_eq!(engine.serialize(), "milk,eggs,bread");

	let recorded = recorded.lock().unwrap();
	assert_eq!(recorded.added, vec!["butter"]);
	assert_eq!(recorded.removed, vec!["butter"]);
	assert_eq!(recorded.errors, vec!["notunique"]);
	assert_eq!(recorded.changes.len(), 1);
	assert_eq!(recorded.changes[0].value, "milk,eggs,bread,butter");
	assert_eq!(recorded.changes[0].last_tag, "butter");
}

#[test]
fn test_custom_delimiter_flows_through_serialization() {
	let options = TagsInputOptions {
		delimiter: ';',
		..TagsInputOptions::default()
	};
	let mut engine = TagEngine::from_options(&options, TagCallbacks::default());
	engine.import_tags("a;b");
	engine.add_tag("c,d", AddOptions::default()).unwrap();
	// The comma is an ordinary character under a semicolon delimiter.
	assert_eq!(engine.tags(), ["a", "b", "c,d"]);
	assert_eq!(engine.serialize(), "a;b;c,d");
}

#[test]
fn test_restrictive_session_with_late_suggestions() {
	let options = TagsInputOptions {
		auto_complete: AutoCompleteOptions {
			source: SuggestionSource::Remote("https://example.test/tags.json".to_string()),
			restrictive: true,
		},
		..TagsInputOptions::default()
	};
	let (callbacks, recorded) = recording_callbacks();
	let mut engine = TagEngine::from_options(&options, callbacks);

	// Nothing is permitted until the fetch resolves.
	assert_eq!(
		engine.add_tag("Red", AddOptions::default()),
		Err(TagError::NotPermitted)
	);

	let payload = r#"[{"label":"Red"},{"label":"Blue"}]"#;
	engine.set_suggestions(tags_input::suggest::SuggestionList::from_json(payload).unwrap());
	engine.add_tag("red", AddOptions::default()).unwrap();
	assert_eq!(
		engine.add_tag("Green", AddOptions::default()),
		Err(TagError::NotPermitted)
	);

	assert_eq!(engine.tags(), ["red"]);
	assert_eq!(
		recorded.lock().unwrap().errors,
		vec!["notpermitted", "notpermitted"]
	);
}

#[test]
fn test_engine_state_renders_expected_chips() {
	let options = TagsInputOptions::default();
	let mut engine = TagEngine::from_options(&options, TagCallbacks::default());
	engine.import_tags("milk,a b");

	let rendered: Vec<String> = engine
		.tags()
		.iter()
		.map(|tag| render::chip_view(&options, tag).into_view().render_to_string())
		.collect();

	assert!(rendered[0].contains(">milk</span>"));
	assert!(rendered[0].contains("title=\"Remove tag 'milk'\""));
	assert!(rendered[1].contains(">a b</span>"));

	// Chip removal keyed by the rendered label text round-trips, including
	// through a percent-encoded form.
	assert_eq!(engine.remove_tag("a%20b"), 1);
	assert_eq!(engine.tags(), ["milk"]);
}

#[rstest]
#[case("milk", Ok(()))]
#[case("  eggs  ", Ok(()))]
#[case("", Err(TagError::EmptyValue))]
#[case("   ", Err(TagError::EmptyValue))]
fn test_manual_entry_validation(#[case] raw: &str, #[case] expected: Result<(), TagError>) {
	let mut engine = TagEngine::from_options(&TagsInputOptions::default(), TagCallbacks::default());
	let result = engine.add_tag(raw, AddOptions::default()).map(|_| ());
	assert_eq!(result, expected);
}

#[test]
fn test_dropdown_selection_duplicate_still_rejected() {
	// A dropdown selection skips the length gate but not store validation.
	let options = TagsInputOptions {
		min_chars: 10,
		auto_complete: AutoCompleteOptions {
			source: SuggestionSource::Inline(vec![Suggestion::new("Red")]),
			restrictive: false,
		},
		..TagsInputOptions::default()
	};
	let mut engine = TagEngine::from_options(&options, TagCallbacks::default());

	// Selection path: no length gate, "Red" commits despite min_chars.
	engine
		.add_tag("Red", AddOptions::default().focus(true))
		.unwrap();
	assert_eq!(
		engine.add_tag("Red", AddOptions::default().focus(true)),
		Err(TagError::NotUnique)
	);

	// The manual path would have been gated before the engine is reached.
	assert!(!options.length_permitted("Red".chars().count()));
}
