//! The DOM-free mutation core: validation, tag-store updates, and callback
//! dispatch.
//!
//! The widget layer forwards every user interaction here and then mirrors the
//! resulting state into the DOM (field value, chip list, invalid marker). The
//! engine itself never touches the DOM, which keeps validation and callback
//! behavior testable on native targets.

use std::borrow::Cow;

use crate::callback::{ChangeEvent, TagCallbacks};
use crate::config::{SuggestionSource, TagsInputOptions};
use crate::error::TagError;
use crate::store::TagList;
use crate::suggest::SuggestionList;
use crate::trace_log;

/// Per-call options for [`TagEngine::add_tag`].
///
/// Defaults mirror the observed behavior of manual commits: no focus request,
/// callbacks not fired, engine-level uniqueness, full validation.
#[derive(Debug, Clone, Copy)]
pub struct AddOptions {
	/// Whether the entry field should be focused (rather than blurred) after a
	/// successful add. Consumed by the widget layer.
	pub focus: bool,
	/// Whether `on_add_tag` / `on_change` fire on success.
	pub fire_callbacks: bool,
	/// Overrides the engine's uniqueness setting for this call.
	pub unique: Option<bool>,
	/// Whether the empty/unique/permitted checks run at all. Disabled for
	/// import paths, which silently drop invalid segments.
	pub value_checks: bool,
}

impl Default for AddOptions {
	fn default() -> Self {
		Self {
			focus: false,
			fire_callbacks: false,
			unique: None,
			value_checks: true,
		}
	}
}

impl AddOptions {
	/// Requests entry-field focus after a successful add.
	pub fn focus(mut self, focus: bool) -> Self {
		self.focus = focus;
		self
	}

	/// Requests `on_add_tag` / `on_change` dispatch on success.
	pub fn fire_callbacks(mut self, fire: bool) -> Self {
		self.fire_callbacks = fire;
		self
	}

	/// Overrides the uniqueness check for this call.
	pub fn unique(mut self, unique: bool) -> Self {
		self.unique = Some(unique);
		self
	}

	/// Enables or disables validation for this call.
	pub fn value_checks(mut self, checks: bool) -> Self {
		self.value_checks = checks;
		self
	}
}

/// Percent-decodes a removal target.
///
/// A payload that fails to decode is used literally, so plain values with a
/// stray `%` still remove their exact matches.
pub fn decode_tag(value: &str) -> String {
	urlencoding::decode(value)
		.map(Cow::into_owned)
		.unwrap_or_else(|_| value.to_string())
}

/// Validation, mutation, and callback dispatch around the tag list.
#[derive(Debug)]
pub struct TagEngine {
	list: TagList,
	unique: bool,
	restrictive: bool,
	suggestions: Option<SuggestionList>,
	callbacks: TagCallbacks,
	debug: bool,
}

impl TagEngine {
	/// Builds an engine from the widget options and callback set.
	///
	/// Inline suggestions are available immediately; remote ones arrive later
	/// through [`set_suggestions`](Self::set_suggestions).
	pub fn from_options(options: &TagsInputOptions, callbacks: TagCallbacks) -> Self {
		let suggestions = match &options.auto_complete.source {
			SuggestionSource::Inline(items) => Some(SuggestionList::new(items.clone())),
			SuggestionSource::None | SuggestionSource::Remote(_) => None,
		};
		Self {
			list: TagList::new(options.delimiter),
			unique: options.unique,
			restrictive: options.auto_complete.restrictive,
			suggestions,
			callbacks,
			debug: options.debug,
		}
	}

	/// Installs the suggestion list once a remote fetch resolves.
	pub fn set_suggestions(&mut self, suggestions: SuggestionList) {
		self.suggestions = Some(suggestions);
	}

	/// The loaded suggestion list, if any.
	pub fn suggestions(&self) -> Option<&SuggestionList> {
		self.suggestions.as_ref()
	}

	/// The committed tags in insertion order.
	pub fn tags(&self) -> &[String] {
		self.list.tags()
	}

	/// The most recently committed tag, if any.
	pub fn last_tag(&self) -> Option<&str> {
		self.list.last()
	}

	/// Number of committed tags.
	pub fn len(&self) -> usize {
		self.list.len()
	}

	/// Whether no tags are committed.
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	/// The configured delimiter.
	pub fn delimiter(&self) -> char {
		self.list.delimiter()
	}

	/// The delimiter-joined field value.
	pub fn serialize(&self) -> String {
		self.list.serialize()
	}

	/// Case-insensitive membership test against the current list.
	pub fn tag_exists(&self, value: &str) -> bool {
		trace_log!(self.debug, "tag_exists {:?}", value);
		self.list.contains_ignore_case(value)
	}

	/// Validates and appends one tag.
	///
	/// On success returns the trimmed tag that was committed; the widget layer
	/// is responsible for re-rendering, clearing the entry field, and honoring
	/// `options.focus`. On rejection fires `on_error` when validation was
	/// requested and returns the error unchanged.
	pub fn add_tag(&mut self, raw: &str, options: AddOptions) -> Result<String, TagError> {
		trace_log!(self.debug, "add_tag {:?} {:?}", raw, options);

		let value = raw.trim();
		if value.is_empty() {
			if options.value_checks {
				self.dispatch_error(TagError::EmptyValue);
			}
			return Err(TagError::EmptyValue);
		}

		let unique = options.unique.unwrap_or(self.unique);
		if options.value_checks && unique && self.list.contains_ignore_case(value) {
			self.dispatch_error(TagError::NotUnique);
			return Err(TagError::NotUnique);
		}

		if options.value_checks && self.restrictive {
			// Until a remote list arrives there are no permitted values, so
			// everything is rejected.
			let permitted = self
				.suggestions
				.as_ref()
				.is_some_and(|list| list.contains_label_ignore_case(value));
			if !permitted {
				self.dispatch_error(TagError::NotPermitted);
				return Err(TagError::NotPermitted);
			}
		}

		let value = value.to_string();
		self.list.push(value.clone());

		if options.fire_callbacks {
			if let Some(cb) = &self.callbacks.on_add_tag {
				cb.call(value.clone());
			}
			if let Some(cb) = &self.callbacks.on_change {
				cb.call(ChangeEvent {
					value: self.list.serialize(),
					last_tag: value.clone(),
				});
			}
		}

		Ok(value)
	}

	/// Removes every tag exactly equal to the percent-decoded `value`.
	///
	/// Removal compares literal equality, unlike the case-insensitive add-time
	/// checks. The list is rebuilt by re-importing the surviving segments,
	/// then `on_remove_tag` fires with the decoded value whether or not
	/// anything matched.
	///
	/// Returns how many tags were removed.
	pub fn remove_tag(&mut self, value: &str) -> usize {
		trace_log!(self.debug, "remove_tag {:?}", value);

		let decoded = decode_tag(value);

		let before = self.list.len();
		let survivors: Vec<String> = self
			.list
			.tags()
			.iter()
			.filter(|tag| **tag != decoded)
			.cloned()
			.collect();
		let delimiter = self.list.delimiter().to_string();
		self.import_tags(&survivors.join(&delimiter));
		let removed = before - self.list.len();

		if let Some(cb) = &self.callbacks.on_remove_tag {
			cb.call(decoded);
		}

		removed
	}

	/// Clears the list and re-imports a delimited string, one segment at a
	/// time with validation disabled.
	///
	/// Empty segments produced by consecutive delimiters fail the same
	/// empty-value check as manual entry, but silently because validation is
	/// off.
	pub fn import_tags(&mut self, raw: &str) {
		trace_log!(self.debug, "import_tags {:?}", raw);

		self.list.clear();
		let delimiter = self.list.delimiter();
		let segments: Vec<String> = raw.split(delimiter).map(str::to_string).collect();
		for segment in segments {
			let _ = self.add_tag(&segment, AddOptions::default().value_checks(false));
		}
	}

	fn dispatch_error(&self, error: TagError) {
		if let Some(cb) = &self.callbacks.on_error {
			cb.call(error);
		}
	}
}
