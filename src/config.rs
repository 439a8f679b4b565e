//! Widget configuration.
//!
//! All options are plain structs with per-struct `Default` impls. Unspecified
//! keys fall back to their defaults through struct-update syntax, and the
//! nested structures (class names, localized strings, autocomplete settings)
//! merge key-by-key the same way:
//!
//! ```
//! use tags_input::config::{ClassNames, TagsInputOptions};
//!
//! let options = TagsInputOptions {
//!     delimiter: ';',
//!     classes: ClassNames {
//!         container: "my-tags".to_string(),
//!         ..ClassNames::default()
//!     },
//!     ..TagsInputOptions::default()
//! };
//! assert_eq!(options.classes.tag, "tag-input__tag");
//! ```
//!
//! Options are immutable once the widget is attached.

use crate::suggest::Suggestion;

/// CSS class hooks for each rendered part of the widget.
///
/// External stylesheets depend on these names staying attached to elements
/// with the same structural role, so they are configurable but stable by
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
	/// Outermost widget container.
	pub container: String,
	/// Chip list container.
	pub tag_container: String,
	/// One chip.
	pub tag: String,
	/// Chip label span.
	pub tag_label: String,
	/// Chip remove control.
	pub tag_remove: String,
	/// Entry form wrapper.
	pub form: String,
	/// Visually hidden label for the entry field.
	pub form_label: String,
	/// Free-text entry field.
	pub form_input: String,
	/// Invalid-state marker on the entry field.
	pub form_input_invalid: String,
	/// Autocomplete dropdown list.
	pub auto_complete: String,
	/// One autocomplete dropdown item.
	pub auto_complete_item: String,
}

impl Default for ClassNames {
	fn default() -> Self {
		Self {
			container: "tag-input".to_string(),
			tag_container: "tag-input__tag-list".to_string(),
			tag: "tag-input__tag".to_string(),
			tag_label: "tag-input__label".to_string(),
			tag_remove: "tag-input__remove".to_string(),
			form: "tag-input__form".to_string(),
			form_label: "screenreader".to_string(),
			form_input: "tag-input__input".to_string(),
			form_input_invalid: "tag-input__input--invalid".to_string(),
			auto_complete: "tag-input__autocomplete".to_string(),
			auto_complete_item: "tag-input__autocomplete-item".to_string(),
		}
	}
}

/// Localized strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
	/// Placeholder and accessible label for the entry field.
	pub default_text: String,
	/// Visible glyph of the chip remove control. `{tag}` is substituted.
	pub remove_label: String,
	/// Title and accessible label template of the remove control. `{tag}` is
	/// substituted with the chip's tag text.
	pub remove_title: String,
}

impl Default for Localization {
	fn default() -> Self {
		Self {
			default_text: "Add a tag".to_string(),
			remove_label: "\u{d7}".to_string(),
			remove_title: "Remove tag '{tag}'".to_string(),
		}
	}
}

impl Localization {
	/// Substitutes `tag` into the remove-title template.
	pub fn remove_title_for(&self, tag: &str) -> String {
		substitute(&self.remove_title, tag)
	}

	/// Substitutes `tag` into the remove-label template.
	pub fn remove_label_for(&self, tag: &str) -> String {
		substitute(&self.remove_label, tag)
	}
}

/// Replaces the first `{tag}` placeholder in `template` with `tag`.
fn substitute(template: &str, tag: &str) -> String {
	template.replacen("{tag}", tag, 1)
}

/// Where the entry form sits relative to the chip list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPosition {
	/// Form before the chip list.
	Above,
	/// Form after the chip list.
	#[default]
	Below,
}

/// Where the autocomplete suggestions come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuggestionSource {
	/// Autocomplete disabled.
	#[default]
	None,
	/// Inline suggestion list, available at attach time.
	Inline(Vec<Suggestion>),
	/// URL returning a JSON array of `{label}` objects, fetched once with a
	/// plain GET at attach time.
	Remote(String),
}

/// Autocomplete settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutoCompleteOptions {
	/// Suggestion source.
	pub source: SuggestionSource,
	/// When set, only values present in the suggestion list may be committed.
	pub restrictive: bool,
}

/// The full option surface of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsInputOptions {
	/// CSS class hooks.
	pub classes: ClassNames,
	/// Localized strings.
	pub l10n: Localization,
	/// Entry form position relative to the chip list.
	pub form_position: FormPosition,
	/// Whether the entry form is rendered and wired at all.
	pub interactive: bool,
	/// Minimum character count for a manual commit.
	pub min_chars: usize,
	/// Maximum character count for a manual commit, if any.
	pub max_chars: Option<usize>,
	/// Autocomplete settings.
	pub auto_complete: AutoCompleteOptions,
	/// Whether to hide the original bound field.
	pub hide: bool,
	/// Character separating tags in the serialized value; also the commit key.
	pub delimiter: char,
	/// Case-insensitive uniqueness enforcement on add.
	pub unique: bool,
	/// Backspace on an empty entry field removes the last chip.
	pub remove_with_backspace: bool,
	/// Grow the entry field to fit its content.
	pub autosize: bool,
	/// Extra pixels added to the measured content width when autosizing.
	pub comfort_zone: u32,
	/// Verbose tracing of every tag-store operation.
	pub debug: bool,
}

impl Default for TagsInputOptions {
	fn default() -> Self {
		Self {
			classes: ClassNames::default(),
			l10n: Localization::default(),
			form_position: FormPosition::default(),
			interactive: true,
			min_chars: 0,
			max_chars: None,
			auto_complete: AutoCompleteOptions::default(),
			hide: true,
			delimiter: ',',
			unique: true,
			remove_with_backspace: true,
			autosize: true,
			comfort_zone: 20,
			debug: false,
		}
	}
}

impl TagsInputOptions {
	/// Whether a manual entry of `len` characters passes the min/max gate.
	pub fn length_permitted(&self, len: usize) -> bool {
		self.min_chars <= len && self.max_chars.is_none_or(|max| len <= max)
	}
}
