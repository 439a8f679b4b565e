//! Suggestion list model for the autocomplete controller.
//!
//! A suggestion list is an ordered sequence of `{label}` items, supplied
//! inline or fetched once from a URL as a JSON array. The list is immutable
//! after load; the dropdown filters by toggling item visibility, never by
//! mutating the list.

use serde::Deserialize;

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
	/// The display label, also the value committed when selected.
	pub label: String,
}

impl Suggestion {
	/// Creates a suggestion from a label.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
		}
	}
}

/// An ordered, immutable list of suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionList {
	items: Vec<Suggestion>,
}

impl SuggestionList {
	/// Wraps an inline list of suggestions.
	pub fn new(items: Vec<Suggestion>) -> Self {
		Self { items }
	}

	/// Parses a fetched JSON payload of the form `[{"label": "..."}, ...]`.
	pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
		let items = serde_json::from_str(payload)?;
		Ok(Self { items })
	}

	/// The suggestions in order.
	pub fn items(&self) -> &[Suggestion] {
		&self.items
	}

	/// Number of suggestions.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list has no suggestions.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Case-insensitive exact match of `value` against the labels.
	///
	/// Used by the restrictive-autocomplete check at add time.
	pub fn contains_label_ignore_case(&self, value: &str) -> bool {
		let needle = value.to_lowercase();
		self.items
			.iter()
			.any(|item| item.label.to_lowercase() == needle)
	}
}
