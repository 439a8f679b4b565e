//! Keystroke decisions for the entry-field controller.
//!
//! Pure functions over `KeyboardEvent.key` values so the input state machine
//! can be tested without a browser. The widget layer owns the corresponding
//! DOM effects.

/// Whether a keypress commits the current entry.
///
/// The commit keys are Enter and the configured delimiter character itself.
pub fn is_commit_key(key: &str, delimiter: char) -> bool {
	if key == "Enter" {
		return true;
	}
	let mut chars = key.chars();
	matches!((chars.next(), chars.next()), (Some(c), None) if c == delimiter)
}

/// Whether a keydown should delete the last chip.
///
/// Backspace only acts when the entry field is empty and the option is
/// enabled; otherwise it edits the field as usual.
pub fn is_remove_last_key(key: &str, field_value: &str, remove_with_backspace: bool) -> bool {
	remove_with_backspace && key == "Backspace" && field_value.is_empty()
}

/// Per-item dropdown visibility for one rendered label.
pub fn suggestion_visible(item_text: &str, query: &str) -> bool {
	item_text.to_lowercase().contains(&query.to_lowercase())
}
