//! Error types for the tags input widget.
//!
//! Validation failures (`TagError`) are surfaced to user code only through the
//! `on_error` callback slot; they are never thrown past the widget API.
//! Lifecycle failures (`AttachError`) are ordinary `Result` errors returned
//! from the widget's `attach` operation.

use thiserror::Error;

use crate::dom::DomError;

/// A rejected tag mutation.
///
/// Every variant maps to one of the widget's user-facing error kinds and sets
/// the invalid-state class on the entry field when validation was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TagError {
	/// The value was empty after trimming.
	#[error("tag value was empty after trimming")]
	EmptyValue,

	/// The value is already present in the tag list (case-insensitive).
	#[error("tag is already present")]
	NotUnique,

	/// Restrictive autocomplete is active and the value matches no suggestion.
	#[error("tag is not one of the permitted suggestions")]
	NotPermitted,
}

impl TagError {
	/// The stable string identifier for this error kind.
	///
	/// These identifiers form part of the callback contract and must not
	/// change between releases.
	pub fn kind(&self) -> &'static str {
		match self {
			TagError::EmptyValue => "emptyvalue",
			TagError::NotUnique => "notunique",
			TagError::NotPermitted => "notpermitted",
		}
	}
}

/// Errors raised while attaching a widget to a bound element.
#[derive(Debug, Error)]
pub enum AttachError {
	/// A widget is already attached to this element.
	#[error("a tags input is already attached to this element")]
	AlreadyAttached,

	/// The bound element has no parent to mount the widget next to.
	#[error("bound element is not part of the document")]
	Detached,

	/// A DOM operation failed while building the widget markup.
	#[error(transparent)]
	Dom(#[from] DomError),
}
