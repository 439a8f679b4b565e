//! The tag list: ordered tags plus their delimited serialization.
//!
//! The serialized string written to the bound field is derived from this list
//! and nothing else; the rendered chip list and the serialized value always
//! contain the same tags in the same order immediately after any mutation.

/// An ordered list of committed tags bound to one delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList {
	tags: Vec<String>,
	delimiter: char,
}

impl TagList {
	/// Creates an empty list using `delimiter` for serialization.
	pub fn new(delimiter: char) -> Self {
		Self {
			tags: Vec::new(),
			delimiter,
		}
	}

	/// The configured delimiter.
	pub fn delimiter(&self) -> char {
		self.delimiter
	}

	/// The tags in insertion order.
	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	/// The most recently committed tag, if any.
	pub fn last(&self) -> Option<&str> {
		self.tags.last().map(String::as_str)
	}

	/// Number of committed tags.
	pub fn len(&self) -> usize {
		self.tags.len()
	}

	/// Whether no tags are committed.
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}

	/// Appends a tag. Validation happens upstream in the engine.
	pub fn push(&mut self, tag: String) {
		self.tags.push(tag);
	}

	/// Drops every tag.
	pub fn clear(&mut self) {
		self.tags.clear();
	}

	/// Case-insensitive membership test.
	pub fn contains_ignore_case(&self, value: &str) -> bool {
		let needle = value.to_lowercase();
		self.tags.iter().any(|tag| tag.to_lowercase() == needle)
	}

	/// The delimiter-joined field value.
	pub fn serialize(&self) -> String {
		self.tags.join(&self.delimiter.to_string())
	}
}
