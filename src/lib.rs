//! Tags Input - a browser tags-input widget
//!
//! Turns a plain text input into a tag editor: committed values become
//! removable chips while the bound field keeps mirroring the full list as a
//! single delimited string, so existing form handling keeps working unchanged.
//!
//! ## Features
//!
//! - **Chip editing**: type a value, commit with Enter or the delimiter, remove
//!   chips by click or by Backspace on an empty entry field
//! - **Field mirroring**: the original input always holds the delimiter-joined
//!   value and stays submittable
//! - **Validation**: empty, duplicate (case-insensitive), and not-permitted
//!   values are rejected with an invalid marker and an optional error callback
//! - **Autocomplete**: inline or remotely fetched suggestion lists rendered as
//!   an accessible listbox, optionally restricting input to listed values
//! - **Autosizing**: the entry field grows to fit its content via an offscreen
//!   measuring probe
//!
//! ## Architecture
//!
//! The mutation core is DOM-free and unit tested on native targets; only the
//! widget layer talks to the browser:
//!
//! - [`engine`]: validation, tag-store updates, and callback dispatch
//! - [`store`]: the ordered tag list and its serialized form
//! - [`config`]: the option surface (classes, l10n, autocomplete, gating)
//! - [`render`]: markup construction for container, chips, and dropdown
//! - [`view`]: the minimal view tree behind [`render`]
//! - [`input`]: pure keystroke decisions for the entry-field controller
//! - [`suggest`]: suggestion lists and label lookup
//! - [`autosize`]: arming state and the measuring probe
//! - [`registry`]: the one-widget-per-element attachment guard
//! - [`widget`]: the WASM widget binding everything to a live field
//!
//! ## Example
//!
//! ```ignore
//! use tags_input::{TagCallbacks, TagsInput, TagsInputOptions};
//!
//! let field: web_sys::HtmlInputElement = /* query the bound input */;
//! let widget = TagsInput::attach(field, TagsInputOptions::default(), TagCallbacks::default())?;
//! widget.add_tag("milk")?;
//! assert_eq!(widget.value(), "milk");
//! ```

#![warn(missing_docs)]

// Core modules
pub mod autosize;
pub mod callback;
pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod input;
pub mod logging;
pub mod registry;
pub mod render;
pub mod store;
pub mod suggest;
pub mod view;

// The DOM widget itself only exists in the browser.
#[cfg(target_arch = "wasm32")]
pub mod widget;

// Re-export commonly used types
pub use callback::{Callback, ChangeEvent, TagCallbacks};
pub use config::{
	AutoCompleteOptions, ClassNames, FormPosition, Localization, SuggestionSource, TagsInputOptions,
};
pub use dom::{DomError, EventHandle, EventType};
pub use engine::{AddOptions, TagEngine};
pub use error::{AttachError, TagError};
pub use store::TagList;
pub use suggest::{Suggestion, SuggestionList};
#[cfg(target_arch = "wasm32")]
pub use widget::TagsInput;

// The tracing macro is exported via #[macro_export] as tags_input::trace_log!.
