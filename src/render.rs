//! Markup construction for the widget.
//!
//! Every rendered part is built here as a [`View`] so the DOM contract (class
//! hooks, ARIA attributes, label substitution) can be asserted natively via
//! `render_to_string`. Rendering is full-replace: the widget clears the chip
//! container and regenerates every chip after each mutation.

use crate::config::{FormPosition, TagsInputOptions};
use crate::suggest::SuggestionList;
use crate::view::ElementView;

/// The widget container: chip list plus, when interactive, the entry form
/// above or below it.
///
/// Event handlers are attached by the widget layer after mounting; this
/// function only shapes the markup.
pub fn container_view(options: &TagsInputOptions, widget_id: &str) -> ElementView {
	let classes = &options.classes;
	let tag_container = ElementView::new("div").attr("class", classes.tag_container.clone());

	let container = ElementView::new("div").attr("class", classes.container.clone());
	if !options.interactive {
		return container.child(tag_container);
	}

	let form = form_view(options, widget_id);
	match options.form_position {
		FormPosition::Above => container.child(form).child(tag_container),
		FormPosition::Below => container.child(tag_container).child(form),
	}
}

/// The entry form: visually hidden label plus the free-text field.
fn form_view(options: &TagsInputOptions, widget_id: &str) -> ElementView {
	let classes = &options.classes;
	ElementView::new("div")
		.attr("class", classes.form.clone())
		.child(
			ElementView::new("label")
				.attr("class", classes.form_label.clone())
				.attr("for", widget_id)
				.text(options.l10n.default_text.clone()),
		)
		.child(
			ElementView::new("input")
				.attr("class", classes.form_input.clone())
				.attr("placeholder", options.l10n.default_text.clone())
				.attr("type", "text")
				.attr("id", widget_id),
		)
}

/// One chip: label span plus remove control.
///
/// The remove control's title and accessible label substitute the tag into
/// the configured template. The widget layer attaches the click handler.
pub fn chip_view(options: &TagsInputOptions, tag: &str) -> ElementView {
	let classes = &options.classes;
	let title = options.l10n.remove_title_for(tag);
	ElementView::new("span")
		.attr("class", classes.tag.clone())
		.child(
			ElementView::new("span")
				.attr("class", classes.tag_label.clone())
				.text(tag),
		)
		.child(
			ElementView::new("button")
				.attr("class", classes.tag_remove.clone())
				.attr("type", "button")
				.attr("title", title.clone())
				.attr("aria-label", title)
				.text(options.l10n.remove_label_for(tag)),
		)
}

/// The autocomplete dropdown: a listbox of focusable option items.
pub fn autocomplete_view(
	options: &TagsInputOptions,
	widget_id: &str,
	suggestions: &SuggestionList,
) -> ElementView {
	let classes = &options.classes;
	let mut list = ElementView::new("ul")
		.attr("class", classes.auto_complete.clone())
		.attr("aria-live", "polite")
		.attr("id", format!("{widget_id}-autocomplete"))
		.attr("role", "listbox");
	for suggestion in suggestions.items() {
		list = list.child(
			ElementView::new("li")
				.attr("class", classes.auto_complete_item.clone())
				.attr("tabindex", "0")
				.attr("role", "option")
				.text(suggestion.label.clone()),
		);
	}
	list
}
