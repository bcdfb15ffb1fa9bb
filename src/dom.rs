//! Free-standing DOM helpers that controllers build on.

use crate::{
	case::hyphenate,
	conventions::Conventions,
	describe,
	error::{Error, Result},
};
use tracing::{debug, instrument, trace};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Element;

/// Replaces `element` in its parent with the element parsed from `html` and returns the new element.
///
/// `html` must describe exactly one top-level element, including the root tag itself.
/// Writing ***outerHTML*** detaches `element`, so the replacement is re-acquired through its position among the parent's children.
///
/// # Errors
///
/// [`Error::InvalidOperation`] iff `element` has no parent element.
/// [`Error::MissingReplacement`] iff `html` produced no element, [`Error::AmbiguousReplacement`] iff it produced several.
/// In both cases `element` has already been replaced by whatever `html` contained.
#[instrument(skip(element, html), fields(element = %describe(element)))]
pub fn replace_element(element: &Element, html: &str) -> Result<Element> {
	let parent = element.parent_element().ok_or(Error::InvalidOperation)?;

	let siblings = parent.children();
	let index = (0..siblings.length())
		.find(|&i| siblings.item(i).as_ref() == Some(element))
		.expect_throw("dom-upgrade bug: Element not found among its parent's children");
	let before = siblings.length();
	trace!(index, "Replacing element.");

	element.set_outer_html(html);

	let after = siblings.length();
	if after < before {
		return Err(Error::MissingReplacement { index });
	} else if after > before {
		return Err(Error::AmbiguousReplacement {
			index,
			count: (after - before + 1) as usize,
		});
	}

	let replacement = siblings.item(index).expect_throw("dom-upgrade bug: Replacement vanished from its parent's children");
	debug!(replacement = %describe(&replacement), "Replaced element.");
	Ok(replacement)
}

/// Toggles the state class `is-<dashed-key>` on `element` for each supplied key.
///
/// Keys are camelCase and are hyphenated first, so `menuOpen` maps to `is-menu-open`.
/// Classes of keys that aren't supplied are left alone.
///
/// # Errors
///
/// [`Error::Dom`] iff the resulting class name isn't a valid token, for example because the key contains whitespace.
pub fn set_element_state<K: AsRef<str>>(element: &Element, state: impl IntoIterator<Item = (K, bool)>) -> Result<()> {
	set_element_state_with(&Conventions::DEFAULT, element, state)
}

/// Like [`set_element_state`], but with custom [`Conventions`].
///
/// # Errors
///
/// See [`set_element_state`].
pub fn set_element_state_with<K: AsRef<str>>(conventions: &Conventions, element: &Element, state: impl IntoIterator<Item = (K, bool)>) -> Result<()> {
	let class_list = element.class_list();
	for (key, on) in state {
		let class = format!("{}{}", conventions.state_prefix, hyphenate(key.as_ref()));
		trace!(class = class.as_str(), on, "Syncing state class.");
		class_list.toggle_with_force(&class, on)?;
	}
	Ok(())
}
