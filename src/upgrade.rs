use crate::{describe, error::Result};
use tracing::{error, instrument, trace};
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::Element;

/// Attaches controllers to each element under a root matching a CSS selector.
pub type Upgrader<'a> = (&'a str, &'a dyn Fn(Element) -> Result<()>);

/// For each `(selector, upgrade)` pair, calls `upgrade` on every descendant of `root` that matches `selector`, in document order.
///
/// A failing `upgrade` is logged and skipped so that one broken widget doesn't prevent the rest of the page from upgrading.
/// Returns how many elements were upgraded successfully.
///
/// # Errors
///
/// [`Error::Dom`](`crate::Error::Dom`) iff a selector is invalid.
#[instrument(skip(root, upgraders), fields(root = %describe(root), upgraders = upgraders.len()))]
pub fn upgrade_elements(root: &Element, upgraders: &[Upgrader<'_>]) -> Result<usize> {
	let mut upgraded = 0;
	for &(selector, upgrade) in upgraders {
		let matches = root.query_selector_all(selector)?;
		trace!(selector, count = matches.length(), "Upgrading elements.");
		for i in 0..matches.length() {
			let element: Element = matches
				.item(i)
				.expect_throw("dom-upgrade bug: `NodeList` shrank during iteration")
				.dyn_into()
				.expect_throw("dom-upgrade bug: Selector matched a non-element node");
			let description = describe(&element);
			match upgrade(element) {
				Ok(()) => upgraded += 1,
				Err(e) => error!(selector, element = %description, "Failed to upgrade element: {}", e),
			}
		}
	}
	Ok(upgraded)
}
