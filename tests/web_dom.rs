#![cfg(target_arch = "wasm32")]

use dom_upgrade::{
	dom::set_element_state_with,
	replace_element, set_element_state, Conventions, Error, State, Value,
};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

mod web_setup_;
use web_setup_::{classes, create_dom, document, init_logging};

#[wasm_bindgen_test]
fn adds_state_classes_for_true() {
	let button = create_dom("<button></button>");
	set_element_state(&button, Some(("visible", true))).unwrap();

	assert_eq!(classes(&button), ["is-visible"]);
	button.remove();
}

#[wasm_bindgen_test]
fn removes_state_classes_for_false() {
	let button = create_dom(r#"<button class="is-hidden"></button>"#);
	set_element_state(&button, Some(("hidden", false))).unwrap();

	assert!(classes(&button).is_empty());
	button.remove();
}

#[wasm_bindgen_test]
fn syncs_only_the_supplied_keys() {
	let button = create_dom(r#"<button class="btn is-open"></button>"#);
	set_element_state(&button, vec![("visible", true), ("hidden", false), ("menuOpen", true)]).unwrap();

	assert_eq!(classes(&button), ["btn", "is-open", "is-visible", "is-menu-open"]);
	button.remove();
}

#[wasm_bindgen_test]
fn syncs_from_state_truthiness() {
	let panel = create_dom(r#"<div class="is-saving"></div>"#);
	let state = State::new().merge(vec![("saving", Value::Null), ("editing", Value::from("yes"))]);
	set_element_state(&panel, state.flags()).unwrap();

	assert_eq!(classes(&panel), ["is-editing"]);
	panel.remove();
}

#[wasm_bindgen_test]
fn custom_state_prefix() {
	let panel = create_dom("<div></div>");
	let conventions = Conventions {
		state_prefix: "has-",
		..Conventions::DEFAULT
	};
	set_element_state_with(&conventions, &panel, Some(("errors", true))).unwrap();

	assert_eq!(classes(&panel), ["has-errors"]);
	panel.remove();
}

#[wasm_bindgen_test]
fn invalid_state_keys_are_dom_errors() {
	let panel = create_dom("<div></div>");
	let result = set_element_state(&panel, Some(("two words", true)));

	assert!(matches!(result, Err(Error::Dom(_))));
	panel.remove();
}

#[wasm_bindgen_test]
fn replaces_the_element() {
	let container = create_dom("<div><button></button></div>");
	let button = container.query_selector("button").unwrap().unwrap();
	let replacement = replace_element(&button, r#"<button class="updated"></button>"#).unwrap();

	assert_eq!(replacement.outer_html(), r#"<button class="updated"></button>"#);
	assert_eq!(button.parent_element(), None);
	container.remove();
}

#[wasm_bindgen_test]
fn keeps_the_sibling_order() {
	let container = create_dom(r#"<div><p id="x"></p><span id="target"></span><p id="y"></p></div>"#);
	let target = container.query_selector("#target").unwrap().unwrap();
	let replacement = replace_element(&target, r#"<div class="updated"></div>"#).unwrap();

	let children = container.children();
	assert_eq!(children.length(), 3);
	assert_eq!(children.item(0).unwrap().id(), "x");
	assert_eq!(children.item(1), Some(replacement.clone()));
	assert_eq!(children.item(2).unwrap().id(), "y");
	assert_eq!(replacement.tag_name(), "DIV");
	assert_eq!(classes(&replacement), ["updated"]);
	container.remove();
}

#[wasm_bindgen_test]
fn cannot_replace_a_detached_element() {
	init_logging();
	let element = document().create_element("div").unwrap();

	assert!(matches!(replace_element(&element, "<div></div>"), Err(Error::InvalidOperation)));
}

#[wasm_bindgen_test]
fn empty_replacement_is_reported() {
	let container = create_dom("<div><span></span></div>");
	let span = container.query_selector("span").unwrap().unwrap();

	assert!(matches!(replace_element(&span, ""), Err(Error::MissingReplacement { index: 0 })));
	assert_eq!(container.children().length(), 0);
	container.remove();
}

#[wasm_bindgen_test]
fn empty_replacement_between_siblings_is_reported() {
	let container = create_dom(r#"<div><p id="x"></p><span></span><p id="y"></p></div>"#);
	let span = container.query_selector("span").unwrap().unwrap();

	assert!(matches!(replace_element(&span, ""), Err(Error::MissingReplacement { index: 1 })));
	assert_eq!(container.children().length(), 2);
	assert_eq!(container.children().item(1).unwrap().id(), "y");
	container.remove();
}

#[wasm_bindgen_test]
fn several_replacement_elements_are_reported() {
	let container = create_dom(r#"<div><p id="x"></p><span></span><p id="y"></p></div>"#);
	let span = container.query_selector("span").unwrap().unwrap();

	assert!(matches!(
		replace_element(&span, "<a></a><b></b>"),
		Err(Error::AmbiguousReplacement { index: 1, count: 2 })
	));
	container.remove();
}

#[wasm_bindgen_test]
fn surrounding_text_is_not_an_extra_element() {
	let container = create_dom("<div><span></span></div>");
	let span = container.query_selector("span").unwrap().unwrap();
	let replacement = replace_element(&span, "\n<em>new</em>\n").unwrap();

	assert_eq!(replacement.tag_name(), "EM");
	container.remove();
}
