#![cfg(target_arch = "wasm32")]
#![allow(dead_code)]

use std::sync::Once;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlBodyElement};

static LOG_INIT: Once = Once::new();

pub fn init_logging() {
	LOG_INIT.call_once(tracing_wasm::set_as_global_default);
}

pub fn document() -> Document {
	window().unwrap().document().unwrap()
}

pub fn body() -> HtmlBodyElement {
	document().body().unwrap().dyn_into::<HtmlBodyElement>().unwrap()
}

/// Parses `html` and appends its first element to the document body.
pub fn create_dom(html: &str) -> Element {
	init_logging();

	let container = document().create_element("div").unwrap();
	container.set_inner_html(html);
	let child = container.first_element_child().unwrap();
	body().append_child(&child).unwrap();
	child
}

/// Classes of `element` in order.
pub fn classes(element: &Element) -> Vec<String> {
	let class_list = element.class_list();
	(0..class_list.length()).map(|i| class_list.item(i).unwrap()).collect()
}
