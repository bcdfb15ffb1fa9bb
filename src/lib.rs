//! Progressive enhancement for server-rendered HTML.
//!
//! A [`Controller`] is attached to an element that is already in the page.
//! It exposes descendants with `js-<name>` classes as [`Refs`],
//! keeps an immutable [`State`] and hands each state transition to a [`Renderable`].
//! When the server sends fresh markup for the element, [`Controller::reload`] swaps it in and rebinds.
//!
//! Everything here runs synchronously on the UI thread.

#![doc(html_root_url = "https://docs.rs/dom-upgrade/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod case;
pub mod controller;
pub mod conventions;
pub mod dom;
pub mod error;
pub mod refs;
pub mod registry;
pub mod state;
pub mod upgrade;

pub use crate::{
	controller::{Controller, ControllerRef, Renderable, View},
	conventions::Conventions,
	dom::{replace_element, set_element_state},
	error::{Error, Result},
	refs::{js_elements, Arity, Ref, RefDecl, Refs},
	state::{State, Value},
	upgrade::{upgrade_elements, Upgrader},
};

/// How an element shows up in logs.
///
/// Page content is only logged with the `"dangerous-logging"` feature.
pub(crate) fn describe(element: &web_sys::Element) -> String {
	if cfg!(feature = "dangerous-logging") {
		element.outer_html()
	} else {
		element.tag_name()
	}
}
