//! Discovery of `js-`-prefixed descendants.
//!
//! Each class `js-<dashed-name>` on the root or any of its descendants makes that element available under the ref name `<dashedName>`.
//! The first match for a name is stored as [`Ref::One`].
//! A second match turns the entry into [`Ref::Many`], which collects all matches in document order.
//!
//! Code that expects a single element will observe [`Ref::Many`] as soon as the markup contains a second match.
//! [`Refs::validate`] turns that into an explicit [`Error::RefArity`] for declared names.

use crate::{
	case::unhyphenate,
	conventions::Conventions,
	describe,
	error::{Error, Result},
};
use core::slice;
use hashbrown::{hash_map::Entry, HashMap};
use tracing::{debug, instrument, trace};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Element;

/// The element(s) found under one ref name.
#[derive(Debug, Clone, PartialEq)]
pub enum Ref {
	One(Element),
	/// Two or more elements, in document order.
	Many(Vec<Element>),
}

#[allow(clippy::len_without_is_empty)] // Never empty.
impl Ref {
	/// The first (or only) match.
	#[must_use]
	pub fn first(&self) -> &Element {
		match self {
			Ref::One(element) => element,
			Ref::Many(elements) => elements.first().expect_throw("dom-upgrade bug: Empty `Ref::Many`"),
		}
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Element] {
		match self {
			Ref::One(element) => slice::from_ref(element),
			Ref::Many(elements) => elements,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn push(&mut self, element: Element) {
		match self {
			Ref::One(first) => *self = Ref::Many(vec![first.clone(), element]),
			Ref::Many(elements) => elements.push(element),
		}
	}
}

/// How many elements a declared ref name may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
	/// Zero or one element.
	One,
	/// Any number of elements.
	Many,
}

/// A ref name that a controller expects, with its [`Arity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefDecl {
	pub name: &'static str,
	pub arity: Arity,
}

impl RefDecl {
	#[must_use]
	pub const fn one(name: &'static str) -> Self {
		Self { name, arity: Arity::One }
	}

	#[must_use]
	pub const fn many(name: &'static str) -> Self {
		Self { name, arity: Arity::Many }
	}
}

/// Mapping from ref name to the matching element(s).
///
/// Derived from the DOM; rebuilt rather than updated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Refs(HashMap<String, Ref>);

impl Refs {
	/// Looks up `name`. Names without any match are [`None`], never an empty [`Ref`].
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Ref> {
		self.0.get(name)
	}

	/// Looks up a name that should match at most one element.
	///
	/// # Errors
	///
	/// Iff `name` matched more than one element.
	pub fn one(&self, name: &str) -> Result<Option<&Element>> {
		match self.0.get(name) {
			None => Ok(None),
			Some(Ref::One(element)) => Ok(Some(element)),
			Some(Ref::Many(elements)) => Err(Error::RefArity {
				name: name.to_owned(),
				found: elements.len(),
			}),
		}
	}

	/// All matches for `name` in document order, empty if there are none.
	#[must_use]
	pub fn all(&self, name: &str) -> &[Element] {
		self.0.get(name).map_or(&[][..], Ref::as_slice)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Ref)> {
		self.0.iter().map(|(name, r#ref)| (name.as_str(), r#ref))
	}

	/// Checks this mapping against a controller's declared refs.
	///
	/// Undeclared names are ignored and missing names are fine.
	///
	/// # Errors
	///
	/// [`Error::RefArity`] for the first [`Arity::One`] declaration that matched several elements.
	pub fn validate(&self, declarations: &[RefDecl]) -> Result<()> {
		for declaration in declarations.iter().filter(|d| d.arity == Arity::One) {
			self.one(declaration.name)?;
		}
		Ok(())
	}

	fn insert(&mut self, name: String, element: Element) {
		match self.0.entry(name) {
			Entry::Vacant(vacant) => {
				trace!(ref_name = vacant.key().as_str(), element = %describe(&element), "Found ref.");
				vacant.insert(Ref::One(element));
			}
			Entry::Occupied(mut occupied) => {
				if let Ref::One(_) = occupied.get() {
					debug!(ref_name = occupied.key().as_str(), "Ref matched more than one element and is now a sequence.");
				}
				occupied.get_mut().push(element);
			}
		}
	}
}

/// Scans `root` and all of its descendants for `js-` classes.
#[must_use]
pub fn js_elements(root: &Element) -> Refs {
	js_elements_with(&Conventions::DEFAULT, root)
}

/// Like [`js_elements`], but with custom [`Conventions`].
#[must_use]
#[instrument(skip(root), fields(root = %describe(root)))]
pub fn js_elements_with(conventions: &Conventions, root: &Element) -> Refs {
	let mut refs = Refs::default();
	scan(conventions.ref_prefix, root, &mut refs);
	trace!("Found {} ref name(s).", refs.len());
	refs
}

/// Depth-first and pre-order, so insertion order is document order.
fn scan(prefix: &str, element: &Element, refs: &mut Refs) {
	let class_list = element.class_list();
	for i in 0..class_list.length() {
		let class = class_list.item(i).expect_throw("dom-upgrade bug: `DOMTokenList` shrank during iteration");
		if let Some(dashed) = class.strip_prefix(prefix) {
			refs.insert(unhyphenate(dashed), element.clone());
		}
	}

	let children = element.children();
	for i in 0..children.length() {
		let child = children.item(i).expect_throw("dom-upgrade bug: `HTMLCollection` shrank during iteration");
		scan(prefix, &child, refs);
	}
}
