//! Immutable controller state.
//!
//! A [`State`] is a shared snapshot. [`State::merge`] never touches the snapshot it is called on,
//! so the previous state handed to a renderer stays exactly as it was.

use std::{collections::BTreeMap, iter::FromIterator, rc::Rc};
use web_sys::Element;

/// A single state entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Null,
	Bool(bool),
	Number(f64),
	Text(Rc<str>),
	/// A reference to a live element, for example the current target of a tooltip.
	Element(Element),
}

impl Value {
	/// `false` for [`Null`](`Value::Null`), `false`, `0`, NaN and the empty string, `true` otherwise.
	#[must_use]
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Bool(b) => *b,
			Value::Number(n) => *n != 0.0 && !n.is_nan(),
			Value::Text(text) => !text.is_empty(),
			Value::Element(_) => true,
		}
	}

	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Value::Text(text) => Some(text),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Value::Element(element) => Some(element),
			_ => None,
		}
	}
}

impl Default for Value {
	fn default() -> Self {
		Value::Null
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<f64> for Value {
	fn from(n: f64) -> Self {
		Value::Number(n)
	}
}

impl From<i32> for Value {
	fn from(n: i32) -> Self {
		Value::Number(n.into())
	}
}

impl From<&str> for Value {
	fn from(text: &str) -> Self {
		Value::Text(text.into())
	}
}

impl From<String> for Value {
	fn from(text: String) -> Self {
		Value::Text(text.into())
	}
}

impl From<Element> for Value {
	fn from(element: Element) -> Self {
		Value::Element(element)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

/// An immutable snapshot of a controller's state.
///
/// Cloning is cheap and yields the same snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State(Rc<BTreeMap<String, Value>>);

impl State {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A new snapshot with `changes` applied over a copy of this one.
	///
	/// Keys in `changes` overwrite existing ones, all other keys are kept.
	#[must_use]
	pub fn merge<K, V>(&self, changes: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		let mut merged = BTreeMap::clone(&self.0);
		merged.extend(changes.into_iter().map(|(k, v)| (k.into(), v.into())));
		Self(Rc::new(merged))
	}

	/// Shorthand for merging a single key.
	#[must_use]
	pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.merge(Some((key, value)))
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// Whether `key` is present and truthy.
	#[must_use]
	pub fn is(&self, key: &str) -> bool {
		self.get(key).map_or(false, Value::is_truthy)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Entries ordered by key.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Entries reduced to their truthiness, as accepted by [`set_element_state`](`crate::dom::set_element_state`).
	pub fn flags(&self) -> impl Iterator<Item = (&str, bool)> {
		self.iter().map(|(k, v)| (k, v.is_truthy()))
	}

	/// Whether both handles refer to the very same snapshot.
	#[must_use]
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Rc::ptr_eq(&a.0, &b.0)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for State {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self::new().merge(iter)
	}
}

#[cfg(test)]
mod tests {
	use super::{State, Value};

	#[test]
	fn merge_is_a_keywise_union() {
		let s1: State = vec![("a", Value::from(1)), ("b", Value::from("one"))].into_iter().collect();
		let s2 = s1.merge(vec![("b", Value::from("two")), ("c", Value::from(true))]);

		assert_eq!(s2.get("a"), Some(&Value::Number(1.0)));
		assert_eq!(s2.get("b"), Some(&Value::from("two")));
		assert_eq!(s2.get("c"), Some(&Value::Bool(true)));
		assert_eq!(s2.len(), 3);
	}

	#[test]
	fn merge_leaves_the_previous_snapshot_alone() {
		let s1 = State::new().with("open", true);
		let s2 = s1.with("open", false);

		assert!(s1.is("open"));
		assert!(!s2.is("open"));
		assert!(!State::ptr_eq(&s1, &s2));
	}

	#[test]
	fn empty_merge_still_makes_a_new_snapshot() {
		let s1 = State::new().with("a", 1);
		let s2 = s1.merge(Vec::<(String, Value)>::new());
		assert_eq!(s1, s2);
		assert!(!State::ptr_eq(&s1, &s2));
	}

	#[test]
	fn truthiness() {
		assert!(!Value::Null.is_truthy());
		assert!(!Value::from(0).is_truthy());
		assert!(!Value::from(f64::NAN).is_truthy());
		assert!(!Value::from("").is_truthy());
		assert!(!Value::from(None::<bool>).is_truthy());
		assert!(Value::from(2.5).is_truthy());
		assert!(Value::from("x").is_truthy());
	}

	#[test]
	fn flags_are_ordered_by_key() {
		let state = State::new().merge(vec![("visible", Value::from(true)), ("hidden", Value::from(0))]);
		assert_eq!(state.flags().collect::<Vec<_>>(), vec![("hidden", false), ("visible", true)]);
	}
}
