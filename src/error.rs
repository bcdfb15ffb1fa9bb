use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
	/// Raised by [`replace_element`](`crate::dom::replace_element`) for detached elements.
	#[error("Cannot replace an element without a parent")]
	InvalidOperation,

	#[error("Replacement HTML did not produce an element at child index {index}")]
	MissingReplacement { index: u32 },

	#[error("Replacement HTML produced {count} elements at child index {index} instead of one")]
	AmbiguousReplacement { index: u32, count: usize },

	/// A ref declared with [`Arity::One`](`crate::refs::Arity::One`) matched several elements.
	#[error("Ref `{name}` is declared as single but matched {found} elements")]
	RefArity { name: String, found: usize },

	#[error("DOM operation failed: {0:?}")]
	Dom(JsValue),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		Self::Dom(value)
	}
}
