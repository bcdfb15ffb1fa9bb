//! Conversions between the dash-case used in class names and the camelCase used for ref names and state keys.

/// Converts `dash-case` to `camelCase`: `form-input` becomes `formInput`.
///
/// Only a dash followed by a lowercase ASCII letter is folded, so `a-1` keeps its dash and `a--b` becomes `a-B`.
#[must_use]
pub fn unhyphenate(dashed: &str) -> String {
	let mut identifier = String::with_capacity(dashed.len());
	let mut chars = dashed.chars().peekable();
	while let Some(c) = chars.next() {
		match (c, chars.peek()) {
			('-', Some(next)) if next.is_ascii_lowercase() => {
				identifier.push(next.to_ascii_uppercase());
				chars.next();
			}
			_ => identifier.push(c),
		}
	}
	identifier
}

/// Converts `camelCase` to `dash-case`: `isVisible` becomes `is-visible`.
///
/// A leading uppercase letter gets a dash as well, so `Visible` becomes `-visible` and its state class `is--visible`.
#[must_use]
pub fn hyphenate(identifier: &str) -> String {
	let mut dashed = String::with_capacity(identifier.len() + 4);
	for c in identifier.chars() {
		if c.is_ascii_uppercase() {
			dashed.push('-');
			dashed.push(c.to_ascii_lowercase());
		} else {
			dashed.push(c);
		}
	}
	dashed
}
