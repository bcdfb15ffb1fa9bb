/// Class name prefixes that connect markup to controllers.
///
/// The defaults match the usual server templates: `js-` marks refs, `is-` marks state classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conventions {
	/// Prefix of classes that name a ref, for example `js-` in `js-form-input`.
	pub ref_prefix: &'static str,
	/// Prefix of presentation classes toggled from boolean state, for example `is-` in `is-open`.
	pub state_prefix: &'static str,
}

impl Conventions {
	pub const DEFAULT: Self = Self {
		ref_prefix: "js-",
		state_prefix: "is-",
	};
}

impl Default for Conventions {
	fn default() -> Self {
		Self::DEFAULT
	}
}
