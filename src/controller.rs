use crate::{
	conventions::Conventions,
	describe,
	dom::replace_element,
	error::Result,
	refs::{js_elements_with, RefDecl, Refs},
	registry,
	state::{State, Value},
};
use core::any::{type_name, Any};
use std::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
	rc::{Rc, Weak},
};
use tracing::{debug, instrument, trace};
use web_sys::Element;

/// What a [`Renderable`] may touch while rendering.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
	pub element: &'a Element,
	pub refs: &'a Refs,
}

/// The rendering half of a controller.
///
/// Implementations own all DOM mutation for their element. They are handed fully merged, immutable states only.
pub trait Renderable: 'static {
	/// Refs this renderer relies on. Checked whenever refs are (re)scanned.
	const REFS: &'static [RefDecl] = &[];

	/// Class name prefixes for ref discovery.
	const CONVENTIONS: Conventions = Conventions::DEFAULT;

	/// Brings [`View::element`] in line with `state`.
	///
	/// `previous` is the state before the change, or the same snapshot as `state` for [`Controller::force_update`].
	fn render(&mut self, view: View<'_>, state: &State, previous: &State);
}

/// Shared handle to a [`Controller`], as needed by event handlers.
pub type ControllerRef<R> = Rc<RefCell<Controller<R>>>;

/// Upgrades an element with refs, state and a [`Renderable`].
///
/// # Lifecycle
///
/// [`Controller::attach`] registers the controller on its element.
/// [`Controller::reload`] clears the old element's controller list and rebinds to the replacement element,
/// which does not get a registry entry. [`Controller::is_registered`] reports which of the two is the case.
pub struct Controller<R: Renderable> {
	element: Element,
	refs: Refs,
	state: State,
	renderer: R,
	handle: Weak<dyn Any>,
}

impl<R: Renderable> Debug for Controller<R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Controller")
			.field("renderer", &type_name::<R>())
			.field("element", &self.element)
			.field("refs", &self.refs)
			.field("state", &self.state)
			.finish()
	}
}

impl<R: Renderable> Drop for Controller<R> {
	fn drop(&mut self) {
		registry::prune(&self.element);
	}
}

impl<R: Renderable> Controller<R> {
	/// Scans `element` for refs and adds the new controller to its controller list.
	///
	/// The initial state is empty and nothing is rendered yet.
	///
	/// # Errors
	///
	/// [`Error::RefArity`](`crate::Error::RefArity`) iff a ref declared in [`Renderable::REFS`] as single matched several elements.
	#[instrument(skip(element, renderer), fields(controller = type_name::<R>(), element = %describe(&element)))]
	pub fn attach(element: Element, renderer: R) -> Result<ControllerRef<R>> {
		let refs = js_elements_with(&R::CONVENTIONS, &element);
		refs.validate(R::REFS)?;

		let controller = Rc::new_cyclic(|this: &Weak<RefCell<Self>>| {
			let handle: Weak<dyn Any> = this.clone();
			RefCell::new(Self {
				element,
				refs,
				state: State::new(),
				renderer,
				handle,
			})
		});

		{
			let controller = controller.borrow();
			registry::register(&controller.element, controller.handle.clone());
		}
		debug!("Attached controller.");
		Ok(controller)
	}

	/// The controllers with this renderer type that are attached to `element`.
	#[must_use]
	pub fn attached_to(element: &Element) -> Vec<ControllerRef<R>> {
		registry::controllers_of::<RefCell<Self>>(element)
	}

	#[must_use]
	pub fn element(&self) -> &Element {
		&self.element
	}

	#[must_use]
	pub fn refs(&self) -> &Refs {
		&self.refs
	}

	#[must_use]
	pub fn state(&self) -> &State {
		&self.state
	}

	#[must_use]
	pub fn renderer(&self) -> &R {
		&self.renderer
	}

	pub fn renderer_mut(&mut self) -> &mut R {
		&mut self.renderer
	}

	/// Whether this controller is listed on its current element.
	#[must_use]
	pub fn is_registered(&self) -> bool {
		registry::contains(&self.element, &self.handle)
	}

	/// Merges `changes` into a copy of the current state and renders the result.
	///
	/// Rendering happens synchronously, before this method returns, and exactly once per call.
	#[instrument(skip(self, changes), fields(controller = type_name::<R>()))]
	pub fn set_state<K, V>(&mut self, changes: impl IntoIterator<Item = (K, V)>)
	where
		K: Into<String>,
		V: Into<Value>,
	{
		let previous = self.state.clone();
		self.state = previous.merge(changes);
		trace!(state = ?self.state, "Rendering.");
		self.render(&previous);
	}

	/// Renders with the current state as both current and previous state.
	#[instrument(skip(self), fields(controller = type_name::<R>()))]
	pub fn force_update(&mut self) {
		let state = self.state.clone();
		self.render(&state);
	}

	fn render(&mut self, previous: &State) {
		let view = View {
			element: &self.element,
			refs: &self.refs,
		};
		self.renderer.render(view, &self.state, previous);
	}

	/// Replaces the element with `html` from the server and rebinds to the result.
	///
	/// The old element's controller list is cleared first. Refs are rescanned and the state is reset to empty.
	/// Nothing is rendered; call [`Controller::set_state`] or [`Controller::force_update`] afterwards if needed.
	///
	/// # Errors
	///
	/// Errors from [`replace_element`] are returned unchanged, in which case the controller stays bound to the old element.
	/// [`Error::RefArity`](`crate::Error::RefArity`) if the new markup violates [`Renderable::REFS`], after rebinding.
	#[instrument(skip(self, html), fields(controller = type_name::<R>(), element = %describe(&self.element)))]
	pub fn reload(&mut self, html: &str) -> Result<()> {
		registry::clear(&self.element);
		let root = replace_element(&self.element, html)?;

		self.refs = js_elements_with(&R::CONVENTIONS, &root);
		self.element = root;
		self.state = State::new();
		debug!(element = %describe(&self.element), "Reloaded controller.");

		self.refs.validate(R::REFS)
	}
}
