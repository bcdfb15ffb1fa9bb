//! Back-references from elements to the controllers attached to them.
//!
//! The element only carries a numeric id in an expando property.
//! The controller handles themselves live in a thread-local table and are weak,
//! so dropping a controller is enough to make it disappear from its element's list.

use core::{any::Any, cell::Cell};
use hashbrown::HashMap;
use js_sys::{Object, Reflect};
use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};
use tracing::{instrument, trace};
use wasm_bindgen::{JsValue, UnwrapThrowExt};
use web_sys::Element;

/// Name of the expando property that holds an element's registry id.
pub const REGISTRY_PROPERTY: &str = "__domUpgradeControllers";

thread_local! {
	static NEXT_ID: Cell<u32> = Cell::new(0);
	#[allow(clippy::type_complexity)]
	static REGISTRY: RefCell<HashMap<u32, Vec<Weak<dyn Any>>>> = RefCell::default();
}

fn key() -> JsValue {
	JsValue::from_str(REGISTRY_PROPERTY)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn id_of(element: &Element) -> Option<u32> {
	Reflect::get(element, &key()).ok()?.as_f64().map(|id| id as u32)
}

fn id_or_assign(element: &Element) -> u32 {
	id_of(element).unwrap_or_else(|| {
		let id = NEXT_ID.with(|next| {
			let id = next.get();
			next.set(id.wrapping_add(1));
			id
		});
		Reflect::set(element, &key(), &JsValue::from(id)).expect_throw("dom-upgrade: Could not store the controller registry id on an element");
		id
	})
}

/// Appends `handle` to `element`'s controllers, creating the list if necessary.
#[instrument(skip(element, handle))]
pub(crate) fn register(element: &Element, handle: Weak<dyn Any>) {
	let id = id_or_assign(element);
	REGISTRY.with(|registry| {
		let mut registry = registry.borrow_mut();
		let handles = registry.entry(id).or_default();
		handles.retain(|handle| handle.strong_count() > 0);
		handles.push(handle);
		trace!(id, count = handles.len(), "Registered controller.");
	});
}

/// Forgets dropped controllers of `element`, and the whole list once none are left.
pub(crate) fn prune(element: &Element) {
	if let Some(id) = id_of(element) {
		let emptied = REGISTRY
			.try_with(|registry| {
				let mut registry = registry.borrow_mut();
				let emptied = registry.get_mut(&id).map_or(true, |handles| {
					handles.retain(|handle| handle.strong_count() > 0);
					handles.is_empty()
				});
				if emptied {
					registry.remove(&id);
				}
				emptied
			})
			.unwrap_or(false);
		if emptied {
			forget_id(element);
			trace!(id, "Released controller list.");
		}
	}
}

fn forget_id(element: &Element) {
	let object: &Object = element.as_ref();
	Reflect::delete_property(object, &key()).expect_throw("dom-upgrade: Could not remove the controller registry id from an element");
}

/// Removes `element`'s controller list entirely.
///
/// No controller is reachable from `element` afterwards.
#[instrument(skip(element))]
pub fn clear(element: &Element) {
	if let Some(id) = id_of(element) {
		REGISTRY.with(|registry| registry.borrow_mut().remove(&id));
		forget_id(element);
		trace!(id, "Cleared controllers.");
	}
}

/// The live controllers attached to `element`, in attachment order.
///
/// Each item is an `Rc<RefCell<Controller<R>>>` for some renderer `R`.
#[must_use]
pub fn controllers(element: &Element) -> Vec<Rc<dyn Any>> {
	id_of(element).map_or_else(Vec::new, |id| {
		REGISTRY.with(|registry| {
			registry
				.borrow()
				.get(&id)
				.map_or_else(Vec::new, |handles| handles.iter().filter_map(Weak::upgrade).collect())
		})
	})
}

/// The live controllers of type `T` attached to `element`, in attachment order.
#[must_use]
pub fn controllers_of<T: Any>(element: &Element) -> Vec<Rc<T>> {
	controllers(element).into_iter().filter_map(|controller| controller.downcast::<T>().ok()).collect()
}

/// How many live controllers are attached to `element`.
#[must_use]
pub fn len(element: &Element) -> usize {
	controllers(element).len()
}

/// Whether `handle` is among `element`'s controllers.
#[must_use]
pub fn contains(element: &Element, handle: &Weak<dyn Any>) -> bool {
	id_of(element).map_or(false, |id| {
		REGISTRY.with(|registry| {
			registry
				.borrow()
				.get(&id)
				.map_or(false, |handles| handles.iter().any(|h| h.ptr_eq(handle)))
		})
	})
}
