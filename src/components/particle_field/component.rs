//! Leptos component owning a particle field.
//!
//! The component renders the container `div`. Once it is mounted, an effect
//! builds the field, attaches cursor repulsion and the resize watcher, and
//! keeps their handles alive for as long as the component lives.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::field::{PointerRepulsion, ResizeWatcher, build_field, build_interactive_field, watch_resize};
use super::types::{ParticleFieldConfig, resolve_density};

/// Decorative particle background.
///
/// The particle count comes from the config's density tier. Set
/// `interactive = false` for a static field and `regenerate_on_resize = false`
/// to keep the first layout across window resizes.
#[component]
pub fn ParticleField(
	/// Id of the rendered container element.
	#[prop(into)]
	id: String,
	/// Density tier and value ranges.
	#[prop(default = ParticleFieldConfig::default())]
	config: ParticleFieldConfig,
	/// Push particles away from the cursor.
	#[prop(default = true)]
	interactive: bool,
	/// Rebuild the field after window resizes settle.
	#[prop(default = true)]
	regenerate_on_resize: bool,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let repulsion: Rc<RefCell<Option<PointerRepulsion>>> = Rc::new(RefCell::new(None));
	let resize: Rc<RefCell<Option<ResizeWatcher>>> = Rc::new(RefCell::new(None));
	let container_id = id.clone();

	Effect::new(move |_| {
		if container_ref.get().is_none() {
			return;
		}

		let count = resolve_density(&config);
		let ranges = config.ranges();
		if interactive {
			*repulsion.borrow_mut() = build_interactive_field(&container_id, count, &ranges);
		} else {
			build_field(&container_id, count, &ranges);
		}

		if regenerate_on_resize {
			*resize.borrow_mut() = watch_resize(&container_id);
		}
	});

	view! {
		<div
			node_ref=container_ref
			id=id
			class="particles"
			aria-hidden="true"
		/>
	}
}
