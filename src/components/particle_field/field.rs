//! DOM-facing field operations: build, interactive repulsion, resize regeneration.
//!
//! Every operation soft-fails. A missing container or a failing DOM call is
//! logged and the page carries on; nothing here panics or returns an error to
//! the caller.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use super::debounce::{BrowserScheduler, Debouncer, RESIZE_DEBOUNCE_MS};
use super::particles::generate_particles;
use super::render;
use super::repulsion::{self, Bounds};
use super::types::{ParticleFieldConfig, ParticleRanges, resolve_density};

/// Random source for browser builds, seeded from `Math.random`.
pub fn browser_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

fn document() -> Option<Document> {
	web_sys::window()?.document()
}

fn find_container(container_id: &str) -> Option<Element> {
	let found = document()?.get_element_by_id(container_id);
	if found.is_none() {
		debug!("particle-field: no container #{container_id}, skipping");
	}
	found
}

/// Replace the container's children with `count` fresh particles.
///
/// The particles are assembled in a detached fragment and attached in one
/// append, so the page reflows once per build.
fn populate<R: rand::Rng + ?Sized>(
	document: &Document,
	container: &Element,
	rng: &mut R,
	count: usize,
	ranges: &ParticleRanges,
) -> Result<(), JsValue> {
	let fragment = document.create_document_fragment();
	for particle in generate_particles(rng, count, ranges) {
		let element = render::create_particle_element(document, &particle)?;
		fragment.append_child(&element)?;
	}

	container.set_inner_html("");
	render::store_ranges(container, ranges)?;
	container.append_child(&fragment)?;
	Ok(())
}

/// Build a field of `count` particles in the element with id `container_id`.
///
/// Returns the container when the field was built, `None` when the container
/// does not exist or the DOM rejected the build.
pub fn build_field(container_id: &str, count: usize, ranges: &ParticleRanges) -> Option<Element> {
	build_field_with(container_id, count, ranges, &mut browser_rng())
}

/// [`build_field`] with an explicit random source.
pub fn build_field_with<R: rand::Rng + ?Sized>(
	container_id: &str,
	count: usize,
	ranges: &ParticleRanges,
	rng: &mut R,
) -> Option<Element> {
	let document = document()?;
	let container = find_container(container_id)?;
	match populate(&document, &container, rng, count, ranges) {
		Ok(()) => {
			debug!("particle-field: built {count} particles in #{container_id}");
			Some(container)
		}
		Err(e) => {
			warn!("particle-field: failed to build #{container_id}: {e:?}");
			None
		}
	}
}

/// Build a field sized by the config's density tier.
pub fn build_responsive_field(container_id: &str, config: &ParticleFieldConfig) -> Option<Element> {
	build_field(container_id, resolve_density(config), &config.ranges())
}

/// Recompute every particle's offset for a pointer at the given client position.
fn repel_from_pointer(container: &Element, client_x: f64, client_y: f64) {
	let rect = container.get_bounding_client_rect();
	let bounds = Bounds {
		left: rect.left(),
		top: rect.top(),
		width: rect.width(),
		height: rect.height(),
	};
	let Some(pointer) = bounds.to_percent(client_x, client_y) else {
		return;
	};

	let children = container.children();
	for i in 0..children.length() {
		let Some(element) = children
			.item(i)
			.and_then(|e| e.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		let Some(base) = render::base_position(&element) else {
			continue;
		};
		let offset = repulsion::repel(base, pointer);
		if let Err(e) = render::apply_offset(&element, &offset) {
			warn!("particle-field: failed to offset particle: {e:?}");
		}
	}
}

/// Mouse-move listener pushing particles away from the cursor.
///
/// The listener is removed when this handle is dropped; call
/// [`PointerRepulsion::forget`] to keep it for the lifetime of the page.
pub struct PointerRepulsion {
	container: Element,
	callback: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerRepulsion {
	/// Attach repulsion to an existing container.
	pub fn attach(container: Element) -> Option<Self> {
		let target = container.clone();
		let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			repel_from_pointer(&target, ev.client_x() as f64, ev.client_y() as f64);
		});
		if let Err(e) =
			container.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
		{
			warn!("particle-field: failed to attach pointer listener: {e:?}");
			return None;
		}
		Some(Self { container, callback })
	}

	/// Keep the listener installed for the rest of the page's life.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

impl Drop for PointerRepulsion {
	fn drop(&mut self) {
		let _ = self
			.container
			.remove_event_listener_with_callback("mousemove", self.callback.as_ref().unchecked_ref());
	}
}

/// Build a field and make it repel the cursor.
pub fn build_interactive_field(
	container_id: &str,
	count: usize,
	ranges: &ParticleRanges,
) -> Option<PointerRepulsion> {
	let container = build_field(container_id, count, ranges)?;
	let repulsion = PointerRepulsion::attach(container)?;
	info!("particle-field: interactive field ready in #{container_id} ({count} particles)");
	Some(repulsion)
}

/// Regenerate a field in place, keeping its particle count and ranges.
fn regenerate(container_id: &str) {
	let Some(container) = find_container(container_id) else {
		return;
	};
	let count = container.child_element_count() as usize;
	if count == 0 {
		return;
	}
	let ranges = render::stored_ranges(&container);
	debug!("particle-field: regenerating #{container_id} after resize");
	build_field(container_id, count, &ranges);
}

/// Window resize listener that regenerates a field once resizing settles.
///
/// Like [`PointerRepulsion`], dropping the handle removes the listener and
/// cancels any pending regeneration.
pub struct ResizeWatcher {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeWatcher {
	/// Keep the listener installed for the rest of the page's life.
	pub fn forget(self) {
		std::mem::forget(self);
	}
}

impl Drop for ResizeWatcher {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}

/// Regenerate the field in `container_id` 250 ms after the last window resize.
///
/// The regenerated field keeps the current particle count and the size and
/// opacity ranges it was last built with.
pub fn watch_resize(container_id: &str) -> Option<ResizeWatcher> {
	let window = web_sys::window()?;
	let id = container_id.to_string();
	let debouncer = Debouncer::new(BrowserScheduler, RESIZE_DEBOUNCE_MS, move || regenerate(&id));
	let callback = Closure::<dyn FnMut()>::new(move || debouncer.call());
	if let Err(e) =
		window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
	{
		warn!("particle-field: failed to watch resize: {e:?}");
		return None;
	}
	Some(ResizeWatcher { window, callback })
}
