//! Browser tests for the DOM-facing field operations.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{
	Document, Element, Event, HtmlElement, MouseEvent, MouseEventInit, MutationObserver,
	MutationObserverInit, MutationRecord,
};

use particle_field::bindings::{build_field_js, build_interactive_field_js};
use particle_field::{
	DEFAULT_COUNT, PARTICLE_CLASS, ParticleRanges, Range, build_field, build_field_with, build_interactive_field,
	watch_resize,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Append a fixed 200x200 container at the viewport origin.
fn container(id: &str) -> Element {
	let document = document();
	let el = document.create_element("div").unwrap();
	el.set_id(id);
	el.set_attribute(
		"style",
		"position: fixed; left: 0; top: 0; width: 200px; height: 200px;",
	)
	.unwrap();
	document.body().unwrap().append_child(&el).unwrap();
	el
}

fn particle(container: &Element, i: u32) -> HtmlElement {
	container.children().item(i).unwrap().dyn_into().unwrap()
}

fn px(value: &str) -> f64 {
	value.trim_end_matches("px").parse().unwrap()
}

#[wasm_bindgen_test]
fn build_creates_exact_count() {
	let el = container("build-count");
	build_field("build-count", 37, &ParticleRanges::default()).unwrap();

	assert_eq!(el.child_element_count(), 37);
	for i in 0..37 {
		assert_eq!(particle(&el, i).class_name(), PARTICLE_CLASS);
	}
}

#[wasm_bindgen_test]
fn rebuild_replaces_previous_batch() {
	let el = container("build-twice");
	build_field("build-twice", 10, &ParticleRanges::default()).unwrap();
	let first = particle(&el, 0);
	build_field("build-twice", 4, &ParticleRanges::default()).unwrap();

	assert_eq!(el.child_element_count(), 4);
	assert!(!el.contains(Some(first.as_ref())));
}

#[wasm_bindgen_test]
fn zero_count_empties_container() {
	let el = container("build-zero");
	build_field("build-zero", 5, &ParticleRanges::default()).unwrap();
	build_field("build-zero", 0, &ParticleRanges::default()).unwrap();
	assert_eq!(el.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn missing_container_is_a_no_op() {
	let body = document().body().unwrap();
	let before = body.child_element_count();

	assert!(build_field("nonexistent", 10, &ParticleRanges::default()).is_none());
	assert!(build_interactive_field("nonexistent", 10, &ParticleRanges::default()).is_none());
	assert_eq!(body.child_element_count(), before);
}

#[wasm_bindgen_test]
fn build_attaches_particles_in_one_mutation() {
	let el = container("single-append");
	build_field("single-append", 3, &ParticleRanges::default()).unwrap();

	let noop = Closure::<dyn FnMut()>::new(|| {});
	let observer = MutationObserver::new(noop.as_ref().unchecked_ref()).unwrap();
	let options = MutationObserverInit::new();
	options.set_child_list(true);
	observer.observe_with_options(&el, &options).unwrap();

	build_field("single-append", 8, &ParticleRanges::default()).unwrap();
	let records: Vec<MutationRecord> = observer
		.take_records()
		.iter()
		.map(|r| r.unchecked_into())
		.collect();
	observer.disconnect();

	let additions: Vec<&MutationRecord> = records
		.iter()
		.filter(|r| r.added_nodes().length() > 0)
		.collect();
	assert_eq!(additions.len(), 1, "{} records add nodes", additions.len());
	assert_eq!(additions[0].added_nodes().length(), 8);
	assert_eq!(additions[0].removed_nodes().length(), 0);

	let removed: u32 = records.iter().map(|r| r.removed_nodes().length()).sum();
	assert_eq!(removed, 3);
}

#[wasm_bindgen_test]
fn js_count_defaults_when_omitted() {
	let el = container("js-default");
	build_field_js("js-default", None, JsValue::UNDEFINED, JsValue::UNDEFINED);
	assert_eq!(el.child_element_count() as usize, DEFAULT_COUNT);
}

#[wasm_bindgen_test]
fn negative_js_count_builds_empty_field() {
	let el = container("js-negative");
	build_field_js("js-negative", Some(5.0), JsValue::UNDEFINED, JsValue::UNDEFINED);
	build_field_js("js-negative", Some(-1.0), JsValue::UNDEFINED, JsValue::UNDEFINED);
	assert_eq!(el.child_element_count(), 0);

	build_field_js("js-negative", Some(f64::NAN), JsValue::UNDEFINED, JsValue::UNDEFINED);
	assert_eq!(el.child_element_count(), 0);

	let interactive = container("js-negative-interactive");
	build_interactive_field_js("js-negative-interactive", Some(-1.0));
	assert_eq!(interactive.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn fractional_js_count_is_truncated() {
	let el = container("js-fraction");
	build_field_js("js-fraction", Some(7.9), JsValue::UNDEFINED, JsValue::UNDEFINED);
	assert_eq!(el.child_element_count(), 7);
}

#[wasm_bindgen_test]
fn rendered_sizes_respect_range() {
	let el = container("build-sizes");
	let ranges = ParticleRanges::new(Range::new(6.0, 8.0), Range::new(0.2, 0.3));
	let mut rng = SmallRng::seed_from_u64(7);
	build_field_with("build-sizes", 50, &ranges, &mut rng).unwrap();

	for i in 0..50 {
		let style = particle(&el, i).style();
		let width = px(&style.get_property_value("width").unwrap());
		assert!((6.0 - 1e-3..=8.0 + 1e-3).contains(&width), "width {width}");
	}
}

fn move_pointer(target: &Element, x: i32, y: i32) {
	let init = MouseEventInit::new();
	init.set_client_x(x);
	init.set_client_y(y);
	init.set_bubbles(true);
	let ev = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
	target.dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
fn pointer_pushes_near_particles_and_releases_far_ones() {
	let el = container("interactive");
	let _repulsion = build_interactive_field("interactive", 2, &ParticleRanges::default()).unwrap();

	let (near, far) = (particle(&el, 0), particle(&el, 1));
	near.style().set_property("left", "50%").unwrap();
	near.style().set_property("top", "50%").unwrap();
	far.style().set_property("left", "0%").unwrap();
	far.style().set_property("top", "0%").unwrap();

	// Container center is (50%, 50%).
	move_pointer(&el, 100, 100);

	let near_style = near.style();
	assert!(
		near_style
			.get_property_value("transform")
			.unwrap()
			.contains("translate(30.00px, 0.00px)")
	);
	assert!(near_style.get_property_value("transition").unwrap().contains("0.3s"));

	let far_style = far.style();
	assert!(
		far_style
			.get_property_value("transform")
			.unwrap()
			.contains("translate(0.00px, 0.00px)")
	);
	assert!(far_style.get_property_value("transition").unwrap().contains("0.5s"));

	// Base positions are untouched by the offset.
	assert_eq!(near_style.get_property_value("left").unwrap(), "50%");
}

#[wasm_bindgen_test]
fn dropping_repulsion_detaches_listener() {
	let el = container("detached");
	let repulsion = build_interactive_field("detached", 1, &ParticleRanges::default()).unwrap();
	let p = particle(&el, 0);
	p.style().set_property("left", "50%").unwrap();
	p.style().set_property("top", "50%").unwrap();
	drop(repulsion);

	move_pointer(&el, 100, 100);
	assert!(
		p.style()
			.get_property_value("transform")
			.unwrap()
			.contains("translate(0.00px, 0.00px)")
	);
}

fn fire_resize() {
	let ev = Event::new("resize").unwrap();
	web_sys::window().unwrap().dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
async fn resize_burst_regenerates_once_with_same_config() {
	let el = container("resizing");
	let ranges = ParticleRanges::new(Range::new(12.0, 14.0), Range::new(0.3, 0.4));
	build_field("resizing", 6, &ranges).unwrap();
	let _watcher = watch_resize("resizing").unwrap();
	let original = particle(&el, 0);

	for _ in 0..5 {
		fire_resize();
		TimeoutFuture::new(50).await;
	}
	// Still inside the quiet period after the last event.
	assert!(el.contains(Some(original.as_ref())));

	TimeoutFuture::new(400).await;
	assert!(!el.contains(Some(original.as_ref())));
	assert_eq!(el.child_element_count(), 6);
	for i in 0..6 {
		let width = px(&particle(&el, i).style().get_property_value("width").unwrap());
		assert!((12.0 - 1e-3..=14.0 + 1e-3).contains(&width), "width {width}");
	}
}
