//! Projection of particle records onto DOM elements.
//!
//! The style projection is pure ([`style_declarations`], [`transform`],
//! [`transition`]) so it can be checked without a browser. The DOM helpers
//! below only apply those declarations and read base positions back.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::particles::Particle;
use super::repulsion::{Offset, Point};
use super::types::{DEFAULT_OPACITY_RANGE, DEFAULT_SIZE_RANGE, ParticleRanges, Range};

/// Class name given to every particle element.
pub const PARTICLE_CLASS: &str = "particle";

/// CSS custom property holding the static rotation, so offsets can be
/// composed with it without knowing its value.
const ROTATION_VAR: &str = "--particle-rotation";

/// Container attributes recording the ranges the field was built with.
const SIZE_MIN_ATTR: &str = "data-particle-size-min";
const SIZE_MAX_ATTR: &str = "data-particle-size-max";
const OPACITY_MIN_ATTR: &str = "data-particle-opacity-min";
const OPACITY_MAX_ATTR: &str = "data-particle-opacity-max";

/// CSS `transform` for a particle displaced by `offset`.
pub fn transform(offset: &Offset) -> String {
	format!(
		"translate({:.2}px, {:.2}px) rotate(var({ROTATION_VAR}))",
		offset.dx, offset.dy
	)
}

/// CSS `transition` used to reach `offset`.
pub fn transition(offset: &Offset) -> String {
	format!("transform {}s ease", offset.transition_secs)
}

/// Inline style declarations for a freshly built particle, at rest.
pub fn style_declarations(p: &Particle) -> Vec<(&'static str, String)> {
	vec![
		("width", format!("{}px", p.size)),
		("height", format!("{}px", p.size)),
		("left", format!("{}%", p.left)),
		("top", format!("{}%", p.top)),
		("opacity", p.opacity.to_string()),
		("animation-delay", format!("{}s", p.animation_delay)),
		("animation-duration", format!("{}s", p.animation_duration)),
		("background", p.gradient.to_css()),
		("border-radius", format!("{}%", p.corner.radius_percent())),
		("filter", format!("blur({}px)", p.blur())),
		(ROTATION_VAR, format!("{}deg", p.rotation)),
		("transform", transform(&Offset::REST)),
	]
}

/// Create the element for one particle. It is not attached anywhere.
pub fn create_particle_element(document: &Document, p: &Particle) -> Result<HtmlElement, JsValue> {
	let element: HtmlElement = document.create_element("div")?.dyn_into()?;
	element.set_class_name(PARTICLE_CLASS);
	let style = element.style();
	for (property, value) in style_declarations(p) {
		style.set_property(property, &value)?;
	}
	Ok(element)
}

/// Apply a repulsion offset to a rendered particle.
pub fn apply_offset(element: &HtmlElement, offset: &Offset) -> Result<(), JsValue> {
	let style = element.style();
	style.set_property("transform", &transform(offset))?;
	style.set_property("transition", &transition(offset))
}

/// Read a rendered particle's base position back from its `left`/`top`.
pub fn base_position(element: &HtmlElement) -> Option<Point> {
	let style = element.style();
	let parse = |property: &str| -> Option<f64> {
		let value = style.get_property_value(property).ok()?;
		value.trim().strip_suffix('%')?.trim().parse().ok()
	};
	Some(Point::new(parse("left")?, parse("top")?))
}

/// Record the ranges a field was built with on its container.
pub fn store_ranges(container: &Element, ranges: &ParticleRanges) -> Result<(), JsValue> {
	container.set_attribute(SIZE_MIN_ATTR, &ranges.size.min.to_string())?;
	container.set_attribute(SIZE_MAX_ATTR, &ranges.size.max.to_string())?;
	container.set_attribute(OPACITY_MIN_ATTR, &ranges.opacity.min.to_string())?;
	container.set_attribute(OPACITY_MAX_ATTR, &ranges.opacity.max.to_string())
}

/// Ranges previously recorded by [`store_ranges`], or the defaults.
pub fn stored_ranges(container: &Element) -> ParticleRanges {
	let read = |attr: &str| -> Option<f64> { container.get_attribute(attr)?.parse().ok() };
	let range = |min_attr: &str, max_attr: &str, fallback: Range| {
		match (read(min_attr), read(max_attr)) {
			(Some(min), Some(max)) => Range::new(min, max),
			_ => fallback,
		}
	};
	ParticleRanges::new(
		range(SIZE_MIN_ATTR, SIZE_MAX_ATTR, DEFAULT_SIZE_RANGE),
		range(OPACITY_MIN_ATTR, OPACITY_MAX_ATTR, DEFAULT_OPACITY_RANGE),
	)
}
