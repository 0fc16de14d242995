//! JavaScript API.
//!
//! Exposes the field operations to page scripts under camelCase names.
//! Option objects are plain JS objects decoded through `JSON.stringify`;
//! anything malformed falls back to defaults. Listeners installed from here
//! stay attached for the lifetime of the page.

use log::warn;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::components::particle_field::{
	DEFAULT_COUNT, DEFAULT_OPACITY_RANGE, DEFAULT_SIZE_RANGE, ParticleFieldConfig, ParticleRanges,
	Range, build_field, build_interactive_field, build_responsive_field, resolve_density,
	watch_resize,
};

/// Decode a JS object into `T`. `undefined`/`null` and malformed input give `None`.
fn decode<T: DeserializeOwned>(value: &JsValue) -> Option<T> {
	if value.is_undefined() || value.is_null() {
		return None;
	}
	let json = js_sys::JSON::stringify(value).ok()?.as_string()?;
	match serde_json::from_str(&json) {
		Ok(decoded) => Some(decoded),
		Err(e) => {
			warn!("particle-field: ignoring malformed options {json}: {e}");
			None
		}
	}
}

/// Most particles a single JS call may request.
const MAX_JS_COUNT: usize = 10_000;

/// Turn a JS number into a particle count.
///
/// A missing count gives [`DEFAULT_COUNT`]. Negative, `NaN` and infinite
/// counts give zero; fractions are truncated and the result is capped at
/// [`MAX_JS_COUNT`].
fn count_from_js(count: Option<f64>) -> usize {
	let Some(count) = count else {
		return DEFAULT_COUNT;
	};
	if !count.is_finite() || count < 0.0 {
		warn!("particle-field: ignoring invalid particle count {count}");
		return 0;
	}
	(count.trunc() as usize).min(MAX_JS_COUNT)
}

/// Initialize console logging and the panic hook.
#[wasm_bindgen(js_name = initParticles)]
pub fn init_particles() {
	crate::init_logging();
}

/// `buildField(containerId, count = 50, sizeRange = {min: 3, max: 30}, opacityRange = {min: 0.1, max: 0.6})`
#[wasm_bindgen(js_name = buildField)]
pub fn build_field_js(
	container_id: &str,
	count: Option<f64>,
	size_range: JsValue,
	opacity_range: JsValue,
) {
	let ranges = ParticleRanges::new(
		decode::<Range>(&size_range).unwrap_or(DEFAULT_SIZE_RANGE),
		decode::<Range>(&opacity_range).unwrap_or(DEFAULT_OPACITY_RANGE),
	);
	build_field(container_id, count_from_js(count), &ranges);
}

/// `resolveDensity({density})`: particle count for a density tier.
#[wasm_bindgen(js_name = resolveDensity)]
pub fn resolve_density_js(config: JsValue) -> u32 {
	let config = decode::<ParticleFieldConfig>(&config).unwrap_or_default();
	resolve_density(&config) as u32
}

/// `buildResponsiveField(containerId, {density, sizeRange, opacityRange})`
#[wasm_bindgen(js_name = buildResponsiveField)]
pub fn build_responsive_field_js(container_id: &str, options: JsValue) {
	let config = decode::<ParticleFieldConfig>(&options).unwrap_or_default();
	build_responsive_field(container_id, &config);
}

/// `buildInteractiveField(containerId, count = 50)`
#[wasm_bindgen(js_name = buildInteractiveField)]
pub fn build_interactive_field_js(container_id: &str, count: Option<f64>) {
	if let Some(repulsion) = build_interactive_field(
		container_id,
		count_from_js(count),
		&ParticleRanges::default(),
	) {
		repulsion.forget();
	}
}

/// `watchResize(containerId)`: regenerate the field after window resizes.
#[wasm_bindgen(js_name = watchResize)]
pub fn watch_resize_js(container_id: &str) {
	if let Some(watcher) = watch_resize(container_id) {
		watcher.forget();
	}
}
