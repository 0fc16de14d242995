//! particle-field: decorative, cursor-reactive particle backgrounds for web pages.
//!
//! This crate provides a WASM particle field that fills a container element
//! with randomized particles, pushes them away from the cursor, and
//! regenerates them when the window is resized. It can be mounted as a
//! Leptos component or driven from JavaScript through [`bindings`].

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod bindings;
pub mod components;

pub use components::particle_field::{PageConfig, ParticleField, ParticleFieldConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load page configuration from a script element with id="particle-config".
/// Expected format: JSON with { container, density, sizeRange, opacityRange, interactive, regenerateOnResize }
fn load_page_config() -> Option<PageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"particle-field: loaded config for #{} (density {})",
				config.container,
				config.density.as_deref().unwrap_or("default")
			);
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse page config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads page configuration from the DOM and renders the particle background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_page_config().unwrap_or_default();
	let field = config.field_config();

	view! {
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleField
			id=config.container
			config=field
			interactive=config.interactive
			regenerate_on_resize=config.regenerate_on_resize
		/>
	}
}
