//! Decorative particle field.
//!
//! Fills a container element with randomized particles:
//! - Random size, opacity, position, rotation and animation timing per particle
//! - Triadic two-hue gradients and mixed circle/rounded-rect shapes
//! - Optional cursor repulsion with fast snap-away and slow drift-back
//! - Debounced regeneration when the window is resized
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{ParticleField, ParticleFieldConfig};
//!
//! let config = ParticleFieldConfig {
//!     density: Some("high".into()),
//!     ..Default::default()
//! };
//!
//! view! { <ParticleField id="particles" config=config /> }
//! ```

mod component;
pub mod debounce;
mod field;
pub mod particles;
mod render;
pub mod repulsion;
pub mod theme;
mod types;

pub use component::ParticleField;
pub use field::{
	PointerRepulsion, ResizeWatcher, browser_rng, build_field, build_field_with,
	build_interactive_field, build_responsive_field, watch_resize,
};
pub use particles::{CornerShape, Particle, generate_particles};
pub use render::PARTICLE_CLASS;
pub use types::{
	DEFAULT_CONTAINER_ID, DEFAULT_COUNT, DEFAULT_OPACITY_RANGE, DEFAULT_PAGE_DENSITY,
	DEFAULT_SIZE_RANGE, DensityTier, MAX_PARTICLE_SIZE, PageConfig, ParticleFieldConfig,
	ParticleRanges, Range, resolve_density,
};
