//! Field configuration: value ranges, density tiers, and page-level options.

use serde::Deserialize;

/// Particle count used when no density tier (or an unknown one) is given.
pub const DEFAULT_COUNT: usize = 50;

/// Default particle size range in pixels.
pub const DEFAULT_SIZE_RANGE: Range = Range::new(3.0, 30.0);

/// Default particle opacity range.
pub const DEFAULT_OPACITY_RANGE: Range = Range::new(0.1, 0.6);

/// Largest particle size accepted, pixels.
pub const MAX_PARTICLE_SIZE: f64 = 10_000.0;

/// Density tier the page-level field uses unless configured.
pub const DEFAULT_PAGE_DENSITY: &str = "high";

/// Id of the container the page-level field renders into unless configured.
pub const DEFAULT_CONTAINER_ID: &str = "particles";

/// Closed interval `[min, max]` that random draws fall within.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	/// Lower bound.
	pub min: f64,
	/// Upper bound.
	pub max: f64,
}

impl Range {
	/// Range from `min` to `max`, as given.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Make the range usable for sampling.
	///
	/// Non-finite bounds fall back to `fallback`; an inverted range collapses
	/// to `max = min`.
	pub fn normalized(self, fallback: Range) -> Self {
		if !self.min.is_finite() || !self.max.is_finite() {
			return fallback;
		}
		Self {
			min: self.min,
			max: self.max.max(self.min),
		}
	}

	/// Clamp both bounds into `[lo, hi]`.
	pub fn clamped_to(self, lo: f64, hi: f64) -> Self {
		Self {
			min: self.min.clamp(lo, hi),
			max: self.max.clamp(lo, hi),
		}
	}

	#[cfg(test)]
	pub(crate) fn contains(&self, value: f64) -> bool {
		self.min <= value && value <= self.max
	}
}

/// Qualitative particle density.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityTier {
	/// 20 particles.
	Low,
	/// 50 particles.
	Medium,
	/// 100 particles.
	High,
	/// 200 particles.
	VeryHigh,
}

impl DensityTier {
	/// Parse a tier name as written in page configuration (`"very-high"` etc).
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"low" => Some(Self::Low),
			"medium" => Some(Self::Medium),
			"high" => Some(Self::High),
			"very-high" => Some(Self::VeryHigh),
			_ => None,
		}
	}

	/// Particle count for this tier.
	pub fn count(self) -> usize {
		match self {
			Self::Low => 20,
			Self::Medium => 50,
			Self::High => 100,
			Self::VeryHigh => 200,
		}
	}
}

/// Size and opacity ranges, already normalized for sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRanges {
	/// Size in pixels.
	pub size: Range,
	/// Opacity in `[0, 1]`.
	pub opacity: Range,
}

impl ParticleRanges {
	/// Normalize caller-supplied ranges. Sizes are kept inside
	/// `[0, MAX_PARTICLE_SIZE]` and opacities inside `[0, 1]`.
	pub fn new(size: Range, opacity: Range) -> Self {
		Self {
			size: size
				.normalized(DEFAULT_SIZE_RANGE)
				.clamped_to(0.0, MAX_PARTICLE_SIZE),
			opacity: opacity
				.normalized(DEFAULT_OPACITY_RANGE)
				.clamped_to(0.0, 1.0),
		}
	}
}

impl Default for ParticleRanges {
	fn default() -> Self {
		Self::new(DEFAULT_SIZE_RANGE, DEFAULT_OPACITY_RANGE)
	}
}

/// Options for a responsive field: density tier plus value ranges.
///
/// The tier is kept as the raw name so that unrecognized tiers still parse
/// and resolve to [`DEFAULT_COUNT`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticleFieldConfig {
	/// Density tier name: `low`, `medium`, `high` or `very-high`.
	pub density: Option<String>,
	/// Particle size range, pixels.
	pub size_range: Range,
	/// Particle opacity range.
	pub opacity_range: Range,
}

impl ParticleFieldConfig {
	/// Normalized ranges for sampling.
	pub fn ranges(&self) -> ParticleRanges {
		ParticleRanges::new(self.size_range, self.opacity_range)
	}
}

impl Default for ParticleFieldConfig {
	fn default() -> Self {
		Self {
			density: None,
			size_range: DEFAULT_SIZE_RANGE,
			opacity_range: DEFAULT_OPACITY_RANGE,
		}
	}
}

/// Map a density tier to a particle count. Unknown or missing tiers give
/// [`DEFAULT_COUNT`].
pub fn resolve_density(config: &ParticleFieldConfig) -> usize {
	config
		.density
		.as_deref()
		.and_then(DensityTier::from_name)
		.map_or(DEFAULT_COUNT, DensityTier::count)
}

/// Page-level configuration, read from a JSON `<script>` element.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
	/// Id of the element particles are rendered into.
	pub container: String,
	/// Attach the cursor repulsion handler.
	pub interactive: bool,
	/// Regenerate the field after the window is resized.
	pub regenerate_on_resize: bool,
	/// Density tier name, `high` unless configured.
	pub density: Option<String>,
	/// Particle size range, pixels.
	pub size_range: Range,
	/// Particle opacity range.
	pub opacity_range: Range,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			container: DEFAULT_CONTAINER_ID.to_string(),
			interactive: true,
			regenerate_on_resize: true,
			density: Some(DEFAULT_PAGE_DENSITY.to_string()),
			size_range: DEFAULT_SIZE_RANGE,
			opacity_range: DEFAULT_OPACITY_RANGE,
		}
	}
}

impl PageConfig {
	/// Parse page configuration; missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Field options for the configured container.
	pub fn field_config(&self) -> ParticleFieldConfig {
		ParticleFieldConfig {
			density: self.density.clone(),
			size_range: self.size_range,
			opacity_range: self.opacity_range,
		}
	}
}
