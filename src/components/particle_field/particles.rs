//! Particle records and their random generation.
//!
//! A [`Particle`] holds only static attributes. Everything is drawn once when
//! the field is built; the only thing that changes afterwards is the
//! repulsion offset, which lives on the rendered element, not here.

use rand::Rng;

use super::theme::Gradient;
use super::types::ParticleRanges;

/// Probability that a particle is drawn as a rounded rectangle instead of a circle.
pub const ROUNDED_RECT_PROBABILITY: f64 = 0.3;

/// Blur radius per pixel of particle size.
pub const BLUR_FACTOR: f64 = 0.1;

/// Upper bound of the ambient animation delay, seconds.
const MAX_ANIMATION_DELAY: f64 = 5.0;
/// Ambient animation duration bounds, seconds.
const MIN_ANIMATION_DURATION: f64 = 4.0;
const MAX_ANIMATION_DURATION: f64 = 8.0;

/// Corner rounding of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerShape {
	/// 50% border radius.
	Circle,
	/// 30% border radius.
	RoundedRect,
}

impl CornerShape {
	/// Border radius in percent of the particle's box.
	pub fn radius_percent(self) -> u8 {
		match self {
			Self::Circle => 50,
			Self::RoundedRect => 30,
		}
	}
}

/// A single decorative particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Base horizontal position, percent of the container width.
	pub left: f64,
	/// Base vertical position, percent of the container height.
	pub top: f64,
	/// Width and height in pixels.
	pub size: f64,
	/// Opacity in `[0, 1]`.
	pub opacity: f64,
	/// Two-hue background gradient.
	pub gradient: Gradient,
	/// Static rotation in degrees.
	pub rotation: f64,
	/// Corner rounding.
	pub corner: CornerShape,
	/// Ambient drift animation delay, seconds.
	pub animation_delay: f64,
	/// Ambient drift animation duration, seconds.
	pub animation_duration: f64,
}

impl Particle {
	/// Draw a particle with every attribute independently uniform in its range.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, ranges: &ParticleRanges) -> Self {
		let size = rng.gen_range(ranges.size.min..=ranges.size.max);
		let opacity = rng.gen_range(ranges.opacity.min..=ranges.opacity.max);
		let left = rng.gen_range(0.0..100.0);
		let top = rng.gen_range(0.0..100.0);
		let animation_delay = rng.gen_range(0.0..MAX_ANIMATION_DELAY);
		let animation_duration = rng.gen_range(MIN_ANIMATION_DURATION..MAX_ANIMATION_DURATION);
		let gradient = Gradient::triadic(rng.gen_range(0.0..360.0));
		let corner = if rng.gen_bool(ROUNDED_RECT_PROBABILITY) {
			CornerShape::RoundedRect
		} else {
			CornerShape::Circle
		};
		let rotation = rng.gen_range(0.0..360.0);

		Self {
			left,
			top,
			size,
			opacity,
			gradient,
			rotation,
			corner,
			animation_delay,
			animation_duration,
		}
	}

	/// Blur radius in pixels, proportional to size.
	pub fn blur(&self) -> f64 {
		self.size * BLUR_FACTOR
	}
}

/// Generate `count` fresh particles.
pub fn generate_particles<R: Rng + ?Sized>(
	rng: &mut R,
	count: usize,
	ranges: &ParticleRanges,
) -> Vec<Particle> {
	(0..count).map(|_| Particle::random(rng, ranges)).collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::particle_field::theme::HUE_ROTATION;
	use crate::components::particle_field::types::{MAX_PARTICLE_SIZE, Range};

	fn rng() -> SmallRng {
		SmallRng::seed_from_u64(0x5eed)
	}

	#[test]
	fn generates_exact_count() {
		let ranges = ParticleRanges::default();
		for count in [0, 1, 20, 200] {
			assert_eq!(generate_particles(&mut rng(), count, &ranges).len(), count);
		}
	}

	#[test]
	fn attributes_stay_within_ranges() {
		let ranges = ParticleRanges::new(Range::new(4.0, 9.0), Range::new(0.2, 0.3));
		for p in generate_particles(&mut rng(), 500, &ranges) {
			assert!(ranges.size.contains(p.size), "size {}", p.size);
			assert!(ranges.opacity.contains(p.opacity), "opacity {}", p.opacity);
			assert!((0.0..100.0).contains(&p.left));
			assert!((0.0..100.0).contains(&p.top));
			assert!((0.0..360.0).contains(&p.rotation));
			assert!((0.0..5.0).contains(&p.animation_delay));
			assert!((4.0..8.0).contains(&p.animation_duration));
			assert!((p.blur() - p.size * 0.1).abs() < 1e-12);
		}
	}

	#[test]
	fn gradient_hues_are_a_third_apart() {
		for p in generate_particles(&mut rng(), 500, &ParticleRanges::default()) {
			assert!((p.gradient.hue_separation() - HUE_ROTATION).abs() < 1e-9);
		}
	}

	#[test]
	fn inverted_size_range_yields_fixed_size() {
		let ranges = ParticleRanges::new(Range::new(10.0, 2.0), Range::new(0.5, 0.5));
		for p in generate_particles(&mut rng(), 50, &ranges) {
			assert_eq!(p.size, 10.0);
			assert_eq!(p.opacity, 0.5);
		}
	}

	#[test]
	fn extreme_size_range_is_sampled_within_cap() {
		let ranges = ParticleRanges::new(Range::new(0.0, f64::MAX), Range::new(0.1, 0.6));
		for p in generate_particles(&mut SmallRng::seed_from_u64(1), 50, &ranges) {
			assert!(p.size.is_finite());
			assert!((0.0..=MAX_PARTICLE_SIZE).contains(&p.size), "size {}", p.size);
		}
	}

	#[test]
	fn corner_shapes_follow_probability() {
		let particles = generate_particles(&mut rng(), 4000, &ParticleRanges::default());
		let rounded = particles
			.iter()
			.filter(|p| p.corner == CornerShape::RoundedRect)
			.count();
		let share = rounded as f64 / particles.len() as f64;
		assert!((0.25..0.35).contains(&share), "rounded share {share}");
	}

	#[test]
	fn same_seed_same_field() {
		let ranges = ParticleRanges::default();
		assert_eq!(
			generate_particles(&mut rng(), 10, &ranges),
			generate_particles(&mut rng(), 10, &ranges)
		);
	}
}
