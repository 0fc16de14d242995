//! Particle coloring.
//!
//! Every particle is painted with a two-stop gradient whose second hue is the
//! first rotated by a third of the color wheel, giving a triadic look.

/// Degrees between the two gradient stops.
pub const HUE_ROTATION: f64 = 120.0;

/// Saturation shared by every particle hue, in percent.
const SATURATION: f64 = 70.0;
/// Lightness shared by every particle hue, in percent.
const LIGHTNESS: f64 = 60.0;

/// An HSL color. Hue in degrees `[0, 360)`, saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Hue, degrees.
	pub h: f64,
	/// Saturation, percent.
	pub s: f64,
	/// Lightness, percent.
	pub l: f64,
}

impl Hsl {
	/// A particle hue at the shared saturation and lightness.
	pub fn particle(h: f64) -> Self {
		Self {
			h: h.rem_euclid(360.0),
			s: SATURATION,
			l: LIGHTNESS,
		}
	}

	/// Rotate the hue, wrapping at 360.
	pub fn rotate(self, degrees: f64) -> Self {
		Self {
			h: (self.h + degrees).rem_euclid(360.0),
			..self
		}
	}

	/// CSS `hsl()` notation.
	pub fn to_css(self) -> String {
		format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
	}
}

/// Two-stop diagonal gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
	/// First stop.
	pub from: Hsl,
	/// Second stop, [`HUE_ROTATION`] degrees on.
	pub to: Hsl,
}

impl Gradient {
	/// Gradient from `hue` to `hue + 120°`.
	pub fn triadic(hue: f64) -> Self {
		let from = Hsl::particle(hue);
		Self {
			from,
			to: from.rotate(HUE_ROTATION),
		}
	}

	/// Clockwise angular distance from the first stop to the second, in `[0, 360)`.
	pub fn hue_separation(&self) -> f64 {
		(self.to.h - self.from.h).rem_euclid(360.0)
	}

	/// CSS `linear-gradient()` at 45 degrees.
	pub fn to_css(self) -> String {
		format!(
			"linear-gradient(45deg, {}, {})",
			self.from.to_css(),
			self.to.to_css()
		)
	}
}
