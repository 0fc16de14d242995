//! Cursor repulsion physics.
//!
//! Works entirely in container-percent coordinates for distances and in CSS
//! pixels for the resulting offset. Offsets are always computed from a
//! particle's base position, never from where a previous offset moved it, so
//! each pointer event fully determines every offset.

/// Pointer-to-particle distance (percent units) under which a particle is pushed.
pub const REPEL_RADIUS: f64 = 20.0;

/// Displacement applied to a repelled particle, CSS pixels.
pub const REPEL_FORCE: f64 = 30.0;

/// Transition when a particle is pushed away, seconds.
pub const SNAP_AWAY_SECS: f64 = 0.3;

/// Transition when a particle returns to rest, seconds.
pub const DRIFT_BACK_SECS: f64 = 0.5;

/// A point in container-percent coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	/// Percent of the container width.
	pub x: f64,
	/// Percent of the container height.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)` percent.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance in percent units.
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Client-space bounding box of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Client x of the left edge.
	pub left: f64,
	/// Client y of the top edge.
	pub top: f64,
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl Bounds {
	/// Convert a client-space pointer position to container percent.
	///
	/// Returns `None` for a collapsed container, where percentages are meaningless.
	pub fn to_percent(&self, client_x: f64, client_y: f64) -> Option<Point> {
		if self.width <= 0.0 || self.height <= 0.0 {
			return None;
		}
		Some(Point::new(
			(client_x - self.left) / self.width * 100.0,
			(client_y - self.top) / self.height * 100.0,
		))
	}
}

/// Display offset of a particle and the transition used to reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
	/// Horizontal displacement, CSS pixels.
	pub dx: f64,
	/// Vertical displacement, CSS pixels.
	pub dy: f64,
	/// Duration of the transform transition, seconds.
	pub transition_secs: f64,
}

impl Offset {
	/// Particle at its base position, drifting back slowly.
	pub const REST: Offset = Offset {
		dx: 0.0,
		dy: 0.0,
		transition_secs: DRIFT_BACK_SECS,
	};

	#[cfg(test)]
	fn magnitude(&self) -> f64 {
		(self.dx * self.dx + self.dy * self.dy).sqrt()
	}

	#[cfg(test)]
	fn is_rest(&self) -> bool {
		self.dx == 0.0 && self.dy == 0.0
	}
}

/// Offset for a particle at `base` with the pointer at `pointer`.
///
/// Inside [`REPEL_RADIUS`] the particle is pushed [`REPEL_FORCE`] pixels
/// directly away from the pointer; a pointer exactly on the base position
/// pushes along +x. Outside the radius the particle rests.
pub fn repel(base: Point, pointer: Point) -> Offset {
	if base.distance(pointer) >= REPEL_RADIUS {
		return Offset::REST;
	}

	let angle = (base.y - pointer.y).atan2(base.x - pointer.x);
	Offset {
		dx: angle.cos() * REPEL_FORCE,
		dy: angle.sin() * REPEL_FORCE,
		transition_secs: SNAP_AWAY_SECS,
	}
}
