//! 3-D position math and yaw-angle helpers.
//!
//! # Conventions
//!
//! Positions are `f64` (world coordinates can be large); yaw is `f32`
//! radians measured from +Z toward +X, so `yaw = atan2(dx, dz)` points from
//! one position toward another and `ahead` inverts that mapping.  All angle
//! arithmetic stays within one full turn via [`wrap_angle`] — per-tick
//! steering must not let floating error accumulate unbounded.

use std::f32::consts::PI;

/// One full turn in radians.
pub const TWO_PI: f32 = 2.0 * PI;

/// Degrees → radians conversion factor.
pub const DEG2RAD: f32 = PI / 180.0;

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// A world-space position or direction.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scale all components by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Squared euclidean distance to `other`.
    ///
    /// Range checks compare against a squared threshold to skip the sqrt.
    #[inline]
    pub fn square_distance_to(self, other: Vec3) -> f64 {
        let d = self.sub(other);
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Vec3) -> f64 {
        self.square_distance_to(other).sqrt()
    }

    /// Yaw heading from `self` toward `target`.
    #[inline]
    pub fn yaw_to(self, target: Vec3) -> f32 {
        let d = target.sub(self);
        (d.x).atan2(d.z) as f32
    }

    /// The point `distance` units from `self` along heading `yaw`, at the
    /// same height.
    #[inline]
    pub fn ahead(self, distance: f64, yaw: f32) -> Vec3 {
        Vec3::new(
            self.x + distance * (yaw as f64).sin(),
            self.y,
            self.z + distance * (yaw as f64).cos(),
        )
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Shortest signed angular distance from `start` to `end`, in `(-π, π]`.
///
/// Adding the result to `start` (then wrapping) reaches `end` by the short
/// way around, which is what per-tick steering wants.
#[inline]
pub fn angle_rad_distance(start: f32, end: f32) -> f32 {
    let mut diff = (end - start) % TWO_PI;
    if diff > PI {
        diff -= TWO_PI;
    }
    if diff <= -PI {
        diff += TWO_PI;
    }
    diff
}

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle % TWO_PI;
    if wrapped < 0.0 { wrapped + TWO_PI } else { wrapped }
}
