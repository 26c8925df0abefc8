//! Quaternion storage and construction
//!
//! Only construction is provided; rotations are applied elsewhere. Lanes are
//! laid out `[W, Z, Y, X]`, matching [`Vector`](crate::Vector).

use crate::lanes::Lanes;
use crate::radians;

const W_LANE: usize = 0;
const Z_LANE: usize = 1;
const Y_LANE: usize = 2;
const X_LANE: usize = 3;

// Euler angle lanes when packed as `Lanes::set(roll, pitch, yaw, 0.0)`
const ROLL_LANE: usize = 3;
const PITCH_LANE: usize = 2;
const YAW_LANE: usize = 1;

/// Quaternion backed by a packed register
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 4]", into = "[f32; 4]")
)]
#[repr(transparent)]
pub struct Quaternion {
    lanes: Lanes,
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { lanes: Lanes::set(x, y, z, w) }
    }

    /// All four components set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { lanes: Lanes::splat(v) }
    }

    /// Take a raw register verbatim; every lane is meaningful
    #[inline]
    pub const fn from_lanes(lanes: Lanes) -> Self {
        Self { lanes }
    }

    /// Create from Euler angles in radians: roll about X, pitch about Y,
    /// yaw about Z.
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let halves = Lanes::set(roll, pitch, yaw, 0.0) * Lanes::splat(0.5);
        let c = halves.map(f32::cos);
        let s = halves.map(f32::sin);

        let (cr, cp, cy) = (c.lane(ROLL_LANE), c.lane(PITCH_LANE), c.lane(YAW_LANE));
        let (sr, sp, sy) = (s.lane(ROLL_LANE), s.lane(PITCH_LANE), s.lane(YAW_LANE));

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// [`Quaternion::from_euler`] with angles in degrees
    #[inline]
    pub fn from_euler_degrees(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::from_euler(radians(roll), radians(pitch), radians(yaw))
    }

    #[inline]
    pub const fn lanes(self) -> Lanes {
        self.lanes
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.lanes.lane(X_LANE)
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.lanes.lane(Y_LANE)
    }

    #[inline]
    pub const fn z(self) -> f32 {
        self.lanes.lane(Z_LANE)
    }

    #[inline]
    pub const fn w(self) -> f32 {
        self.lanes.lane(W_LANE)
    }

    /// Components as `[x, y, z, w]`
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x(), self.y(), self.z(), self.w()]
    }
}

impl From<[f32; 4]> for Quaternion {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Quaternion> for [f32; 4] {
    #[inline]
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAC_PI_2;
    use approx::assert_abs_diff_eq;

    fn assert_quat_eq(a: Quaternion, b: Quaternion) {
        for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_quaternion_layout() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.lanes().to_array(), [4.0, 3.0, 2.0, 1.0]);
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Quaternion::from_lanes(q.lanes()), q);
    }

    #[test]
    fn test_quaternion_default_and_splat() {
        assert_eq!(Quaternion::default().to_array(), [0.0; 4]);
        assert_eq!(Quaternion::splat(0.5).to_array(), [0.5; 4]);
    }

    #[test]
    fn test_quaternion_from_zero_euler_is_identity() {
        assert_quat_eq(Quaternion::from_euler(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    }

    #[test]
    fn test_quaternion_single_axis_euler() {
        let h = (FRAC_PI_2 * 0.5).sin();
        let c = (FRAC_PI_2 * 0.5).cos();
        assert_quat_eq(Quaternion::from_euler(FRAC_PI_2, 0.0, 0.0), Quaternion::new(h, 0.0, 0.0, c));
        assert_quat_eq(Quaternion::from_euler(0.0, FRAC_PI_2, 0.0), Quaternion::new(0.0, h, 0.0, c));
        assert_quat_eq(Quaternion::from_euler(0.0, 0.0, FRAC_PI_2), Quaternion::new(0.0, 0.0, h, c));
    }

    #[test]
    fn test_quaternion_from_euler_degrees() {
        assert_quat_eq(
            Quaternion::from_euler_degrees(90.0, -45.0, 30.0),
            Quaternion::from_euler(FRAC_PI_2, -FRAC_PI_2 * 0.5, FRAC_PI_2 / 3.0),
        );
    }

    #[test]
    fn test_quaternion_from_euler_is_unit() {
        let q = Quaternion::from_euler(0.3, -1.2, 2.5);
        let len_sq: f32 = q.to_array().iter().map(|c| c * c).sum();
        assert_abs_diff_eq!(len_sq, 1.0, epsilon = 1e-5);
    }
}
