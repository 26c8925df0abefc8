//! 3D vector packed into a four-lane register
//!
//! Lane layout is `[unused, Z, Y, X]`. The unused lane is pinned to `0.0`:
//! every path that builds a vector from a raw register goes through
//! [`Vector::from_lanes`], which clears it.

use core::fmt;
use core::ops::Index;

use crate::lanes::Lanes;

/// Lane holding nothing, always `0.0`
pub const UNUSED_LANE: usize = 0;
/// Lane holding Z
pub const Z_LANE: usize = 1;
/// Lane holding Y
pub const Y_LANE: usize = 2;
/// Lane holding X
pub const X_LANE: usize = 3;

/// Named vector axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Register lane backing this axis
    #[inline]
    pub const fn lane(self) -> usize {
        match self {
            Axis::X => X_LANE,
            Axis::Y => Y_LANE,
            Axis::Z => Z_LANE,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("X"),
            Axis::Y => f.write_str("Y"),
            Axis::Z => f.write_str("Z"),
        }
    }
}

/// 3D vector backed by a packed register
#[derive(Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f32; 3]", into = "[f32; 3]")
)]
#[repr(transparent)]
pub struct Vector {
    lanes: Lanes,
}

impl Vector {
    /// The zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { lanes: Lanes::set(x, y, z, 0.0) }
    }

    /// All three components set to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Take a raw register verbatim, then clear the unused lane
    #[inline]
    pub fn from_lanes(lanes: Lanes) -> Self {
        let mut v = Self { lanes };
        v.reset_unused_axis();
        v
    }

    /// Bulk access to the backing register
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
    pub fn set_x(&mut self, x: f32) {
        self.lanes.set_lane(X_LANE, x);
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.lanes.set_lane(Y_LANE, y);
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.lanes.set_lane(Z_LANE, z);
    }

    #[inline]
    pub const fn get(self, axis: Axis) -> f32 {
        self.lanes.lane(axis.lane())
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, value: f32) {
        self.lanes.set_lane(axis.lane(), value);
    }

    /// Value of the reserved lane; `0.0` for every vector built through the
    /// public API
    #[inline]
    pub const fn unused_axis(self) -> f32 {
        self.lanes.lane(UNUSED_LANE)
    }

    #[inline]
    pub(crate) fn set_unused_axis(&mut self, value: f32) {
        self.lanes.set_lane(UNUSED_LANE, value);
    }

    #[inline]
    pub(crate) fn reset_unused_axis(&mut self) {
        self.set_unused_axis(0.0);
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Sum of the lanes of a register whose unused lane is zero.
    ///
    /// Pairing `[0, z, y, x]` gives `[z, y + x, z, y + x]`; pairing again puts
    /// the full sum in every lane.
    #[inline]
    fn horizontal_sum(lanes: Lanes) -> f32 {
        let pairs = lanes.hadd(lanes);
        pairs.hadd(pairs).lane(0)
    }

    #[inline]
    pub fn sqr_magnitude(self) -> f32 {
        Self::horizontal_sum(self.lanes * self.lanes)
    }

    #[inline]
    pub fn magnitude(self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.magnitude()
    }

    /// Length of the projection onto the XY plane
    #[inline]
    pub fn magnitude_xy(self) -> f32 {
        let sqrs = self.lanes * self.lanes;
        // [z², y² + x², z², y² + x²]
        sqrs.hadd(sqrs).lane(1).sqrt()
    }

    #[inline]
    pub fn length_xy(self) -> f32 {
        self.magnitude_xy()
    }

    /// True when X, Y and Z all equal zero
    #[inline]
    pub fn is_zero(self) -> bool {
        const XYZ: u8 = (1 << X_LANE) | (1 << Y_LANE) | (1 << Z_LANE);
        self.lanes.eq_mask(Self::ZERO.lanes) & XYZ == XYZ
    }

    /// Scale to unit length in place.
    ///
    /// A zero vector ends up full of NaN; use [`Vector::normalize_safe`] when
    /// that can happen.
    #[inline]
    pub fn normalize(&mut self) {
        *self /= self.length();
    }

    /// Like [`Vector::normalize`] but leaves a zero vector untouched
    #[inline]
    pub fn normalize_safe(&mut self) {
        if !self.is_zero() {
            self.normalize();
        }
    }

    #[inline]
    pub fn normal(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    #[inline]
    pub fn normal_safe(self) -> Self {
        let mut v = self;
        v.normalize_safe();
        v
    }

    #[inline]
    pub fn unit(self) -> Self {
        self.normal()
    }

    #[inline]
    pub fn unit_safe(self) -> Self {
        self.normal_safe()
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        Self::horizontal_sum(self.lanes * other.lanes)
    }

    #[inline]
    pub fn dot_product(a: Self, b: Self) -> f32 {
        a.dot(b)
    }

    /// Cross product.
    ///
    /// With `r` rotating (x, y, z) to (y, z, x):
    /// `a × b = r(a * r(b) - r(a) * b)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let (a, b) = (self.lanes, other.lanes);
        let t = a * b.rotate_upper() - a.rotate_upper() * b;
        Self::from_lanes(t.rotate_upper())
    }

    /// Reflect in place about the plane with the given normal. The normal
    /// need not be unit length.
    #[inline]
    pub fn mirror(&mut self, normal: Self) {
        let n = normal.normal();
        *self -= n * (2.0 * self.dot(n));
    }

    #[inline]
    pub fn reflection(self, normal: Self) -> Self {
        let mut v = self;
        v.mirror(normal);
        v
    }

    /// Flip the sign of every component in place
    #[inline]
    pub fn negate(&mut self) {
        self.lanes = self.lanes.flip_sign();
        // keep +0.0 in the reserved lane
        self.reset_unused_axis();
    }

    /// Project in place onto `target`, which need not be unit length
    #[inline]
    pub fn project_on_to(&mut self, target: Self) {
        *self = self.projection_on_to(target);
    }

    #[inline]
    pub fn projection_on_to(self, target: Self) -> Self {
        target * (self.dot(target) / target.dot(target))
    }

    /// Project in place onto `normal`, which must already be unit length
    #[inline]
    pub fn project_on_to_normal(&mut self, normal: Self) {
        *self = self.projection_on_to_normal(normal);
    }

    #[inline]
    pub fn projection_on_to_normal(self, normal: Self) -> Self {
        normal * self.dot(normal)
    }

    /// Replace with the component orthogonal to `target`
    #[inline]
    pub fn reject_to(&mut self, target: Self) {
        *self -= self.projection_on_to(target);
    }

    #[inline]
    pub fn rejection_to(self, target: Self) -> Self {
        self - self.projection_on_to(target)
    }

    /// Replace with the component orthogonal to the unit vector `normal`
    #[inline]
    pub fn reject_to_normal(&mut self, normal: Self) {
        *self -= self.projection_on_to_normal(normal);
    }

    #[inline]
    pub fn rejection_to_normal(self, normal: Self) -> Self {
        self - self.projection_on_to_normal(normal)
    }
}

impl PartialEq for Vector {
    /// Packed compare of all four lanes
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes.eq_mask(other.lanes) == 0b1111
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl Index<Axis> for Vector {
    type Output = f32;

    #[inline]
    fn index(&self, axis: Axis) -> &f32 {
        &self.lanes.0[axis.lane()]
    }
}

impl From<[f32; 3]> for Vector {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector> for [f32; 3] {
    #[inline]
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_zero() {
        let v = Vector::default();
        assert_eq!(v.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(v.unused_axis(), 0.0);
        assert_eq!(v, Vector::ZERO);
    }

    #[test]
    fn test_splat() {
        let v = Vector::splat(3.0);
        assert_eq!(v.to_array(), [3.0, 3.0, 3.0]);
        assert_eq!(v.unused_axis(), 0.0);
    }

    #[test]
    fn test_lane_layout() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.lanes().to_array(), [0.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_from_lanes_clears_unused() {
        let v = Vector::from_lanes(Lanes::set(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.unused_axis(), 0.0);
    }

    #[test]
    fn test_setters_and_axis_access() {
        let mut v = Vector::ZERO;
        v.set_x(1.0);
        v.set_y(2.0);
        v.set(Axis::Z, 3.0);
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
        assert_eq!(v[Axis::Y], 2.0);
        assert_eq!(v.get(Axis::Z), 3.0);
        assert_eq!(v.unused_axis(), 0.0);
    }

    #[test]
    fn test_equality_checks_every_axis() {
        let a = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector::new(1.0, 2.0, 3.0));
        assert_ne!(a, Vector::new(0.0, 2.0, 3.0));
        assert_ne!(a, Vector::new(1.0, 0.0, 3.0));
        assert_ne!(a, Vector::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector::new(4.0, 0.0, 0.0).sqr_magnitude(), 16.0);
        assert_eq!(Vector::new(1.0, 2.0, 2.0).length(), 3.0);
    }

    #[test]
    fn test_magnitude_xy_ignores_z() {
        assert_eq!(Vector::new(4.0, 3.0, 9.0).magnitude_xy(), 5.0);
        assert_eq!(Vector::new(0.0, 0.0, 7.0).length_xy(), 0.0);
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector::ZERO.is_zero());
        assert!(Vector::new(-0.0, 0.0, -0.0).is_zero());
        assert!(!Vector::new(0.0, 0.0, 1e-30).is_zero());
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector::new(3.0, 0.0, 4.0);
        v.normalize();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(v.x(), 0.6, epsilon = 1e-6);
        assert_relative_eq!(v.z(), 0.8, epsilon = 1e-6);
        assert_eq!(v.unused_axis(), 0.0);
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let v = Vector::ZERO.normal();
        assert!(v.x().is_nan());
        assert_eq!(v.unused_axis(), 0.0);
    }

    #[test]
    fn test_normalize_safe_skips_zero() {
        let mut v = Vector::ZERO;
        v.normalize_safe();
        assert_eq!(v, Vector::ZERO);
        assert_ne!(v.length(), 1.0);

        assert_relative_eq!(Vector::splat(2.0).unit_safe().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vector::new(1.0, 2.0, 3.0).dot(Vector::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(Vector::dot_product(Vector::X, Vector::Y), 0.0);
        assert_eq!(Vector::X.dot(Vector::X), 1.0);
        assert_eq!(Vector::X.dot(-Vector::X), -1.0);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vector::X.cross(Vector::Y), Vector::Z);
        assert_eq!(Vector::Y.cross(Vector::Z), Vector::X);
        assert_eq!(Vector::Z.cross(Vector::X), Vector::Y);
        assert_eq!(Vector::Y.cross(Vector::X), -Vector::Z);

        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vector::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_reflection_normalizes_plane_normal() {
        let v = Vector::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflection(Vector::new(0.0, 5.0, 0.0)), Vector::new(1.0, 1.0, 0.0));

        let mut m = Vector::new(2.0, 3.0, -4.0);
        m.mirror(Vector::Z);
        assert_eq!(m, Vector::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_negate_keeps_unused_lane_positive() {
        let mut v = Vector::new(1.0, -2.0, 3.0);
        v.negate();
        assert_eq!(v, Vector::new(-1.0, 2.0, -3.0));
        assert!(v.unused_axis().is_sign_positive());
    }

    #[test]
    fn test_projection() {
        let v = Vector::new(2.0, 3.0, 4.0);
        assert_eq!(v.projection_on_to(Vector::new(4.0, 0.0, 0.0)), Vector::new(2.0, 0.0, 0.0));
        assert_eq!(v.projection_on_to_normal(Vector::Y), Vector::new(0.0, 3.0, 0.0));

        let mut p = v;
        p.project_on_to(Vector::new(0.0, 0.0, -2.0));
        assert_eq!(p, Vector::new(0.0, 0.0, 4.0));

        let mut n = v;
        n.project_on_to_normal(Vector::X);
        assert_eq!(n, Vector::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_rejection() {
        let v = Vector::new(2.0, 3.0, 4.0);
        assert_eq!(v.rejection_to(Vector::new(0.0, 2.0, 0.0)), Vector::new(2.0, 0.0, 4.0));
        assert_eq!(v.rejection_to_normal(Vector::Z), Vector::new(2.0, 3.0, 0.0));

        let mut r = v;
        r.reject_to(Vector::new(2.0, 0.0, 0.0));
        assert_eq!(r, Vector::new(0.0, 3.0, 4.0));

        let mut rn = v;
        rn.reject_to_normal(Vector::Y);
        assert_eq!(rn, Vector::new(2.0, 0.0, 4.0));
        assert_eq!(rn.dot(Vector::Y), 0.0);
    }

    #[test]
    fn test_array_conversion() {
        let v: Vector = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vector::new(1.0, 2.0, 3.0));
        let arr: [f32; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }
}
