//! Operator implementations for Vector
//!
//! `+ - *` run across all four lanes: the unused lane is zero on both sides
//! and stays zero. Division builds scalar divisors with `1.0` in the unused
//! lane, and every vector divisor result is passed back through
//! [`Vector::from_lanes`] so `0 / 0` never survives in that lane.

use core::ops::{
    Add, AddAssign, BitOr, BitXor, BitXorAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use crate::lanes::Lanes;
use crate::vector::Vector;

/// Scalar broadcast to X, Y and Z with a zero unused lane
#[inline]
fn broadcast(value: f32) -> Lanes {
    Vector::splat(value).lanes()
}

/// Scalar broadcast for use as a divisor
#[inline]
fn divisor(value: f32) -> Lanes {
    Lanes::set(value, value, value, 1.0)
}

macro_rules! lane_wise {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        impl $trait for Vector {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Vector::from_lanes(self.lanes() $op rhs.lanes())
            }
        }
        impl $trait<f32> for Vector {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: f32) -> Self {
                Vector::from_lanes(self.lanes() $op broadcast(rhs))
            }
        }
        impl $trait<Vector> for f32 {
            type Output = Vector;
            #[inline]
            fn $method(self, rhs: Vector) -> Vector {
                Vector::from_lanes(broadcast(self) $op rhs.lanes())
            }
        }
        impl $assign for Vector {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
        impl $assign<f32> for Vector {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = *self $op rhs;
            }
        }
    };
}

lane_wise!(Add, add, AddAssign, add_assign, +);
lane_wise!(Sub, sub, SubAssign, sub_assign, -);
lane_wise!(Mul, mul, MulAssign, mul_assign, *);

impl Div for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Vector::from_lanes(self.lanes() / rhs.lanes())
    }
}

impl Div<f32> for Vector {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Vector::from_lanes(self.lanes() / divisor(rhs))
    }
}

impl Div<Vector> for f32 {
    type Output = Vector;
    #[inline]
    fn div(self, rhs: Vector) -> Vector {
        Vector::from_lanes(broadcast(self) / rhs.lanes())
    }
}

impl DivAssign for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Vector {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Dot product
impl BitOr for Vector {
    type Output = f32;
    #[inline]
    fn bitor(self, rhs: Self) -> f32 {
        self.dot(rhs)
    }
}

/// Cross product
impl BitXor for Vector {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

impl BitXorAssign for Vector {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.cross(rhs);
    }
}

impl Neg for Vector {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut v = self;
        v.negate();
        v
    }
}
