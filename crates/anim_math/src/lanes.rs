//! Four-lane packed register
//!
//! `Lanes` is the storage behind [`Vector`](crate::Vector) and
//! [`Quaternion`](crate::Quaternion): four `f32` lanes, 16-byte aligned, in
//! memory order `[0, 1, 2, 3]`. With the `simd` feature on `x86_64` the
//! lane-wise operations go through SSE intrinsics; otherwise they are plain
//! per-lane loops that the compiler is free to vectorize.

use core::ops::{Add, Div, Mul, Sub};

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
use core::arch::x86_64::*;

/// Number of lanes in a packed register
pub const LANE_COUNT: usize = 4;

/// Four packed `f32` lanes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Lanes(pub [f32; LANE_COUNT]);

impl Lanes {
    pub const ZERO: Self = Self([0.0; LANE_COUNT]);

    /// Create from lanes in memory order (lane 0 first)
    #[inline]
    pub const fn new(l0: f32, l1: f32, l2: f32, l3: f32) -> Self {
        Self([l0, l1, l2, l3])
    }

    /// Create from lanes in register order (lane 3 first), the way a packed
    /// set intrinsic takes its arguments.
    #[inline]
    pub const fn set(l3: f32, l2: f32, l1: f32, l0: f32) -> Self {
        Self([l0, l1, l2, l3])
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self([v; LANE_COUNT])
    }

    #[inline]
    pub const fn lane(self, index: usize) -> f32 {
        self.0[index]
    }

    #[inline]
    pub fn set_lane(&mut self, index: usize, value: f32) {
        self.0[index] = value;
    }

    #[inline]
    pub const fn to_array(self) -> [f32; LANE_COUNT] {
        self.0
    }

    /// Apply `f` to every lane
    #[inline]
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self(self.0.map(f))
    }

    /// Lane-wise equality as a 4-bit mask, bit `i` set when lane `i` matches
    #[inline]
    pub fn eq_mask(self, other: Self) -> u8 {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            let (a, b) = (sse::load(self), sse::load(other));
            unsafe { _mm_movemask_ps(_mm_cmpeq_ps(a, b)) as u8 }
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            self.0
                .iter()
                .zip(other.0.iter())
                .enumerate()
                .fold(0u8, |mask, (i, (a, b))| if a == b { mask | (1 << i) } else { mask })
        }
    }

    /// Pairwise horizontal add:
    /// `[a0 + a1, a2 + a3, b0 + b1, b2 + b3]`
    #[inline]
    pub fn hadd(self, other: Self) -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            let (a, b) = (sse::load(self), sse::load(other));
            // SSE2 only: gather even and odd lanes, then add them.
            unsafe {
                let even = _mm_shuffle_ps::<0b10_00_10_00>(a, b);
                let odd = _mm_shuffle_ps::<0b11_01_11_01>(a, b);
                sse::store(_mm_add_ps(even, odd))
            }
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            let (a, b) = (self.0, other.0);
            Self([a[0] + a[1], a[2] + a[3], b[0] + b[1], b[2] + b[3]])
        }
    }

    /// Cyclic rotation of lanes 1..=3, lane 0 untouched:
    /// `[l0, l1, l2, l3] -> [l0, l3, l1, l2]`
    #[inline]
    pub fn rotate_upper(self) -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            let a = sse::load(self);
            unsafe { sse::store(_mm_shuffle_ps::<0b10_01_11_00>(a, a)) }
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            let l = self.0;
            Self([l[0], l[3], l[1], l[2]])
        }
    }

    /// Flip the sign bit of every lane
    #[inline]
    pub fn flip_sign(self) -> Self {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        {
            let a = sse::load(self);
            unsafe { sse::store(_mm_xor_ps(a, _mm_set1_ps(-0.0))) }
        }
        #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
        {
            self.map(|v| f32::from_bits(v.to_bits() ^ 0x8000_0000))
        }
    }
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod sse {
    use super::Lanes;
    use core::arch::x86_64::*;

    #[inline(always)]
    pub(super) fn load(lanes: Lanes) -> __m128 {
        // Lanes is 16-byte aligned
        unsafe { _mm_load_ps(lanes.0.as_ptr()) }
    }

    #[inline(always)]
    pub(super) fn store(v: __m128) -> Lanes {
        let mut out = Lanes::ZERO;
        unsafe { _mm_store_ps(out.0.as_mut_ptr(), v) };
        out
    }
}

macro_rules! lane_op {
    ($trait:ident, $method:ident, $op:tt, $intrinsic:ident) => {
        impl $trait for Lanes {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                #[cfg(all(feature = "simd", target_arch = "x86_64"))]
                {
                    let (a, b) = (sse::load(self), sse::load(rhs));
                    unsafe { sse::store($intrinsic(a, b)) }
                }
                #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
                {
                    let (a, b) = (self.0, rhs.0);
                    Self([a[0] $op b[0], a[1] $op b[1], a[2] $op b[2], a[3] $op b[3]])
                }
            }
        }
    };
}

lane_op!(Add, add, +, _mm_add_ps);
lane_op!(Sub, sub, -, _mm_sub_ps);
lane_op!(Mul, mul, *, _mm_mul_ps);
lane_op!(Div, div, /, _mm_div_ps);
