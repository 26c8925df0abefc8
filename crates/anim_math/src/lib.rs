//! # anim_math - Packed Vector Math for Animation
//!
//! 3D vectors stored in four-lane registers with one reserved lane, plus
//! quaternion construction from Euler angles. Enable the `simd` feature to
//! route lane arithmetic through SSE on `x86_64`.

pub mod lanes;
pub mod vector;
pub mod ops;
pub mod text;
pub mod quaternion;
pub mod error;

pub use lanes::*;
pub use vector::*;
pub use quaternion::*;
pub use error::ParseVectorError;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const FRAC_PI_2: f32 = PI / 2.0;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const EPSILON: f32 = 1e-6;
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * consts::DEG_TO_RAD
}

pub mod prelude {
    pub use crate::lanes::Lanes;
    pub use crate::vector::{Axis, Vector};
    pub use crate::quaternion::Quaternion;
    pub use crate::error::ParseVectorError;
    pub use crate::radians;
}
