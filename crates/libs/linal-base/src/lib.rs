//! # linal-base
//! Fixed-size linear algebra for small dimensions.
//! Contains vectors, matrices, quaternions and colors generic over their
//! numeric element type, with the promotion rules used when element types
//! are mixed.

#![warn(missing_docs)]

pub mod color;
pub mod dim;
pub mod error;
pub mod matrix;
pub mod num;
pub mod quat;
pub mod units;
pub mod vector;

pub use color::{Color, ColorDisplayMode, DisplayColor};
pub use matrix::{Determinant, Inverse, Mat2, Mat3, Mat4, Matrix};
pub use num::{ApproxEq, Numeric, Promote, Real};
pub use quat::Quat;
pub use vector::{Vec2, Vec3, Vec4, Vector};

static_assertions::assert_eq_size!(Vector<f32, 4>, [f32; 4]);
static_assertions::assert_eq_size!(Matrix<f64, 3, 2>, [f64; 6]);
static_assertions::assert_eq_size!(Quat<f32>, [f32; 4]);
static_assertions::assert_eq_size!(Color, [f32; 4]);
static_assertions::assert_impl_all!(Vector<f64, 3>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Matrix<i32, 4, 4>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Quat<f32>: Copy, Send, Sync);
