//! Numeric element types and the promotion rules between them.
//!
//! Every aggregate type of the crate is generic over an element type
//! implementing [`Numeric`]. When two aggregates with different element
//! types are combined, the element type of the result is decided statically
//! by [`Promote`], once per operator and pair of input types.

use num_traits::{Float, FloatConst, Num, NumCast};
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// Trait for converting from one primitive numeric type to another.
///
/// The conversion follows the semantics of `as`: floats are truncated
/// towards zero and saturated when converted to integers, integers wrap when
/// narrowed.
pub trait NumericCast<T> {
    /// Casts `self` to `T`.
    fn cast(&self) -> T;
}

macro_rules! impl_numeric_cast {
    ($t0:ty as $($t1:ty),*) => {
        $(
            impl NumericCast<$t1> for $t0 {
                #[inline(always)]
                fn cast(&self) -> $t1 { *self as $t1 }
            }
        )*
    };
}

macro_rules! impl_numeric_cast_all {
    ($($t:ty),*) => {
        $(
            impl_numeric_cast!($t as i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )*
    };
}

impl_numeric_cast_all!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Element type of vectors, matrices and quaternions.
///
/// Implemented for the fixed-width integers and the two floating point types.
pub trait Numeric:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Num
    + NumCast
    + Send
    + Sync
    + 'static
    + NumericCast<i8>
    + NumericCast<i16>
    + NumericCast<i32>
    + NumericCast<i64>
    + NumericCast<u8>
    + NumericCast<u16>
    + NumericCast<u32>
    + NumericCast<u64>
    + NumericCast<f32>
    + NumericCast<f64>
{
    /// Floating point type produced when the element is divided by a `f32`,
    /// e.g. the type of a magnitude.
    type Real: Real;

    /// Whether the type is a floating point type.
    const IS_FLOAT: bool;

    /// Converts the value to its floating point counterpart.
    fn to_real(self) -> Self::Real;

    /// Whether the value is zero, or within machine epsilon of zero for
    /// floating point types.
    fn near_zero(self) -> bool;
}

/// Floating point element types.
pub trait Real: Numeric<Real = Self> + Float + FloatConst {}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                type Real = f32;

                const IS_FLOAT: bool = false;

                #[inline(always)]
                fn to_real(self) -> f32 { self as f32 }

                #[inline(always)]
                fn near_zero(self) -> bool { self == 0 }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ident),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                type Real = $t;

                const IS_FLOAT: bool = true;

                #[inline(always)]
                fn to_real(self) -> $t { self }

                #[inline(always)]
                fn near_zero(self) -> bool { self.abs() <= $t::EPSILON }
            }

            impl Real for $t {}
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_numeric_float!(f32, f64);

/// Binary arithmetic operator applied on two values of the same type.
pub trait BinaryOp {
    /// Applies the operator.
    fn apply<T: Numeric>(a: T, b: T) -> T;
}

/// Marker of the addition operator.
#[derive(Debug, Copy, Clone)]
pub struct OpAdd;

/// Marker of the subtraction operator.
#[derive(Debug, Copy, Clone)]
pub struct OpSub;

/// Marker of the multiplication operator.
#[derive(Debug, Copy, Clone)]
pub struct OpMul;

/// Marker of the division operator.
#[derive(Debug, Copy, Clone)]
pub struct OpDiv;

impl BinaryOp for OpAdd {
    #[inline(always)]
    fn apply<T: Numeric>(a: T, b: T) -> T { a + b }
}

impl BinaryOp for OpSub {
    #[inline(always)]
    fn apply<T: Numeric>(a: T, b: T) -> T { a - b }
}

impl BinaryOp for OpMul {
    #[inline(always)]
    fn apply<T: Numeric>(a: T, b: T) -> T { a * b }
}

impl BinaryOp for OpDiv {
    #[inline(always)]
    fn apply<T: Numeric>(a: T, b: T) -> T { a / b }
}

/// Result type of `Self op Rhs`.
///
/// `Output` is the type both operands are converted to before the operator
/// is applied, mirroring the usual arithmetic conversions:
///
/// * a floating point operand wins over an integer one, `f64` over `f32`;
/// * integers narrower than 32 bits, identical or not, meet at `i32`;
/// * identical types of 32 bits or more are kept;
/// * otherwise the wider integer wins; at equal width the unsigned one.
pub trait Promote<Rhs: Numeric, Op: BinaryOp>: Numeric {
    /// The promoted type.
    type Output: Numeric;

    /// Converts the left-hand operand to the promoted type.
    fn lhs(self) -> <Self as Promote<Rhs, Op>>::Output;

    /// Converts the right-hand operand to the promoted type.
    fn rhs(rhs: Rhs) -> <Self as Promote<Rhs, Op>>::Output;

    /// Promotes both operands and applies the operator.
    #[inline(always)]
    fn apply(self, rhs: Rhs) -> <Self as Promote<Rhs, Op>>::Output {
        Op::apply(
            <Self as Promote<Rhs, Op>>::lhs(self),
            <Self as Promote<Rhs, Op>>::rhs(rhs),
        )
    }
}

/// Equality after promotion that never mistakes a negative value for a
/// large unsigned one.
#[inline]
pub fn promoted_eq<T: Promote<U, OpSub>, U: Numeric>(a: T, b: U) -> bool {
    if (a < T::zero()) != (b < U::zero()) {
        return false;
    }
    <T as Promote<U, OpSub>>::lhs(a) == <T as Promote<U, OpSub>>::rhs(b)
}

/// Element type of `T + U`.
pub type AddType<T, U> = <T as Promote<U, OpAdd>>::Output;
/// Element type of `T - U`.
pub type SubType<T, U> = <T as Promote<U, OpSub>>::Output;
/// Element type of `T * U`.
pub type MulType<T, U> = <T as Promote<U, OpMul>>::Output;
/// Element type of `T / U`.
pub type DivType<T, U> = <T as Promote<U, OpDiv>>::Output;

/// Approximate equality with an absolute tolerance.
///
/// Two values compare equal when the absolute difference of every pair of
/// components is less than or equal to `max_diff`.
pub trait ApproxEq<Rhs = Self> {
    /// Type of the tolerance.
    type Diff;

    /// Compares `self` and `other` with an absolute tolerance.
    fn approx_eq(&self, other: &Rhs, max_diff: Self::Diff) -> bool;
}

/// Compares `a` and `b` component-wise with an absolute tolerance.
#[inline]
pub fn approx_eq<A: ApproxEq<B>, B>(a: &A, b: &B, max_diff: A::Diff) -> bool {
    a.approx_eq(b, max_diff)
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty);* $(;)?) => {
        $(
            impl<Op: BinaryOp> Promote<$rhs, Op> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn lhs(self) -> $out { self as $out }

                #[inline(always)]
                fn rhs(rhs: $rhs) -> $out { rhs as $out }
            }

            impl ApproxEq<$rhs> for $lhs {
                type Diff = $out;

                #[inline]
                fn approx_eq(&self, other: &$rhs, max_diff: $out) -> bool {
                    abs_diff(*self as $out, *other as $out) <= max_diff
                }
            }
        )*
    };
}

#[rustfmt::skip]
impl_promote! {
    i8, i8 => i32; i8, i16 => i32; i8, i32 => i32; i8, i64 => i64; i8, u8 => i32;
    i8, u16 => i32; i8, u32 => u32; i8, u64 => u64; i8, f32 => f32; i8, f64 => f64;
    i16, i8 => i32; i16, i16 => i32; i16, i32 => i32; i16, i64 => i64; i16, u8 => i32;
    i16, u16 => i32; i16, u32 => u32; i16, u64 => u64; i16, f32 => f32; i16, f64 => f64;
    i32, i8 => i32; i32, i16 => i32; i32, i32 => i32; i32, i64 => i64; i32, u8 => i32;
    i32, u16 => i32; i32, u32 => u32; i32, u64 => u64; i32, f32 => f32; i32, f64 => f64;
    i64, i8 => i64; i64, i16 => i64; i64, i32 => i64; i64, i64 => i64; i64, u8 => i64;
    i64, u16 => i64; i64, u32 => i64; i64, u64 => u64; i64, f32 => f32; i64, f64 => f64;
    u8, i8 => i32; u8, i16 => i32; u8, i32 => i32; u8, i64 => i64; u8, u8 => i32;
    u8, u16 => i32; u8, u32 => u32; u8, u64 => u64; u8, f32 => f32; u8, f64 => f64;
    u16, i8 => i32; u16, i16 => i32; u16, i32 => i32; u16, i64 => i64; u16, u8 => i32;
    u16, u16 => i32; u16, u32 => u32; u16, u64 => u64; u16, f32 => f32; u16, f64 => f64;
    u32, i8 => u32; u32, i16 => u32; u32, i32 => u32; u32, i64 => i64; u32, u8 => u32;
    u32, u16 => u32; u32, u32 => u32; u32, u64 => u64; u32, f32 => f32; u32, f64 => f64;
    u64, i8 => u64; u64, i16 => u64; u64, i32 => u64; u64, i64 => u64; u64, u8 => u64;
    u64, u16 => u64; u64, u32 => u64; u64, u64 => u64; u64, f32 => f32; u64, f64 => f64;
    f32, i8 => f32; f32, i16 => f32; f32, i32 => f32; f32, i64 => f32; f32, u8 => f32;
    f32, u16 => f32; f32, u32 => f32; f32, u64 => f32; f32, f32 => f32; f32, f64 => f64;
    f64, i8 => f64; f64, i16 => f64; f64, i32 => f64; f64, i64 => f64; f64, u8 => f64;
    f64, u16 => f64; f64, u32 => f64; f64, u64 => f64; f64, f32 => f64; f64, f64 => f64;
}

/// Machine epsilon for double precision floating point numbers.
pub const MACHINE_EPSILON_F64: f64 = f64::EPSILON * 0.5;

/// Machine epsilon for single precision floating point numbers.
pub const MACHINE_EPSILON_F32: f32 = f32::EPSILON * 0.5;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// The full circle constant, 2π.
pub const TAU: f64 = std::f64::consts::TAU;

/// One full turn in radians.
pub const FULL_TURN: f64 = TAU;

/// Factor converting radians to degrees.
pub const RAD_TO_DEG: f64 = 360.0 / FULL_TURN;

/// Factor converting degrees to radians.
pub const DEG_TO_RAD: f64 = FULL_TURN / 360.0;

/// Absolute difference of two values; never underflows for unsigned types.
#[inline(always)]
pub fn abs_diff<T: Numeric>(a: T, b: T) -> T {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Equality test of two floating point numbers.
///
/// # Arguments
///
/// * `a`: The first number.
/// * `b`: The second number.
///
/// returns: bool
pub fn ulp_eq(a: f32, b: f32) -> bool {
    let diff = (a - b).abs();
    let a_abs = a.abs();
    let b_abs = b.abs();
    if a == b {
        true
    } else if a == 0.0 || b == 0.0 || a_abs < f32::MIN_POSITIVE || b_abs < f32::MIN_POSITIVE {
        diff < (f32::MIN_POSITIVE * f32::EPSILON)
    } else {
        (diff / f32::min(a_abs + b_abs, f32::MAX)) < f32::EPSILON
    }
}

/// Clamps `value` between `min` and `max`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn clamp<T: Numeric>(value: T, min: T, max: T) -> T {
    assert!(min <= max, "clamp: min ({min}) is greater than max ({max})");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` between 0 and 1.
pub fn clamp01<T: Numeric>(value: T) -> T { clamp(value, T::zero(), T::one()) }

/// Linear interpolation between `a` and `b`; `t` is not clamped.
#[inline]
pub fn lerp<F: Real>(t: F, a: F, b: F) -> F { a * (F::one() - t) + b * t }

/// Linear interpolation between `a` and `b` with `t` clamped to [0, 1].
#[inline]
pub fn lerp_clamp<F: Real>(t: F, a: F, b: F) -> F { lerp(clamp01(t), a, b) }

/// Inverse of [`lerp`]: the parameter `t` for which `lerp(t, a, b) == x`.
///
/// Returns 0 when `a == b`.
pub fn inverse_lerp<F: Real>(x: F, a: F, b: F) -> F {
    if a == b {
        F::zero()
    } else {
        (x - a) / (b - a)
    }
}

/// [`inverse_lerp`] clamped to [0, 1].
pub fn inverse_lerp_clamp01<F: Real>(x: F, a: F, b: F) -> F { clamp01(inverse_lerp(x, a, b)) }

/// Reduces an angle in radians to the range (-2π, 2π) keeping its sign.
#[inline]
pub fn wrap_full_turn<F: Real>(angle: F) -> F { angle % F::TAU() }
