//! Quaternions and rotations in ZYX order.

use crate::{
    num::{
        abs_diff, promoted_eq, wrap_full_turn, AddType, ApproxEq, DivType, MulType, Numeric,
        NumericCast, OpAdd, OpDiv, OpMul, OpSub, Promote, Real, SubType,
    },
    vector::Vector,
};
use core::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub},
};

/// A quaternion `w + xi + yj + zk`.
///
/// Rotations are represented by unit quaternions, but any value is allowed.
#[derive(Debug, Copy, Clone)]
pub struct Quat<T> {
    /// Real part.
    pub w: T,
    /// First imaginary component.
    pub x: T,
    /// Second imaginary component.
    pub y: T,
    /// Third imaginary component.
    pub z: T,
}

impl<T: Numeric> Quat<T> {
    /// Creates a quaternion from its real part and its imaginary components.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self { Self { w, x, y, z } }

    /// The identity rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self { Self::new(T::one(), T::zero(), T::zero(), T::zero()) }

    /// The zero quaternion.
    #[inline]
    pub fn zero() -> Self { Self::new(T::zero(), T::zero(), T::zero(), T::zero()) }

    /// All components set to one.
    #[inline]
    pub fn one() -> Self { Self::new(T::one(), T::one(), T::one(), T::one()) }

    /// Components in `w, x, y, z` order.
    #[inline]
    pub fn to_vector(&self) -> Vector<T, 4> { Vector::new([self.w, self.x, self.y, self.z]) }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector<T, 3> { Vector::new([self.x, self.y, self.z]) }

    /// Iterates over the components in `w, x, y, z` order.
    pub fn iter(&self) -> impl Iterator<Item = T> { [self.w, self.x, self.y, self.z].into_iter() }

    /// Applies `f` to every component.
    pub fn map<U: Numeric, F: FnMut(T) -> U>(self, mut f: F) -> Quat<U> {
        Quat::new(f(self.w), f(self.x), f(self.y), f(self.z))
    }

    /// Converts to another element type with `as` semantics.
    pub fn cast<U: Numeric>(self) -> Quat<U>
    where
        T: NumericCast<U>,
    {
        self.map(|v| NumericCast::<U>::cast(&v))
    }

    /// Sum of the squared components.
    pub fn sqr_magnitude(&self) -> T { self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z }

    /// Euclidean norm.
    pub fn magnitude(&self) -> T::Real { num_traits::Float::sqrt(self.sqr_magnitude().to_real()) }

    /// Quaternion of unit magnitude; the components of a zero quaternion
    /// become NaN.
    pub fn normalized(&self) -> Quat<T::Real> {
        let m = self.magnitude();
        self.map(|v| v.to_real() / m)
    }

    /// Euler angles `(x, y, z)` (roll, pitch, yaw) of the rotation in
    /// radians.
    ///
    /// Near the gimbal lock (pitch of ±π/2) the argument of the arcsine may
    /// leave [-1, 1] by rounding, giving a NaN pitch.
    pub fn to_euler(&self) -> Vector<T::Real, 3> {
        use num_traits::Float;
        let q = self.normalized();
        let one = <T::Real as num_traits::One>::one();
        let two = one + one;
        let x = Float::atan2(two * (q.w * q.x + q.y * q.z), one - two * (q.x * q.x + q.y * q.y));
        let y = Float::asin(two * (q.w * q.y - q.z * q.x));
        let z = Float::atan2(two * (q.w * q.z + q.x * q.y), one - two * (q.y * q.y + q.z * q.z));
        Vector::new([x, y, z])
    }

    /// [`to_euler`](Self::to_euler) in degrees.
    pub fn to_euler_deg(&self) -> Vector<T::Real, 3> { self.to_euler().map(num_traits::Float::to_degrees) }
}

impl<T: Numeric + Neg<Output = T>> Quat<T> {
    /// `w - xi - yj - zk`.
    pub fn conjugate(&self) -> Self { Self::new(self.w, -self.x, -self.y, -self.z) }

    /// Conjugate divided by the squared magnitude.
    ///
    /// The zero quaternion has no inverse: the zero quaternion is returned
    /// instead.
    pub fn inverse(&self) -> Self {
        let sqr = self.sqr_magnitude();
        if sqr.near_zero() {
            log::debug!("inverting a zero quaternion, using the zero quaternion as its inverse");
            return Self::zero();
        }
        self.conjugate().map(|v| v / sqr)
    }
}

/// The identity rotation.
impl<T: Numeric> Default for Quat<T> {
    fn default() -> Self { Self::identity() }
}

impl<T: Numeric, U: Numeric + NumericCast<T>> From<Vector<U, 4>> for Quat<T> {
    fn from(v: Vector<U, 4>) -> Self {
        Self::new(
            NumericCast::<T>::cast(&v[0]),
            NumericCast::<T>::cast(&v[1]),
            NumericCast::<T>::cast(&v[2]),
            NumericCast::<T>::cast(&v[3]),
        )
    }
}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.w,
            1 => &self.x,
            2 => &self.y,
            3 => &self.z,
            _ => panic!("index {i} out of range for a quaternion"),
        }
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.w,
            1 => &mut self.x,
            2 => &mut self.y,
            3 => &mut self.z,
            _ => panic!("index {i} out of range for a quaternion"),
        }
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self { self.map(|v| -v) }
}

macro_rules! impl_componentwise_ops {
    ($($op:ident, $marker:ident, $out:ident);*) => {
        paste::paste! {
            $(
                impl<T, U> $op<Quat<U>> for Quat<T>
                where
                    T: Promote<U, $marker>,
                    U: Numeric,
                {
                    type Output = Quat<$out<T, U>>;

                    fn [<$op:lower>](self, rhs: Quat<U>) -> Self::Output {
                        Quat::new(
                            <T as Promote<U, $marker>>::apply(self.w, rhs.w),
                            <T as Promote<U, $marker>>::apply(self.x, rhs.x),
                            <T as Promote<U, $marker>>::apply(self.y, rhs.y),
                            <T as Promote<U, $marker>>::apply(self.z, rhs.z),
                        )
                    }
                }
            )*
        }
    };
}

impl_componentwise_ops!(Add, OpAdd, AddType; Sub, OpSub, SubType);

macro_rules! impl_scalar_ops {
    ($($s:ty),*) => {
        $(
            impl<T: Promote<$s, OpMul>> Mul<$s> for Quat<T> {
                type Output = Quat<MulType<T, $s>>;

                fn mul(self, rhs: $s) -> Self::Output { self.map(|v| <T as Promote<$s, OpMul>>::apply(v, rhs)) }
            }

            impl<T: Promote<$s, OpDiv>> Div<$s> for Quat<T> {
                type Output = Quat<DivType<T, $s>>;

                fn div(self, rhs: $s) -> Self::Output { self.map(|v| <T as Promote<$s, OpDiv>>::apply(v, rhs)) }
            }

            impl<T: Numeric> Mul<Quat<T>> for $s
            where
                $s: Promote<T, OpMul>,
            {
                type Output = Quat<MulType<$s, T>>;

                fn mul(self, rhs: Quat<T>) -> Self::Output { rhs.map(|v| <$s as Promote<T, OpMul>>::apply(self, v)) }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Hamilton product.
impl<T, U> Mul<Quat<U>> for Quat<T>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    type Output = Quat<MulType<T, U>>;

    fn mul(self, rhs: Quat<U>) -> Self::Output {
        let a = self.map(<T as Promote<U, OpMul>>::lhs);
        let b = rhs.map(<T as Promote<U, OpMul>>::rhs);
        Quat::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

/// Rotates a vector: `2(u·v)u + (s² - u·u)v + 2s(u×v)`, `s` being the real
/// part and `u` the imaginary part of the quaternion.
impl<T, U> Mul<Vector<U, 3>> for Quat<T>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    type Output = Vector<MulType<T, U>, 3>;

    fn mul(self, rhs: Vector<U, 3>) -> Self::Output {
        let q = self.map(<T as Promote<U, OpMul>>::lhs);
        let v = rhs.map(<T as Promote<U, OpMul>>::rhs);
        let (s, u) = (q.w, q.vector_part());
        let two = num_traits::one::<MulType<T, U>>() + num_traits::one();
        let uv = u[0] * v[0] + u[1] * v[1] + u[2] * v[2];
        let uu = u[0] * u[0] + u[1] * u[1] + u[2] * u[2];
        let uxv = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        Vector::from_fn(|i| two * uv * u[i] + (s * s - uu) * v[i] + two * s * uxv[i])
    }
}

/// Exact component-wise comparison after promotion.
impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| promoted_eq(a, b))
    }
}

impl<T, U> ApproxEq<Quat<U>> for Quat<T>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    type Diff = SubType<T, U>;

    fn approx_eq(&self, other: &Quat<U>, max_diff: Self::Diff) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| {
            abs_diff(<T as Promote<U, OpSub>>::lhs(a), <T as Promote<U, OpSub>>::rhs(b)) <= max_diff
        })
    }
}

macro_rules! impl_approx_traits {
    ($($t:ty),*) => {
        $(
            impl approx::AbsDiffEq for Quat<$t> {
                type Epsilon = $t;

                fn default_epsilon() -> $t { <$t as approx::AbsDiffEq>::default_epsilon() }

                fn abs_diff_eq(&self, other: &Self, epsilon: $t) -> bool {
                    self.iter().zip(other.iter()).all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(&a, &b, epsilon))
                }
            }

            impl approx::RelativeEq for Quat<$t> {
                fn default_max_relative() -> $t { <$t as approx::RelativeEq>::default_max_relative() }

                fn relative_eq(&self, other: &Self, epsilon: $t, max_relative: $t) -> bool {
                    self.iter()
                        .zip(other.iter())
                        .all(|(a, b)| approx::RelativeEq::relative_eq(&a, &b, epsilon, max_relative))
                }
            }

            impl approx::UlpsEq for Quat<$t> {
                fn default_max_ulps() -> u32 { <$t as approx::UlpsEq>::default_max_ulps() }

                fn ulps_eq(&self, other: &Self, epsilon: $t, max_ulps: u32) -> bool {
                    self.iter().zip(other.iter()).all(|(a, b)| approx::UlpsEq::ulps_eq(&a, &b, epsilon, max_ulps))
                }
            }
        )*
    };
}

impl_approx_traits!(f32, f64);

/// Writes `(w + xi + yj + zk)`, forwarding the precision to every component.
impl<T: Numeric> Display for Quat<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.p$} + {:.p$}i + {:.p$}j + {:.p$}k)",
                self.w,
                self.x,
                self.y,
                self.z,
                p = p
            ),
            None => write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z),
        }
    }
}

/// Serialized as `[w, x, y, z]`.
impl<T: Numeric + serde::Serialize> serde::Serialize for Quat<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_vector(), serializer)
    }
}

impl<'de, T: Numeric + serde::Deserialize<'de>> serde::Deserialize<'de> for Quat<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = <Vector<T, 4> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(v[0], v[1], v[2], v[3]))
    }
}

/// Rotation from Euler angles in radians, applied in ZYX order: `x` is the
/// roll, `y` the pitch and `z` the yaw.
///
/// Every angle is first reduced modulo a full turn.
pub fn rotation_from_euler<F: Real>(x: F, y: F, z: F) -> Quat<F> {
    let half = F::one() / (F::one() + F::one());
    let (sx, cx) = (wrap_full_turn(x) * half).sin_cos();
    let (sy, cy) = (wrap_full_turn(y) * half).sin_cos();
    let (sz, cz) = (wrap_full_turn(z) * half).sin_cos();
    Quat::new(
        cx * cy * cz + sx * sy * sz,
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
    )
}

/// [`rotation_from_euler`] with the angles given as a vector.
pub fn rotation_from_euler_vec<T: Numeric>(angles: &Vector<T, 3>) -> Quat<T::Real> {
    let a = angles.map(Numeric::to_real);
    rotation_from_euler(a[0], a[1], a[2])
}

/// [`rotation_from_euler`] with angles in degrees.
pub fn rotation_from_euler_deg<F: Real>(x: F, y: F, z: F) -> Quat<F> {
    rotation_from_euler(x.to_radians(), y.to_radians(), z.to_radians())
}

/// [`rotation_from_euler_vec`] with angles in degrees.
pub fn rotation_from_euler_deg_vec<T: Numeric>(angles: &Vector<T, 3>) -> Quat<T::Real> {
    let a = angles.map(Numeric::to_real);
    rotation_from_euler_deg(a[0], a[1], a[2])
}

/// Rotation of `angle` radians around `axis`.
///
/// The axis is used as given; pass a unit vector to get a unit quaternion.
pub fn rotation_around_axis<F, T>(angle: F, axis: &Vector<T, 3>) -> Quat<MulType<T, F>>
where
    F: Real,
    T: Promote<F, OpMul>,
{
    let half = F::one() / (F::one() + F::one());
    let (s, c) = (angle * half).sin_cos();
    let s = <T as Promote<F, OpMul>>::rhs(s);
    let a = axis.map(<T as Promote<F, OpMul>>::lhs);
    Quat::new(<T as Promote<F, OpMul>>::rhs(c), s * a[0], s * a[1], s * a[2])
}

/// [`rotation_around_axis`] with the angle in degrees.
pub fn rotation_around_axis_deg<F, T>(angle: F, axis: &Vector<T, 3>) -> Quat<MulType<T, F>>
where
    F: Real,
    T: Promote<F, OpMul>,
{
    rotation_around_axis(angle.to_radians(), axis)
}
