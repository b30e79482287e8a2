//! Fixed-size vectors.

use crate::{
    dim::{Const, DimMax, MaxVector},
    num::{
        abs_diff, clamp, clamp01, promoted_eq, AddType, ApproxEq, DivType, MulType, NumericCast,
        Numeric, OpAdd, OpDiv, OpMul, OpSub, Promote, Real, SubType,
    },
};
use core::{
    fmt::{Display, Formatter},
    marker::PhantomData,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};
use num_traits::Signed;

/// An ordered sequence of `N` numeric components.
///
/// The length is part of the type and at least 1. The first four components
/// are reachable through [`x`](Self::x), [`y`](Self::y), [`z`](Self::z) and
/// [`w`](Self::w), every component through indexing.
///
/// Vectors of different element types and lengths can be added and
/// subtracted: the element type of the result is the promoted type of both
/// operands and its length is the larger one, the shorter operand being
/// padded with zeros.
#[derive(Debug, Copy, Clone)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// Two-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// Three-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// Four-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// Creates a [`Vector`] from its components.
///
/// ```
/// use linal_base::vector;
///
/// let v = vector![1.0f32, 2.0, 3.0];
/// assert_eq!(v.z(), 3.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($x:expr),+ $(,)?) => {
        $crate::vector::Vector::new([$($x),+])
    };
}

impl<T: Numeric, const N: usize> Vector<T, N> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        const { assert!(N >= 1, "a vector has at least one component") };
        Self(data)
    }

    /// Creates a vector whose `i`-th component is `f(i)`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self { Self::new(core::array::from_fn(f)) }

    /// Creates a vector from the first `N` values of `values`; missing
    /// components are zero.
    pub fn from_slice(values: &[T]) -> Self { Self::from_fn(|i| values.get(i).copied().unwrap_or_else(T::zero)) }

    /// Creates a vector from at most `N` values of any numeric type, cast to
    /// `T`; missing trailing components are zero.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` values are given.
    pub fn from_values<U: Numeric + NumericCast<T>>(values: &[U]) -> Self {
        assert!(
            values.len() <= N,
            "{} values given to a vector of {} components",
            values.len(),
            N
        );
        Self::from_fn(|i| match values.get(i) {
            Some(v) => NumericCast::<T>::cast(v),
            None => T::zero(),
        })
    }

    /// Creates a vector with every component set to `value`.
    #[inline]
    pub fn full_of(value: T) -> Self { Self::new([value; N]) }

    /// The all-zero vector.
    #[inline]
    pub fn zero() -> Self { Self::full_of(T::zero()) }

    /// The all-one vector.
    #[inline]
    pub fn one() -> Self { Self::full_of(T::one()) }

    /// Unit vector along the first axis.
    pub fn right() -> Self { Vector::new([T::one(), T::zero(), T::zero()]).resize() }

    /// Unit vector along the second axis.
    pub fn up() -> Self { Vector::new([T::zero(), T::one(), T::zero()]).resize() }

    /// Unit vector along the third axis.
    pub fn forward() -> Self { Vector::new([T::zero(), T::zero(), T::one()]).resize() }

    /// Returns the number of components.
    #[inline(always)]
    pub const fn count(&self) -> usize { N }

    /// Returns the first component.
    #[inline]
    pub fn x(&self) -> T { self.0[0] }

    /// Returns the second component.
    #[inline]
    pub fn y(&self) -> T {
        const { assert!(N >= 2, "the vector has no y component") };
        self.0[1]
    }

    /// Returns the third component.
    #[inline]
    pub fn z(&self) -> T {
        const { assert!(N >= 3, "the vector has no z component") };
        self.0[2]
    }

    /// Returns the fourth component.
    #[inline]
    pub fn w(&self) -> T {
        const { assert!(N >= 4, "the vector has no w component") };
        self.0[3]
    }

    /// Returns the `i`-th component, `None` if out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<T> { self.0.get(i).copied() }

    /// Sets the `i`-th component.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) { self[i] = value; }

    /// Returns the `i`-th component, zero past the end of the vector.
    #[inline(always)]
    pub(crate) fn padded(&self, i: usize) -> T {
        match self.0.get(i) {
            Some(v) => *v,
            None => T::zero(),
        }
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.0.iter() }

    /// Returns an iterator over mutable references to the components.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.0.iter_mut() }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U: Numeric, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> { Vector::new(self.0.map(f)) }

    /// Truncates or zero-pads the vector to `M` components.
    pub fn resize<const M: usize>(self) -> Vector<T, M> { Vector::from_fn(|i| self.padded(i)) }

    /// Converts to another element type and length with `as` semantics:
    /// values may be truncated, extra components are dropped and missing
    /// ones are zero.
    pub fn cast<U: Numeric, const M: usize>(self) -> Vector<U, M>
    where
        T: NumericCast<U>,
    {
        Vector::from_fn(|i| match self.0.get(i) {
            Some(v) => NumericCast::<U>::cast(v),
            None => U::zero(),
        })
    }

    /// Lossless conversion to a wider element type and a length at least as
    /// long; missing components are zero.
    pub fn convert<U: Numeric, const M: usize>(self) -> Vector<U, M>
    where
        T: Into<U>,
    {
        const { assert!(N <= M, "a conversion cannot drop components, use `cast`") };
        Vector::from_fn(|i| match self.0.get(i) {
            Some(v) => (*v).into(),
            None => U::zero(),
        })
    }

    /// Sum of the squared components.
    pub fn sqr_magnitude(&self) -> T { self.0.iter().fold(T::zero(), |acc, v| acc + *v * *v) }

    /// Euclidean length.
    pub fn magnitude(&self) -> T::Real { num_traits::Float::sqrt(self.sqr_magnitude().to_real()) }

    /// The vector divided by its magnitude.
    ///
    /// The zero vector has no direction: its components become NaN.
    pub fn normalized(&self) -> Vector<T::Real, N> {
        let magnitude = self.magnitude();
        self.map(|v| v.to_real() / magnitude)
    }
}

impl<T: Numeric + Signed, const N: usize> Vector<T, N> {
    /// Unit vector along the negative first axis.
    pub fn left() -> Self { -Self::right() }

    /// Unit vector along the negative second axis.
    pub fn down() -> Self { -Self::up() }

    /// Unit vector along the negative third axis.
    pub fn back() -> Self { -Self::forward() }
}

impl<T: Numeric, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zero() }
}

impl<T: Numeric, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self { Self::new(data) }
}

impl<T: Numeric, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Numeric, const N: usize> FromIterator<T> for Vector<T, N> {
    /// Takes up to `N` values from the iterator; missing components are zero.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut data = [T::zero(); N];
        for (slot, v) in data.iter_mut().zip(iter) {
            *slot = v;
        }
        Self::new(data)
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.0.get(i) {
            Some(v) => v,
            None => panic!("index {i} out of range for a vector of {N} components"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.0.get_mut(i) {
            Some(v) => v,
            None => panic!("index {i} out of range for a vector of {N} components"),
        }
    }
}

impl<T: Numeric + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self { self.map(|v| -v) }
}

macro_rules! impl_padded_ops {
    ($($op:ident, $marker:ident, $out:ident);*) => {
        paste::paste! {
            $(
                impl<T, U, const N: usize, const M: usize> $op<Vector<U, M>> for Vector<T, N>
                where
                    T: Promote<U, $marker>,
                    U: Numeric,
                    Const<N>: DimMax<Const<M>>,
                {
                    type Output = MaxVector<$out<T, U>, N, M>;

                    fn [<$op:lower>](self, rhs: Vector<U, M>) -> Self::Output {
                        <Const<N> as DimMax<Const<M>>>::vector_from_fn(|i| {
                            <T as Promote<U, $marker>>::apply(self.padded(i), rhs.padded(i))
                        })
                    }
                }

                impl<T, U, const N: usize, const M: usize> $op<&Vector<U, M>> for &Vector<T, N>
                where
                    T: Promote<U, $marker>,
                    U: Numeric,
                    Const<N>: DimMax<Const<M>>,
                {
                    type Output = MaxVector<$out<T, U>, N, M>;

                    fn [<$op:lower>](self, rhs: &Vector<U, M>) -> Self::Output { (*self).[<$op:lower>](*rhs) }
                }

                impl<T: Numeric, const N: usize> [<$op Assign>] for Vector<T, N> {
                    fn [<$op:lower _assign>](&mut self, rhs: Self) {
                        for (a, b) in self.0.iter_mut().zip(rhs.0) {
                            *a = $op::[<$op:lower>](*a, b);
                        }
                    }
                }
            )*
        }
    };
}

impl_padded_ops!(Add, OpAdd, AddType; Sub, OpSub, SubType);

macro_rules! impl_scalar_ops {
    ($($s:ty),*) => {
        $(
            impl<T: Promote<$s, OpMul>, const N: usize> Mul<$s> for Vector<T, N> {
                type Output = Vector<MulType<T, $s>, N>;

                fn mul(self, rhs: $s) -> Self::Output {
                    self.map(|v| <T as Promote<$s, OpMul>>::apply(v, rhs))
                }
            }

            impl<T: Promote<$s, OpDiv>, const N: usize> Div<$s> for Vector<T, N> {
                type Output = Vector<DivType<T, $s>, N>;

                fn div(self, rhs: $s) -> Self::Output {
                    self.map(|v| <T as Promote<$s, OpDiv>>::apply(v, rhs))
                }
            }

            impl<T: Numeric, const N: usize> Mul<Vector<T, N>> for $s
            where
                $s: Promote<T, OpMul>,
            {
                type Output = Vector<MulType<$s, T>, N>;

                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|v| <$s as Promote<T, OpMul>>::apply(self, v))
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T: Numeric, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) { self.0.iter_mut().for_each(|v| *v = *v * rhs); }
}

impl<T: Numeric, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) { self.0.iter_mut().for_each(|v| *v = *v / rhs); }
}

/// Exact comparison after promotion; the extra components of the longer
/// vector must be zero.
impl<T, U, const N: usize, const M: usize> PartialEq<Vector<U, M>> for Vector<T, N>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    fn eq(&self, other: &Vector<U, M>) -> bool {
        (0..N.max(M)).all(|i| promoted_eq(self.padded(i), other.padded(i)))
    }
}

/// Component-wise comparison with an absolute tolerance; the shorter vector
/// is padded with zeros.
impl<T, U, const N: usize, const M: usize> ApproxEq<Vector<U, M>> for Vector<T, N>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    type Diff = SubType<T, U>;

    fn approx_eq(&self, other: &Vector<U, M>, max_diff: Self::Diff) -> bool {
        (0..N.max(M)).all(|i| {
            let a = <T as Promote<U, OpSub>>::lhs(self.padded(i));
            let b = <T as Promote<U, OpSub>>::rhs(other.padded(i));
            abs_diff(a, b) <= max_diff
        })
    }
}

macro_rules! impl_approx_traits {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> approx::AbsDiffEq for Vector<$t, N> {
                type Epsilon = $t;

                fn default_epsilon() -> $t { <$t as approx::AbsDiffEq>::default_epsilon() }

                fn abs_diff_eq(&self, other: &Self, epsilon: $t) -> bool {
                    self.0.iter().zip(other.0.iter()).all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
                }
            }

            impl<const N: usize> approx::RelativeEq for Vector<$t, N> {
                fn default_max_relative() -> $t { <$t as approx::RelativeEq>::default_max_relative() }

                fn relative_eq(&self, other: &Self, epsilon: $t, max_relative: $t) -> bool {
                    self.0
                        .iter()
                        .zip(other.0.iter())
                        .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
                }
            }

            impl<const N: usize> approx::UlpsEq for Vector<$t, N> {
                fn default_max_ulps() -> u32 { <$t as approx::UlpsEq>::default_max_ulps() }

                fn ulps_eq(&self, other: &Self, epsilon: $t, max_ulps: u32) -> bool {
                    self.0.iter().zip(other.0.iter()).all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
                }
            }
        )*
    };
}

impl_approx_traits!(f32, f64);

/// Writes `(c0; c1; ...)`, forwarding the precision to every component.
impl<T: Numeric, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        write!(f, ")")
    }
}

impl<T: Numeric + serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(N)?;
        for v in &self.0 {
            tuple.serialize_element(v)?;
        }
        tuple.end()
    }
}

impl<'de, T: Numeric + serde::Deserialize<'de>, const N: usize> serde::Deserialize<'de> for Vector<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T: Numeric + serde::Deserialize<'de>, const N: usize> serde::de::Visitor<'de> for VectorVisitor<T, N> {
            type Value = Vector<T, N>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of {} numbers", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut data = [T::zero(); N];
                for (i, slot) in data.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector::new(data))
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

/// Dot product over the shorter length; the extra components of the longer
/// vector are ignored.
pub fn dot<T, U, const N: usize, const M: usize>(v0: &Vector<T, N>, v1: &Vector<U, M>) -> MulType<T, U>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    v0.0.iter()
        .zip(v1.0.iter())
        .fold(num_traits::zero::<MulType<T, U>>(), |acc, (a, b)| acc + <T as Promote<U, OpMul>>::apply(*a, *b))
}

/// Right-handed cross product.
pub fn cross<T, U>(v0: &Vector<T, 3>, v1: &Vector<U, 3>) -> Vector<MulType<T, U>, 3>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    let a = v0.map(<T as Promote<U, OpMul>>::lhs);
    let b = v1.map(<T as Promote<U, OpMul>>::rhs);
    Vector::new([
        a.y() * b.z() - a.z() * b.y(),
        a.z() * b.x() - a.x() * b.z(),
        a.x() * b.y() - a.y() * b.x(),
    ])
}

/// Squared magnitude of `v0 - v1`.
pub fn sqr_dist<T, U, const N: usize, const M: usize>(v0: &Vector<T, N>, v1: &Vector<U, M>) -> SubType<T, U>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    (0..N.max(M)).fold(num_traits::zero::<SubType<T, U>>(), |acc, i| {
        let d = <T as Promote<U, OpSub>>::apply(v0.padded(i), v1.padded(i));
        acc + d * d
    })
}

/// Magnitude of `v0 - v1`.
pub fn dist<T, U, const N: usize, const M: usize>(
    v0: &Vector<T, N>,
    v1: &Vector<U, M>,
) -> <SubType<T, U> as Numeric>::Real
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    num_traits::Float::sqrt(sqr_dist(v0, v1).to_real())
}

/// Angle in radians between two vectors.
///
/// The dot product of the normalized operands is clamped to [-1, 1] so that
/// rounding errors on (anti)parallel vectors do not produce NaN.
pub fn angle<T, U, const N: usize, const M: usize>(
    v0: &Vector<T, N>,
    v1: &Vector<U, M>,
) -> MulType<T::Real, U::Real>
where
    T: Numeric,
    U: Numeric,
    T::Real: Promote<U::Real, OpMul>,
    MulType<T::Real, U::Real>: Real,
{
    let cos = dot(&v0.normalized(), &v1.normalized());
    let one = num_traits::one::<MulType<T::Real, U::Real>>();
    num_traits::Float::acos(clamp(cos, -one, one))
}

/// Angle in degrees between two vectors.
pub fn angle_deg<T, U, const N: usize, const M: usize>(
    v0: &Vector<T, N>,
    v1: &Vector<U, M>,
) -> MulType<T::Real, U::Real>
where
    T: Numeric,
    U: Numeric,
    T::Real: Promote<U::Real, OpMul>,
    MulType<T::Real, U::Real>: Real,
{
    num_traits::Float::to_degrees(angle(v0, v1))
}

/// Component-wise product. The result has the larger length, components past
/// the shorter vector are zero.
pub fn scale<T, U, const N: usize, const M: usize>(v0: &Vector<T, N>, v1: &Vector<U, M>) -> MaxVector<MulType<T, U>, N, M>
where
    T: Promote<U, OpMul>,
    U: Numeric,
    Const<N>: DimMax<Const<M>>,
{
    <Const<N> as DimMax<Const<M>>>::vector_from_fn(|i| {
        <T as Promote<U, OpMul>>::apply(v0.padded(i), v1.padded(i))
    })
}

/// Element type of an interpolation between a vector of `T` and a vector of
/// `U` with a parameter of type `F`.
pub type LerpType<F, T, U> = AddType<MulType<T, F>, MulType<U, F>>;

/// Linear interpolation `v0 * (1 - t) + v1 * t`, `t` is not clamped.
///
/// The result has the larger length, the shorter vector being zero-padded.
pub fn lerp<F, T, U, const N: usize, const M: usize>(
    t: F,
    v0: &Vector<T, N>,
    v1: &Vector<U, M>,
) -> MaxVector<LerpType<F, T, U>, N, M>
where
    F: Real,
    T: Promote<F, OpMul>,
    U: Promote<F, OpMul>,
    MulType<T, F>: Promote<MulType<U, F>, OpAdd>,
    Const<N>: DimMax<Const<M>>,
{
    let s = F::one() - t;
    <Const<N> as DimMax<Const<M>>>::vector_from_fn(|i| {
        let a = <T as Promote<F, OpMul>>::apply(v0.padded(i), s);
        let b = <U as Promote<F, OpMul>>::apply(v1.padded(i), t);
        <MulType<T, F> as Promote<MulType<U, F>, OpAdd>>::apply(a, b)
    })
}

/// [`lerp`] with `t` clamped to [0, 1].
pub fn lerp_clamp<F, T, U, const N: usize, const M: usize>(
    t: F,
    v0: &Vector<T, N>,
    v1: &Vector<U, M>,
) -> MaxVector<LerpType<F, T, U>, N, M>
where
    F: Real,
    T: Promote<F, OpMul>,
    U: Promote<F, OpMul>,
    MulType<T, F>: Promote<MulType<U, F>, OpAdd>,
    Const<N>: DimMax<Const<M>>,
{
    lerp(clamp01(t), v0, v1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::approx_eq;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn construction() {
        let v = Vector::<i32, 4>::from_slice(&[1, 2]);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
        let v = Vector::<i32, 2>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2]);
        let v = Vector::<f32, 3>::from_values(&[1u8, 2]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 0.0]);
        let v: Vector<u8, 3> = [7u8, 8, 9, 10].into_iter().collect();
        assert_eq!(v.as_slice(), &[7, 8, 9]);
        assert_eq!(Vector::<i64, 5>::default().as_slice(), &[0; 5]);
        assert_eq!(Vector::<u16, 2>::one().as_slice(), &[1, 1]);
        assert_eq!(Vector::<f64, 3>::full_of(2.5).as_slice(), &[2.5; 3]);
    }

    #[test]
    #[should_panic]
    fn too_many_values() { Vector::<i32, 2>::from_values(&[1, 2, 3]); }

    #[test]
    fn directions() {
        assert_eq!(Vector::<i32, 3>::right().as_slice(), &[1, 0, 0]);
        assert_eq!(Vector::<i32, 3>::left().as_slice(), &[-1, 0, 0]);
        assert_eq!(Vector::<f32, 4>::up().as_slice(), &[0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Vector::<f32, 3>::down().as_slice(), &[0.0, -1.0, 0.0]);
        assert_eq!(Vector::<i8, 3>::forward().as_slice(), &[0, 0, 1]);
        assert_eq!(Vector::<i8, 3>::back().as_slice(), &[0, 0, -1]);
        assert_eq!(Vector::<u8, 2>::forward().as_slice(), &[0, 0]);
    }

    #[test]
    fn accessors() {
        let mut v = vector![1i32, 2, 3, 4, 5];
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        assert_eq!(v[4], 5);
        v[4] = 6;
        v.set(0, -1);
        assert_eq!(v.get(4), Some(6));
        assert_eq!(v.get(5), None);
        assert_eq!(v.x(), -1);
        assert_eq!(v.count(), 5);
        assert_eq!(v.iter().sum::<i32>(), 14);
        for c in v.iter_mut() {
            *c *= 2;
        }
        assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![-2, 4, 6, 8, 12]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range() {
        let v = vector![1i32, 2, 3];
        let _ = v[3];
    }

    #[test]
    fn conversions() {
        let v = vector![1.7f32, -2.2, 3.9];
        let c: Vector<i32, 2> = v.cast();
        assert_eq!(c.as_slice(), &[1, -2]);
        let c: Vector<u8, 4> = vector![300i32, 2].cast();
        assert_eq!(c.as_slice(), &[44, 2, 0, 0]);
        let w: Vector<f64, 4> = v.convert();
        assert_eq!(w.as_slice(), &[1.7f32 as f64, -2.2f32 as f64, 3.9f32 as f64, 0.0]);
        let i: Vector<i64, 3> = vector![1i8, -1, 2].convert();
        assert_eq!(i.as_slice(), &[1, -1, 2]);
        assert_eq!(vector![1u8, 2].resize::<3>().as_slice(), &[1, 2, 0]);
        let a: [i32; 2] = vector![3i32, 4].into();
        assert_eq!(a, [3, 4]);
    }

    #[test]
    fn magnitude_and_normalization() {
        let v = vector![3i32, 4];
        assert_eq!(v.sqr_magnitude(), 25);
        assert_eq!(v.magnitude(), 5.0f32);
        let n = v.normalized();
        assert_relative_eq!(n, vector![0.6f32, 0.8]);
        assert_eq!(vector![0.0f64, 3.0].magnitude(), 3.0f64);
        assert!(Vector::<f64, 3>::zero().normalized().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn same_length_arithmetic() {
        let a = vector![1i32, 2, 3];
        let b = vector![4i32, 5, 6];
        assert_eq!(a + b, vector![5i32, 7, 9]);
        assert_eq!(b - a, vector![3i32, 3, 3]);
        assert_eq!(&a + &b, vector![5i32, 7, 9]);
        assert_eq!(-a, vector![-1i32, -2, -3]);
        let mut c = a;
        c += b;
        c -= vector![1i32, 1, 1];
        assert_eq!(c, vector![4i32, 6, 8]);
        c *= 2;
        c /= 4;
        assert_eq!(c, vector![2i32, 3, 4]);
    }

    #[test]
    fn mixed_arithmetic() {
        let a = vector![1i32, 2];
        let b = vector![0.5f32, 0.5, 0.5];
        let c: Vector<f32, 3> = a + b;
        assert_eq!(c.as_slice(), &[1.5, 2.5, 0.5]);
        let d: Vector<f32, 3> = a - b;
        assert_eq!(d.as_slice(), &[0.5, 1.5, -0.5]);
        let e: Vector<i32, 4> = vector![1u8, 2, 3, 4] - vector![2i8];
        assert_eq!(e.as_slice(), &[-1, 2, 3, 4]);
        let f: Vector<f64, 2> = vector![1.0f32, 2.0] + vector![1.0f64, 1.0];
        assert_eq!(f.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn narrow_components_widen_before_the_operation() {
        let sum: Vector<i32, 2> = vector![200u8, 200] + vector![100u8, 100];
        assert_eq!(sum, vector![300i32, 300]);
        let diff: Vector<i32, 1> = vector![-100i8] - vector![100i8];
        assert_eq!(diff, vector![-200i32]);
        let wide: Vector<i32, 2> = vector![60_000u16, 2] + vector![60_000u16];
        assert_eq!(wide, vector![120_000i32, 2]);
    }

    #[test]
    fn scalar_arithmetic() {
        let v = vector![1i32, 2, 3];
        let a: Vector<f32, 3> = v * 0.5f32;
        assert_eq!(a.as_slice(), &[0.5, 1.0, 1.5]);
        let b: Vector<f64, 3> = 2.0f64 * v;
        assert_eq!(b.as_slice(), &[2.0, 4.0, 6.0]);
        let c: Vector<i32, 3> = v / 2i32;
        assert_eq!(c.as_slice(), &[0, 1, 1]);
        let d: Vector<i64, 3> = v * 3i64;
        assert_eq!(d.as_slice(), &[3, 6, 9]);
    }

    #[test]
    fn equality_with_padding() {
        assert_eq!(vector![1i32, 2, 0], vector![1i32, 2]);
        assert_eq!(vector![1u8, 2], vector![1.0f32, 2.0, 0.0]);
        assert_ne!(vector![1i32, 2, 3], vector![1i32, 2]);
        assert_ne!(vector![1i32, 2], vector![1.5f64, 2.0]);
        assert_ne!(vector![-1i8, 0], vector![u32::MAX, 0]);
        assert_ne!(vector![u64::MAX], vector![-1i64]);
        assert!(approx_eq(&vector![1.0f32, 2.0], &vector![1.05f64, 2.0, 0.01], 0.1));
        assert!(!approx_eq(&vector![1.0f32, 2.0], &vector![1.0f64, 2.0, 0.2], 0.1));
    }

    #[test]
    fn products() {
        let a = vector![1i32, 2, 3];
        let b = vector![4i32, 5, 6, 100];
        assert_eq!(dot(&a, &b), 32);
        assert_eq!(dot(&vector![1.5f32], &vector![2i32, 3]), 3.0f32);
        assert_eq!(cross(&vector![1i32, 0, 0], &vector![0i32, 1, 0]), vector![0i32, 0, 1]);
        assert_eq!(cross(&vector![1.0f64, 2.0, 3.0], &vector![4i32, 5, 6]), vector![-3.0f64, 6.0, -3.0]);
        let s: Vector<i32, 4> = scale(&a, &b);
        assert_eq!(s.as_slice(), &[4, 10, 18, 0]);
    }

    #[test]
    fn distances_and_angles() {
        let a = vector![1i32, 1];
        let b = vector![4i32, 5, 0];
        assert_eq!(sqr_dist(&a, &b), 25);
        assert_eq!(dist(&a, &b), 5.0f32);
        assert_relative_eq!(angle(&vector![1.0f64, 0.0], &vector![0.0f64, 2.0]), core::f64::consts::FRAC_PI_2);
        assert_relative_eq!(angle_deg(&vector![1i32, 0], &vector![1i32, 1]), 45.0f32, epsilon = 1e-4);
        assert!(angle(&vector![2.0f64, 2.0], &vector![1.0f64, 1.0]) < 1e-6);
        assert!(angle(&vector![-1.0f64, 0.0], &vector![1.0f64, 0.0]).is_finite());
    }

    #[test]
    fn interpolation() {
        let a = vector![0.0f64, 10.0];
        let b = vector![10.0f64, 20.0, 4.0];
        let l: Vector<f64, 3> = lerp(0.5f64, &a, &b);
        assert_eq!(l.as_slice(), &[5.0, 15.0, 2.0]);
        let l: Vector<f64, 3> = lerp(2.0f64, &a, &b);
        assert_eq!(l.as_slice(), &[20.0, 30.0, 8.0]);
        let l: Vector<f64, 3> = lerp_clamp(2.0f64, &a, &b);
        assert_eq!(l.as_slice(), &[10.0, 20.0, 4.0]);
        let l: Vector<f32, 2> = lerp(0.25f32, &vector![0i32, 4], &vector![4i32, 0]);
        assert_eq!(l.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", vector![1i32, -2, 3]), "(1; -2; 3)");
        assert_eq!(format!("{}", vector![0.5f32]), "(0.5)");
        assert_eq!(format!("{:.2}", vector![1.0f64, 2.5]), "(1.00; 2.50)");
    }

    #[test]
    fn serialization() {
        let v = vector![1.5f32, -2.0, 3.0];
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.5,-2.0,3.0]");
        let back: Vector<f32, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        let yaml = serde_yaml::to_string(&vector![1i32, 2]).unwrap();
        let back: Vector<i32, 2> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, vector![1i32, 2]);
        assert!(serde_json::from_str::<Vector<i32, 3>>("[1, 2]").is_err());
    }

    proptest! {
        #[test]
        fn identities(data in prop::array::uniform5(-10_000i64..10_000)) {
            let v = Vector::new(data);
            prop_assert_eq!(v, v);
            prop_assert!(approx_eq(&v, &v, 0));
            prop_assert_eq!(v + Vector::<i64, 5>::zero(), v);
            prop_assert_eq!(v - v, Vector::<i64, 5>::zero());
        }

        #[test]
        fn cross_product_properties(
            a in prop::array::uniform3(-1000i64..1000),
            b in prop::array::uniform3(-1000i64..1000),
        ) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            prop_assert_eq!(cross(&a, &b), -cross(&b, &a));
            prop_assert_eq!(dot(&a, &cross(&a, &b)), 0);
        }

        #[test]
        fn padded_sum_matches_resized_sum(
            a in prop::array::uniform2(-1000i32..1000),
            b in prop::array::uniform4(-1000i32..1000),
        ) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            let sum: Vector<i32, 4> = a + b;
            prop_assert_eq!(sum, a.resize::<4>() + b);
        }
    }
}
