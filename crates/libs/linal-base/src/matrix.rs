//! Fixed-size matrices stored column by column.

use crate::{
    num::{
        abs_diff, clamp01, AddType, ApproxEq, DivType, MulType, Numeric, NumericCast, OpAdd,
        OpDiv, OpMul, OpSub, Promote, Real, SubType,
    },
    vector::{dot, LerpType, Vector},
};
use core::{
    fmt::{Display, Formatter},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

/// A `R`×`C` grid of numeric values, stored as `C` column vectors of `R`
/// components.
#[derive(Debug, Copy, Clone)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, R>; C]);

/// Square matrix of size 2.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// Square matrix of size 3.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// Square matrix of size 4.
pub type Mat4<T> = Matrix<T, 4, 4>;

/// Element type of cofactors: signed products of minors.
pub type CofactorType<T> = MulType<T, i64>;

/// Element type of the inverse of a matrix of `T`; cofactors divided by the
/// determinant, both in the cofactor type.
pub type InverseType<T> = CofactorType<T>;

impl<T: Numeric, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from its columns.
    #[inline]
    pub const fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        const { assert!(R >= 1 && C >= 1, "a matrix has at least one row and one column") };
        Self(cols)
    }

    /// Creates a matrix whose cell `(row, col)` is `f(row, col)`.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_cols(core::array::from_fn(|c| Vector::from_fn(|r| f(r, c))))
    }

    /// Creates a matrix from at most `R * C` values in row-major order, cast
    /// to `T`; missing trailing cells are zero.
    ///
    /// # Panics
    ///
    /// Panics if more than `R * C` values are given.
    pub fn from_values<U: Numeric + NumericCast<T>>(values: &[U]) -> Self {
        assert!(
            values.len() <= R * C,
            "{} values given to a {}x{} matrix",
            values.len(),
            R,
            C
        );
        Self::from_fn(|r, c| match values.get(r * C + c) {
            Some(v) => NumericCast::<T>::cast(v),
            None => T::zero(),
        })
    }

    /// Creates a matrix from the first `R * C` values of `values` in
    /// row-major order; missing cells are zero.
    pub fn from_row_major(values: &[T]) -> Self {
        Self::from_fn(|r, c| values.get(r * C + c).copied().unwrap_or_else(T::zero))
    }

    /// Creates a matrix from rows of any size. Cells outside of `rows` are
    /// zero, values outside of the matrix are ignored.
    pub fn from_rows<const R2: usize, const C2: usize>(rows: [[T; C2]; R2]) -> Self {
        Self::from_fn(|r, c| match rows.get(r).and_then(|row| row.get(c)) {
            Some(v) => *v,
            None => T::zero(),
        })
    }

    /// Same as [`from_rows`](Self::from_rows) for rows of unequal lengths.
    pub fn from_rows_slice(rows: &[&[T]]) -> Self {
        Self::from_fn(|r, c| match rows.get(r).and_then(|row| row.get(c)) {
            Some(v) => *v,
            None => T::zero(),
        })
    }

    /// Creates a matrix with every cell set to `value`.
    #[inline]
    pub fn full_of(value: T) -> Self { Self::from_cols([Vector::full_of(value); C]) }

    /// The all-zero matrix.
    #[inline]
    pub fn zero() -> Self { Self::full_of(T::zero()) }

    /// The all-one matrix.
    #[inline]
    pub fn one() -> Self { Self::full_of(T::one()) }

    /// Ones on the main diagonal, zeros elsewhere.
    pub fn identity() -> Self { Self::from_fn(|r, c| if r == c { T::one() } else { T::zero() }) }

    /// Number of rows.
    #[inline(always)]
    pub const fn rows(&self) -> usize { R }

    /// Number of columns.
    #[inline(always)]
    pub const fn cols(&self) -> usize { C }

    /// Number of cells.
    #[inline(always)]
    pub const fn count(&self) -> usize { R * C }

    /// Returns the value of the cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside of the matrix.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T { self[(row, col)] }

    /// Returns a mutable reference to the cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside of the matrix.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut T { &mut self[(row, col)] }

    /// Copy of the `i`-th row.
    pub fn row(&self, i: usize) -> Vector<T, C> {
        assert!(i < R, "row {i} out of range for a {R}x{C} matrix");
        Vector::from_fn(|c| self.0[c].0[i])
    }

    /// Copy of the `j`-th column.
    pub fn col(&self, j: usize) -> Vector<T, R> {
        assert!(j < C, "column {j} out of range for a {R}x{C} matrix");
        self.0[j]
    }

    /// Overwrites the `i`-th row.
    pub fn set_row(&mut self, i: usize, row: &Vector<T, C>) {
        assert!(i < R, "row {i} out of range for a {R}x{C} matrix");
        for (col, v) in self.0.iter_mut().zip(row.iter()) {
            col.0[i] = *v;
        }
    }

    /// Overwrites the `j`-th column.
    pub fn set_col(&mut self, j: usize, col: &Vector<T, R>) {
        assert!(j < C, "column {j} out of range for a {R}x{C} matrix");
        self.0[j] = *col;
    }

    /// Applies `f` to every cell.
    pub fn map<U: Numeric, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, R, C> {
        Matrix::from_cols(self.0.map(|col| col.map(&mut f)))
    }

    /// Converts to another element type with `as` semantics.
    pub fn cast<U: Numeric>(self) -> Matrix<U, R, C>
    where
        T: NumericCast<U>,
    {
        self.map(|v| NumericCast::<U>::cast(&v))
    }

    /// Lossless conversion to a wider element type.
    pub fn convert<U: Numeric>(self) -> Matrix<U, R, C>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }

    /// Rows and columns swapped.
    pub fn transposed(&self) -> Matrix<T, C, R> { Matrix::from_fn(|r, c| self.at(c, r)) }

    /// The matrix with the `i`-th row removed; `R2` must be `R - 1`.
    pub fn without_row<const R2: usize>(&self, i: usize) -> Matrix<T, R2, C> {
        const { assert!(R2 + 1 == R, "removing a row leaves R - 1 rows") };
        assert!(i < R, "row {i} out of range for a {R}x{C} matrix");
        Matrix::from_fn(|r, c| self.at(if r < i { r } else { r + 1 }, c))
    }

    /// The matrix with the `j`-th column removed; `C2` must be `C - 1`.
    pub fn without_col<const C2: usize>(&self, j: usize) -> Matrix<T, R, C2> {
        const { assert!(C2 + 1 == C, "removing a column leaves C - 1 columns") };
        assert!(j < C, "column {j} out of range for a {R}x{C} matrix");
        Matrix::from_cols(core::array::from_fn(|c| self.0[if c < j { c } else { c + 1 }]))
    }

    /// The matrix with the `i`-th row and the `j`-th column removed.
    pub fn minor<const R2: usize, const C2: usize>(&self, i: usize, j: usize) -> Matrix<T, R2, C2> {
        self.without_row::<R2>(i).without_col::<C2>(j)
    }

    /// Resizes the matrix to `R2`×`C2` with element type `U`.
    ///
    /// Cells present in both matrices are cast, new cells are `f(row, col)`.
    pub fn augment<const R2: usize, const C2: usize, U, F>(&self, mut f: F) -> Matrix<U, R2, C2>
    where
        U: Numeric,
        T: NumericCast<U>,
        F: FnMut(usize, usize) -> U,
    {
        Matrix::from_fn(|r, c| {
            if r < R && c < C {
                NumericCast::<U>::cast(&self.0[c].0[r])
            } else {
                f(r, c)
            }
        })
    }

    /// [`augment`](Self::augment) keeping the element type.
    pub fn augment_with<const R2: usize, const C2: usize, F>(&self, mut f: F) -> Matrix<T, R2, C2>
    where
        F: FnMut(usize, usize) -> T,
    {
        Matrix::from_fn(|r, c| if r < R && c < C { self.0[c].0[r] } else { f(r, c) })
    }
}

impl<T: Numeric, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self { Self::zero() }
}

impl<T: Numeric, const R: usize, const C: usize> From<[Vector<T, R>; C]> for Matrix<T, R, C> {
    fn from(cols: [Vector<T, R>; C]) -> Self { Self::from_cols(cols) }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < R && col < C, "cell ({row}, {col}) out of range for a {R}x{C} matrix");
        &self.0[col].0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < R && col < C, "cell ({row}, {col}) out of range for a {R}x{C} matrix");
        &mut self.0[col].0[row]
    }
}

/// Determinant and cofactors of square matrices.
///
/// Products are accumulated in the cofactor type, so narrow integer
/// elements do not overflow while the expansion is computed.
pub trait Determinant {
    /// Element type of the matrix.
    type Element: Promote<i64, OpMul>;

    /// Matrix of the cofactors.
    type Cofactors;

    /// Determinant by cofactor expansion along the first row, in the
    /// cofactor type.
    fn wide_determinant(&self) -> CofactorType<Self::Element>;

    /// Determinant converted back to the element type, wrapping like `as`
    /// when it does not fit.
    fn determinant(&self) -> Self::Element;

    /// Signed determinant of the minor obtained by removing `row` and `col`.
    fn cofactor(&self, row: usize, col: usize) -> CofactorType<Self::Element>;

    /// Matrix of every cofactor.
    fn cofactor_matrix(&self) -> Self::Cofactors;
}

impl<T> Determinant for Matrix<T, 1, 1>
where
    T: Promote<i64, OpMul>,
    CofactorType<T>: NumericCast<T>,
{
    type Element = T;
    type Cofactors = Matrix<CofactorType<T>, 1, 1>;

    fn wide_determinant(&self) -> CofactorType<T> { <T as Promote<i64, OpMul>>::lhs(self.at(0, 0)) }

    fn determinant(&self) -> T { self.at(0, 0) }

    fn cofactor(&self, row: usize, col: usize) -> CofactorType<T> {
        assert!(row == 0 && col == 0, "cell ({row}, {col}) out of range for a 1x1 matrix");
        num_traits::one()
    }

    fn cofactor_matrix(&self) -> Self::Cofactors { Matrix::one() }
}

macro_rules! impl_determinant {
    ($($n:literal, $m:literal);* $(;)?) => {
        $(
            impl<T> Determinant for Matrix<T, $n, $n>
            where
                T: Promote<i64, OpMul>,
                CofactorType<T>: NumericCast<T>,
            {
                type Element = T;
                type Cofactors = Matrix<CofactorType<T>, $n, $n>;

                fn wide_determinant(&self) -> CofactorType<T> {
                    let at = |r: usize, c: usize| <T as Promote<i64, OpMul>>::lhs(self.at(r, c));
                    if $n == 2 {
                        return at(0, 0) * at(1, 1) - at(0, 1) * at(1, 0);
                    }
                    (0..$n).fold(num_traits::zero::<CofactorType<T>>(), |acc, j| {
                        let term = self.minor::<$m, $m>(0, j).wide_determinant() * at(0, j);
                        if j % 2 == 0 {
                            acc + term
                        } else {
                            acc - term
                        }
                    })
                }

                fn determinant(&self) -> T { NumericCast::<T>::cast(&self.wide_determinant()) }

                fn cofactor(&self, row: usize, col: usize) -> CofactorType<T> {
                    let minor = self.minor::<$m, $m>(row, col).wide_determinant();
                    if (row + col) % 2 == 0 {
                        minor
                    } else {
                        num_traits::zero::<CofactorType<T>>() - minor
                    }
                }

                fn cofactor_matrix(&self) -> Self::Cofactors { Matrix::from_fn(|r, c| self.cofactor(r, c)) }
            }
        )*
    };
}

impl_determinant!(2, 1; 3, 2; 4, 3; 5, 4; 6, 5; 7, 6; 8, 7);

/// Matrix inversion.
///
/// A singular matrix has no inverse: the zero matrix is returned instead.
/// Non-square matrices are first padded into the smallest square matrix
/// containing them, the new diagonal cells being 1.
pub trait Inverse {
    /// Type of the inverse.
    type Output;

    /// Inverse by the adjugate method.
    fn inverse(&self) -> Self::Output;
}

macro_rules! impl_inverse_square {
    ($($n:literal),*) => {
        $(
            impl<T> Inverse for Matrix<T, $n, $n>
            where
                T: Promote<i64, OpMul>,
                CofactorType<T>: NumericCast<T>,
            {
                type Output = Matrix<InverseType<T>, $n, $n>;

                fn inverse(&self) -> Self::Output {
                    let det = self.wide_determinant();
                    if det == num_traits::zero::<CofactorType<T>>() {
                        log::debug!("singular {}x{} matrix, using the zero matrix as its inverse", $n, $n);
                        return Matrix::zero();
                    }
                    self.cofactor_matrix().transposed().map(|v| v / det)
                }
            }
        )*
    };
}

impl_inverse_square!(1, 2, 3, 4, 5, 6, 7, 8);

macro_rules! impl_inverse_padded {
    ($r:literal; $($c:literal),+) => {
        $(
            impl<T: Numeric> Inverse for Matrix<T, $r, $c>
            where
                Matrix<T, { if $r > $c { $r } else { $c } }, { if $r > $c { $r } else { $c } }>: Inverse,
            {
                type Output = <Matrix<T, { if $r > $c { $r } else { $c } }, { if $r > $c { $r } else { $c } }> as Inverse>::Output;

                fn inverse(&self) -> Self::Output {
                    self.augment_with::<{ if $r > $c { $r } else { $c } }, { if $r > $c { $r } else { $c } }, _>(|r, c| {
                        if r == c {
                            T::one()
                        } else {
                            T::zero()
                        }
                    })
                    .inverse()
                }
            }
        )+
    };
}

impl_inverse_padded!(1; 2, 3, 4, 5, 6, 7, 8);
impl_inverse_padded!(2; 1, 3, 4, 5, 6, 7, 8);
impl_inverse_padded!(3; 1, 2, 4, 5, 6, 7, 8);
impl_inverse_padded!(4; 1, 2, 3, 5, 6, 7, 8);
impl_inverse_padded!(5; 1, 2, 3, 4, 6, 7, 8);
impl_inverse_padded!(6; 1, 2, 3, 4, 5, 7, 8);
impl_inverse_padded!(7; 1, 2, 3, 4, 5, 6, 8);
impl_inverse_padded!(8; 1, 2, 3, 4, 5, 6, 7);

impl<T: Numeric + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self { self.map(|v| -v) }
}

macro_rules! impl_cellwise_ops {
    ($($op:ident, $marker:ident, $out:ident);*) => {
        paste::paste! {
            $(
                impl<T, U, const R: usize, const C: usize> $op<Matrix<U, R, C>> for Matrix<T, R, C>
                where
                    T: Promote<U, $marker>,
                    U: Numeric,
                {
                    type Output = Matrix<$out<T, U>, R, C>;

                    fn [<$op:lower>](self, rhs: Matrix<U, R, C>) -> Self::Output {
                        Matrix::from_fn(|r, c| <T as Promote<U, $marker>>::apply(self.at(r, c), rhs.at(r, c)))
                    }
                }

                impl<T: Numeric, const R: usize, const C: usize> [<$op Assign>] for Matrix<T, R, C> {
                    fn [<$op:lower _assign>](&mut self, rhs: Self) {
                        for (a, b) in self.0.iter_mut().zip(rhs.0) {
                            a.[<$op:lower _assign>](b);
                        }
                    }
                }
            )*
        }
    };
}

impl_cellwise_ops!(Add, OpAdd, AddType; Sub, OpSub, SubType);

macro_rules! impl_scalar_ops {
    ($($s:ty),*) => {
        $(
            impl<T: Promote<$s, OpMul>, const R: usize, const C: usize> Mul<$s> for Matrix<T, R, C> {
                type Output = Matrix<MulType<T, $s>, R, C>;

                fn mul(self, rhs: $s) -> Self::Output { self.map(|v| <T as Promote<$s, OpMul>>::apply(v, rhs)) }
            }

            impl<T: Promote<$s, OpDiv>, const R: usize, const C: usize> Div<$s> for Matrix<T, R, C> {
                type Output = Matrix<DivType<T, $s>, R, C>;

                fn div(self, rhs: $s) -> Self::Output { self.map(|v| <T as Promote<$s, OpDiv>>::apply(v, rhs)) }
            }

            impl<T: Numeric, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for $s
            where
                $s: Promote<T, OpMul>,
            {
                type Output = Matrix<MulType<$s, T>, R, C>;

                fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
                    rhs.map(|v| <$s as Promote<T, OpMul>>::apply(self, v))
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Product with a column vector: the dot product of every row with `rhs`.
impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    type Output = Vector<MulType<T, U>, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output { Vector::from_fn(|i| dot(&self.row(i), &rhs)) }
}

/// Row-by-column product.
impl<T, U, const R: usize, const C: usize, const K: usize> Mul<Matrix<U, C, K>> for Matrix<T, R, C>
where
    T: Promote<U, OpMul>,
    U: Numeric,
{
    type Output = Matrix<MulType<T, U>, R, K>;

    fn mul(self, rhs: Matrix<U, C, K>) -> Self::Output { Matrix::from_fn(|i, j| dot(&self.row(i), &rhs.0[j])) }
}

/// Exact cell-wise comparison after promotion.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool { self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b) }
}

impl<T, U, const R: usize, const C: usize> ApproxEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U, OpSub>,
    U: Numeric,
{
    type Diff = SubType<T, U>;

    fn approx_eq(&self, other: &Matrix<U, R, C>, max_diff: Self::Diff) -> bool {
        (0..R).all(|r| {
            (0..C).all(|c| {
                let a = <T as Promote<U, OpSub>>::lhs(self.at(r, c));
                let b = <T as Promote<U, OpSub>>::rhs(other.at(r, c));
                abs_diff(a, b) <= max_diff
            })
        })
    }
}

macro_rules! impl_approx_traits {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> approx::AbsDiffEq for Matrix<$t, R, C> {
                type Epsilon = $t;

                fn default_epsilon() -> $t { <$t as approx::AbsDiffEq>::default_epsilon() }

                fn abs_diff_eq(&self, other: &Self, epsilon: $t) -> bool {
                    self.0.iter().zip(other.0.iter()).all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
                }
            }

            impl<const R: usize, const C: usize> approx::RelativeEq for Matrix<$t, R, C> {
                fn default_max_relative() -> $t { <$t as approx::RelativeEq>::default_max_relative() }

                fn relative_eq(&self, other: &Self, epsilon: $t, max_relative: $t) -> bool {
                    self.0
                        .iter()
                        .zip(other.0.iter())
                        .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
                }
            }

            impl<const R: usize, const C: usize> approx::UlpsEq for Matrix<$t, R, C> {
                fn default_max_ulps() -> u32 { <$t as approx::UlpsEq>::default_max_ulps() }

                fn ulps_eq(&self, other: &Self, epsilon: $t, max_ulps: u32) -> bool {
                    self.0.iter().zip(other.0.iter()).all(|(a, b)| approx::UlpsEq::ulps_eq(a, b, epsilon, max_ulps))
                }
            }
        )*
    };
}

impl_approx_traits!(f32, f64);

/// Writes the rows between brackets, one per line, every cell right-aligned
/// to the widest one: `[( 1; -2)\n (30;  4)]`.
impl<T: Numeric, const R: usize, const C: usize> Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let cells: Vec<String> = (0..R)
            .flat_map(|r| (0..C).map(move |c| (r, c)))
            .map(|(r, c)| match f.precision() {
                Some(p) => format!("{:.*}", p, self.at(r, c)),
                None => format!("{}", self.at(r, c)),
            })
            .collect();
        let width = cells.iter().map(|s| s.chars().count()).max().unwrap_or(0);

        write!(f, "[")?;
        for (r, row) in cells.chunks(C).enumerate() {
            if r > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "(")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "{:>width$}", cell)?;
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}

/// Serialized as a sequence of rows.
impl<T: Numeric + serde::Serialize, const R: usize, const C: usize> serde::Serialize for Matrix<T, R, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(R)?;
        for i in 0..R {
            tuple.serialize_element(&self.row(i))?;
        }
        tuple.end()
    }
}

impl<'de, T: Numeric + serde::Deserialize<'de>, const R: usize, const C: usize> serde::Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

        impl<'de, T: Numeric + serde::Deserialize<'de>, const R: usize, const C: usize> serde::de::Visitor<'de>
            for MatrixVisitor<T, R, C>
        {
            type Value = Matrix<T, R, C>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of {} rows of {} numbers", R, C)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut m = Matrix::<T, R, C>::zero();
                for i in 0..R {
                    let row: Vector<T, C> = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                    m.set_row(i, &row);
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(R, MatrixVisitor::<T, R, C>(PhantomData))
    }
}

/// Cell-wise linear interpolation `m0 * (1 - t) + m1 * t`, `t` is not
/// clamped.
pub fn lerp<F, T, U, const R: usize, const C: usize>(
    t: F,
    m0: &Matrix<T, R, C>,
    m1: &Matrix<U, R, C>,
) -> Matrix<LerpType<F, T, U>, R, C>
where
    F: Real,
    T: Promote<F, OpMul>,
    U: Promote<F, OpMul>,
    MulType<T, F>: Promote<MulType<U, F>, OpAdd>,
{
    let s = F::one() - t;
    Matrix::from_fn(|r, c| {
        let a = <T as Promote<F, OpMul>>::apply(m0.at(r, c), s);
        let b = <U as Promote<F, OpMul>>::apply(m1.at(r, c), t);
        <MulType<T, F> as Promote<MulType<U, F>, OpAdd>>::apply(a, b)
    })
}

/// [`lerp`] with `t` clamped to [0, 1].
pub fn lerp_clamp<F, T, U, const R: usize, const C: usize>(
    t: F,
    m0: &Matrix<T, R, C>,
    m1: &Matrix<U, R, C>,
) -> Matrix<LerpType<F, T, U>, R, C>
where
    F: Real,
    T: Promote<F, OpMul>,
    U: Promote<F, OpMul>,
    MulType<T, F>: Promote<MulType<U, F>, OpAdd>,
{
    lerp(clamp01(t), m0, m1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{num::approx_eq, vector};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn sample() -> Matrix<i32, 2, 3> { Matrix::from_rows([[1, 2, 3], [4, 5, 6]]) }

    #[test]
    fn construction() {
        let m = Matrix::<f32, 2, 2>::from_values(&[1u8, 2, 3]);
        assert_eq!(m, Matrix::<f32, 2, 2>::from_rows([[1.0, 2.0], [3.0, 0.0]]));
        let m = Matrix::<i32, 2, 2>::from_row_major(&[1, 2, 3, 4, 5]);
        assert_eq!(m.row(1), vector![3i32, 4]);
        let m = Matrix::<i32, 3, 3>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.row(0), vector![1i32, 2, 0]);
        assert_eq!(m.row(2), vector![0i32, 0, 0]);
        let m = Matrix::<i32, 2, 2>::from_rows_slice(&[&[1, 2, 3], &[4]]);
        assert_eq!(m, Matrix::<i32, 2, 2>::from_rows([[1, 2], [4, 0]]));
        let m = Matrix::<u8, 2, 3>::from_cols([vector![1u8, 4], vector![2u8, 5], vector![3u8, 6]]);
        assert_eq!(m.cast::<i32>(), sample());
        assert_eq!(Matrix::<i64, 2, 3>::default(), Matrix::<i64, 2, 3>::zero());
        assert_eq!(Matrix::<i32, 2, 2>::one().row(1), vector![1i32, 1]);
        assert_eq!(
            Matrix::<i32, 2, 3>::identity(),
            Matrix::<i32, 2, 3>::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[test]
    #[should_panic]
    fn too_many_values() { Matrix::<i32, 2, 2>::from_values(&[1, 2, 3, 4, 5]); }

    #[test]
    fn access() {
        let mut m = sample();
        assert_eq!((m.rows(), m.cols(), m.count()), (2, 3, 6));
        assert_eq!(m.at(1, 2), 6);
        assert_eq!(m[(0, 1)], 2);
        *m.at_mut(0, 0) = 10;
        m[(1, 0)] = 40;
        assert_eq!(m.col(0), vector![10i32, 40]);
        m.set_row(0, &vector![7i32, 8, 9]);
        m.set_col(2, &vector![0i32, 0]);
        assert_eq!(m, Matrix::<i32, 2, 3>::from_rows([[7, 8, 0], [40, 5, 0]]));
    }

    #[test]
    fn fetched_rows_are_copies() {
        let m = sample();
        let mut row = m.row(0);
        row[0] = 100;
        assert_eq!(m.at(0, 0), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cell_out_of_range() { sample().at(2, 0); }

    #[test]
    fn structure() {
        let m = sample();
        assert_eq!(m.transposed(), Matrix::<i32, 3, 2>::from_rows([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(m.without_row::<1>(0), Matrix::<i32, 1, 3>::from_rows([[4, 5, 6]]));
        assert_eq!(m.without_col::<2>(1), Matrix::<i32, 2, 2>::from_rows([[1, 3], [4, 6]]));
        assert_eq!(m.minor::<1, 2>(1, 0), Matrix::<i32, 1, 2>::from_rows([[2, 3]]));
        let a: Matrix<f32, 3, 3> = m.augment(|r, c| (10 * r + c) as f32);
        assert_eq!(
            a,
            Matrix::<f32, 3, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [20.0, 21.0, 22.0]])
        );
        let a = m.augment_with::<1, 1, _>(|_, _| 0);
        assert_eq!(a, Matrix::<i32, 1, 1>::from_rows([[1]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix::<i32, 3, 3>::identity().determinant(), 1);
        assert_eq!(Matrix::<f64, 1, 1>::from_rows([[2.5]]).determinant(), 2.5);
        assert_eq!(Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]).determinant(), -2);
        let m = Matrix::<i64, 3, 3>::from_rows([[2, -3, 1], [2, 0, -1], [1, 4, 5]]);
        assert_eq!(m.determinant(), 49);
        let m = Matrix::<i64, 4, 4>::from_rows([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]]);
        assert_eq!(m.determinant(), 30);
    }

    #[test]
    fn cofactors() {
        let m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.cofactor(0, 1), -3i64);
        assert_eq!(m.cofactor_matrix(), Matrix::<i64, 2, 2>::from_rows([[4, -3], [-2, 1]]));
        assert_eq!(Matrix::<f32, 1, 1>::from_rows([[5.0]]).cofactor(0, 0), 1.0f32);
    }

    #[test]
    fn narrow_determinants_accumulate_wide() {
        let m = Matrix::<i8, 2, 2>::from_rows([[100, 100], [99, 100]]);
        assert_eq!(m.wide_determinant(), 100i64);
        assert_eq!(m.determinant(), 100i8);

        let m = Matrix::<u8, 2, 2>::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.wide_determinant(), -2i64);
        assert_eq!(m.determinant(), 254u8);
        assert_eq!(m.cofactor_matrix(), Matrix::<i64, 2, 2>::from_rows([[4, -3], [-2, 1]]));
        assert_eq!(m.inverse(), Matrix::<i64, 2, 2>::from_rows([[-2, 1], [1, 0]]));

        let m = Matrix::<i8, 3, 3>::from_rows([[100, 100, 0], [0, 100, 100], [100, 0, 100]]);
        assert_eq!(m.wide_determinant(), 2_000_000i64);
        assert_eq!(m.cofactor(0, 0), 10_000i64);
    }

    #[test]
    fn inverse() {
        let m = Matrix::<f64, 2, 2>::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let expected = Matrix::<f64, 2, 2>::from_rows([[0.6, -0.7], [-0.2, 0.4]]);
        assert_relative_eq!(m.inverse(), expected, epsilon = 1e-12);
        assert_eq!(Matrix::<f32, 1, 1>::from_rows([[4.0]]).inverse(), Matrix::<f32, 1, 1>::from_rows([[0.25]]));
        let i: Matrix<f64, 3, 3> = Matrix::<f64, 3, 3>::identity().inverse();
        assert_eq!(i, Matrix::<f64, 3, 3>::identity());
    }

    #[test]
    fn singular_inverse_is_zero() {
        let m = Matrix::<i32, 2, 2>::from_rows([[1, 2], [2, 4]]);
        assert_eq!(m.determinant(), 0);
        assert_eq!(m.inverse(), Matrix::<i64, 2, 2>::zero());
    }

    #[test]
    fn non_square_inverse() {
        let m = Matrix::<f64, 2, 3>::from_rows([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
        let inv: Matrix<f64, 3, 3> = m.inverse();
        assert_eq!(inv, Matrix::<f64, 3, 3>::from_rows([[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, 1.0]]));
    }

    #[test]
    fn arithmetic() {
        let m = sample();
        let n = Matrix::<f32, 2, 3>::full_of(0.5);
        let s: Matrix<f32, 2, 3> = m + n;
        assert_eq!(s, Matrix::<f32, 2, 3>::from_rows([[1.5, 2.5, 3.5], [4.5, 5.5, 6.5]]));
        assert_eq!(m - m, Matrix::<i32, 2, 3>::zero());
        assert_eq!(-m, m * -1i32);
        let d: Matrix<f64, 2, 3> = m / 2.0f64;
        assert_eq!(d.at(0, 0), 0.5);
        assert_eq!(2u8 * m, m + m);
        let mut a = m;
        a += m;
        a -= m;
        assert_eq!(a, m);
    }

    #[test]
    fn products() {
        let m = sample();
        assert_eq!(m * vector![1i32, 0, -1], vector![-2i32, -2]);
        let v: Vector<f64, 2> = m * vector![0.5f64, 0.5, 0.5];
        assert_eq!(v, vector![3.0f64, 7.5]);
        let p = m * m.transposed();
        assert_eq!(p, Matrix::<i32, 2, 2>::from_rows([[14, 32], [32, 77]]));
        let i = Matrix::<u8, 3, 3>::identity();
        assert_eq!(m * i, m);
    }

    #[test]
    fn approximate_equality() {
        let m = Matrix::<f32, 2, 2>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let n = Matrix::<f64, 2, 2>::from_rows([[1.01, 2.0], [3.0, 3.99]]);
        assert!(approx_eq(&m, &n, 0.02));
        assert!(!approx_eq(&m, &n, 0.001));
        assert_ne!(m, n);
    }

    #[test]
    fn interpolation() {
        let a = Matrix::<i32, 1, 2>::from_rows([[0, 10]]);
        let b = Matrix::<f64, 1, 2>::from_rows([[10.0, 20.0]]);
        assert_eq!(lerp(0.5f64, &a, &b), Matrix::<f64, 1, 2>::from_rows([[5.0, 15.0]]));
        assert_eq!(lerp_clamp(-1.0f64, &a, &b), Matrix::<f64, 1, 2>::from_rows([[0.0, 10.0]]));
    }

    #[test]
    fn display() {
        let m = Matrix::<i32, 2, 2>::from_rows([[1, -2], [30, 4]]);
        assert_eq!(format!("{}", m), "[( 1; -2)\n (30;  4)]");
        let m = Matrix::<f32, 1, 2>::from_rows([[0.5, 1.0]]);
        assert_eq!(format!("{:.1}", m), "[(0.5; 1.0)]");
    }

    #[test]
    fn serialization() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6]]");
        let back: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        let yaml = serde_yaml::to_string(&m).unwrap();
        let back: Matrix<i32, 2, 3> = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, m);
    }

    proptest! {
        #[test]
        fn determinant_of_transpose(cells in prop::array::uniform16(-20i64..20)) {
            let m = Matrix::<i64, 4, 4>::from_row_major(&cells);
            prop_assert_eq!(m.determinant(), m.transposed().determinant());
        }

        #[test]
        fn product_with_inverse_is_identity(cells in prop::array::uniform9(-10.0f64..10.0)) {
            let m = Matrix::<f64, 3, 3>::from_row_major(&cells);
            prop_assume!(m.determinant().abs() > 1e-3);
            let p = m * m.inverse();
            prop_assert!(approx_eq(&p, &Matrix::<f64, 3, 3>::identity(), 1e-6));
        }
    }
}
