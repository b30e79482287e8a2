//! Type-level vector lengths.
//!
//! Stable Rust cannot spell `max(N, M)` in a type, so the length of the
//! result of mixing two vectors of different lengths is looked up through
//! [`DimMax`], implemented for identical lengths generically and for every
//! pair of different lengths up to [`MAX_MIXED_DIM`].

use crate::{num::Numeric, vector::Vector};

/// Largest length for which vectors of different lengths can be mixed.
pub const MAX_MIXED_DIM: usize = 8;

/// A length lifted to the type level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// The larger of two lengths.
pub trait DimMax<Rhs> {
    /// The larger length.
    const DIM: usize;

    /// Vector of the larger length.
    type Output<T: Numeric>;

    /// Builds a vector of the larger length from its components.
    fn vector_from_fn<T: Numeric, F: FnMut(usize) -> T>(f: F) -> Self::Output<T>;
}

/// Vector whose length is the larger of `N` and `M`.
pub type MaxVector<T, const N: usize, const M: usize> = <Const<N> as DimMax<Const<M>>>::Output<T>;

impl<const N: usize> DimMax<Const<N>> for Const<N> {
    const DIM: usize = N;

    type Output<T: Numeric> = Vector<T, N>;

    #[inline]
    fn vector_from_fn<T: Numeric, F: FnMut(usize) -> T>(f: F) -> Vector<T, N> { Vector::from_fn(f) }
}

macro_rules! impl_dim_max {
    ($n:literal; $($m:literal),+) => {
        $(
            impl DimMax<Const<$m>> for Const<$n> {
                const DIM: usize = if $n > $m { $n } else { $m };

                type Output<T: Numeric> = Vector<T, { if $n > $m { $n } else { $m } }>;

                #[inline]
                fn vector_from_fn<T: Numeric, F: FnMut(usize) -> T>(f: F) -> Self::Output<T> {
                    Vector::from_fn(f)
                }
            }
        )+
    };
}

impl_dim_max!(1; 2, 3, 4, 5, 6, 7, 8);
impl_dim_max!(2; 1, 3, 4, 5, 6, 7, 8);
impl_dim_max!(3; 1, 2, 4, 5, 6, 7, 8);
impl_dim_max!(4; 1, 2, 3, 5, 6, 7, 8);
impl_dim_max!(5; 1, 2, 3, 4, 6, 7, 8);
impl_dim_max!(6; 1, 2, 3, 4, 5, 7, 8);
impl_dim_max!(7; 1, 2, 3, 4, 5, 6, 8);
impl_dim_max!(8; 1, 2, 3, 4, 5, 6, 7);
