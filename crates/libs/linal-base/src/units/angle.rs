use crate::{error::Error, num::ulp_eq};
use core::fmt::{Debug, Display};
use std::str::FromStr;

/// Radian unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct URadian;

/// Degree unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UDegree;

/// Unit in which the value of an [`Angle`] is expressed.
pub trait AngleUnit: Debug + Copy + Clone {
    /// The symbols of the unit, the first one is used for display.
    const SYMBOLS: &'static [&'static str];

    /// Multiplier turning radians into this unit.
    const FACTOR_FROM_RAD: f32;

    /// Multiplier turning this unit into radians.
    const FACTOR_TO_RAD: f32 = 1.0 / Self::FACTOR_FROM_RAD;

    /// Multiplier turning degrees into this unit.
    const FACTOR_FROM_DEG: f32;

    /// Multiplier turning this unit into degrees.
    const FACTOR_TO_DEG: f32 = 1.0 / Self::FACTOR_FROM_DEG;
}

impl AngleUnit for URadian {
    const SYMBOLS: &'static [&'static str] = &["rad", "rads", "radians"];
    const FACTOR_FROM_RAD: f32 = 1.0;
    const FACTOR_FROM_DEG: f32 = 1.0 / 180.0 * std::f32::consts::PI;
}

impl AngleUnit for UDegree {
    const SYMBOLS: &'static [&'static str] = &["deg", "degs", "degrees"];
    const FACTOR_FROM_RAD: f32 = 180.0 / std::f32::consts::PI;
    const FACTOR_FROM_DEG: f32 = 1.0;
}

/// Angle with unit.
#[derive(Copy, Clone)]
pub struct Angle<A: AngleUnit> {
    pub(crate) value: f32,
    pub(crate) unit: core::marker::PhantomData<A>,
}

impl<A: AngleUnit> Debug for Angle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Angle {{ value: {}, unit: {} }}", self.value, A::SYMBOLS[0])
    }
}

impl<A: AngleUnit> Display for Angle<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, A::SYMBOLS[0]),
            None => write!(f, "{} {}", self.value, A::SYMBOLS[0]),
        }
    }
}

impl<A: AngleUnit, B: AngleUnit> PartialEq<Angle<B>> for Angle<A> {
    fn eq(&self, other: &Angle<B>) -> bool {
        ulp_eq(self.value * A::FACTOR_TO_RAD, other.value * B::FACTOR_TO_RAD)
    }
}

impl<A: AngleUnit, B: AngleUnit> PartialOrd<Angle<B>> for Angle<A> {
    fn partial_cmp(&self, other: &Angle<B>) -> Option<core::cmp::Ordering> {
        let self_rad = self.value * A::FACTOR_TO_RAD;
        let other_rad = other.value * B::FACTOR_TO_RAD;
        self_rad.partial_cmp(&other_rad)
    }
}

impl<A: AngleUnit> Default for Angle<A> {
    fn default() -> Self { Self::ZERO }
}

impl<A: AngleUnit> Angle<A> {
    /// Zero angle.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a new angle with unit.
    pub const fn new(value: f32) -> Self {
        Angle {
            value,
            unit: core::marker::PhantomData,
        }
    }

    /// Returns the value of the angle in its own unit.
    pub const fn value(&self) -> f32 { self.value }

    /// The same angle in radians.
    #[inline]
    pub fn to_radians(&self) -> Angle<URadian> { Angle::new(self.value * A::FACTOR_TO_RAD) }

    /// The same angle in degrees.
    #[inline]
    pub fn to_degrees(&self) -> Angle<UDegree> { Angle::new(self.value * A::FACTOR_TO_DEG) }

    /// Reduces the angle to the range (-full turn, full turn), keeping its
    /// sign.
    #[inline]
    pub fn wrapped(&self) -> Self { Self::new(self.value % (std::f32::consts::TAU * A::FACTOR_FROM_RAD)) }

    /// The absolute value of the angle.
    #[inline]
    pub fn abs(self) -> Self { Self::new(self.value.abs()) }

    /// Sine of the angle.
    pub fn sin(&self) -> f32 { (self.value * A::FACTOR_TO_RAD).sin() }

    /// Cosine of the angle.
    pub fn cos(&self) -> f32 { (self.value * A::FACTOR_TO_RAD).cos() }
}

impl Angle<URadian> {
    /// PI in radians.
    pub const PI: Self = Self::new(std::f32::consts::PI);
    /// PI/2 in radians.
    pub const HALF_PI: Self = Self::new(std::f32::consts::FRAC_PI_2);
    /// 2 * PI in radians.
    pub const TWO_PI: Self = Self::new(std::f32::consts::TAU);

    /// Converts to degrees.
    pub fn in_degrees(&self) -> Angle<UDegree> { Angle::new(self.value * UDegree::FACTOR_FROM_RAD) }
}

impl Angle<UDegree> {
    /// PI in degrees.
    pub const PI: Self = Self::new(180.0);
    /// PI/2 in degrees.
    pub const HALF_PI: Self = Self::new(90.0);
    /// 2 * PI in degrees.
    pub const TWO_PI: Self = Self::new(360.0);

    /// Converts to radians.
    pub fn in_radians(&self) -> Angle<URadian> { Angle::new(self.value * URadian::FACTOR_FROM_DEG) }
}

impl<A: AngleUnit> From<f32> for Angle<A> {
    fn from(value: f32) -> Self { Angle::new(value) }
}

impl From<Angle<UDegree>> for Angle<URadian> {
    fn from(angle: Angle<UDegree>) -> Self { angle.in_radians() }
}

impl From<Angle<URadian>> for Angle<UDegree> {
    fn from(angle: Angle<URadian>) -> Self { angle.in_degrees() }
}

impl<'a, A: AngleUnit> TryFrom<&'a str> for Angle<A> {
    type Error = Error;

    /// Parses strings like `"1.5 rad"`, `"90deg"` or `"-45 degrees"`.
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        let i = super::findr_first_non_ascii_alphabetic(bytes)
            .ok_or_else(|| Error::InvalidAngleValue(s.to_string()))?;
        if i == bytes.len() {
            return Err(Error::MissingAngleUnit(s.to_string()));
        }
        let (value, unit) = trimmed.split_at(i);
        let value = value
            .trim()
            .parse::<f32>()
            .map_err(|_| Error::InvalidAngleValue(value.trim().to_string()))?;
        if URadian::SYMBOLS.contains(&unit) {
            Ok(Self::new(A::FACTOR_FROM_RAD * value))
        } else if UDegree::SYMBOLS.contains(&unit) {
            Ok(Self::new(A::FACTOR_FROM_DEG * value))
        } else {
            Err(Error::UnknownAngleUnit(unit.to_string()))
        }
    }
}

impl<A: AngleUnit> FromStr for Angle<A> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_from(s) }
}

impl_serialization!(Angle<A> where A: AngleUnit, #[doc = "Angles are written as their value followed by the unit symbol."]);

/// Angles are read back from strings such as `"90 deg"`.
impl<'de, A: AngleUnit> serde::Deserialize<'de> for Angle<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AngleVisitor<T>(core::marker::PhantomData<T>);

        impl<'de, T: AngleUnit> serde::de::Visitor<'de> for AngleVisitor<T> {
            type Value = Angle<T>;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "a string containing a number and a unit of angle")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Angle::<T>::try_from(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AngleVisitor::<A>(core::marker::PhantomData))
    }
}

/// Type alias for `Angle<URadian>`.
pub type Radians = Angle<URadian>;

/// Type alias for `Angle<UDegree>`.
pub type Degrees = Angle<UDegree>;

/// Helper creating a new `Angle<URadian>`.
#[macro_export]
macro_rules! rad {
    ($value:expr) => {
        $crate::units::Angle::<$crate::units::URadian>::new($value)
    };
}

/// Helper creating a new `Angle<UDegree>`.
#[macro_export]
macro_rules! deg {
    ($value:expr) => {
        $crate::units::Angle::<$crate::units::UDegree>::new($value)
    };
}

impl_ops!(Add, Sub for Angle where A, B: AngleUnit);
impl_ops_with_f32!(Mul, Div for Angle where A: AngleUnit);
impl_ops_assign!(AddAssign, SubAssign for Angle where A, B: AngleUnit);

impl<A: AngleUnit, B: AngleUnit> core::ops::Div<Angle<B>> for Angle<A>
where
    Angle<A>: From<Angle<B>>,
{
    type Output = f32;

    fn div(self, rhs: Angle<B>) -> Self::Output {
        let other = Angle::<A>::from(rhs);
        self.value / other.value
    }
}

impl<A: AngleUnit> core::ops::Mul<Angle<A>> for f32 {
    type Output = Angle<A>;

    fn mul(self, rhs: Angle<A>) -> Self::Output { Angle::new(self * rhs.value) }
}

impl<A: AngleUnit> core::ops::Neg for Angle<A> {
    type Output = Angle<A>;

    fn neg(self) -> Self::Output { Angle::new(-self.value) }
}
