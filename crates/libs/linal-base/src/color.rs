//! RGBA colors with HSV conversions.

use crate::{
    error::Error,
    num::{self, ApproxEq, Numeric, NumericCast},
    units::{Degrees, Radians},
    vector::Vector,
};
use core::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub},
    str::FromStr,
};
use std::f32::consts::{FRAC_PI_3, TAU};

/// A color with red, green, blue and alpha channels.
///
/// Channels are meant to lie in [0, 1], which is not enforced: arithmetic
/// may leave the range until [`Color::clamp01`] is applied.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel, 0 being fully transparent.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque middle grey.
    pub const GREY: Self = Self::rgb(0.5, 0.5, 0.5);
    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    /// Opaque pink (magenta).
    pub const PINK: Self = Self::rgb(1.0, 0.0, 1.0);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self { Self { r, g, b, a } }

    /// Creates an opaque color.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self { Self::new(r, g, b, 1.0) }

    /// Creates a color from at most four channels in [0, 255]. Missing
    /// color channels are 0 and a missing alpha is 255.
    ///
    /// # Panics
    ///
    /// Panics if more than four values are given.
    pub fn from_data_0_to_255<U: Numeric + NumericCast<f32>>(data: &[U]) -> Self {
        assert!(data.len() <= 4, "{} channels given to a color", data.len());
        let mut color = Self::BLACK;
        for (i, v) in data.iter().enumerate() {
            color[i] = NumericCast::<f32>::cast(v) / 255.0;
        }
        color
    }

    /// Creates a color from four channels in [0, 255].
    pub fn from_rgba_0_to_255<U: Numeric + NumericCast<f32>>(r: U, g: U, b: U, a: U) -> Self {
        Self::from_data_0_to_255(&[r, g, b, a])
    }

    /// Creates a color from hue, saturation, value and alpha.
    ///
    /// The hue is reduced modulo a full turn and negative hues are mirrored.
    /// Degrees are accepted through [`Degrees`].
    pub fn from_hsva(hue: impl Into<Radians>, saturation: f32, value: f32, alpha: f32) -> Self {
        let h = (hue.into().value() % TAU).abs();
        let c = value * saturation;
        let x = c * (1.0 - ((h / FRAC_PI_3) % 2.0 - 1.0).abs());
        let m = value - c;
        let (r, g, b) = if h < FRAC_PI_3 {
            (c, x, 0.0)
        } else if h < 2.0 * FRAC_PI_3 {
            (x, c, 0.0)
        } else if h < 3.0 * FRAC_PI_3 {
            (0.0, c, x)
        } else if h < 4.0 * FRAC_PI_3 {
            (0.0, x, c)
        } else if h < 5.0 * FRAC_PI_3 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };
        Self::new(r + m, g + m, b + m, alpha)
    }

    fn max_channel(&self) -> f32 { self.r.max(self.g).max(self.b) }

    fn min_channel(&self) -> f32 { self.r.min(self.g).min(self.b) }

    /// Hue in [0, 2π); achromatic colors have a hue of 0.
    pub fn hue(&self) -> Radians {
        let max = self.max_channel();
        let delta = max - self.min_channel();
        if delta == 0.0 {
            return Radians::ZERO;
        }
        let hue = if max == self.r {
            TAU + FRAC_PI_3 * ((self.g - self.b) / delta)
        } else if max == self.g {
            2.0 * FRAC_PI_3 + FRAC_PI_3 * ((self.b - self.r) / delta)
        } else {
            4.0 * FRAC_PI_3 + FRAC_PI_3 * ((self.r - self.g) / delta)
        };
        Radians::new(hue % TAU)
    }

    /// Hue in degrees.
    pub fn hue_deg(&self) -> Degrees { self.hue().in_degrees() }

    /// Saturation in [0, 1]; black has a saturation of 0.
    pub fn saturation(&self) -> f32 {
        let max = self.max_channel();
        if max == 0.0 {
            0.0
        } else {
            (max - self.min_channel()) / max
        }
    }

    /// Value, the largest color channel.
    pub fn value(&self) -> f32 { self.max_channel() }

    /// Channels clamped to [0, 1] and scaled to [0, 255].
    pub fn bytes(&self) -> [u8; 4] { [self.r, self.g, self.b, self.a].map(|c| (num::clamp01(c) * 255.0) as u8) }

    /// Channels in `r, g, b, a` order.
    pub fn iter(&self) -> impl Iterator<Item = f32> { [self.r, self.g, self.b, self.a].into_iter() }

    /// The first `N` channels, cast to `T`.
    pub fn to_vector<T: Numeric, const N: usize>(&self) -> Vector<T, N>
    where
        f32: NumericCast<T>,
    {
        const { assert!(N <= 4, "a color has four channels") };
        Vector::from_fn(|i| NumericCast::<T>::cast(&self[i]))
    }

    /// Every channel clamped between the matching channels of `min` and
    /// `max`.
    pub fn clamp(&self, min: &Color, max: &Color) -> Self {
        Self::new(
            num::clamp(self.r, min.r, max.r),
            num::clamp(self.g, min.g, max.g),
            num::clamp(self.b, min.b, max.b),
            num::clamp(self.a, min.a, max.a),
        )
    }

    /// Every channel clamped to [0, 1].
    pub fn clamp01(&self) -> Self { self.clamp(&Self::CLEAR, &Self::WHITE) }

    /// Renders the color in the given mode.
    pub fn display(&self, mode: ColorDisplayMode) -> DisplayColor { DisplayColor { color: *self, mode } }

    fn map(self, f: impl Fn(f32) -> f32) -> Self { Self::new(f(self.r), f(self.g), f(self.b), f(self.a)) }

    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.r, other.r), f(self.g, other.g), f(self.b, other.b), f(self.a, other.a))
    }
}

/// Opaque black.
impl Default for Color {
    fn default() -> Self { Self::BLACK }
}

/// Missing green and blue channels are 0, a missing alpha is 1.
impl<T: Numeric + NumericCast<f32>, const N: usize> From<Vector<T, N>> for Color {
    fn from(v: Vector<T, N>) -> Self {
        const { assert!(N <= 4, "a color has four channels") };
        let mut color = Self::BLACK;
        for (i, c) in v.iter().enumerate() {
            color[i] = NumericCast::<f32>::cast(c);
        }
        color
    }
}

impl Index<usize> for Color {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("index {i} out of range for a color"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("index {i} out of range for a color"),
        }
    }
}

impl Neg for Color {
    type Output = Self;

    fn neg(self) -> Self { self.map(|c| -c) }
}

macro_rules! impl_channel_ops {
    ($($op:ident),*) => {
        paste::paste! {
            $(
                impl $op for Color {
                    type Output = Self;

                    fn [<$op:lower>](self, rhs: Self) -> Self { self.zip(rhs, |a, b| $op::[<$op:lower>](a, b)) }
                }
            )*
        }
    };
}

impl_channel_ops!(Add, Sub, Mul, Div);

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self { self.map(|c| c * rhs) }
}

impl Div<f32> for Color {
    type Output = Self;

    fn div(self, rhs: f32) -> Self { self.map(|c| c / rhs) }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color { rhs * self }
}

impl ApproxEq for Color {
    type Diff = f32;

    fn approx_eq(&self, other: &Self, max_diff: f32) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| (a - b).abs() <= max_diff)
    }
}

impl approx::AbsDiffEq for Color {
    type Epsilon = f32;

    fn default_epsilon() -> f32 { f32::EPSILON }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(&a, &b, epsilon))
    }
}

impl approx::RelativeEq for Color {
    fn default_max_relative() -> f32 { f32::EPSILON }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(&a, &b, epsilon, max_relative))
    }
}

impl approx::UlpsEq for Color {
    fn default_max_ulps() -> u32 { 4 }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| approx::UlpsEq::ulps_eq(&a, &b, epsilon, max_ulps))
    }
}

/// Channel-wise linear interpolation, `t` is not clamped.
pub fn lerp(t: f32, c0: &Color, c1: &Color) -> Color { c0.zip(*c1, |a, b| num::lerp(t, a, b)) }

/// [`lerp`] with `t` clamped to [0, 1].
pub fn lerp_clamp(t: f32, c0: &Color, c1: &Color) -> Color { lerp(num::clamp01(t), c0, c1) }

/// How a color is rendered as text.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ColorDisplayMode {
    #[default]
    #[cfg_attr(feature = "cli", clap(name = "rgba"))]
    /// `(R: r; G: g; B: b; A: a)`.
    Rgba,
    #[cfg_attr(feature = "cli", clap(name = "hsva"))]
    /// Hue in radians, other channels in percent.
    Hsva,
    #[cfg_attr(feature = "cli", clap(name = "hsva-deg"))]
    /// Hue in degrees, other channels in percent.
    HsvaDeg,
}

impl ColorDisplayMode {
    /// Name of the mode, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rgba => "rgba",
            Self::Hsva => "hsva",
            Self::HsvaDeg => "hsva-deg",
        }
    }
}

impl Display for ColorDisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result { f.write_str(self.name()) }
}

impl FromStr for ColorDisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Self::Rgba, Self::Hsva, Self::HsvaDeg]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDisplayMode(s.to_string()))
    }
}

/// A color paired with the mode it is rendered in.
///
/// Created by [`Color::display`]. The precision of the formatter is forwarded
/// to every number.
#[derive(Debug, Copy, Clone)]
pub struct DisplayColor {
    color: Color,
    mode: ColorDisplayMode,
}

fn write_number(f: &mut Formatter<'_>, value: f32) -> core::fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, value),
        None => write!(f, "{}", value),
    }
}

impl Display for DisplayColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let c = &self.color;
        let hue = match self.mode {
            ColorDisplayMode::Rgba => {
                for (i, (name, value)) in ["R", "G", "B", "A"].iter().zip(c.iter()).enumerate() {
                    f.write_str(if i == 0 { "(" } else { "; " })?;
                    write!(f, "{name}: ")?;
                    write_number(f, value)?;
                }
                return f.write_str(")");
            }
            ColorDisplayMode::Hsva => (c.hue().value(), "rad"),
            ColorDisplayMode::HsvaDeg => (c.hue_deg().value(), "deg"),
        };
        f.write_str("(Hue: ")?;
        write_number(f, hue.0)?;
        write!(f, " {}; Saturation: ", hue.1)?;
        write_number(f, c.saturation() * 100.0)?;
        f.write_str("%; Value: ")?;
        write_number(f, c.value() * 100.0)?;
        f.write_str("%; Alpha: ")?;
        write_number(f, c.a * 100.0)?;
        f.write_str("%)")
    }
}

/// Renders the color as RGBA.
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.display(ColorDisplayMode::Rgba), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deg, num::approx_eq, rad, vector};
    use approx::assert_relative_eq;

    #[test]
    fn construction() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::from_data_0_to_255(&[255u8, 0, 51]), Color::new(1.0, 0.0, 0.2, 1.0));
        assert_eq!(Color::from_data_0_to_255::<i32>(&[]), Color::BLACK);
        assert_eq!(Color::from_rgba_0_to_255(0.0f64, 255.0, 255.0, 0.0), Color::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(Color::from(vector![0.5f64]), Color::new(0.5, 0.0, 0.0, 1.0));
        assert_eq!(Color::from(vector![1i32, 0, 1, 0]), Color::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(Color::PINK.to_vector::<f64, 3>(), vector![1.0f64, 0.0, 1.0]);
        assert_eq!(Color::GREY.to_vector::<f32, 4>(), vector![0.5f32, 0.5, 0.5, 1.0]);
    }

    #[test]
    #[should_panic]
    fn too_many_channels() { Color::from_data_0_to_255(&[0u8, 0, 0, 0, 0]); }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range() { let _ = Color::WHITE[4]; }

    #[test]
    fn from_hsva() {
        assert!(approx_eq(&Color::from_hsva(0.0f32, 1.0, 1.0, 1.0), &Color::RED, 1e-6));
        assert!(approx_eq(&Color::from_hsva(rad!(TAU / 3.0), 1.0, 1.0, 1.0), &Color::GREEN, 1e-6));
        assert!(approx_eq(&Color::from_hsva(deg!(240.0), 1.0, 1.0, 1.0), &Color::BLUE, 1e-6));
        assert!(approx_eq(&Color::from_hsva(deg!(60.0), 1.0, 1.0, 0.5), &Color::new(1.0, 1.0, 0.0, 0.5), 1e-6));
        assert!(approx_eq(&Color::from_hsva(deg!(300.0), 1.0, 1.0, 1.0), &Color::PINK, 1e-6));
        assert!(approx_eq(&Color::from_hsva(deg!(720.0), 0.0, 0.5, 1.0), &Color::GREY, 1e-6));
        assert!(approx_eq(&Color::from_hsva(deg!(-120.0), 1.0, 1.0, 1.0), &Color::GREEN, 1e-5));
    }

    #[test]
    fn hsv_components() {
        assert_eq!(Color::RED.hue(), Radians::ZERO);
        assert_eq!(Color::GREY.hue(), Radians::ZERO);
        assert!((Color::GREEN.hue_deg().value() - 120.0).abs() < 1e-4);
        assert!((Color::BLUE.hue_deg().value() - 240.0).abs() < 1e-4);
        assert!((Color::PINK.hue_deg().value() - 300.0).abs() < 1e-4);
        assert_eq!(Color::BLACK.saturation(), 0.0);
        assert_eq!(Color::rgb(0.5, 0.25, 0.5).saturation(), 0.5);
        assert_eq!(Color::rgb(0.2, 0.7, 0.4).value(), 0.7);
        let c = Color::new(0.3, 0.6, 0.9, 0.8);
        let back = Color::from_hsva(c.hue(), c.saturation(), c.value(), c.a);
        assert_relative_eq!(back, c, epsilon = 1e-5);
    }

    #[test]
    fn bytes() {
        assert_eq!(Color::new(1.5, 0.5, -1.0, 1.0).bytes(), [255, 127, 0, 255]);
        assert_eq!(Color::CLEAR.bytes(), [0, 0, 0, 0]);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Color::RED + Color::BLUE, Color::new(1.0, 0.0, 1.0, 2.0));
        assert_eq!(Color::WHITE - Color::RED, Color::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(-Color::CLEAR, Color::CLEAR);
        assert_eq!(Color::GREY * Color::YELLOW, Color::new(0.5, 0.5, 0.0, 1.0));
        assert_eq!(Color::GREY / Color::WHITE, Color::GREY);
        assert_eq!(Color::WHITE * 0.5, Color::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(2.0 * Color::GREY, Color::new(1.0, 1.0, 1.0, 2.0));
        assert_eq!(Color::WHITE / 4.0, Color::new(0.25, 0.25, 0.25, 0.25));
    }

    #[test]
    fn clamping_and_interpolation() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.clamp01(), Color::new(1.0, 0.0, 0.5, 1.0));
        assert_eq!(c.clamp(&Color::GREY, &Color::WHITE), Color::new(1.0, 0.5, 0.5, 1.0));
        assert_eq!(lerp(0.5, &Color::BLACK, &Color::WHITE), Color::GREY);
        assert_eq!(lerp(2.0, &Color::CLEAR, &Color::GREY), Color::new(1.0, 1.0, 1.0, 2.0));
        assert_eq!(lerp_clamp(2.0, &Color::CLEAR, &Color::GREY), Color::GREY);
    }

    #[test]
    fn display_modes() {
        assert_eq!(Color::RED.to_string(), "(R: 1; G: 0; B: 0; A: 1)");
        assert_eq!(format!("{:.2}", Color::GREY), "(R: 0.50; G: 0.50; B: 0.50; A: 1.00)");
        assert_eq!(
            format!("{:.2}", Color::GREEN.display(ColorDisplayMode::Hsva)),
            "(Hue: 2.09 rad; Saturation: 100.00%; Value: 100.00%; Alpha: 100.00%)"
        );
        assert_eq!(
            format!("{:.1}", Color::new(0.0, 0.0, 0.5, 0.5).display(ColorDisplayMode::HsvaDeg)),
            "(Hue: 240.0 deg; Saturation: 100.0%; Value: 50.0%; Alpha: 50.0%)"
        );
        assert_eq!(
            Color::BLACK.display(ColorDisplayMode::Hsva).to_string(),
            "(Hue: 0 rad; Saturation: 0%; Value: 0%; Alpha: 100%)"
        );
    }

    #[test]
    fn display_mode_parsing() {
        assert_eq!("rgba".parse::<ColorDisplayMode>(), Ok(ColorDisplayMode::Rgba));
        assert_eq!(" HSVA ".parse::<ColorDisplayMode>(), Ok(ColorDisplayMode::Hsva));
        assert_eq!("hsva-deg".parse::<ColorDisplayMode>(), Ok(ColorDisplayMode::HsvaDeg));
        assert_eq!(
            "cmyk".parse::<ColorDisplayMode>(),
            Err(Error::UnknownDisplayMode("cmyk".to_string()))
        );
        assert_eq!(ColorDisplayMode::default(), ColorDisplayMode::Rgba);
        assert_eq!(ColorDisplayMode::HsvaDeg.to_string(), "hsva-deg");
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&Color::PINK).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":0.0,"b":1.0,"a":1.0}"#);
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), Color::PINK);
        let yaml = serde_yaml::to_string(&Color::GREY).unwrap();
        assert_eq!(serde_yaml::from_str::<Color>(&yaml).unwrap(), Color::GREY);
    }
}
