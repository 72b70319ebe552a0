//! Perceptual color model
//!
//! [`Color`] is an immutable value holding non-linear sRGB components. It
//! converts to and from every supported space, clamps to the displayable
//! gamut and blends inside a chosen [`ColorSpace`].

mod space;
mod utils;

use smart_leds::RGB8;
pub use space::{Hcl, Hsl, Hsv, Lab, LinearRgb, Luv, Xyz};
pub use utils::{pack_argb, rgb_from_u32, unpack_argb};

use crate::math::{lerp, lerp_degrees};

/// 8-bit device color
pub type Rgb = RGB8;

/// Chroma below which a hue is treated as undefined while blending
const ACHROMATIC: f32 = 1e-4;

/// Space in which two colors are interpolated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Non-linear sRGB components
    #[default]
    Rgb,
    LinearRgb,
    Hsv,
    Hsl,
    Lab,
    Hcl,
    Luv,
}

/// A color, stored as non-linear sRGB
///
/// Components of a displayable color lie in `[0, 1]`. Conversions from other
/// spaces may produce values outside that range; use [`Color::clamped`]
/// before handing such a color to hardware.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Create a color from non-linear sRGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an 8-bit device color
    pub fn from_rgb8(rgb: Rgb) -> Self {
        Self::rgb(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
        )
    }

    /// Create a color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(rgb_from_u32(hex))
    }

    pub const fn r(self) -> f32 {
        self.r
    }

    pub const fn g(self) -> f32 {
        self.g
    }

    pub const fn b(self) -> f32 {
        self.b
    }

    pub fn linear_rgb(self) -> LinearRgb {
        self.into()
    }

    pub fn xyz(self) -> Xyz {
        self.into()
    }

    pub fn hsv(self) -> Hsv {
        self.into()
    }

    pub fn hsl(self) -> Hsl {
        self.into()
    }

    pub fn lab(self) -> Lab {
        self.into()
    }

    pub fn hcl(self) -> Hcl {
        self.into()
    }

    pub fn luv(self) -> Luv {
        self.into()
    }

    /// Check whether every component is a finite value inside `[0, 1]`
    pub fn is_in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Nearest displayable color
    ///
    /// The sRGB gamut is the unit cube, so the closest point is the
    /// per-channel clamp. Non-finite components collapse to zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        let clamp = |c: f32| if c.is_finite() { c.clamp(0.0, 1.0) } else { 0.0 };
        Self::rgb(clamp(self.r), clamp(self.g), clamp(self.b))
    }

    /// Blend towards `other` inside `space`
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`. Hues travel along
    /// the shorter arc; when one side has no chroma its hue is borrowed from
    /// the other so that fades from gray do not sweep the color wheel.
    #[must_use]
    pub fn blend(self, other: Self, t: f32, space: ColorSpace) -> Self {
        match space {
            ColorSpace::Rgb => Self::rgb(
                lerp(self.r, other.r, t),
                lerp(self.g, other.g, t),
                lerp(self.b, other.b, t),
            ),
            ColorSpace::LinearRgb => {
                let (a, b) = (self.linear_rgb(), other.linear_rgb());
                LinearRgb {
                    r: lerp(a.r, b.r, t),
                    g: lerp(a.g, b.g, t),
                    b: lerp(a.b, b.b, t),
                }
                .into()
            }
            ColorSpace::Hsv => {
                let (a, b) = (self.hsv(), other.hsv());
                let (h1, h2) = shared_hue(a.h, a.s, b.h, b.s);
                Hsv {
                    h: lerp_degrees(h1, h2, t),
                    s: lerp(a.s, b.s, t),
                    v: lerp(a.v, b.v, t),
                }
                .into()
            }
            ColorSpace::Hsl => {
                let (a, b) = (self.hsl(), other.hsl());
                let (h1, h2) = shared_hue(a.h, a.s, b.h, b.s);
                Hsl {
                    h: lerp_degrees(h1, h2, t),
                    s: lerp(a.s, b.s, t),
                    l: lerp(a.l, b.l, t),
                }
                .into()
            }
            ColorSpace::Lab => {
                let (a, b) = (self.lab(), other.lab());
                Lab {
                    l: lerp(a.l, b.l, t),
                    a: lerp(a.a, b.a, t),
                    b: lerp(a.b, b.b, t),
                }
                .into()
            }
            ColorSpace::Hcl => {
                let (a, b) = (self.hcl(), other.hcl());
                let (h1, h2) = shared_hue(a.h, a.c, b.h, b.c);
                Hcl {
                    h: lerp_degrees(h1, h2, t),
                    c: lerp(a.c, b.c, t),
                    l: lerp(a.l, b.l, t),
                }
                .into()
            }
            ColorSpace::Luv => {
                let (a, b) = (self.luv(), other.luv());
                Luv {
                    l: lerp(a.l, b.l, t),
                    u: lerp(a.u, b.u, t),
                    v: lerp(a.v, b.v, t),
                }
                .into()
            }
        }
    }

    /// Clamp and quantize to an 8-bit device color
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> Rgb {
        let clamped = self.clamped();
        let quantize = |c: f32| libm::roundf(c * 255.0) as u8;
        Rgb {
            r: quantize(clamped.r),
            g: quantize(clamped.g),
            b: quantize(clamped.b),
        }
    }

    /// Clamp and pack as `0xAARRGGBB` with an opaque alpha byte
    pub fn to_argb(self) -> u32 {
        pack_argb(self.to_rgb8())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb8(rgb)
    }
}

/// Resolve undefined hues before interpolation
fn shared_hue(h1: f32, chroma1: f32, h2: f32, chroma2: f32) -> (f32, f32) {
    match (chroma1 < ACHROMATIC, chroma2 < ACHROMATIC) {
        (true, false) => (h2, h2),
        (false, true) => (h1, h1),
        _ => (h1, h2),
    }
}
