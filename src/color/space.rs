//! Color space coordinates and the conversion math between them.
//!
//! Pivot spaces: non-linear sRGB is the storage format of [`Color`], linear
//! RGB and CIE XYZ (D65, `Y = 1` for white) sit in between the perceptual
//! spaces. Lightness, chroma and the opponent axes of the CIE spaces use the
//! `1/100` scale, so `L` is in `[0, 1]`.

use super::Color;
use crate::math::wrap_degrees;

/// D65 reference white
const WHITE_X: f32 = 0.950_47;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.088_83;

/// CIE epsilon (216 / 24389)
const EPSILON: f32 = 216.0 / 24389.0;
/// CIE kappa (24389 / 27) on the `1/100` lightness scale
const KAPPA: f32 = 24389.0 / 27.0 / 100.0;

/// Linear (gamma decoded) RGB
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CIE 1931 XYZ with a D65 white point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Hue (degrees, `[0, 360)`), saturation and value (`[0, 1]`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Hue (degrees, `[0, 360)`), saturation and lightness (`[0, 1]`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// CIE L\*a\*b\*
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Cylindrical L\*a\*b\*: hue (degrees), chroma and lightness
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hcl {
    pub h: f32,
    pub c: f32,
    pub l: f32,
}

/// CIE L\*u\*v\*
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Luv {
    pub l: f32,
    pub u: f32,
    pub v: f32,
}

/// Inverse sRGB companding, mirrored for negative input
fn srgb_to_linear(c: f32) -> f32 {
    let magnitude = libm::fabsf(c);
    let linear = if magnitude <= 0.040_45 {
        magnitude / 12.92
    } else {
        libm::powf((magnitude + 0.055) / 1.055, 2.4)
    };
    libm::copysignf(linear, c)
}

/// sRGB companding, mirrored for negative input
fn linear_to_srgb(c: f32) -> f32 {
    let magnitude = libm::fabsf(c);
    let encoded = if magnitude <= 0.003_130_8 {
        magnitude * 12.92
    } else {
        1.055 * libm::powf(magnitude, 1.0 / 2.4) - 0.055
    };
    libm::copysignf(encoded, c)
}

/// Hue in degrees of an RGB triple with the given extremes
fn rgb_hue(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    if delta <= 0.0 {
        return 0.0;
    }
    let sector = if (max - r).abs() <= f32::EPSILON {
        (g - b) / delta
    } else if (max - g).abs() <= f32::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_degrees(sector * 60.0)
}

/// Place a chroma value on the hue wheel, shared by HSV and HSL
fn hue_to_rgb(h: f32, chroma: f32, offset: f32) -> Color {
    let h_prime = wrap_degrees(h) / 60.0;
    let x = chroma * (1.0 - libm::fabsf(libm::fmodf(h_prime, 2.0) - 1.0));
    let (r, g, b) = match h_prime {
        p if p < 1.0 => (chroma, x, 0.0),
        p if p < 2.0 => (x, chroma, 0.0),
        p if p < 3.0 => (0.0, chroma, x),
        p if p < 4.0 => (0.0, x, chroma),
        p if p < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Color::rgb(r + offset, g + offset, b + offset)
}

/// The CIE `f(t)` companding used by both L\*a\*b\* and L\*u\*v\*
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        libm::cbrtf(t)
    } else {
        (KAPPA * 100.0 * t + 16.0) / 116.0
    }
}

fn lab_f_inverse(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / (KAPPA * 100.0)
    }
}

/// `u'`, `v'` chromaticity of an XYZ triple
fn uv_prime(x: f32, y: f32, z: f32) -> (f32, f32) {
    let denominator = x + 15.0 * y + 3.0 * z;
    if denominator == 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * x / denominator, 9.0 * y / denominator)
}

impl From<Color> for LinearRgb {
    fn from(color: Color) -> Self {
        Self {
            r: srgb_to_linear(color.r),
            g: srgb_to_linear(color.g),
            b: srgb_to_linear(color.b),
        }
    }
}

impl From<LinearRgb> for Color {
    fn from(linear: LinearRgb) -> Self {
        Color::rgb(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

impl From<LinearRgb> for Xyz {
    // sRGB working space matrix (Lindbloom)
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: 0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b,
            y: 0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175_0 * rgb.b,
            z: 0.019_333_9 * rgb.r + 0.119_192_0 * rgb.g + 0.950_304_1 * rgb.b,
        }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        Self {
            r: 3.240_454_2 * xyz.x - 1.537_138_5 * xyz.y - 0.498_531_4 * xyz.z,
            g: -0.969_266_0 * xyz.x + 1.876_010_8 * xyz.y + 0.041_556_0 * xyz.z,
            b: 0.055_643_4 * xyz.x - 0.204_025_9 * xyz.y + 1.057_225_2 * xyz.z,
        }
    }
}

impl From<Color> for Xyz {
    fn from(color: Color) -> Self {
        LinearRgb::from(color).into()
    }
}

impl From<Xyz> for Color {
    fn from(xyz: Xyz) -> Self {
        LinearRgb::from(xyz).into()
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        let (r, g, b) = (color.r, color.g, color.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        Self {
            h: rgb_hue(r, g, b, max, delta),
            s: if max > 0.0 { delta / max } else { 0.0 },
            v: max,
        }
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        let chroma = hsv.v * hsv.s;
        hue_to_rgb(hsv.h, chroma, hsv.v - chroma)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let (r, g, b) = (color.r, color.g, color.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;
        let s = if delta <= 0.0 {
            0.0
        } else {
            delta / (1.0 - libm::fabsf(2.0 * l - 1.0))
        };
        Self {
            h: rgb_hue(r, g, b, max, delta),
            s,
            l,
        }
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let chroma = (1.0 - libm::fabsf(2.0 * hsl.l - 1.0)) * hsl.s;
        hue_to_rgb(hsl.h, chroma, hsl.l - chroma / 2.0)
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / WHITE_X);
        let fy = lab_f(xyz.y / WHITE_Y);
        let fz = lab_f(xyz.z / WHITE_Z);
        Self {
            l: 1.16 * fy - 0.16,
            a: 5.0 * (fx - fy),
            b: 2.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 0.16) / 1.16;
        let fx = fy + lab.a / 5.0;
        let fz = fy - lab.b / 2.0;
        Self {
            x: WHITE_X * lab_f_inverse(fx),
            y: WHITE_Y * lab_f_inverse(fy),
            z: WHITE_Z * lab_f_inverse(fz),
        }
    }
}

impl From<Color> for Lab {
    fn from(color: Color) -> Self {
        Xyz::from(color).into()
    }
}

impl From<Lab> for Color {
    fn from(lab: Lab) -> Self {
        Xyz::from(lab).into()
    }
}

impl From<Lab> for Hcl {
    fn from(lab: Lab) -> Self {
        let c = libm::sqrtf(lab.a * lab.a + lab.b * lab.b);
        let h = if c > 0.0 {
            wrap_degrees(libm::atan2f(lab.b, lab.a).to_degrees())
        } else {
            0.0
        };
        Self { h, c, l: lab.l }
    }
}

impl From<Hcl> for Lab {
    fn from(hcl: Hcl) -> Self {
        let radians = hcl.h.to_radians();
        Self {
            l: hcl.l,
            a: hcl.c * libm::cosf(radians),
            b: hcl.c * libm::sinf(radians),
        }
    }
}

impl From<Color> for Hcl {
    fn from(color: Color) -> Self {
        Lab::from(color).into()
    }
}

impl From<Hcl> for Color {
    fn from(hcl: Hcl) -> Self {
        Lab::from(hcl).into()
    }
}

impl From<Xyz> for Luv {
    fn from(xyz: Xyz) -> Self {
        let y_ratio = xyz.y / WHITE_Y;
        let l = if y_ratio > EPSILON {
            1.16 * libm::cbrtf(y_ratio) - 0.16
        } else {
            KAPPA * y_ratio
        };
        let (u_prime, v_prime) = uv_prime(xyz.x, xyz.y, xyz.z);
        let (u_white, v_white) = uv_prime(WHITE_X, WHITE_Y, WHITE_Z);
        if l == 0.0 {
            return Self::default();
        }
        Self {
            l,
            u: 13.0 * l * (u_prime - u_white),
            v: 13.0 * l * (v_prime - v_white),
        }
    }
}

impl From<Luv> for Xyz {
    fn from(luv: Luv) -> Self {
        if luv.l <= 0.0 {
            return Self::default();
        }
        let (u_white, v_white) = uv_prime(WHITE_X, WHITE_Y, WHITE_Z);
        let y = if luv.l > KAPPA * EPSILON {
            let t = (luv.l + 0.16) / 1.16;
            WHITE_Y * t * t * t
        } else {
            WHITE_Y * luv.l / KAPPA
        };
        let u_prime = luv.u / (13.0 * luv.l) + u_white;
        let v_prime = luv.v / (13.0 * luv.l) + v_white;
        if v_prime == 0.0 {
            return Self::default();
        }
        Self {
            x: y * 9.0 * u_prime / (4.0 * v_prime),
            y,
            z: y * (12.0 - 3.0 * u_prime - 20.0 * v_prime) / (4.0 * v_prime),
        }
    }
}

impl From<Color> for Luv {
    fn from(color: Color) -> Self {
        Xyz::from(color).into()
    }
}

impl From<Luv> for Color {
    fn from(luv: Luv) -> Self {
        Xyz::from(luv).into()
    }
}
