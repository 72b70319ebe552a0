use super::Rgb;

/// Alpha byte written into packed device colors
const OPAQUE: u32 = 0xFF;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack a device color as `0xAARRGGBB` with an opaque alpha byte
#[allow(clippy::cast_lossless)]
pub const fn pack_argb(rgb: Rgb) -> u32 {
    (OPAQUE << 24) | ((rgb.r as u32) << 16) | ((rgb.g as u32) << 8) | rgb.b as u32
}

/// Unpack a `0xAARRGGBB` value, ignoring the alpha byte
pub const fn unpack_argb(argb: u32) -> Rgb {
    rgb_from_u32(argb & 0x00FF_FFFF)
}
