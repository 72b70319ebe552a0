//! Float helpers shared by the color model and the effects.
//!
//! Everything goes through `libm` so the crate stays `no_std`.

/// Full turn in degrees
pub const FULL_TURN: f32 = 360.0;

/// Linear interpolation between `start` and `end`
///
/// `t = 0.0` returns `start`, `t = 1.0` returns `end`.
#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + t * (end - start)
}

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees - FULL_TURN * libm::floorf(degrees / FULL_TURN);
    // floorf rounding can land exactly on the upper bound for tiny negatives
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Interpolate between two hues along the shorter arc
///
/// The result is wrapped into `[0, 360)`.
pub fn lerp_degrees(start: f32, end: f32, t: f32) -> f32 {
    let mut delta = wrap_degrees(end) - wrap_degrees(start);
    if delta > FULL_TURN / 2.0 {
        delta -= FULL_TURN;
    } else if delta < -FULL_TURN / 2.0 {
        delta += FULL_TURN;
    }
    wrap_degrees(start + t * delta)
}

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(degrees: f32) -> f32 {
    libm::sinf(degrees.to_radians())
}

/// Small seeded pseudo random generator
///
/// SplitMix64. Each effect owns its own instance, so two engines never share
/// a random stream.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform integer in `[0, bound)`; `bound` of zero yields zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        ((self.next_u64() >> 32) % u64::from(bound)) as u32
    }

    /// Uniform float in `[0, 1)`
    #[allow(clippy::cast_precision_loss)]
    pub fn unit(&mut self) -> f32 {
        // 24 random bits fill the f32 mantissa exactly
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}
