//! Northern lights effect
//!
//! Every pixel relaxes back towards the commanded color while, now and then,
//! a spark of a neighbouring hue lights up somewhere and fades out again.
//! Randomness comes from a generator owned by the effect instance. The
//! generator keeps running across resets, so switching back to the effect
//! does not replay earlier sparks.

use embassy_time::Duration;

use super::{Effect, EffectError, ensure_finite};
use crate::{
    canvas::Canvas,
    color::{Color, ColorSpace, Hcl},
    math::{SplitMix, lerp},
    parameters::Parameters,
};

const DELAY: Duration = Duration::from_millis(10);
const DEFAULT_SEED: u64 = 0x6e6f_7274_6865_726e;

/// One pixel in this many sparks per paint
const SPARK_ODDS: u32 = 100;
/// Sparks shift hue by `180 / (k + 1)` degrees, `k` below this bound
const SPARK_HUE_DIVISIONS: u32 = 500;
const SPARK_HUE_SHIFT: f32 = 180.0;

/// Share of the current pixel kept per paint, at `adjust` 0 and 1
const SLOW_KEEP: f32 = 0.995;
const FAST_KEEP: f32 = 0.9;

#[derive(Debug, Clone)]
pub struct NorthernLightsEffect {
    rng: SplitMix,
}

impl Default for NorthernLightsEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl NorthernLightsEffect {
    pub const fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub const fn with_seed(seed: u64) -> Self {
        Self {
            rng: SplitMix::new(seed),
        }
    }
}

impl Effect for NorthernLightsEffect {
    #[allow(clippy::cast_precision_loss)]
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError> {
        let base = ensure_finite(params.color)?;
        let base_hcl = base.hcl();
        let keep = lerp(SLOW_KEEP, FAST_KEEP, params.adjust());
        let rng = &mut self.rng;

        canvas.fill_with(|_, _, current| {
            if rng.below(SPARK_ODDS) != 0 {
                return base.blend(current, keep, ColorSpace::Rgb);
            }
            let divisions = rng.below(SPARK_HUE_DIVISIONS) + 1;
            Color::from(Hcl {
                h: base_hcl.h + SPARK_HUE_SHIFT / divisions as f32,
                c: base_hcl.c,
                l: rng.unit() * base_hcl.l * 2.0,
            })
        });
        Ok(())
    }

    fn inter_frame_delay(&self) -> Duration {
        DELAY
    }
}
