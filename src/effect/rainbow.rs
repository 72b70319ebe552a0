//! Rotating hue wheel
//!
//! The commanded color fixes saturation and value; hue spreads across the
//! columns and rotates a little on every paint. The rotation speed follows
//! `adjust`.

use embassy_time::Duration;

use super::{Effect, EffectError, columns, ensure_finite};
use crate::{
    canvas::Canvas,
    color::Hsv,
    math::{lerp, wrap_degrees},
    parameters::Parameters,
};

const DELAY: Duration = Duration::from_millis(4);
/// Hue range covered by one canvas width, in degrees
const HUE_SPREAD: f32 = 140.0;
const MIN_SPEED: f32 = 0.1;
const MAX_SPEED: f32 = 2.0;

#[derive(Debug, Clone, Default)]
pub struct RainbowEffect {
    /// Hue rotation accumulated across paints, degrees
    phase: f32,
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_precision_loss)]
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError> {
        let base = ensure_finite(params.color)?.hsv();
        let offset = params.angle_or_zero() + self.phase;
        let step = HUE_SPREAD / columns(canvas);

        canvas.fill_with(|x, _, _| {
            Hsv {
                h: wrap_degrees(offset + x as f32 * step),
                s: base.s,
                v: base.v,
            }
            .into()
        });

        self.phase = wrap_degrees(self.phase + lerp(MIN_SPEED, MAX_SPEED, params.adjust()));
        Ok(())
    }

    fn inter_frame_delay(&self) -> Duration {
        DELAY
    }

    fn reset(&mut self) {
        self.phase = 0.0;
    }
}
