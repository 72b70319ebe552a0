//! Traveling brightness wave
//!
//! One full wavelength spans the canvas width. The wave lifts the value of
//! the commanded color by up to one half and moves along x by a phase step
//! that follows `adjust`.

use embassy_time::Duration;

use super::{Effect, EffectError, columns, ensure_finite};
use crate::{
    canvas::Canvas,
    color::Hsv,
    math::{lerp, sin_deg, wrap_degrees},
    parameters::Parameters,
};

const DELAY: Duration = Duration::from_millis(5);
/// Half a turn per canvas width
const WAVE_SPAN: f32 = 180.0;
const MIN_SPEED: f32 = 0.25;
const MAX_SPEED: f32 = 4.0;

#[derive(Debug, Clone, Default)]
pub struct WaveEffect {
    phase: f32,
}

impl WaveEffect {
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }
}

impl Effect for WaveEffect {
    #[allow(clippy::cast_precision_loss)]
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError> {
        let base = ensure_finite(params.color)?.hsv();
        let start = params.angle_or_zero() + self.phase - WAVE_SPAN;
        let step = WAVE_SPAN / columns(canvas);

        canvas.fill_with(|x, _, _| {
            let lift = (1.0 + sin_deg(start + x as f32 * step)) / 4.0;
            Hsv {
                h: base.h,
                s: base.s,
                v: base.v + lift,
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
