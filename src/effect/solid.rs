//! Solid color fill effect
//!
//! Fills every pixel with the commanded color.

use embassy_time::Duration;

use super::{Effect, EffectError, ensure_finite};
use crate::{canvas::Canvas, parameters::Parameters};

const DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError> {
        canvas.fill_all(ensure_finite(params.color)?);
        Ok(())
    }

    fn inter_frame_delay(&self) -> Duration {
        DELAY
    }
}
