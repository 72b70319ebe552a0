//! Turns every pixel off

use embassy_time::Duration;

use super::{Effect, EffectError};
use crate::{
    canvas::Canvas,
    color::{Color, LinearRgb},
    parameters::Parameters,
};

/// Nothing changes once the canvas is dark
const DELAY: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Copy, Default)]
pub struct OffEffect;

impl Effect for OffEffect {
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        _params: &Parameters,
    ) -> Result<(), EffectError> {
        canvas.fill_all(Color::from(LinearRgb::default()));
        Ok(())
    }

    fn inter_frame_delay(&self) -> Duration {
        DELAY
    }
}
