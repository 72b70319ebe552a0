//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod northern_lights;
mod off;
mod rainbow;
mod solid;
mod wave;

use derive_more::{Display, Error, From};
use embassy_time::Duration;
pub use northern_lights::NorthernLightsEffect;
pub use off::OffEffect;
pub use rainbow::RainbowEffect;
pub use solid::SolidEffect;
pub use wave::WaveEffect;

use crate::{
    canvas::{Canvas, CanvasError},
    color::Color,
    parameters::Parameters,
};

const EFFECT_NAME_OFF: &str = "off";
const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_WAVE: &str = "wave";
const EFFECT_NAME_NORTHERN_LIGHTS: &str = "northern_lights";

const EFFECT_ID_OFF: u8 = 0;
const EFFECT_ID_SOLID: u8 = 1;
const EFFECT_ID_RAINBOW: u8 = 2;
const EFFECT_ID_WAVE: u8 = 3;
const EFFECT_ID_NORTHERN_LIGHTS: u8 = 4;

/// Paint step failure; the scheduler skips the tick and keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum EffectError {
    #[display("canvas access failed: {_0}")]
    #[from]
    Canvas(CanvasError),
    #[display("effect arithmetic produced a non-finite value")]
    NonFinite,
    #[display("effect panicked while painting")]
    Panicked,
}

pub trait Effect {
    /// Paint one frame onto `canvas`
    ///
    /// May advance effect-private phase state. Must finish quickly: this
    /// runs once per animation tick.
    fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError>;

    /// How long to wait before painting again when no command arrives
    fn inter_frame_delay(&self) -> Duration;

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Everything black
    Off(OffEffect),
    /// Single color fill
    Solid(SolidEffect),
    /// Hue wheel rotating across the columns
    Rainbow(RainbowEffect),
    /// Brightness wave traveling along x
    Wave(WaveEffect),
    /// Slow organic drift with random sparks
    NorthernLights(NorthernLightsEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Off = EFFECT_ID_OFF,
    Solid = EFFECT_ID_SOLID,
    Rainbow = EFFECT_ID_RAINBOW,
    Wave = EFFECT_ID_WAVE,
    NorthernLights = EFFECT_ID_NORTHERN_LIGHTS,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Off(OffEffect)
    }
}

impl EffectId {
    pub const ALL: [Self; 5] = [
        Self::Off,
        Self::Solid,
        Self::Rainbow,
        Self::Wave,
        Self::NorthernLights,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_OFF => Self::Off,
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_WAVE => Self::Wave,
            EFFECT_ID_NORTHERN_LIGHTS => Self::NorthernLights,
            _ => return None,
        })
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Off => EffectSlot::Off(OffEffect),
            Self::Solid => EffectSlot::Solid(SolidEffect),
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::Wave => EffectSlot::Wave(WaveEffect::new()),
            Self::NorthernLights => {
                EffectSlot::NorthernLights(NorthernLightsEffect::new())
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => EFFECT_NAME_OFF,
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Wave => EFFECT_NAME_WAVE,
            Self::NorthernLights => EFFECT_NAME_NORTHERN_LIGHTS,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_OFF => Some(Self::Off),
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_WAVE => Some(Self::Wave),
            EFFECT_NAME_NORTHERN_LIGHTS => Some(Self::NorthernLights),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Paint the current effect
    pub fn paint<const N: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        params: &Parameters,
    ) -> Result<(), EffectError> {
        match self {
            Self::Off(effect) => effect.paint(canvas, params),
            Self::Solid(effect) => effect.paint(canvas, params),
            Self::Rainbow(effect) => effect.paint(canvas, params),
            Self::Wave(effect) => effect.paint(canvas, params),
            Self::NorthernLights(effect) => effect.paint(canvas, params),
        }
    }

    pub fn inter_frame_delay(&self) -> Duration {
        match self {
            Self::Off(effect) => effect.inter_frame_delay(),
            Self::Solid(effect) => effect.inter_frame_delay(),
            Self::Rainbow(effect) => effect.inter_frame_delay(),
            Self::Wave(effect) => effect.inter_frame_delay(),
            Self::NorthernLights(effect) => effect.inter_frame_delay(),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Off(effect) => Effect::reset(effect),
            Self::Solid(effect) => Effect::reset(effect),
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Wave(effect) => Effect::reset(effect),
            Self::NorthernLights(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Off(_) => EffectId::Off,
            Self::Solid(_) => EffectId::Solid,
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Wave(_) => EffectId::Wave,
            Self::NorthernLights(_) => EffectId::NorthernLights,
        }
    }
}

/// Reject colors whose components are NaN or infinite
pub(crate) fn ensure_finite(color: Color) -> Result<Color, EffectError> {
    if color.r().is_finite() && color.g().is_finite() && color.b().is_finite() {
        Ok(color)
    } else {
        Err(EffectError::NonFinite)
    }
}

/// Run one paint step, turning a panic inside it into [`EffectError::Panicked`]
#[cfg(feature = "std")]
pub(crate) fn guard_paint(
    paint: impl FnOnce() -> Result<(), EffectError>,
) -> Result<(), EffectError> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(paint))
        .unwrap_or(Err(EffectError::Panicked))
}

/// Without unwinding support a paint step can only fail through its result
#[cfg(not(feature = "std"))]
pub(crate) fn guard_paint(
    paint: impl FnOnce() -> Result<(), EffectError>,
) -> Result<(), EffectError> {
    paint()
}

/// Width as a float divisor, never below one column
#[allow(clippy::cast_precision_loss)]
pub(crate) fn columns<const N: usize>(canvas: &Canvas<N>) -> f32 {
    canvas.width().max(1) as f32
}
