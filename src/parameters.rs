//! Command value selecting an effect and its inputs

use derive_more::{Display, Error};
use heapless::String;

use crate::color::Color;
use crate::math::wrap_degrees;

/// Longest accepted effect name in bytes
pub const MAX_NAME_LEN: usize = 32;

pub type EffectName = String<MAX_NAME_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParametersError {
    #[display("effect name is longer than {} bytes", MAX_NAME_LEN)]
    NameTooLong,
}

/// Decoded command handed to the scheduler
///
/// `adjust` is kept inside `[0, 1]` and `angle`, when present, inside
/// `[0, 360)`. A missing angle lets the scheduler carry the previous one
/// forward while the same effect stays selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    name: EffectName,
    pub color: Color,
    adjust: f32,
    angle: Option<f32>,
}

impl Parameters {
    pub fn new(name: &str, color: Color) -> Result<Self, ParametersError> {
        let mut owned = EffectName::new();
        owned
            .push_str(name)
            .map_err(|()| ParametersError::NameTooLong)?;
        Ok(Self {
            name: owned,
            color,
            adjust: 0.0,
            angle: None,
        })
    }

    /// Set the effect-defined adjustment, clamped to `[0, 1]`
    #[must_use]
    pub fn with_adjust(mut self, adjust: f32) -> Self {
        self.adjust = clamp_unit(adjust);
        self
    }

    /// Set the phase angle in degrees
    #[must_use]
    pub fn with_angle(mut self, degrees: f32) -> Self {
        self.angle = Some(wrap_angle(degrees));
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub const fn adjust(&self) -> f32 {
        self.adjust
    }

    pub const fn angle(&self) -> Option<f32> {
        self.angle
    }

    /// Angle with the unset case read as 0°
    pub fn angle_or_zero(&self) -> f32 {
        self.angle.unwrap_or(0.0)
    }

    pub(crate) fn resolve_angle(&mut self, degrees: f32) {
        self.angle = Some(wrap_angle(degrees));
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn wrap_angle(degrees: f32) -> f32 {
    if degrees.is_finite() {
        wrap_degrees(degrees)
    } else {
        0.0
    }
}
