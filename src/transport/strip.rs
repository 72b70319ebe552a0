//! Physical strip topology and wire sequencing

use derive_more::{Display, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StripError {
    #[display("strip width and height must be non-zero")]
    ZeroDimension,
    #[display("commit cadence must be non-zero")]
    ZeroCommitCadence,
    #[display("strip holds more pixels than a 32-bit index can address")]
    TooLarge,
}

/// Serpentine wiring address of logical `(x, y)`
///
/// Even rows run left to right, odd rows right to left. `x` must be below
/// `width`.
pub const fn physical_index(x: u32, y: u32, width: u32) -> u32 {
    debug_assert!(x < width, "column outside the strip");
    if y % 2 == 0 {
        y * width + x
    } else {
        y * width + (width - x - 1)
    }
}

/// Zig-zag wired strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    width: u32,
    height: u32,
    commit_cadence: u32,
}

impl Strip {
    pub fn new(width: u32, height: u32, commit_cadence: u32) -> Result<Self, StripError> {
        if width == 0 || height == 0 {
            return Err(StripError::ZeroDimension);
        }
        if commit_cadence == 0 {
            return Err(StripError::ZeroCommitCadence);
        }
        width.checked_mul(height).ok_or(StripError::TooLarge)?;
        Ok(Self {
            width,
            height,
            commit_cadence,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn commit_cadence(&self) -> u32 {
        self.commit_cadence
    }

    /// Total pixel count
    pub const fn len(&self) -> u32 {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn physical_index(&self, x: u32, y: u32) -> u32 {
        physical_index(x, y, self.width)
    }

    /// Whether the message carrying `sequence` asks for a full-frame render
    #[allow(clippy::cast_lossless)]
    pub const fn is_commit(&self, sequence: u64) -> bool {
        sequence % self.commit_cadence as u64 == 0
    }
}

/// Wire sequence numbers
///
/// Starts at zero and increments before each message, so the first message
/// carries sequence 1. Never resets.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    last: u64,
}

impl SequenceCounter {
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Claim the next sequence number
    pub fn advance(&mut self) -> u64 {
        self.last = self.last.wrapping_add(1);
        self.last
    }

    /// Last claimed number, zero before the first message
    pub const fn last(&self) -> u64 {
        self.last
    }
}
