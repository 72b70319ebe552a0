//! Per-pixel wire message

use derive_more::{Display, Error};
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, unpack_argb};

/// Upper bound of an encoded [`PixelMessage`]
pub const MAX_MESSAGE_SIZE: usize = PixelMessage::POSTCARD_MAX_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MessageError {
    #[display("pixel message does not fit the output buffer")]
    Encode,
    #[display("malformed pixel message")]
    Decode,
}

/// One pixel update
///
/// `rgb` is packed `0xAARRGGBB` with the alpha byte reserved. A receiver
/// buffers every update and renders all of them once a message with
/// `commit` set arrives.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, MaxSize)]
pub struct PixelMessage {
    pub index: u32,
    pub rgb: u32,
    pub sequence: u64,
    pub commit: bool,
}

impl PixelMessage {
    /// Serialize into `buf`, returning the used prefix
    pub fn encode<'b>(&self, buf: &'b mut [u8]) -> Result<&'b [u8], MessageError> {
        postcard::to_slice(self, buf)
            .map(|used| &*used)
            .map_err(|_| MessageError::Encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MessageError> {
        postcard::from_bytes(bytes).map_err(|_| MessageError::Decode)
    }

    /// Device color carried by the message
    pub const fn color(&self) -> Rgb {
        unpack_argb(self.rgb)
    }
}
