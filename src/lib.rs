#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod canvas;
pub mod color;
pub mod config;
pub mod effect;
pub mod frame;
pub mod math;
pub mod parameters;
pub mod registry;
pub mod scheduler;
pub mod transport;

pub use canvas::{Canvas, CanvasError};
pub use color::{Color, ColorSpace, Rgb};
pub use config::{ConfigError, EngineConfig};
pub use effect::{Effect, EffectError, EffectId, EffectSlot};
pub use frame::{FrameWriter, SharedFrame};
pub use parameters::{Parameters, ParametersError};
pub use registry::{Registry, RegistryError};
pub use scheduler::{
    CancelChannel, CancelReceiver, CancelSender, CommandChannel, CommandReceiver, CommandSender,
    Scheduler, SchedulerError, SchedulerExit,
};
pub use transport::{
    CycleReport, PixelMessage, PixelSink, Strip, Transport, TransportError, TransportStats,
    physical_index,
};
pub use embassy_time::{Duration, Instant};
