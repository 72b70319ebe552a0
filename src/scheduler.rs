//! Effect scheduler
//!
//! A single task owns the back canvas and repaints it whenever a command
//! arrives or the active effect's inter-frame delay runs out. Every
//! successful paint is published to the [`SharedFrame`] the transport reads.
//! A scheduler holds the frame's only writer for as long as it lives.
//!
//! [`Scheduler::apply`] and [`Scheduler::tick`] hold the whole state machine
//! and can be driven synchronously; [`Scheduler::run`] wires them to the
//! command channel, a timer and a cancellation channel.

use derive_more::{Display, Error, From};
use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Timer};
use log::{debug, info, warn};

use crate::{
    canvas::Canvas,
    color::Color,
    config::EngineConfig,
    effect::guard_paint,
    frame::{FrameWriter, SharedFrame},
    parameters::{Parameters, ParametersError},
    registry::Registry,
};

/// Command queue feeding a scheduler
pub type CommandChannel<const SIZE: usize> = Channel<CriticalSectionRawMutex, Parameters, SIZE>;
pub type CommandSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, Parameters, SIZE>;
pub type CommandReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, Parameters, SIZE>;

/// Single-slot stop signal; sending any value stops the receiving loop
pub type CancelChannel = Channel<CriticalSectionRawMutex, (), 1>;
pub type CancelSender<'a> = Sender<'a, CriticalSectionRawMutex, (), 1>;
pub type CancelReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, (), 1>;

/// Delay used if the active effect vanished from the registry
const FALLBACK_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SchedulerError {
    #[display("default effect is not registered")]
    UnknownDefault,
    #[display("frame already has a writer")]
    FrameBusy,
    #[display("invalid default parameters: {_0}")]
    #[from]
    Parameters(ParametersError),
}

/// Summary returned once [`Scheduler::run`] is cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerExit {
    pub paints: u32,
    pub paint_failures: u32,
}

pub struct Scheduler<'a, const N: usize> {
    registry: Registry,
    default_effect: &'static str,
    active: &'static str,
    params: Parameters,
    frame: FrameWriter<'a, N>,
    paints: u32,
    paint_failures: u32,
}

impl<'a, const N: usize> Scheduler<'a, N> {
    /// Create a scheduler with the configured default effect selected
    ///
    /// Nothing is painted until the first [`apply`](Self::apply),
    /// [`tick`](Self::tick) or [`run`](Self::run). Fails with
    /// [`SchedulerError::FrameBusy`] while another scheduler still writes
    /// to `frame`; dropping that scheduler frees the frame.
    pub fn new(
        registry: Registry,
        config: &EngineConfig,
        frame: &'a SharedFrame<N>,
    ) -> Result<Self, SchedulerError> {
        let default_effect = registry
            .resolve(config.default_effect)
            .ok_or(SchedulerError::UnknownDefault)?;
        let mut params = Parameters::new(default_effect, Color::BLACK)?;
        params.resolve_angle(0.0);
        let frame = frame.writer().ok_or(SchedulerError::FrameBusy)?;

        Ok(Self {
            registry,
            default_effect,
            active: default_effect,
            params,
            frame,
            paints: 0,
            paint_failures: 0,
        })
    }

    /// Name of the selected effect
    pub const fn active(&self) -> &'static str {
        self.active
    }

    /// Last received parameters with the angle resolved
    pub const fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub const fn paints(&self) -> u32 {
        self.paints
    }

    pub const fn paint_failures(&self) -> u32 {
        self.paint_failures
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle a new command: select its effect and paint immediately
    ///
    /// Unknown names fall back to the default effect. Returns the delay
    /// until the next [`tick`](Self::tick).
    pub fn apply(&mut self, mut params: Parameters, canvas: &mut Canvas<N>) -> Duration {
        let name = match self.registry.resolve(params.name()) {
            Some(name) => name,
            None => {
                warn!(
                    "unknown effect {:?}, falling back to {:?}",
                    params.name(),
                    self.default_effect
                );
                self.default_effect
            }
        };

        let switching = name != self.active;
        if params.angle().is_none() {
            let carried = if switching {
                0.0
            } else {
                self.params.angle_or_zero()
            };
            params.resolve_angle(carried);
        }

        if switching {
            info!("switching effect {:?} -> {:?}", self.active, name);
            if let Some(slot) = self.registry.get_mut(name) {
                slot.reset();
            }
            self.active = name;
        }
        self.params = params;
        self.draw(canvas)
    }

    /// Repaint the selected effect with the last parameters
    pub fn tick(&mut self, canvas: &mut Canvas<N>) -> Duration {
        self.draw(canvas)
    }

    /// Run until a value arrives on `cancel`
    ///
    /// Paints the selected effect once on start.
    pub async fn run<const SIZE: usize>(
        &mut self,
        canvas: &mut Canvas<N>,
        commands: CommandReceiver<'_, SIZE>,
        cancel: CancelReceiver<'_>,
    ) -> SchedulerExit {
        info!("scheduler started with effect {:?}", self.active);
        let mut delay = self.tick(canvas);

        loop {
            match select3(cancel.receive(), commands.receive(), Timer::after(delay)).await {
                Either3::First(()) => break,
                Either3::Second(params) => delay = self.apply(params, canvas),
                Either3::Third(()) => delay = self.tick(canvas),
            }
        }

        info!(
            "scheduler stopped after {} paints ({} failed)",
            self.paints, self.paint_failures
        );
        SchedulerExit {
            paints: self.paints,
            paint_failures: self.paint_failures,
        }
    }

    fn draw(&mut self, canvas: &mut Canvas<N>) -> Duration {
        let Some(slot) = self.registry.get_mut(self.active) else {
            warn!("effect {:?} is no longer registered", self.active);
            return FALLBACK_DELAY;
        };

        let params = &self.params;
        let outcome = guard_paint(|| slot.paint(canvas, params))
            .and_then(|()| self.frame.publish(canvas).map_err(Into::into));

        match outcome {
            Ok(()) => {
                self.paints = self.paints.wrapping_add(1);
                debug!("painted {:?}", self.active);
            }
            Err(err) => {
                self.paint_failures = self.paint_failures.wrapping_add(1);
                warn!("effect {:?} failed to paint: {}", self.active, err);
                // keep showing the last good picture
                if let Err(err) = self.frame.snapshot_into(canvas) {
                    warn!("cannot restore canvas: {}", err);
                }
            }
        }
        slot.inter_frame_delay()
    }
}
