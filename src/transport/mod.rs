//! Strip transport
//!
//! Streams the published frame to a remote LED renderer: one wire message per
//! pixel per cycle, addressed in serpentine order, sequenced across the whole
//! lifetime of the transport and flagged for commit every `commit_cadence`
//! messages. Delivery is best effort; failed sends are logged and skipped.

mod message;
mod pacer;
mod strip;
#[cfg(feature = "std")]
mod udp;

use core::fmt::Debug;

use derive_more::{Display, Error, From};
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use log::{debug, info, warn};
pub use message::{MAX_MESSAGE_SIZE, MessageError, PixelMessage};
pub use pacer::{FramePacer, FrameResult};
pub use strip::{SequenceCounter, Strip, StripError, physical_index};
#[cfg(feature = "std")]
pub use udp::UdpSink;

use crate::{
    canvas::{Canvas, CanvasError},
    color::Color,
    config::{ConfigError, EngineConfig},
    frame::SharedFrame,
    scheduler::CancelReceiver,
};

/// Message-oriented output the transport publishes datagrams to
///
/// Sends are fire-and-forget: nothing is read back and an error only means
/// this datagram was lost.
#[allow(async_fn_in_trait)]
pub trait PixelSink {
    type Error: Debug;

    async fn send(&mut self, datagram: &[u8]) -> Result<(), Self::Error>;
}

impl<S: PixelSink> PixelSink for &mut S {
    type Error = S::Error;

    async fn send(&mut self, datagram: &[u8]) -> Result<(), Self::Error> {
        (**self).send(datagram).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum TransportError {
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),
    #[display("invalid strip: {_0}")]
    #[from]
    Strip(StripError),
    #[display("frame unavailable: {_0}")]
    #[from]
    Canvas(CanvasError),
    #[display("canvas dimensions do not match the strip")]
    SizeMismatch,
}

/// Outcome of one pass over the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    pub sent: u32,
    pub failed: u32,
}

/// Running totals since the transport was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportStats {
    pub cycles: u64,
    pub sent: u64,
    pub failed: u64,
    pub overruns: u64,
}

pub struct Transport<S: PixelSink> {
    sink: S,
    strip: Strip,
    sequence: SequenceCounter,
    pacer: FramePacer,
    stats: TransportStats,
    blackout_on_stop: bool,
}

impl<S: PixelSink> Transport<S> {
    pub fn new(sink: S, config: &EngineConfig) -> Result<Self, TransportError> {
        config.validate()?;
        let width = u32::try_from(config.width).map_err(|_| StripError::TooLarge)?;
        let height = u32::try_from(config.height).map_err(|_| StripError::TooLarge)?;

        Ok(Self {
            sink,
            strip: Strip::new(width, height, config.commit_cadence)?,
            sequence: SequenceCounter::new(),
            pacer: FramePacer::from_frame_rate(config.frame_rate),
            stats: TransportStats::default(),
            blackout_on_stop: config.blackout_on_stop,
        })
    }

    pub const fn strip(&self) -> &Strip {
        &self.strip
    }

    pub const fn stats(&self) -> TransportStats {
        self.stats
    }

    /// Sequence number of the last attempted message
    pub const fn last_sequence(&self) -> u64 {
        self.sequence.last()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Send every pixel of `canvas` once, row by row
    ///
    /// Each attempt consumes a sequence number whether or not the send
    /// succeeds, so receivers see lost messages as gaps.
    pub async fn send_frame<const N: usize>(
        &mut self,
        canvas: &Canvas<N>,
    ) -> Result<CycleReport, TransportError> {
        let (width, height) = canvas.size();
        if (width, height) != (self.strip.width() as usize, self.strip.height() as usize) {
            return Err(TransportError::SizeMismatch);
        }

        let mut report = CycleReport::default();
        let mut buf = [0u8; MAX_MESSAGE_SIZE];
        for (x, y, color) in canvas.iter() {
            // dimensions were checked against the u32 strip above
            #[allow(clippy::cast_possible_truncation)]
            let index = self.strip.physical_index(x as u32, y as u32);
            let sequence = self.sequence.advance();
            let message = PixelMessage {
                index,
                rgb: color.to_argb(),
                sequence,
                commit: self.strip.is_commit(sequence),
            };

            let sent = match message.encode(&mut buf) {
                Ok(datagram) => self.sink.send(datagram).await.map_err(|err| {
                    warn!("failed to send pixel {} (sequence {}): {:?}", index, sequence, err);
                }),
                Err(err) => {
                    warn!("failed to encode pixel {} (sequence {}): {}", index, sequence, err);
                    Err(())
                }
            };
            match sent {
                Ok(()) => report.sent += 1,
                Err(()) => report.failed += 1,
            }
        }

        self.stats.cycles += 1;
        self.stats.sent += u64::from(report.sent);
        self.stats.failed += u64::from(report.failed);
        Ok(report)
    }

    /// Stream `frame` at the configured rate until a value arrives on `cancel`
    pub async fn run<const N: usize>(
        &mut self,
        frame: &SharedFrame<N>,
        cancel: CancelReceiver<'_>,
    ) -> Result<TransportStats, TransportError> {
        let mut buffer = frame.back_buffer();
        info!(
            "transport started: {}x{} strip, {} ms per cycle",
            self.strip.width(),
            self.strip.height(),
            self.pacer.period().as_millis()
        );

        self.pacer.start(Instant::now());
        loop {
            frame.snapshot_into(&mut buffer)?;
            let report = self.send_frame(&buffer).await?;
            if report.failed > 0 {
                debug!("cycle finished with {} failed sends", report.failed);
            }

            let pacing = self.pacer.tick(Instant::now());
            if pacing.overrun {
                self.stats.overruns += 1;
                debug!("transport cycle overran {} ms period", self.pacer.period().as_millis());
            }

            match select(cancel.receive(), Timer::at(pacing.next_deadline)).await {
                Either::First(()) => break,
                Either::Second(()) => {}
            }
        }

        if self.blackout_on_stop {
            buffer.fill_all(Color::BLACK);
            self.send_frame(&buffer).await?;
        }

        info!(
            "transport stopped after {} cycles ({} sent, {} failed)",
            self.stats.cycles, self.stats.sent, self.stats.failed
        );
        Ok(self.stats)
    }
}
