//! Published frame shared between the scheduler and the transport.
//!
//! The scheduler paints into a back canvas it owns exclusively and publishes
//! the finished picture here; the transport copies the latest picture out.
//! Both sides hold the critical section only for a single memory copy, so
//! neither ever waits on the other's paint or send work and a reader can
//! never observe a half-painted frame.
//!
//! Only the holder of the frame's single [`FrameWriter`] can publish.

use core::cell::{Cell, RefCell};
use core::ops::Deref;

use critical_section::Mutex;

use crate::canvas::{Canvas, CanvasError};
use crate::color::Color;

/// Front buffer of a double-buffered canvas
pub struct SharedFrame<const N: usize> {
    inner: Mutex<RefCell<Canvas<N>>>,
    claimed: Mutex<Cell<bool>>,
}

impl<const N: usize> SharedFrame<N> {
    /// Create a black frame with the given dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Ok(Self {
            inner: Mutex::new(RefCell::new(Canvas::new(width, height)?)),
            claimed: Mutex::new(Cell::new(false)),
        })
    }

    /// Get a back canvas matching this frame's dimensions
    pub fn back_buffer(&self) -> Canvas<N> {
        self.snapshot()
    }

    pub fn size(&self) -> (usize, usize) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().size())
    }

    /// Claim the right to publish
    ///
    /// Returns `None` while another writer is alive. The claim is released
    /// when the returned writer is dropped.
    pub fn writer(&self) -> Option<FrameWriter<'_, N>> {
        let taken = critical_section::with(|cs| self.claimed.borrow(cs).replace(true));
        if taken {
            None
        } else {
            Some(FrameWriter { frame: self })
        }
    }

    pub fn has_writer(&self) -> bool {
        critical_section::with(|cs| self.claimed.borrow(cs).get())
    }

    /// Copy the published picture into `target`
    pub fn snapshot_into(&self, target: &mut Canvas<N>) -> Result<(), CanvasError> {
        critical_section::with(|cs| target.copy_from(&self.inner.borrow(cs).borrow()))
    }

    /// Clone the published picture
    pub fn snapshot(&self) -> Canvas<N> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().clone())
    }

    /// Read a single published pixel
    pub fn get(&self, x: usize, y: usize) -> Result<Color, CanvasError> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().get(x, y))
    }
}

/// Exclusive publishing handle of a [`SharedFrame`]
pub struct FrameWriter<'a, const N: usize> {
    frame: &'a SharedFrame<N>,
}

impl<const N: usize> FrameWriter<'_, N> {
    /// Replace the published picture with `canvas`
    pub fn publish(&self, canvas: &Canvas<N>) -> Result<(), CanvasError> {
        critical_section::with(|cs| {
            self.frame
                .inner
                .borrow(cs)
                .borrow_mut()
                .copy_from(canvas)
        })
    }
}

impl<const N: usize> Deref for FrameWriter<'_, N> {
    type Target = SharedFrame<N>;

    fn deref(&self) -> &Self::Target {
        self.frame
    }
}

impl<const N: usize> Drop for FrameWriter<'_, N> {
    fn drop(&mut self) {
        critical_section::with(|cs| self.frame.claimed.borrow(cs).set(false));
    }
}
