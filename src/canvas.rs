//! Fixed-size 2D pixel buffer
//!
//! The canvas is the grid effects paint into. Its dimensions are chosen once
//! at construction and never change; storage is a `heapless::Vec` with a
//! compile-time capacity, so no allocator is involved.

use derive_more::{Display, Error};
use heapless::Vec;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CanvasError {
    #[display("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[display("canvas dimensions must be non-zero")]
    ZeroDimension,
    #[display("{cells} cells exceed the canvas capacity of {capacity}")]
    TooLarge { cells: usize, capacity: usize },
    #[display("canvas dimensions differ")]
    SizeMismatch,
}

/// Width × height grid of colors addressed by `(x, y)`
///
/// Cells are stored row-major. Every write is gamut-clamped, so the canvas
/// only ever holds displayable colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<const N: usize> {
    width: usize,
    height: usize,
    cells: Vec<Color, N>,
}

impl<const N: usize> Canvas<N> {
    /// Create a black canvas
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension);
        }
        let cells = width
            .checked_mul(height)
            .filter(|cells| *cells <= N)
            .ok_or(CanvasError::TooLarge {
                cells: width.saturating_mul(height),
                capacity: N,
            })?;

        let mut storage = Vec::new();
        storage
            .resize(cells, Color::BLACK)
            .map_err(|()| CanvasError::TooLarge { cells, capacity: N })?;

        Ok(Self {
            width,
            height,
            cells: storage,
        })
    }

    /// Canvas dimensions as `(width, height)`
    pub const fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Color, CanvasError> {
        let offset = self.offset(x, y)?;
        Ok(self.cells[offset])
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<(), CanvasError> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = color.clamped();
        Ok(())
    }

    /// Write the same color to every cell
    pub fn fill_all(&mut self, color: Color) {
        let color = color.clamped();
        self.cells.iter_mut().for_each(|cell| *cell = color);
    }

    /// Replace every cell with `paint(x, y, current)`
    ///
    /// Cells are visited once each, row by row.
    pub fn fill_with<F>(&mut self, mut paint: F)
    where
        F: FnMut(usize, usize, Color) -> Color,
    {
        let width = self.width;
        for (offset, cell) in self.cells.iter_mut().enumerate() {
            *cell = paint(offset % width, offset / width, *cell).clamped();
        }
    }

    /// Copy every cell of `other`, which must have the same dimensions
    pub fn copy_from(&mut self, other: &Self) -> Result<(), CanvasError> {
        if self.size() != other.size() {
            return Err(CanvasError::SizeMismatch);
        }
        self.cells.clone_from(&other.cells);
        Ok(())
    }

    /// Iterate over `(x, y, color)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, color)| (offset % width, offset / width, *color))
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}
