use std::mem;

use crate::color::ColorAlpha;
use crate::error::FlatDumpError;

/// Allocations above `isize::MAX` bytes are rejected by `Vec`.
#[allow(clippy::cast_sign_loss)]
const MAX_BYTES: usize = isize::MAX as usize;

/// A rectangular grid of RGBA pixels addressed by `(x, y)`
///
/// Pixels are stored row by row, so `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<ColorAlpha>,
}

impl Canvas {
    /// Creates a canvas filled with opaque white.
    ///
    /// # Errors
    ///
    /// Returns `FlatDumpError::CanvasTooLarge` if `width * height` pixels
    /// cannot be addressed.
    pub fn blank(width: usize, height: usize) -> Result<Self, FlatDumpError> {
        Self::filled(width, height, ColorAlpha::WHITE)
    }

    /// Creates a canvas with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns `FlatDumpError::CanvasTooLarge` if `width * height` pixels
    /// cannot be addressed.
    pub fn filled(width: usize, height: usize, color: ColorAlpha) -> Result<Self, FlatDumpError> {
        let fits = |count: &usize| {
            count
                .checked_mul(mem::size_of::<ColorAlpha>())
                .is_some_and(|bytes| bytes <= MAX_BYTES)
        };
        let Some(count) = width.checked_mul(height).filter(fits) else {
            return Err(FlatDumpError::CanvasTooLarge { width, height });
        };
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row by row.
    #[must_use]
    pub fn pixels(&self) -> &[ColorAlpha] {
        &self.pixels
    }

    /// Returns one row of pixels, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[ColorAlpha]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<ColorAlpha> {
        let index = self.index(x, y)?;
        self.pixels.get(index).copied()
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut ColorAlpha> {
        let index = self.index(x, y)?;
        self.pixels.get_mut(index)
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `FlatDumpError::PixelOutOfBounds` if `(x, y)` is outside the canvas.
    pub fn set(&mut self, x: usize, y: usize, color: ColorAlpha) -> Result<(), FlatDumpError> {
        let (width, height) = (self.width, self.height);
        let pixel = self
            .get_mut(x, y)
            .ok_or(FlatDumpError::PixelOutOfBounds {
                x,
                y,
                width,
                height,
            })?;
        *pixel = color;
        Ok(())
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}
