//! Flattening multi-dimensional indices into one storage position.
//!
//! Both functions return `None` if the position overflows `usize`.

/// Row-major position of `(x, y)` in a grid `width` cells wide.
#[must_use]
pub fn collapse_2d(x: usize, y: usize, width: usize) -> Option<usize> {
    y.checked_mul(width)?.checked_add(x)
}

/// Position of `(x, y, z)` in a block of `width * height` planes.
///
/// `x` selects the plane, `y` the row inside it and `z` the cell, so `z`
/// varies fastest.
#[must_use]
pub fn collapse_3d(x: usize, y: usize, z: usize, width: usize, height: usize) -> Option<usize> {
    let plane = x.checked_mul(width)?.checked_mul(height)?;
    let row = y.checked_mul(width)?;
    plane.checked_add(row)?.checked_add(z)
}
