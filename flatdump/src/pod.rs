//! Raw byte dumps of plain-old-data values.
//!
//! Values are written exactly as they sit in memory, in native byte order.
//! A dump is only portable between machines with the same layout and
//! endianness.

use std::io::{Read, Write};

use bytemuck::Pod;

use crate::error::FlatDumpError;

/// Upper bound on the up-front allocation of `read_pod_vec`, in elements.
const PREALLOC_LIMIT: usize = 4096;

/// Writes the raw bytes of `value`.
///
/// # Errors
///
/// Returns `FlatDumpError::Io` if the writer fails.
pub fn write_pod<W: Write, T: Pod>(out: &mut W, value: &T) -> Result<(), FlatDumpError> {
    out.write_all(bytemuck::bytes_of(value))?;
    Ok(())
}

/// Reads back a value written by [`write_pod`].
///
/// # Errors
///
/// Returns `FlatDumpError::Io` if the reader fails or ends before
/// `size_of::<T>()` bytes were read.
pub fn read_pod<R: Read, T: Pod>(input: &mut R) -> Result<T, FlatDumpError> {
    let mut value = T::zeroed();
    input.read_exact(bytemuck::bytes_of_mut(&mut value))?;
    Ok(value)
}

/// Writes a `u64` element count followed by the raw bytes of every element.
///
/// # Errors
///
/// Returns `FlatDumpError::Io` if the writer fails.
pub fn write_pod_vec<W: Write, T: Pod>(out: &mut W, items: &[T]) -> Result<(), FlatDumpError> {
    let length = items.len() as u64;
    write_pod(out, &length)?;
    out.write_all(bytemuck::cast_slice(items))?;
    Ok(())
}

/// Reads back a vector written by [`write_pod_vec`].
///
/// # Errors
///
/// Returns `FlatDumpError::LengthOverflow` if the count prefix exceeds
/// `usize`, and `FlatDumpError::Io` if the input is shorter than the prefix
/// announces.
pub fn read_pod_vec<R: Read, T: Pod>(input: &mut R) -> Result<Vec<T>, FlatDumpError> {
    let length: u64 = read_pod(input)?;
    let count = usize::try_from(length).map_err(|_| FlatDumpError::LengthOverflow { length })?;

    // The prefix is untrusted, so grow with the data instead of trusting it.
    let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        items.push(read_pod(input)?);
    }
    Ok(items)
}
