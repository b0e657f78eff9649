//! Uncompressed 32-bit BMP output.
//!
//! Files carry a 14-byte file header and a 124-byte `BITMAPV5HEADER` with
//! explicit channel masks, so the alpha channel survives. Pixel data starts at
//! byte 138 and is stored as B, G, R, A. Rows of 32-bit pixels are already
//! 4-byte aligned and need no padding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::canvas::Canvas;
use crate::error::FlatDumpError;
use crate::pod::write_pod;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 124;
const BYTES_PER_PIXEL: usize = 4;
/// `BI_BITFIELDS`: uncompressed, channels described by the masks.
const COMPRESSION_BITFIELDS: u32 = 3;
/// `LCS_sRGB`, the bytes "sRGB" read as a little-endian u32.
const COLOR_SPACE_SRGB: u32 = 0x7352_4742;

/// Where canvas row 0 ends up in the written image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Origin {
    /// Row 0 is the top row (stored with a negative height).
    #[default]
    TopLeft,
    /// Row 0 is the bottom row.
    BottomLeft,
}

/// File header and info header, laid out byte for byte as on disk
#[repr(C, packed)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct BmpHeader {
    pub file_type: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub offset_data: u32,

    pub size: u32,
    pub width: i32,
    /// Negative for top-down images.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,

    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    pub color_space_type: u32,
    /// Endpoints, gamma, intent and profile fields, all unused for sRGB.
    pub unused: [u32; 16],
}

impl BmpHeader {
    /// Size of both headers together, which is also the pixel data offset.
    pub const SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

    /// Builds the headers for a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns `FlatDumpError::EmptyCanvas` if either dimension is zero, and
    /// `FlatDumpError::CanvasTooLarge` if the image does not fit the 32-bit
    /// header fields.
    pub fn new(width: usize, height: usize, origin: Origin) -> Result<Self, FlatDumpError> {
        if width == 0 || height == 0 {
            return Err(FlatDumpError::EmptyCanvas { width, height });
        }

        let too_large = FlatDumpError::CanvasTooLarge { width, height };
        let (Ok(signed_width), Ok(signed_height)) = (i32::try_from(width), i32::try_from(height))
        else {
            return Err(too_large);
        };
        let Some(size_image) = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .and_then(|bytes| u32::try_from(bytes).ok())
        else {
            return Err(too_large);
        };
        let Some(file_size) = size_image.checked_add(Self::SIZE) else {
            return Err(too_large);
        };

        Ok(Self {
            file_type: u16::from_le_bytes(*b"BM"),
            file_size,
            reserved1: 0,
            reserved2: 0,
            offset_data: Self::SIZE,
            size: INFO_HEADER_SIZE,
            width: signed_width,
            height: match origin {
                Origin::TopLeft => -signed_height,
                Origin::BottomLeft => signed_height,
            },
            planes: 1,
            bit_count: 32,
            compression: COMPRESSION_BITFIELDS,
            size_image,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
            red_mask: 0x00ff_0000,
            green_mask: 0x0000_ff00,
            blue_mask: 0x0000_00ff,
            alpha_mask: 0xff00_0000,
            color_space_type: COLOR_SPACE_SRGB,
            unused: [0; 16],
        })
    }

    /// Converts every field to little-endian, the on-disk byte order.
    #[must_use]
    pub fn to_le(self) -> Self {
        Self {
            file_type: self.file_type.to_le(),
            file_size: self.file_size.to_le(),
            reserved1: self.reserved1.to_le(),
            reserved2: self.reserved2.to_le(),
            offset_data: self.offset_data.to_le(),
            size: self.size.to_le(),
            width: self.width.to_le(),
            height: self.height.to_le(),
            planes: self.planes.to_le(),
            bit_count: self.bit_count.to_le(),
            compression: self.compression.to_le(),
            size_image: self.size_image.to_le(),
            x_pixels_per_meter: self.x_pixels_per_meter.to_le(),
            y_pixels_per_meter: self.y_pixels_per_meter.to_le(),
            colors_used: self.colors_used.to_le(),
            colors_important: self.colors_important.to_le(),
            red_mask: self.red_mask.to_le(),
            green_mask: self.green_mask.to_le(),
            blue_mask: self.blue_mask.to_le(),
            alpha_mask: self.alpha_mask.to_le(),
            color_space_type: self.color_space_type.to_le(),
            unused: self.unused.map(u32::to_le),
        }
    }
}

/// Encodes `canvas` as a BMP into `out`.
///
/// Canvas rows are written in order; `origin` decides whether row 0 is shown
/// at the top or the bottom of the image.
///
/// # Errors
///
/// Returns `FlatDumpError::EmptyCanvas` for a canvas without pixels,
/// `FlatDumpError::CanvasTooLarge` if it overflows the header fields, and
/// `FlatDumpError::Io` if the writer fails.
pub fn write_bmp<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    origin: Origin,
) -> Result<(), FlatDumpError> {
    let header = BmpHeader::new(canvas.width(), canvas.height(), origin)?;
    write_pod(out, &header.to_le())?;

    // The header rejected zero widths, so the chunk size is valid
    let mut row_bytes = Vec::with_capacity(canvas.width() * BYTES_PER_PIXEL);
    for row in canvas.pixels().chunks_exact(canvas.width()) {
        row_bytes.clear();
        for pixel in row {
            row_bytes.extend_from_slice(&[pixel.b, pixel.g, pixel.r, pixel.a]);
        }
        out.write_all(&row_bytes)?;
    }

    debug!(
        "bmp: wrote {}x{} image ({:?})",
        canvas.width(),
        canvas.height(),
        origin
    );
    Ok(())
}

/// Writes `canvas` to a BMP file at `path`, replacing any existing file.
///
/// # Errors
///
/// Same as [`write_bmp`]; file creation failures are `FlatDumpError::Io`.
pub fn save_bmp<P: AsRef<Path>>(
    path: P,
    canvas: &Canvas,
    origin: Origin,
) -> Result<(), FlatDumpError> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_bmp(&mut out, canvas, origin)?;
    out.flush()?;
    debug!("bmp: saved {}", path.as_ref().display());
    Ok(())
}
