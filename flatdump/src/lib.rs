//! Flat dumps of plain-old-data values, small color types, and an
//! uncompressed BMP writer.
//!
//! # POD dumps
//!
//! Any `bytemuck::Pod` value can be written as its raw bytes and read back:
//!
//! ```
//! # use flatdump::{read_pod, read_pod_vec, write_pod, write_pod_vec};
//! # use std::io::Cursor;
//! #[repr(C)]
//! #[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
//! struct Sample {
//!     id: u32,
//!     value: f32,
//! }
//!
//! let mut out = Vec::new();
//! write_pod(&mut out, &Sample { id: 7, value: 0.5 }).unwrap();
//! write_pod_vec(&mut out, &[1u16, 2, 3]).unwrap();
//!
//! let mut input = Cursor::new(out);
//! let sample: Sample = read_pod(&mut input).unwrap();
//! let numbers: Vec<u16> = read_pod_vec(&mut input).unwrap();
//! assert_eq!(sample, Sample { id: 7, value: 0.5 });
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```
//!
//! Dumps use native byte order and layout; they are not a portable format.
//!
//! # Colors and bitmaps
//!
//! ```
//! # use flatdump::{heatmap, write_bmp, Canvas, Origin};
//! let mut canvas = Canvas::blank(16, 4).unwrap();
//! for x in 0..16 {
//!     let color = heatmap(x as f32 / 15.0).with_alpha(255);
//!     canvas.set(x, 0, color).unwrap();
//! }
//!
//! let mut bmp = Vec::new();
//! write_bmp(&mut bmp, &canvas, Origin::TopLeft).unwrap();
//! assert_eq!(&bmp[..2], b"BM");
//! assert_eq!(bmp.len(), 138 + 16 * 4 * 4);
//! ```

mod bitmap;
mod canvas;
mod color;
mod error;
mod pod;

pub use crate::bitmap::{save_bmp, write_bmp, BmpHeader, Origin};
pub use crate::canvas::Canvas;
pub use crate::color::{
    heatmap, hsv_to_rgb, random_color, rgb_to_hsv, Color, ColorAlpha, ColorHsv,
};
pub use crate::error::FlatDumpError;
pub use crate::pod::{read_pod, read_pod_vec, write_pod, write_pod_vec};
