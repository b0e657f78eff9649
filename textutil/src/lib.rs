//! Small text helpers.
//!
//! - [`base64_encode`] / [`base64_decode`]: standard-alphabet base64.
//! - [`trim_spaces`], [`extract_vector`], [`extract_map`]: pulling values
//!   out of bracketed lists and `key=value` lines.
//! - [`digit_at`], [`number_length`]: positional digits in any base.
//!
//! ```
//! # use textutil::{base64_decode, base64_encode, digit_at, number_length};
//! let encoded = base64_encode("Alexandria");
//! assert_eq!(encoded, "QWxleGFuZHJpYQ==");
//! assert_eq!(base64_decode(&encoded).unwrap(), b"Alexandria");
//!
//! assert_eq!(digit_at(90210, 3, 10).unwrap(), 0);
//! assert_eq!(digit_at(0xbeef, 2, 16).unwrap(), 0xe);
//! assert_eq!(number_length(-4096, 10).unwrap(), 4);
//! ```

mod codec;
mod digits;
mod error;
mod extract;

pub use crate::codec::{base64_decode, base64_encode};
pub use crate::digits::{digit_at, number_length};
pub use crate::error::TextUtilError;
pub use crate::extract::{
    extract_map, extract_vector, trim_spaces, LIST_IGNORED, MAP_IGNORED,
};
