#![no_std]

//! `CircBuf`: a vector adapter with a movable logical zero.
//!
//! `CircBuf` keeps its elements in a plain `Vec` and remembers which storage
//! slot is logical position 0. Rotating the buffer only moves that marker, so
//! it is `O(1)`; the relative order of the elements never changes.
//!
//! Logical position `i` maps to storage index `(zero + i) mod len` with a
//! floored modulo, so negative offsets and offsets past the end wrap around.
//!
//! # Time Complexity
//! - `advance()`, `retreat()`, indexing: O(1)
//! - `insert()`, `remove()`: O(n), the tail of the storage shifts by one
//! - `clear()`: O(n) for element drops
//!
//! # Insert & Rotate
//!
//! `insert()` places the new element at logical 0, pushing the previous
//! logical 0 to logical 1:
//!
//! ```
//! # use circbuf::CircBuf;
//! let mut circle = CircBuf::new();
//! circle.insert("One");
//! circle.insert("Two");
//! circle.insert("Three");
//! assert_eq!(circle.to_vec(), vec!["Three", "Two", "One"]);
//!
//! // Postfix increment hands back the old logical 0
//! assert_eq!(circle.fetch_increment().unwrap(), "Three");
//! assert_eq!(circle.to_vec(), vec!["Two", "One", "Three"]);
//!
//! // Offsets wrap in both directions
//! assert_eq!(circle[-1], "Three");
//! assert_eq!(circle[4], "One");
//! ```
//!
//! # Operators
//!
//! `+=`, `-=`, `[]` panic on an empty buffer; the named methods return
//! `CircBufError::Empty` instead:
//!
//! ```
//! # use circbuf::{CircBuf, CircBufError};
//! let mut circle = CircBuf::from(vec![1, 2, 3]);
//! circle += 5;
//! assert_eq!(circle[0], 3);
//! circle -= 1;
//! assert_eq!(circle[0], 2);
//!
//! let mut empty: CircBuf<i32> = CircBuf::new();
//! assert!(empty.advance(1).is_err());
//! assert!(empty.try_get(0).is_err());
//! assert!(matches!(empty.remove(), Err(CircBufError::Empty { .. })));
//! ```
//!
//! # Iteration
//!
//! ```
//! # use circbuf::CircBuf;
//! let circle = CircBuf::from(vec!['a', 'b', 'c']);
//! let twice: String = circle.iter().cycle().take(2 * circle.len()).collect();
//! assert_eq!(twice, "abcabc");
//! ```
//!
//! `CircBuf` does no internal locking. Sharing one across threads needs
//! external synchronization.
//!
//! # `no_std`
//!
//! The crate is `no_std` and only needs `alloc` for its `Vec` storage.

extern crate alloc;

mod core;
mod error;
mod iter;

pub use crate::core::CircBuf;
pub use crate::error::CircBufError;
pub use crate::iter::CircBufIter;
