#![no_std]

//! `SliceVec`: a `Vec` wrapper with Python-style indexing.
//!
//! Indexing accepts an `isize`. Negative indices count from the end, so
//! `v[-1]` is the last element. `slice(start, end)` copies an end-exclusive
//! range of storage positions into a new `SliceVec`; it does not accept
//! negative bounds.
//!
//! Every access is bounds-checked. `try_get()` and `slice()` return
//! `SliceVecError`; the `[]` operator panics on an out-of-range index, the
//! same way slice indexing does.
//!
//! ```
//! # use slicevec::SliceVec;
//! let mut v: SliceVec<i32> = vec![1, 2, 3, 4, 5].into();
//!
//! assert_eq!(v[-1], 5);
//! assert_eq!(v[-1], v[v.len() as isize - 1]);
//!
//! let middle = v.slice(1, 4).unwrap();
//! assert_eq!(middle.as_slice(), &[2, 3, 4]);
//!
//! v[-2] = 40;
//! assert_eq!(v.as_slice(), &[1, 2, 3, 40, 5]);
//!
//! assert!(v.try_get(5).is_err());
//! assert!(v.slice(3, 9).is_err());
//! ```
//!
//! The usual vector operations pass straight through:
//!
//! ```
//! # use slicevec::SliceVec;
//! let mut v = SliceVec::new();
//! v.reserve(4);
//! v.push('a');
//! v.push('b');
//! v.resize(4, 'z');
//! assert_eq!(v.pop(), Some('z'));
//!
//! let joined: String = v.iter().collect();
//! assert_eq!(joined, "abz");
//! ```
//!
//! # `no_std`
//!
//! The crate is `no_std` and only needs `alloc` for the wrapped `Vec`.

extern crate alloc;

mod core;
mod error;
mod iter;

pub use crate::core::SliceVec;
pub use crate::error::SliceVecError;
