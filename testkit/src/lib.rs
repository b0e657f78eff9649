//! A small harness for checks that keep running after a failure.
//!
//! A [`TestSession`] counts the checks recorded through [`check!`],
//! [`check_named!`], [`check_eq!`], [`check_named_eq!`] and
//! [`check_epsilon_eq!`], prints a colored line per check and finally a boxed
//! summary listing every failed location.
//!
//! ```
//! use testkit::{check, check_eq, check_epsilon_eq, TestSession};
//!
//! let mut session = TestSession::new(Vec::new());
//! check!(session, "abc".len() == 3).unwrap();
//! check_eq!(session, 1 + 1, 3).unwrap();
//! check_epsilon_eq!(session, 0.1 + 0.2, 0.3, 1e-9).unwrap();
//!
//! let summary = session.summary();
//! assert_eq!((summary.passed, summary.total), (2, 3));
//! assert_eq!(summary.failures.len(), 1);
//! ```
//!
//! The crate also carries the [`colors`] used for that output, variable
//! inspection macros such as [`debug_value!`] and a [`progress`] bar.

mod checks;
pub mod colors;
pub mod debug;
mod error;
pub mod progress;
mod session;

pub use crate::debug::COMPILE_TIME;
pub use crate::error::TestkitError;
pub use crate::progress::{write_loading_bar, LoadingBar};
pub use crate::session::{Check, Failure, Summary, TestSession};
