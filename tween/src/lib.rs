//! Easing curves and tweens.
//!
//! [`Easing`] names the standard curves (quadratic through quintic, sine,
//! exponential, circular, back, elastic and bounce, each as in, out and
//! in-out). A [`Tween`] drives one of them with a clock and scales the result;
//! a [`Rect`] bundles four tweens for animating a rectangle.
//!
//! ```
//! # use tween::{Easing, Rect, Tween};
//! let mut fade = Tween::new(Easing::InQuad, 2.0, 255.0).unwrap();
//! fade.advance(1.0);
//! assert_eq!(fade.value(), 0.25 * 255.0);
//! fade.advance(5.0);
//! assert!(fade.is_finished());
//! assert_eq!(f64::from(&fade), 255.0);
//!
//! let mut rect = Rect::linear(10.0, 20.0, 100.0, 50.0);
//! rect.set_time(0.5);
//! let r = rect.to_int_rect();
//! assert_eq!((r.x, r.y, r.w, r.h), (5, 10, 50, 25));
//! ```

mod easing;
mod error;
mod rect;
mod tween;

pub use crate::easing::Easing;
pub use crate::error::TweenError;
pub use crate::rect::{IntRect, Rect};
pub use crate::tween::Tween;
