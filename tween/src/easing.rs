//! Easing curves from <https://easings.net/>.
//!
//! Every curve maps progress in `[0.0, 1.0]` to eased progress, with
//! `f(0) = 0` and `f(1) = 1`. Back and Elastic curves overshoot in between.

use std::f64::consts::PI;

const C1: f64 = 1.70158;
const C2: f64 = C1 * 1.525;
const C3: f64 = C1 + 1.0;
const C4: f64 = (2.0 * PI) / 3.0;
const C5: f64 = (2.0 * PI) / 4.5;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// A named easing curve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Easing {
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::InQuad,
        Easing::OutQuad,
        Easing::InOutQuad,
        Easing::InCubic,
        Easing::OutCubic,
        Easing::InOutCubic,
        Easing::InQuart,
        Easing::OutQuart,
        Easing::InOutQuart,
        Easing::InQuint,
        Easing::OutQuint,
        Easing::InOutQuint,
        Easing::InSine,
        Easing::OutSine,
        Easing::InOutSine,
        Easing::InExpo,
        Easing::OutExpo,
        Easing::InOutExpo,
        Easing::InCirc,
        Easing::OutCirc,
        Easing::InOutCirc,
        Easing::InBack,
        Easing::OutBack,
        Easing::InOutBack,
        Easing::InElastic,
        Easing::OutElastic,
        Easing::InOutElastic,
        Easing::InBounce,
        Easing::OutBounce,
        Easing::InOutBounce,
    ];

    /// Evaluates the curve at progress `x`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Linear => x,
            Easing::InQuad => x * x,
            Easing::OutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Easing::InOutQuad => in_out_poly(x, 2),
            Easing::InCubic => x.powi(3),
            Easing::OutCubic => 1.0 - (1.0 - x).powi(3),
            Easing::InOutCubic => in_out_poly(x, 3),
            Easing::InQuart => x.powi(4),
            Easing::OutQuart => 1.0 - (1.0 - x).powi(4),
            Easing::InOutQuart => in_out_poly(x, 4),
            Easing::InQuint => x.powi(5),
            Easing::OutQuint => 1.0 - (1.0 - x).powi(5),
            Easing::InOutQuint => in_out_poly(x, 5),
            Easing::InSine => 1.0 - ((x * PI) / 2.0).cos(),
            Easing::OutSine => ((x * PI) / 2.0).sin(),
            Easing::InOutSine => -((PI * x).cos() - 1.0) / 2.0,
            Easing::InExpo => {
                if x == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * x - 10.0)
                }
            }
            Easing::OutExpo => {
                if x == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * x)
                }
            }
            Easing::InOutExpo => {
                if x == 0.0 {
                    0.0
                } else if x == 1.0 {
                    1.0
                } else if x < 0.5 {
                    2f64.powf(20.0 * x - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
                }
            }
            Easing::InCirc => 1.0 - (1.0 - x * x).sqrt(),
            Easing::OutCirc => (1.0 - (x - 1.0).powi(2)).sqrt(),
            Easing::InOutCirc => {
                if x < 0.5 {
                    (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Easing::InBack => C3 * x.powi(3) - C1 * x * x,
            Easing::OutBack => 1.0 + C3 * (x - 1.0).powi(3) + C1 * (x - 1.0).powi(2),
            Easing::InOutBack => {
                if x < 0.5 {
                    ((2.0 * x).powi(2) * ((C2 + 1.0) * 2.0 * x - C2)) / 2.0
                } else {
                    ((2.0 * x - 2.0).powi(2) * ((C2 + 1.0) * (x * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }
            Easing::InElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else {
                    -2f64.powf(10.0 * x - 10.0) * ((x * 10.0 - 10.75) * C4).sin()
                }
            }
            Easing::OutElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else {
                    2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * C4).sin() + 1.0
                }
            }
            Easing::InOutElastic => {
                if x == 0.0 || x == 1.0 {
                    x
                } else if x < 0.5 {
                    -(2f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0
                } else {
                    (2f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * C5).sin()) / 2.0 + 1.0
                }
            }
            Easing::InBounce => 1.0 - out_bounce(1.0 - x),
            Easing::OutBounce => out_bounce(x),
            Easing::InOutBounce => {
                if x < 0.5 {
                    (1.0 - out_bounce(1.0 - 2.0 * x)) / 2.0
                } else {
                    (1.0 + out_bounce(2.0 * x - 1.0)) / 2.0
                }
            }
        }
    }
}

/// Shared shape of the polynomial in-out curves of degree `n`.
fn in_out_poly(x: f64, n: i32) -> f64 {
    if x < 0.5 {
        2f64.powi(n - 1) * x.powi(n)
    } else {
        1.0 - (-2.0 * x + 2.0).powi(n) / 2.0
    }
}

fn out_bounce(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984_375
    }
}
