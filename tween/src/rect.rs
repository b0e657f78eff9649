use crate::tween::Tween;

/// Integer rectangle, the shape most 2D renderers take
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A rectangle whose four components are independent tweens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub x: Tween,
    pub y: Tween,
    pub w: Tween,
    pub h: Tween,
}

impl Rect {
    /// Linear tweens growing each component from 0 to the given value.
    #[must_use]
    pub fn linear(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: Tween::linear(x),
            y: Tween::linear(y),
            w: Tween::linear(w),
            h: Tween::linear(h),
        }
    }

    #[must_use]
    pub fn from_tweens(x: Tween, y: Tween, w: Tween, h: Tween) -> Self {
        Self { x, y, w, h }
    }

    pub fn advance(&mut self, delta_time: f64) {
        for tween in self.tweens_mut() {
            tween.advance(delta_time);
        }
    }

    pub fn set_time(&mut self, time: f64) {
        for tween in self.tweens_mut() {
            tween.set_time(time);
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        [&self.x, &self.y, &self.w, &self.h]
            .iter()
            .all(|tween| tween.is_finished())
    }

    /// Current values truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int_rect(&self) -> IntRect {
        IntRect {
            x: self.x.value() as i32,
            y: self.y.value() as i32,
            w: self.w.value() as i32,
            h: self.h.value() as i32,
        }
    }

    fn tweens_mut(&mut self) -> [&mut Tween; 4] {
        [&mut self.x, &mut self.y, &mut self.w, &mut self.h]
    }
}

impl From<&Rect> for IntRect {
    fn from(rect: &Rect) -> Self {
        rect.to_int_rect()
    }
}
