use crate::tuple::ColorTuple;

/// Linear blend between two tuples, used as a band's gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorRange {
    start: ColorTuple,
    end: ColorTuple,
}

impl ColorRange {
    pub fn new(start: ColorTuple, end: ColorTuple) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> ColorTuple {
        self.start
    }

    pub fn end(&self) -> ColorTuple {
        self.end
    }

    /// Blends each channel independently: `t = 0` is the start, `t = 1` the end.
    pub fn interpolate(&self, t: f32) -> ColorTuple {
        let lerp = |s: f32, e: f32| s + (e - s) * t;
        ColorTuple::new(
            lerp(self.start.a(), self.end.a()),
            lerp(self.start.b(), self.end.b()),
            lerp(self.start.c(), self.end.c()),
        )
    }
}

impl Default for ColorRange {
    /// Channel `a` fading from full to zero.
    fn default() -> Self {
        Self::new(ColorTuple::new(1.0, 0.0, 0.0), ColorTuple::new(0.0, 0.0, 0.0))
    }
}
