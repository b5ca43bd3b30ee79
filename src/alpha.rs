//! Linear slider for the alpha channel.

use palette::{Srgb, Srgba};

use crate::colors::compose_with_alpha;
use crate::control::{ControlEvent, InteractiveControl};
use crate::types::{Point, Rect};

const VAL_MIN: u8 = 0;
const VAL_MAX: u8 = 255;

/// Horizontal slider mapping world x onto an alpha in `0..=255`.
///
/// Unlike [`ColorBand`](crate::band::ColorBand), whose values are unit-range,
/// this slider works in 8-bit alpha units.
#[derive(Debug, Clone)]
pub struct AlphaSlider {
    bounds: Rect,
    value: u8,
    handle_offset: f64,
    color: Srgb<u8>,
}

impl AlphaSlider {
    /// Creates a slider at alpha 0 showing `color`.
    ///
    /// A negative or NaN width collapses to zero; a non-finite origin moves to 0.
    pub fn new(bounds: Rect, color: Srgb<u8>) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        let bounds = Rect::new(
            finite_or_zero(bounds.x),
            finite_or_zero(bounds.y),
            if bounds.width > 0.0 { bounds.width } else { 0.0 },
            bounds.height,
        );
        Self {
            bounds,
            value: VAL_MIN,
            handle_offset: 0.0,
            color,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current alpha.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Handle position measured from the slider's left edge.
    pub fn handle_offset(&self) -> f64 {
        self.handle_offset
    }

    /// Sets the alpha without emitting a change. Out-of-range input is clamped.
    pub fn set_alpha(&mut self, value: i32) {
        let value = value.clamp(i32::from(VAL_MIN), i32::from(VAL_MAX)) as u8;
        self.value = value;
        self.handle_offset = self.bounds.width * (f64::from(value) / f64::from(VAL_MAX));
    }

    /// Sets the color shown under the alpha gradient. Any alpha it had is ignored.
    pub fn set_color(&mut self, color: Srgb<u8>) {
        self.color = color;
    }

    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Gradient endpoints: fully transparent to fully opaque.
    pub fn gradient(&self) -> (Srgba<u8>, Srgba<u8>) {
        (
            compose_with_alpha(self.color, VAL_MIN),
            compose_with_alpha(self.color, VAL_MAX),
        )
    }
}

impl InteractiveControl for AlphaSlider {
    fn update_from_point(&mut self, point: Point) -> ControlEvent {
        let min_x = self.bounds.min_x();
        let max_x = self.bounds.max_x().max(min_x);
        let x = if point.x.is_nan() || max_x.is_nan() {
            min_x
        } else {
            point.x.clamp(min_x, max_x)
        };

        let local_x = x - min_x;
        let range = max_x - min_x;
        let scale = if range > 0.0 { local_x / range } else { 0.0 };

        self.handle_offset = local_x;
        self.value = libm::round(f64::from(VAL_MAX) * scale) as u8;

        ControlEvent::AlphaChanged { value: self.value }
    }

    fn contains_point(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider() -> AlphaSlider {
        AlphaSlider::new(Rect::new(40.0, 12.0, 380.0, 24.0), Srgb::new(0, 0, 0))
    }

    #[test]
    fn pointer_maps_to_alpha_range() {
        let mut alpha = slider();

        assert_eq!(
            alpha.update_from_point(Point::new(40.0, 20.0)),
            ControlEvent::AlphaChanged { value: 0 }
        );
        assert_eq!(
            alpha.update_from_point(Point::new(420.0, 20.0)),
            ControlEvent::AlphaChanged { value: 255 }
        );
        assert_eq!(
            alpha.update_from_point(Point::new(230.0, 20.0)),
            ControlEvent::AlphaChanged { value: 128 }
        );
        assert_eq!(alpha.handle_offset(), 190.0);
    }

    #[test]
    fn pointer_outside_bounds_is_clamped() {
        let mut alpha = slider();
        alpha.update_from_point(Point::new(-500.0, 0.0));
        assert_eq!(alpha.value(), 0);
        alpha.update_from_point(Point::new(5000.0, 0.0));
        assert_eq!(alpha.value(), 255);
        assert_eq!(alpha.handle_offset(), 380.0);
    }

    #[test]
    fn set_alpha_clamps_and_moves_handle() {
        let mut alpha = slider();
        alpha.set_alpha(300);
        assert_eq!(alpha.value(), 255);
        assert_eq!(alpha.handle_offset(), 380.0);

        alpha.set_alpha(-3);
        assert_eq!(alpha.value(), 0);
        assert_eq!(alpha.handle_offset(), 0.0);
    }

    #[test]
    fn zero_width_slider_degrades_to_zero() {
        let mut alpha = AlphaSlider::new(Rect::new(10.0, 10.0, 0.0, 10.0), Srgb::new(0, 0, 0));
        assert_eq!(
            alpha.update_from_point(Point::new(50.0, 15.0)),
            ControlEvent::AlphaChanged { value: 0 }
        );
    }

    #[test]
    fn negative_width_slider_degrades_to_zero() {
        let mut alpha = AlphaSlider::new(Rect::new(100.0, 0.0, -10.0, 10.0), Srgb::new(0, 0, 0));
        assert_eq!(alpha.bounds().width, 0.0);
        assert_eq!(
            alpha.update_from_point(Point::new(50.0, 5.0)),
            ControlEvent::AlphaChanged { value: 0 }
        );
        assert_eq!(alpha.handle_offset(), 0.0);

        alpha.set_alpha(255);
        assert_eq!(alpha.handle_offset(), 0.0);
    }

    #[test]
    fn non_finite_bounds_do_not_panic() {
        let mut alpha = AlphaSlider::new(
            Rect::new(f64::NAN, 0.0, f64::INFINITY, 10.0),
            Srgb::new(0, 0, 0),
        );
        assert_eq!(alpha.bounds().x, 0.0);
        let event = alpha.update_from_point(Point::new(50.0, 5.0));
        assert!(matches!(event, ControlEvent::AlphaChanged { .. }));
    }

    #[test]
    fn containment_and_gradient() {
        let mut alpha = slider();
        assert!(alpha.contains_point(Point::new(100.0, 20.0)));
        assert!(!alpha.contains_point(Point::new(100.0, 40.0)));

        alpha.set_color(Srgb::new(10, 20, 30));
        let (start, end) = alpha.gradient();
        assert_eq!(start, Srgba::new(10, 20, 30, 0));
        assert_eq!(end, Srgba::new(10, 20, 30, 255));
    }
}
