//! Value model behind the numeric entry fields.

use crate::control::ControlEvent;
use crate::tuple::ColorTuple;
use crate::types::{Channel, FieldId, TupleType};

/// Integer-valued entry for one channel, bounded by its [`FieldId::domain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NumericField {
    id: FieldId,
    min: i32,
    max: i32,
    value: i32,
}

impl NumericField {
    /// Creates a field holding its domain minimum.
    pub fn new(id: FieldId) -> Self {
        let (min, max) = id.domain();
        Self::with_domain(id, min, max)
    }

    /// Creates a field with an explicit domain.
    pub fn with_domain(id: FieldId, min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            id,
            min,
            max,
            value: min,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn tuple_type(&self) -> TupleType {
        self.id.tuple_type()
    }

    pub fn channel(&self) -> Channel {
        self.id.channel()
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Raw integer value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Value as a fraction of the domain span. A zero span yields `0.0`.
    pub fn value_scale(&self) -> f32 {
        let span = (self.max - self.min) as f32;
        if span == 0.0 {
            return 0.0;
        }
        (self.value - self.min) as f32 / span
    }

    /// Commits a value, clamped to the domain.
    ///
    /// Returns a `FieldChanged` event only if the stored value changed.
    pub fn set_value(&mut self, value: i32) -> Option<ControlEvent> {
        let value = value.clamp(self.min, self.max);
        if value == self.value {
            return None;
        }

        self.value = value;
        Some(ControlEvent::FieldChanged {
            field: self.id,
            value,
        })
    }

    /// Stores a value, clamped to the domain, without producing an event.
    pub fn set_from_int(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Sets the value from this field's channel of `tuple`.
    pub fn set_from_tuple(&mut self, tuple: &ColorTuple) -> Option<ControlEvent> {
        let span = self.max - self.min;
        let value = tuple.channel_as_int(self.channel(), span) + self.min;
        self.set_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_follow_field_id() {
        let hue = NumericField::new(FieldId::Hue);
        assert_eq!((hue.min(), hue.max(), hue.value()), (0, 360, 0));
        let sat = NumericField::new(FieldId::Saturation);
        assert_eq!(sat.max(), 100);
    }

    #[test]
    fn set_value_clamps_and_reports_changes() {
        let mut red = NumericField::new(FieldId::Red);
        assert_eq!(
            red.set_value(300),
            Some(ControlEvent::FieldChanged {
                field: FieldId::Red,
                value: 255
            })
        );
        assert_eq!(red.value(), 255);
        // same value, no event
        assert_eq!(red.set_value(255), None);
        assert_eq!(red.set_value(400), None);
        assert!(red.set_value(-1).is_some());
        assert_eq!(red.value(), 0);
    }

    #[test]
    fn set_from_int_is_silent_and_clamped() {
        let mut hue = NumericField::new(FieldId::Hue);
        hue.set_from_int(400);
        assert_eq!(hue.value(), 360);
        hue.set_from_int(90);
        assert_eq!(hue.value(), 90);
        // already stored, so committing it again is not a change
        assert_eq!(hue.set_value(90), None);
    }

    #[test]
    fn value_scale() {
        let mut hue = NumericField::new(FieldId::Hue);
        hue.set_value(180);
        assert!((hue.value_scale() - 0.5).abs() < 1e-6);

        let mut offset = NumericField::with_domain(FieldId::Red, 10, 20);
        offset.set_value(15);
        assert!((offset.value_scale() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_span_scale_is_zero() {
        let field = NumericField::with_domain(FieldId::Alpha, 7, 7);
        assert_eq!(field.value_scale(), 0.0);
        assert!(field.value_scale().is_finite());
    }

    #[test]
    fn set_from_tuple_uses_channel() {
        let hsb = ColorTuple::new(0.5, 0.25, 1.0);

        let mut hue = NumericField::new(FieldId::Hue);
        hue.set_from_tuple(&hsb);
        assert_eq!(hue.value(), 180);

        let mut sat = NumericField::new(FieldId::Saturation);
        sat.set_from_tuple(&hsb);
        assert_eq!(sat.value(), 25);

        let mut brightness = NumericField::new(FieldId::Brightness);
        brightness.set_from_tuple(&hsb);
        assert_eq!(brightness.value(), 100);
    }
}
