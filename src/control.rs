//! Shared contract for pointer-driven controls and the events they emit.

use crate::types::{Channel, FieldId, Point, TupleType};

/// Change notification produced by a control.
///
/// Controls never call back into their owner; they return one of these and
/// the owner routes it through
/// [`ColorSynchronizer::dispatch`](crate::synchronizer::ColorSynchronizer::dispatch).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// A band moved to a new unit-range value.
    BandChanged {
        tuple_type: TupleType,
        channel: Channel,
        value: f64,
    },

    /// The alpha slider moved. Unlike bands, alpha is in `0..=255`.
    AlphaChanged { value: u8 },

    /// A numeric field committed a new integer value.
    FieldChanged { field: FieldId, value: i32 },
}

/// Hit-testing and pointer-to-value mapping shared by bands and the alpha slider.
///
/// Points are in world coordinates; converting device coordinates is the
/// caller's job.
pub trait InteractiveControl {
    /// Moves the control to the value under `point` and reports the change.
    fn update_from_point(&mut self, point: Point) -> ControlEvent;

    /// Returns true if `point` lies on the control.
    fn contains_point(&self, point: Point) -> bool;
}
