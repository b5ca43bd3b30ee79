//! Command-based control for pickers.
//!
//! Feed these to [`ColorSynchronizer::handle_action`](crate::synchronizer::ColorSynchronizer::handle_action)
//! or [`ColorDialog::handle_action`](crate::dialog::ColorDialog::handle_action).

use palette::Srgba;

use crate::types::{FieldId, Point};

/// Input actions a picker understands.
///
/// Points are in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerAction {
    /// Pointer pressed.
    PointerDown(Point),
    /// Pointer moved while pressed.
    PointerDrag(Point),
    /// Pointer released.
    PointerUp,
    /// Numeric field committed a value.
    EditField(FieldId, i32),
    /// Load an absolute color.
    Load(Srgba<u8>),
}
