#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorBand`**: Annular arc (or full ring) mapping an angle onto one color channel
//! - **`AlphaSlider`**: Linear slider for the alpha channel
//! - **`NumericField`**: Integer entry for one channel with a fixed domain
//! - **`ColorTuple`**: Three unit-range channels read as RGB or HSB
//! - **`ColorSynchronizer`**: Keeps every control agreeing on one color
//! - **`ColorSink`**: Trait to implement for whatever displays the picked color
//! - **`PickerLayout`**: Validated geometry for all controls
//! - **`ColorDialog`**: Show / accept / cancel session around a picker
//! - **`PickerAction`**: Input commands understood by pickers and dialogs
//!
//! Band values are unit-range `f64`; HSB hue is a fraction of a full turn.
//! Composed output is `Srgba<u8>`.

// Re-export color types from palette for user convenience
pub use palette::{Srgb, Srgba};

pub mod alpha;
pub mod angle;
pub mod band;
pub mod colors;
pub mod command;
pub mod control;
pub mod dialog;
pub mod layout;
pub mod numeric;
pub mod range;
pub mod synchronizer;
pub mod tuple;
pub mod types;

pub use alpha::AlphaSlider;
pub use band::{BandGeometry, ColorBand, RadialSegment, Segments};
pub use command::PickerAction;
pub use control::{ControlEvent, InteractiveControl};
pub use dialog::{ColorDialog, DialogError, DialogState};
pub use layout::{BandSpec, LayoutError, PickerLayout, PickerLayoutBuilder};
pub use numeric::NumericField;
pub use range::ColorRange;
pub use synchronizer::{ColorSink, ColorState, ColorSynchronizer, Preview};
pub use tuple::ColorTuple;
pub use types::{BandId, Channel, ControlId, FieldId, Point, Polar, Rect, ScreenTransform, TupleType};
