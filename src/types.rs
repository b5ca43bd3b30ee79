//! Core identity and geometry types shared by the controls.

/// Generic channel slot within a color tuple.
///
/// The same slot means Red or Hue (`A`), Green or Saturation (`B`),
/// Blue or Brightness (`C`) depending on the [`TupleType`] it is read against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
    C,
}

/// Color model a channel is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TupleType {
    /// Red, Green, Blue.
    Rgb,
    /// Hue, Saturation, Brightness.
    Hsb,
    /// Standalone alpha channel.
    Alpha,
}

/// One of the six arc bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandId {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Brightness,
}

impl BandId {
    /// All bands, in storage order.
    pub const ALL: [BandId; 6] = [
        BandId::Red,
        BandId::Green,
        BandId::Blue,
        BandId::Hue,
        BandId::Saturation,
        BandId::Brightness,
    ];

    /// Looks up the band for a (model, channel) pair.
    ///
    /// Returns `None` for [`TupleType::Alpha`], which has no band.
    pub fn from_parts(tuple_type: TupleType, channel: Channel) -> Option<Self> {
        match (tuple_type, channel) {
            (TupleType::Rgb, Channel::A) => Some(BandId::Red),
            (TupleType::Rgb, Channel::B) => Some(BandId::Green),
            (TupleType::Rgb, Channel::C) => Some(BandId::Blue),
            (TupleType::Hsb, Channel::A) => Some(BandId::Hue),
            (TupleType::Hsb, Channel::B) => Some(BandId::Saturation),
            (TupleType::Hsb, Channel::C) => Some(BandId::Brightness),
            (TupleType::Alpha, _) => None,
        }
    }

    pub fn tuple_type(self) -> TupleType {
        match self {
            BandId::Red | BandId::Green | BandId::Blue => TupleType::Rgb,
            BandId::Hue | BandId::Saturation | BandId::Brightness => TupleType::Hsb,
        }
    }

    pub fn channel(self) -> Channel {
        match self {
            BandId::Red | BandId::Hue => Channel::A,
            BandId::Green | BandId::Saturation => Channel::B,
            BandId::Blue | BandId::Brightness => Channel::C,
        }
    }

    /// Index into per-band arrays (matches [`BandId::ALL`]).
    pub fn index(self) -> usize {
        match self {
            BandId::Red => 0,
            BandId::Green => 1,
            BandId::Blue => 2,
            BandId::Hue => 3,
            BandId::Saturation => 4,
            BandId::Brightness => 5,
        }
    }
}

/// One of the seven numeric entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldId {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Brightness,
    Alpha,
}

impl FieldId {
    /// All fields, in storage order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Red,
        FieldId::Green,
        FieldId::Blue,
        FieldId::Hue,
        FieldId::Saturation,
        FieldId::Brightness,
        FieldId::Alpha,
    ];

    pub fn tuple_type(self) -> TupleType {
        match self {
            FieldId::Red | FieldId::Green | FieldId::Blue => TupleType::Rgb,
            FieldId::Hue | FieldId::Saturation | FieldId::Brightness => TupleType::Hsb,
            FieldId::Alpha => TupleType::Alpha,
        }
    }

    pub fn channel(self) -> Channel {
        match self {
            FieldId::Red | FieldId::Hue | FieldId::Alpha => Channel::A,
            FieldId::Green | FieldId::Saturation => Channel::B,
            FieldId::Blue | FieldId::Brightness => Channel::C,
        }
    }

    /// Inclusive integer domain `(min, max)` shown by the field.
    pub fn domain(self) -> (i32, i32) {
        match self {
            FieldId::Red | FieldId::Green | FieldId::Blue | FieldId::Alpha => (0, 255),
            FieldId::Hue => (0, 360),
            FieldId::Saturation | FieldId::Brightness => (0, 100),
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Red => "Red",
            FieldId::Green => "Green",
            FieldId::Blue => "Blue",
            FieldId::Hue => "Hue",
            FieldId::Saturation => "Saturation",
            FieldId::Brightness => "Brightness",
            FieldId::Alpha => "Alpha",
        }
    }

    /// Index into per-field arrays (matches [`FieldId::ALL`]).
    pub fn index(self) -> usize {
        match self {
            FieldId::Red => 0,
            FieldId::Green => 1,
            FieldId::Blue => 2,
            FieldId::Hue => 3,
            FieldId::Saturation => 4,
            FieldId::Brightness => 5,
            FieldId::Alpha => 6,
        }
    }
}

/// Identity of the control that currently owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlId {
    Band(BandId),
    Alpha,
}

impl ControlId {
    /// Order in which controls are hit-tested on pointer-down. First hit wins.
    pub const HIT_ORDER: [ControlId; 7] = [
        ControlId::Band(BandId::Red),
        ControlId::Band(BandId::Green),
        ControlId::Band(BandId::Blue),
        ControlId::Band(BandId::Brightness),
        ControlId::Band(BandId::Saturation),
        ControlId::Band(BandId::Hue),
        ControlId::Alpha,
    ];
}

/// A point in world coordinates (y axis up, wheel center as reference).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        libm::hypot(other.x - self.x, other.y - self.y)
    }

    /// Point at `distance` along angle `theta` (radians) from `self`.
    pub fn polar_offset(self, distance: f64, theta: f64) -> Point {
        Point::new(
            self.x + distance * libm::cos(theta),
            self.y + distance * libm::sin(theta),
        )
    }
}

/// Polar coordinates relative to a band center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polar {
    pub distance: f64,
    /// Angle in radians, in `[0, 2π)`.
    pub theta: f64,
}

/// Axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Half-open containment: the min edges are inside, the max edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.y >= self.min_y()
            && point.x < self.max_x()
            && point.y < self.max_y()
    }
}

/// Maps device coordinates (y down) into world coordinates (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenTransform {
    pub height: f64,
}

impl ScreenTransform {
    pub const fn new(height: f64) -> Self {
        Self { height }
    }

    /// Flips the y axis about the panel height.
    pub fn to_world(&self, x: f64, y: f64) -> Point {
        Point::new(x, self.height - y)
    }
}
