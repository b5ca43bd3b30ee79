//! Picker geometry configuration.
//!
//! [`PickerLayout::default`] is the classic 460×492 dialog panel: three
//! concentric HSB circles inside an outer ring split into three RGB arcs,
//! with the alpha slider along the bottom edge.

use crate::angle::{arc_sweep, deg_to_rad};
use crate::band::BandGeometry;
use crate::types::{BandId, Point, Rect, ScreenTransform};
use core::f64::consts::TAU;

/// Placement of one band around the shared center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandSpec {
    pub radius: f64,
    pub arc_begin: f64,
    pub arc_end: f64,
    pub width: f64,
}

impl BandSpec {
    pub const fn new(radius: f64, arc_begin: f64, arc_end: f64, width: f64) -> Self {
        Self {
            radius,
            arc_begin,
            arc_end,
            width,
        }
    }

    /// Full circle starting at angle 0.
    pub const fn circle(radius: f64, width: f64) -> Self {
        Self::new(radius, 0.0, TAU, width)
    }
}

/// Layout validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A coordinate, radius, angle or size is NaN or infinite.
    NonFinite,

    /// Band width is zero or negative.
    InvalidBandWidth(BandId),

    /// Band inner edge would reach past the center.
    InvalidRadius(BandId),

    /// Band arc has zero sweep.
    EmptyArc(BandId),

    /// Alpha slider bounds have no area.
    EmptyAlphaBounds,

    /// Panel height is zero or negative.
    InvalidPanelHeight,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LayoutError::NonFinite => {
                write!(f, "layout contains a non-finite value")
            }
            LayoutError::InvalidBandWidth(id) => {
                write!(f, "{:?} band width must be positive", id)
            }
            LayoutError::InvalidRadius(id) => {
                write!(f, "{:?} band radius must exceed half its width", id)
            }
            LayoutError::EmptyArc(id) => {
                write!(f, "{:?} band arc has zero sweep", id)
            }
            LayoutError::EmptyAlphaBounds => {
                write!(f, "alpha slider bounds must have positive width and height")
            }
            LayoutError::InvalidPanelHeight => {
                write!(f, "panel height must be positive")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

/// Complete geometry for a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerLayout {
    center: Point,
    bands: [BandSpec; 6],
    alpha_bounds: Rect,
    panel_height: f64,
}

pub const PANEL_WIDTH: f64 = 460.0;
pub const ALPHA_HEIGHT: f64 = 32.0;
pub const BAND_WIDTH: f64 = 24.0;

impl Default for PickerLayout {
    fn default() -> Self {
        let half = PANEL_WIDTH / 2.0;
        let mut bands = [BandSpec::circle(0.0, BAND_WIDTH); 6];
        bands[BandId::Red.index()] =
            BandSpec::new(190.0, deg_to_rad(-55.0), deg_to_rad(55.0), BAND_WIDTH);
        bands[BandId::Green.index()] =
            BandSpec::new(190.0, deg_to_rad(65.0), deg_to_rad(175.0), BAND_WIDTH);
        bands[BandId::Blue.index()] =
            BandSpec::new(190.0, deg_to_rad(185.0), deg_to_rad(295.0), BAND_WIDTH);
        bands[BandId::Hue.index()] = BandSpec::circle(160.0, BAND_WIDTH);
        bands[BandId::Saturation.index()] = BandSpec::circle(130.0, BAND_WIDTH);
        bands[BandId::Brightness.index()] = BandSpec::circle(100.0, BAND_WIDTH);

        Self {
            center: Point::new(half, half + ALPHA_HEIGHT),
            bands,
            alpha_bounds: Rect::new(40.0, 12.0, PANEL_WIDTH - 80.0, 24.0),
            panel_height: PANEL_WIDTH + ALPHA_HEIGHT,
        }
    }
}

impl PickerLayout {
    /// Starts a builder seeded with the default layout.
    pub fn builder() -> PickerLayoutBuilder {
        PickerLayoutBuilder::new()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn band(&self, id: BandId) -> BandSpec {
        self.bands[id.index()]
    }

    /// Geometry handed to a [`ColorBand`](crate::band::ColorBand).
    pub fn band_geometry(&self, id: BandId) -> BandGeometry {
        let spec = self.band(id);
        BandGeometry {
            center: self.center,
            radius: spec.radius,
            arc_begin: spec.arc_begin,
            arc_end: spec.arc_end,
            width: spec.width,
        }
    }

    pub fn alpha_bounds(&self) -> Rect {
        self.alpha_bounds
    }

    pub fn panel_height(&self) -> f64 {
        self.panel_height
    }

    /// Device-to-world transform for this panel.
    pub fn screen_transform(&self) -> ScreenTransform {
        ScreenTransform::new(self.panel_height)
    }
}

/// Builder for validated [`PickerLayout`]s.
#[derive(Debug, Clone)]
pub struct PickerLayoutBuilder {
    layout: PickerLayout,
}

impl PickerLayoutBuilder {
    pub fn new() -> Self {
        Self {
            layout: PickerLayout::default(),
        }
    }

    /// Sets the wheel center shared by all bands.
    pub fn center(mut self, center: Point) -> Self {
        self.layout.center = center;
        self
    }

    /// Places one band.
    pub fn band(mut self, id: BandId, spec: BandSpec) -> Self {
        self.layout.bands[id.index()] = spec;
        self
    }

    /// Sets the width of every band.
    pub fn band_width(mut self, width: f64) -> Self {
        for spec in self.layout.bands.iter_mut() {
            spec.width = width;
        }
        self
    }

    pub fn alpha_bounds(mut self, bounds: Rect) -> Self {
        self.layout.alpha_bounds = bounds;
        self
    }

    /// Sets the panel height used to flip device y into world y.
    pub fn panel_height(mut self, height: f64) -> Self {
        self.layout.panel_height = height;
        self
    }

    /// Validates and builds the layout.
    ///
    /// # Errors
    /// * `NonFinite` - Any value is NaN or infinite
    /// * `InvalidBandWidth` - A band has non-positive width
    /// * `InvalidRadius` - A band's inner edge crosses the center
    /// * `EmptyArc` - A band's begin and end angles coincide
    /// * `EmptyAlphaBounds` - The alpha slider has no area
    /// * `InvalidPanelHeight` - The panel height is non-positive
    pub fn build(self) -> Result<PickerLayout, LayoutError> {
        let layout = self.layout;
        let bounds = layout.alpha_bounds;

        let all_finite = layout.center.x.is_finite()
            && layout.center.y.is_finite()
            && layout.panel_height.is_finite()
            && [bounds.x, bounds.y, bounds.width, bounds.height]
                .iter()
                .all(|v| v.is_finite())
            && layout.bands.iter().all(|b| {
                [b.radius, b.arc_begin, b.arc_end, b.width]
                    .iter()
                    .all(|v| v.is_finite())
            });
        if !all_finite {
            return Err(LayoutError::NonFinite);
        }

        for id in BandId::ALL {
            let spec = layout.band(id);
            if spec.width <= 0.0 {
                return Err(LayoutError::InvalidBandWidth(id));
            }
            if spec.radius <= spec.width / 2.0 {
                return Err(LayoutError::InvalidRadius(id));
            }
            if arc_sweep(spec.arc_begin, spec.arc_end) <= 0.0 {
                return Err(LayoutError::EmptyArc(id));
            }
        }

        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(LayoutError::EmptyAlphaBounds);
        }
        if layout.panel_height <= 0.0 {
            return Err(LayoutError::InvalidPanelHeight);
        }

        Ok(layout)
    }
}

impl Default for PickerLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}
