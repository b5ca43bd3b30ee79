//! Arc-shaped slider for a single color channel.
//!
//! A [`ColorBand`] owns fixed polar geometry around the wheel center and maps
//! pointer angles onto a unit-range value. Arcs may cross angle 0 (for example
//! 305° through 55°); dragging into the gap outside such an arc snaps to
//! whichever end is angularly closer.

use core::f64::consts::TAU;

use palette::Srgb;

use crate::angle::{self, arc_sweep, normalize};
use crate::control::{ControlEvent, InteractiveControl};
use crate::range::ColorRange;
use crate::tuple::ColorTuple;
use crate::types::{BandId, Channel, Point, TupleType};

/// Fixed placement of a band.
///
/// Copied into the band at construction; bands never share geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandGeometry {
    pub center: Point,
    /// Radius of the arc's centerline.
    pub radius: f64,
    /// Start angle in radians (any value, normalized on construction).
    pub arc_begin: f64,
    /// End angle in radians (any value, normalized on construction).
    pub arc_end: f64,
    /// Radial thickness.
    pub width: f64,
}

/// One colored ray of a rendered band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSegment {
    pub angle: f64,
    pub inner: Point,
    pub outer: Point,
    pub color: Srgb<u8>,
}

/// Arc slider for one channel of one color model.
#[derive(Debug, Clone)]
pub struct ColorBand {
    id: BandId,
    center: Point,
    radius: f64,
    arc_begin: f64,
    arc_end: f64,
    arc_width: f64,
    arc_sweep: f64,
    is_circle: bool,
    value: f64,
    cur_theta: f64,
    color_range: ColorRange,
}

impl ColorBand {
    /// Creates a band at value 0 with the handle on `arc_begin`.
    pub fn new(id: BandId, geometry: BandGeometry) -> Self {
        let arc_begin = normalize(geometry.arc_begin);
        let arc_end = normalize(geometry.arc_end);
        let sweep = arc_sweep(arc_begin, arc_end);

        Self {
            id,
            center: geometry.center,
            radius: geometry.radius,
            arc_begin,
            arc_end,
            arc_width: geometry.width,
            arc_sweep: sweep,
            is_circle: sweep == TAU,
            value: 0.0,
            cur_theta: arc_begin,
            color_range: ColorRange::default(),
        }
    }

    pub fn id(&self) -> BandId {
        self.id
    }

    pub fn tuple_type(&self) -> TupleType {
        self.id.tuple_type()
    }

    pub fn channel(&self) -> Channel {
        self.id.channel()
    }

    /// Current value in `[0.0, 1.0]`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current handle angle, normalized.
    pub fn angle(&self) -> f64 {
        self.cur_theta
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        self.arc_width
    }

    pub fn arc_begin(&self) -> f64 {
        self.arc_begin
    }

    pub fn arc_end(&self) -> f64 {
        self.arc_end
    }

    pub fn sweep(&self) -> f64 {
        self.arc_sweep
    }

    pub fn is_full_circle(&self) -> bool {
        self.is_circle
    }

    pub fn inner_radius(&self) -> f64 {
        self.radius - self.arc_width / 2.0
    }

    pub fn outer_radius(&self) -> f64 {
        self.radius + self.arc_width / 2.0
    }

    pub fn color_range(&self) -> ColorRange {
        self.color_range
    }

    /// Replaces the gradient drawn along the arc.
    pub fn set_colors(&mut self, start: ColorTuple, end: ColorTuple) {
        self.color_range = ColorRange::new(start, end);
    }

    /// Sets the value without emitting a change.
    ///
    /// Used when state derived elsewhere is pushed back into the band.
    pub fn update(&mut self, t: f64) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.value = t;
        self.cur_theta = normalize(self.arc_begin + self.arc_sweep * t);
    }

    /// Moves the handle to the pointer angle `theta` and reports the new value.
    pub fn update_from_screen(&mut self, theta: f64) -> ControlEvent {
        let theta = self.resolve_theta(normalize(theta));

        self.cur_theta = theta;
        self.value = if self.arc_sweep > 0.0 {
            (arc_sweep(self.arc_begin, theta) / self.arc_sweep).clamp(0.0, 1.0)
        } else {
            0.0
        };

        ControlEvent::BandChanged {
            tuple_type: self.tuple_type(),
            channel: self.channel(),
            value: self.value,
        }
    }

    /// Brings a normalized angle into the arc.
    fn resolve_theta(&self, theta: f64) -> f64 {
        if self.is_circle {
            return theta;
        }

        if self.arc_begin > self.arc_end {
            // Arc crosses 0; the gap is the open interval (end, begin)
            if theta < self.arc_begin && theta > self.arc_end {
                let to_begin = self.arc_begin - theta;
                let to_end = theta - self.arc_end;
                return if to_begin < to_end {
                    self.arc_begin
                } else {
                    self.arc_end
                };
            }
            theta
        } else {
            theta.clamp(self.arc_begin, self.arc_end)
        }
    }

    /// Returns true if the polar coordinates fall on the band.
    pub fn contains_polar(&self, distance: f64, theta: f64) -> bool {
        if distance < self.inner_radius() || distance > self.outer_radius() {
            return false;
        }
        if self.is_circle {
            return true;
        }

        let theta = normalize(theta);
        if self.arc_begin > self.arc_end {
            (theta >= self.arc_begin && theta <= TAU) || (theta >= 0.0 && theta <= self.arc_end)
        } else {
            theta >= self.arc_begin && theta <= self.arc_end
        }
    }

    /// Rotation for the handle glyph.
    pub fn handle_angle(&self) -> f64 {
        self.cur_theta
    }

    /// Colored rays across the arc, roughly one per `spacing` units of arc length.
    ///
    /// Always yields at least two rays so both gradient ends are drawn. Spacing
    /// below one unit is treated as one.
    pub fn segments(&self, spacing: f64) -> Segments<'_> {
        let arc_length = self.arc_sweep * self.radius;
        // at most one ray per unit of arc length
        let count = if spacing > 0.0 && arc_length.is_finite() {
            libm::round(arc_length / spacing.max(1.0)) as usize
        } else {
            0
        };

        Segments {
            band: self,
            index: 0,
            count: count.max(2),
        }
    }
}

/// Iterator returned by [`ColorBand::segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    band: &'a ColorBand,
    index: usize,
    count: usize,
}

impl Iterator for Segments<'_> {
    type Item = RadialSegment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let band = self.band;
        let t = self.index as f64 / (self.count - 1) as f64;
        let theta = normalize(band.arc_begin + band.arc_sweep * t);
        self.index += 1;

        Some(RadialSegment {
            angle: theta,
            inner: band.center.polar_offset(band.inner_radius(), theta),
            outer: band.center.polar_offset(band.outer_radius(), theta),
            color: band.color_range.interpolate(t as f32).to_color(band.tuple_type()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl InteractiveControl for ColorBand {
    fn update_from_point(&mut self, point: Point) -> ControlEvent {
        let polar = angle::world_to_polar(self.center, point);
        self.update_from_screen(polar.theta)
    }

    fn contains_point(&self, point: Point) -> bool {
        let polar = angle::world_to_polar(self.center, point);
        self.contains_polar(polar.distance, polar.theta)
    }
}
