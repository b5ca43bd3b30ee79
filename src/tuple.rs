//! Three-channel color scalar tuple.

use palette::{Srgb, Srgba};

use crate::colors;
use crate::types::{Channel, TupleType};

/// Three unit-range scalars read as RGB or HSB depending on context.
///
/// Every channel is clamped into `[0.0, 1.0]` on construction; tuples are
/// values and every transform produces a new one. Alpha is never stored here,
/// callers compose it separately.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorTuple {
    a: f32,
    b: f32,
    c: f32,
}

#[inline]
fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

impl ColorTuple {
    /// Creates a tuple, clamping each channel into `[0.0, 1.0]`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self {
            a: clamp_unit(a),
            b: clamp_unit(b),
            c: clamp_unit(c),
        }
    }

    /// Creates an RGB tuple from 8-bit style integers.
    ///
    /// Each channel is clamped into `[0, 255]` before scaling by `1/255`.
    pub fn from_rgb8(red: i32, green: i32, blue: i32) -> Self {
        let scale = |c: i32| c.clamp(0, 255) as f32 / 255.0;
        Self::new(scale(red), scale(green), scale(blue))
    }

    /// Creates an RGB tuple from a pixel color.
    pub fn from_pixel(pixel: Srgb<u8>) -> Self {
        Self::from_rgb8(
            i32::from(pixel.red),
            i32::from(pixel.green),
            i32::from(pixel.blue),
        )
    }

    /// Creates an HSB tuple describing a pixel color.
    pub fn hsb_from_pixel(pixel: Srgb<u8>) -> Self {
        let (hue, saturation, brightness) = colors::pixel_to_hsb(pixel);
        Self::new(hue, saturation, brightness)
    }

    pub fn a(&self) -> f32 {
        self.a
    }

    pub fn b(&self) -> f32 {
        self.b
    }

    pub fn c(&self) -> f32 {
        self.c
    }

    /// Reads one channel.
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::A => self.a,
            Channel::B => self.b,
            Channel::C => self.c,
        }
    }

    /// Returns a copy with one channel replaced (clamped).
    pub fn with_channel(self, channel: Channel, value: f32) -> Self {
        match channel {
            Channel::A => Self::new(value, self.b, self.c),
            Channel::B => Self::new(self.a, value, self.c),
            Channel::C => Self::new(self.a, self.b, value),
        }
    }

    /// Scales a channel by `range` and rounds to the nearest integer.
    pub fn channel_as_int(&self, channel: Channel, range: i32) -> i32 {
        libm::roundf(self.channel(channel) * range as f32) as i32
    }

    /// Converts to a pixel color under the given interpretation.
    ///
    /// [`TupleType::Alpha`] has no color meaning of its own and is read as RGB.
    pub fn to_color(&self, tuple_type: TupleType) -> Srgb<u8> {
        match tuple_type {
            TupleType::Rgb | TupleType::Alpha => colors::rgb_to_pixel(self.a, self.b, self.c),
            TupleType::Hsb => colors::hsb_to_pixel(self.a, self.b, self.c),
        }
    }

    /// Converts to a pixel color and pairs it with `alpha`.
    pub fn to_color_with_alpha(&self, tuple_type: TupleType, alpha: u8) -> Srgba<u8> {
        colors::compose_with_alpha(self.to_color(tuple_type), alpha)
    }
}
