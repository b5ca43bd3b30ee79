//! Color space conversion helpers.
//!
//! The pixel color is `palette::Srgb<u8>`; HSB channels are unit scalars
//! (hue as a fraction of a full turn) so they can be stored in a
//! [`ColorTuple`](crate::tuple::ColorTuple) next to RGB.

use palette::{FromColor, Hsv, Srgb, Srgba, WithAlpha};

/// Converts unit-range RGB to an 8-bit pixel color.
#[inline]
pub fn rgb_to_pixel(red: f32, green: f32, blue: f32) -> Srgb<u8> {
    Srgb::new(red, green, blue).into_format::<u8>()
}

/// Converts unit-range hue, saturation and brightness to an 8-bit pixel color.
///
/// A hue of `1.0` is a full turn and wraps back to red.
#[inline]
pub fn hsb_to_pixel(hue: f32, saturation: f32, brightness: f32) -> Srgb<u8> {
    let hsv: Hsv = Hsv::new(hue * 360.0, saturation, brightness);
    let rgb: Srgb = Srgb::from_color(hsv);
    rgb.into_format::<u8>()
}

/// Converts an 8-bit pixel color to unit-range `(hue, saturation, brightness)`.
///
/// Grays report hue `0`; black also reports saturation `0`.
pub fn pixel_to_hsb(pixel: Srgb<u8>) -> (f32, f32, f32) {
    let hsv: Hsv = Hsv::from_color(pixel.into_format::<f32>());
    let hue = hsv.hue.into_positive_degrees() / 360.0;
    // into_positive_degrees can land on exactly 360 through rounding
    let hue = if hue >= 1.0 { 0.0 } else { hue };
    (hue, hsv.saturation, hsv.value)
}

/// Pairs a pixel color with an 8-bit alpha.
#[inline]
pub fn compose_with_alpha(pixel: Srgb<u8>, alpha: u8) -> Srgba<u8> {
    pixel.with_alpha(alpha)
}
