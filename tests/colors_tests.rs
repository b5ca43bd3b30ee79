//! Integration tests for colors module

use palette::Srgb;
use radial_color::colors;
use radial_color::{ColorTuple, TupleType};

fn hsb_equal(a: (f32, f32, f32), b: (f32, f32, f32)) -> bool {
    const EPSILON: f32 = 0.01;
    (a.0 - b.0).abs() < EPSILON && (a.1 - b.1).abs() < EPSILON && (a.2 - b.2).abs() < EPSILON
}

#[test]
fn hsb_creates_primary_colors() {
    assert_eq!(colors::hsb_to_pixel(0.0, 1.0, 1.0), Srgb::new(255u8, 0, 0));
    assert_eq!(colors::hsb_to_pixel(1.0 / 3.0, 1.0, 1.0), Srgb::new(0u8, 255, 0));
    assert_eq!(colors::hsb_to_pixel(2.0 / 3.0, 1.0, 1.0), Srgb::new(0u8, 0, 255));
}

#[test]
fn full_turn_hue_wraps_to_red() {
    assert_eq!(colors::hsb_to_pixel(1.0, 1.0, 1.0), Srgb::new(255u8, 0, 0));
}

#[test]
fn hsb_handles_saturation_and_brightness() {
    // Zero saturation is gray regardless of hue
    assert_eq!(colors::hsb_to_pixel(0.6, 0.0, 1.0), Srgb::new(255u8, 255, 255));
    // Zero brightness is black regardless of the rest
    assert_eq!(colors::hsb_to_pixel(0.3, 1.0, 0.0), Srgb::new(0u8, 0, 0));
}

#[test]
fn pixel_to_hsb_primaries() {
    assert!(hsb_equal(
        colors::pixel_to_hsb(Srgb::new(255, 0, 0)),
        (0.0, 1.0, 1.0)
    ));
    assert!(hsb_equal(
        colors::pixel_to_hsb(Srgb::new(0, 255, 0)),
        (1.0 / 3.0, 1.0, 1.0)
    ));
    assert!(hsb_equal(
        colors::pixel_to_hsb(Srgb::new(0, 0, 255)),
        (2.0 / 3.0, 1.0, 1.0)
    ));
}

#[test]
fn pixel_to_hsb_grays() {
    assert!(hsb_equal(colors::pixel_to_hsb(Srgb::new(0, 0, 0)), (0.0, 0.0, 0.0)));
    assert!(hsb_equal(
        colors::pixel_to_hsb(Srgb::new(255, 255, 255)),
        (0.0, 0.0, 1.0)
    ));
    let (hue, saturation, brightness) = colors::pixel_to_hsb(Srgb::new(128, 128, 128));
    assert_eq!(hue, 0.0);
    assert_eq!(saturation, 0.0);
    assert!((brightness - 128.0 / 255.0).abs() < 1e-4);
}

#[test]
fn hue_stays_below_one() {
    // Nearly-red magenta sits just under a full turn
    let (hue, _, _) = colors::pixel_to_hsb(Srgb::new(255, 0, 1));
    assert!((0.0..1.0).contains(&hue));
    assert!(hue > 0.99);
}

#[test]
fn round_trip_through_hsb() {
    let pixels = [
        Srgb::new(255u8, 0, 0),
        Srgb::new(0, 255, 0),
        Srgb::new(0, 0, 255),
        Srgb::new(0, 0, 0),
        Srgb::new(255, 255, 255),
        Srgb::new(128, 128, 128),
    ];

    for pixel in pixels {
        let hsb = ColorTuple::hsb_from_pixel(pixel);
        assert_eq!(hsb.to_color(TupleType::Hsb), pixel, "{:?}", pixel);
    }
}

#[test]
fn compose_with_alpha_keeps_channels() {
    let composed = colors::compose_with_alpha(Srgb::new(1, 2, 3), 200);
    assert_eq!(composed.color, Srgb::new(1, 2, 3));
    assert_eq!(composed.alpha, 200);
}

#[test]
fn rgb_to_pixel_rounds() {
    assert_eq!(colors::rgb_to_pixel(1.0, 0.5, 0.0), Srgb::new(255u8, 128, 0));
}
