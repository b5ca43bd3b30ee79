//! Angle normalization and arc-sweep math.
//!
//! All angles are radians, measured counter-clockwise from the positive x axis
//! in world coordinates.

use core::f64::consts::{PI, TAU};

use crate::types::{Point, Polar};

/// Maps any angle into `[0, 2π]`.
///
/// Exactly `0` and exactly `2π` are returned unchanged so that a full-circle
/// band can address both of its ends, and exactly `-2π` maps to `2π`.
/// Non-finite input maps to `0`.
pub fn normalize(theta: f64) -> f64 {
    if !theta.is_finite() || theta == 0.0 {
        return 0.0;
    }
    if theta == TAU {
        return theta;
    }
    if theta == -TAU {
        return TAU;
    }

    let mut n = theta;
    if n > TAU || n < -TAU {
        n %= TAU;
    }
    if n < 0.0 {
        n += TAU;
    }
    n
}

/// Counter-clockwise sweep from `start` to `end`, in `[0, 2π]`.
///
/// Wraps through angle 0 when the normalized start lies ahead of the end.
pub fn arc_sweep(start: f64, end: f64) -> f64 {
    let ts = normalize(start);
    let te = normalize(end);

    if ts > te { TAU - ts + te } else { te - ts }
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    PI * deg / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Angle of the ray from `start` through `end`, in `(-π, π]`.
#[inline]
pub fn angle_between(start: Point, end: Point) -> f64 {
    libm::atan2(end.y - start.y, end.x - start.x)
}

/// Converts a world point into polar coordinates around `center`.
///
/// The returned angle is shifted into `[0, 2π)`.
pub fn world_to_polar(center: Point, point: Point) -> Polar {
    let mut theta = angle_between(center, point);
    if theta < 0.0 {
        theta += TAU;
    }

    Polar {
        distance: center.distance(point),
        theta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn normalize_keeps_boundaries() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(TAU), TAU);
        assert_eq!(normalize(-TAU), TAU);
    }

    #[test]
    fn normalize_wraps_out_of_range_angles() {
        assert!(approx(normalize(3.0 * PI), PI));
        assert!(approx(normalize(-PI / 2.0), 1.5 * PI));
        assert!(approx(normalize(-5.0 * PI / 2.0), 1.5 * PI));
        assert!(approx(normalize(PI), PI));
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            -100.0, -7.5, -TAU, -PI, -0.1, 0.0, 0.1, 1.0, PI, TAU, 7.0, 13.3, 1000.25,
        ];
        for x in samples {
            let once = normalize(x);
            assert_eq!(normalize(once), once, "not idempotent for {x}");
            assert!((0.0..=TAU).contains(&once));
        }
    }

    #[test]
    fn normalize_rejects_non_finite() {
        assert_eq!(normalize(f64::NAN), 0.0);
        assert_eq!(normalize(f64::INFINITY), 0.0);
    }

    #[test]
    fn arc_sweep_simple_and_wrapping() {
        assert_eq!(arc_sweep(1.0, 1.0), 0.0);
        assert!(approx(arc_sweep(0.0, PI), PI));
        assert!(approx(arc_sweep(PI, 0.0), PI));
        assert!(approx(arc_sweep(0.0, TAU), TAU));
        assert!(approx(
            arc_sweep(deg_to_rad(350.0), deg_to_rad(10.0)),
            deg_to_rad(20.0)
        ));
    }

    #[test]
    fn arc_sweep_stays_in_range() {
        let samples = [0.0, 0.5, 1.0, PI, 4.0, 5.5, TAU];
        for a in samples {
            for b in samples {
                let sweep = arc_sweep(a, b);
                assert!((0.0..=TAU).contains(&sweep), "sweep({a}, {b}) = {sweep}");
            }
        }
    }

    #[test]
    fn world_to_polar_measures_from_center() {
        let center = Point::new(230.0, 262.0);

        let east = world_to_polar(center, Point::new(330.0, 262.0));
        assert!(approx(east.distance, 100.0));
        assert!(approx(east.theta, 0.0));

        let south = world_to_polar(center, Point::new(230.0, 162.0));
        assert!(approx(south.distance, 100.0));
        assert!(approx(south.theta, 1.5 * PI));
    }

    #[test]
    fn degree_conversion() {
        assert!(approx(deg_to_rad(180.0), PI));
        assert!(approx(rad_to_deg(PI / 2.0), 90.0));
    }
}
