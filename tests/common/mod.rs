//! Shared test infrastructure for radial-color integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use radial_color::{
    AlphaSlider, ColorBand, ColorSink, ColorState, ColorSynchronizer, ColorTuple,
    PickerLayout, Point,
};

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every notification for testing
pub struct MockSink {
    last_state: Option<ColorState>,
    history: heapless::Vec<ColorState, 32>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            last_state: None,
            history: heapless::Vec::new(),
        }
    }

    pub fn last_state(&self) -> Option<ColorState> {
        self.last_state
    }

    pub fn history(&self) -> &[ColorState] {
        &self.history
    }

    pub fn notifications(&self) -> usize {
        self.history.len()
    }
}

impl ColorSink for MockSink {
    fn color_changed(&mut self, state: &ColorState) {
        self.last_state = Some(*state);
        let _ = self.history.push(*state);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Synchronizer on the default layout with a fresh mock sink
pub fn picker() -> ColorSynchronizer<MockSink> {
    ColorSynchronizer::new(MockSink::new(), &PickerLayout::default())
}

/// World point at `angle_deg` on the centerline of a band
pub fn point_on_band(band: &ColorBand, angle_deg: f64) -> Point {
    band.center()
        .polar_offset(band.radius(), angle_deg.to_radians())
}

/// World point at `fraction` of the way across the alpha slider
pub fn point_on_slider(slider: &AlphaSlider, fraction: f64) -> Point {
    let bounds = slider.bounds();
    Point::new(
        bounds.min_x() + bounds.width * fraction,
        bounds.center_y(),
    )
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two tuples with floating-point tolerance
pub fn tuples_equal(a: ColorTuple, b: ColorTuple) -> bool {
    tuples_equal_epsilon(a, b, 0.001)
}

/// Compare two tuples with custom epsilon
pub fn tuples_equal_epsilon(a: ColorTuple, b: ColorTuple, epsilon: f32) -> bool {
    (a.a() - b.a()).abs() < epsilon
        && (a.b() - b.b()).abs() < epsilon
        && (a.c() - b.c()).abs() < epsilon
}

/// Bit patterns of every band's value and handle angle, in storage order
pub fn band_snapshot<S: ColorSink>(sync: &ColorSynchronizer<S>) -> Vec<(u64, u64)> {
    sync.bands()
        .iter()
        .map(|band| (band.value().to_bits(), band.angle().to_bits()))
        .collect()
}

/// Compare two scalars with floating-point tolerance
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
