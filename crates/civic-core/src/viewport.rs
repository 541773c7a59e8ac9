//! Map Viewport
//!
//! Zoom and pan of the city map. Zoom is kept in whole percent so repeated
//! steps never drift, and always stays within [`MIN_ZOOM`, `MAX_ZOOM`].

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.2;

const MIN_PERCENT: u16 = 50;
const MAX_PERCENT: u16 = 300;
const STEP_PERCENT: u16 = 20;
const DEFAULT_PERCENT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom_percent: u16,
    pan_x: f64,
    pan_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom_percent: DEFAULT_PERCENT,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        f64::from(self.zoom_percent) / 100.0
    }

    pub fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn zoom_in(&mut self) {
        self.zoom_percent = (self.zoom_percent + STEP_PERCENT).min(MAX_PERCENT);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_percent = self.zoom_percent.saturating_sub(STEP_PERCENT).max(MIN_PERCENT);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if dx.is_finite() && dy.is_finite() {
            self.pan_x += dx;
            self.pan_y += dy;
        }
    }

    /// Pan by a pointer movement in screen pixels, so the canvas follows the cursor at any zoom
    pub fn drag_by(&mut self, dx_px: f64, dy_px: f64) {
        let zoom = self.zoom();
        self.pan_by(dx_px / zoom, dy_px / zoom);
    }

    /// Back to 100% with no offset
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_percent < MAX_PERCENT
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_percent > MIN_PERCENT
    }

    /// CSS `transform` value for the map canvas
    pub fn css_transform(&self) -> String {
        format!("scale({}) translate({}px, {}px)", self.zoom(), self.pan_x, self.pan_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(ins: usize, outs: usize) -> f64 {
        (1.0 + ZOOM_STEP * ins as f64 - ZOOM_STEP * outs as f64).clamp(MIN_ZOOM, MAX_ZOOM)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zoom_in_then_out_matches_clamped_formula() {
        for ins in 0..=12 {
            let mut view = Viewport::new();
            for _ in 0..ins {
                view.zoom_in();
            }
            assert!(close(view.zoom(), expected(ins, 0)), "{} ins gave {}", ins, view.zoom());
        }
        for outs in 0..=6 {
            let mut view = Viewport::new();
            for _ in 0..outs {
                view.zoom_out();
            }
            assert!(close(view.zoom(), expected(0, outs)), "{} outs gave {}", outs, view.zoom());
        }
    }

    #[test]
    fn test_mixed_sequence_inside_range() {
        let mut view = Viewport::new();
        view.zoom_in();
        view.zoom_in();
        view.zoom_out();
        view.zoom_in();
        view.zoom_out();
        view.zoom_out();
        view.zoom_out();
        assert!(close(view.zoom(), expected(3, 4)));
        assert_eq!(view.zoom_percent(), 80);
    }

    #[test]
    fn test_zoom_stays_clamped() {
        let mut view = Viewport::new();
        for _ in 0..50 {
            view.zoom_in();
        }
        assert!(close(view.zoom(), MAX_ZOOM));
        assert!(!view.can_zoom_in());
        for _ in 0..50 {
            view.zoom_out();
        }
        assert!(close(view.zoom(), MIN_ZOOM));
        assert!(!view.can_zoom_out());
    }

    #[test]
    fn test_reset() {
        let mut view = Viewport::new();
        view.zoom_in();
        view.pan_by(12.0, -4.0);
        assert_eq!(view.pan(), (12.0, -4.0));
        view.reset();
        assert!(close(view.zoom(), 1.0));
        assert_eq!(view.pan(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_scales_with_zoom() {
        let mut view = Viewport::new();
        for _ in 0..5 {
            view.zoom_in();
        }
        view.drag_by(40.0, -20.0);
        assert_eq!(view.pan(), (20.0, -10.0));
    }

    #[test]
    fn test_css_transform() {
        let mut view = Viewport::new();
        view.zoom_in();
        view.pan_by(10.0, 5.0);
        assert_eq!(view.css_transform(), "scale(1.2) translate(10px, 5px)");
    }
}
