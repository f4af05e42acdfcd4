//! Turns raw pointer, wheel and pinch events into camera intents.
//!
//! A press that never travels past the drag threshold is a click and
//! becomes a selection on release; anything past it is an orbit drag.

use glam::Vec2;

use crate::api::config::SimConfig;
use super::queue::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Orbit by a pixel delta since the previous move.
    Drag { dx: f32, dy: f32 },
    /// Click released without dragging, at a normalized device coordinate.
    Select { ndc: Vec2 },
    /// Multiply the orbit radius.
    Zoom { factor: f32 },
}

pub struct InputRouter {
    pressed: bool,
    press_pos: Vec2,
    last_pos: Vec2,
    dragging: bool,
    viewport: Vec2,
    drag_threshold: f32,
    zoom_step: f32,
}

impl InputRouter {
    pub fn new(drag_threshold: f32, zoom_step: f32) -> Self {
        Self {
            pressed: false,
            press_pos: Vec2::ZERO,
            last_pos: Vec2::ZERO,
            dragging: false,
            viewport: Vec2::new(1280.0, 720.0),
            drag_threshold,
            zoom_step,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.drag_threshold, config.zoom_step)
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pixel position to normalized device coordinates (y up).
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x / self.viewport.x * 2.0 - 1.0, 1.0 - y / self.viewport.y * 2.0)
    }

    pub fn route(&mut self, event: &InputEvent) -> Option<Intent> {
        match *event {
            InputEvent::PointerDown { x, y } => {
                let pos = Vec2::new(x, y);
                self.pressed = true;
                self.dragging = false;
                self.press_pos = pos;
                self.last_pos = pos;
                None
            }
            InputEvent::PointerMove { x, y } => {
                if !self.pressed {
                    return None;
                }
                let pos = Vec2::new(x, y);
                if !self.dragging && pos.distance(self.press_pos) > self.drag_threshold {
                    self.dragging = true;
                }
                let delta = pos - self.last_pos;
                self.last_pos = pos;
                self.dragging.then_some(Intent::Drag { dx: delta.x, dy: delta.y })
            }
            InputEvent::PointerUp { x, y } => {
                let was_click = self.pressed && !self.dragging;
                self.pressed = false;
                self.dragging = false;
                was_click.then(|| Intent::Select { ndc: self.to_ndc(x, y) })
            }
            InputEvent::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    Some(Intent::Zoom { factor: self.zoom_step })
                } else if delta_y < 0.0 {
                    Some(Intent::Zoom { factor: 1.0 / self.zoom_step })
                } else {
                    None
                }
            }
            InputEvent::Pinch { scale } => {
                // Fingers apart (scale > 1) pulls the camera in.
                (scale.is_finite() && scale > 0.0 && scale != 1.0)
                    .then(|| Intent::Zoom { factor: 1.0 / scale })
            }
            InputEvent::Resize { width, height } => {
                if width > 0.0 && height > 0.0 {
                    self.viewport = Vec2::new(width, height);
                }
                None
            }
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InputRouter {
        let mut r = InputRouter::default();
        r.route(&InputEvent::Resize { width: 800.0, height: 600.0 });
        r
    }

    #[test]
    fn click_without_movement_selects() {
        let mut r = router();
        assert_eq!(r.route(&InputEvent::PointerDown { x: 400.0, y: 300.0 }), None);
        assert_eq!(
            r.route(&InputEvent::PointerUp { x: 400.0, y: 300.0 }),
            Some(Intent::Select { ndc: Vec2::ZERO })
        );
    }

    #[test]
    fn jitter_below_threshold_is_still_a_click() {
        let mut r = router();
        r.route(&InputEvent::PointerDown { x: 100.0, y: 100.0 });
        assert_eq!(r.route(&InputEvent::PointerMove { x: 103.0, y: 103.0 }), None);
        assert!(matches!(
            r.route(&InputEvent::PointerUp { x: 103.0, y: 103.0 }),
            Some(Intent::Select { .. })
        ));
    }

    #[test]
    fn movement_past_threshold_drags_and_suppresses_select() {
        let mut r = router();
        r.route(&InputEvent::PointerDown { x: 100.0, y: 100.0 });
        assert_eq!(
            r.route(&InputEvent::PointerMove { x: 110.0, y: 100.0 }),
            Some(Intent::Drag { dx: 10.0, dy: 0.0 })
        );
        assert_eq!(
            r.route(&InputEvent::PointerMove { x: 112.0, y: 95.0 }),
            Some(Intent::Drag { dx: 2.0, dy: -5.0 })
        );
        assert!(r.is_dragging());
        assert_eq!(r.route(&InputEvent::PointerUp { x: 112.0, y: 95.0 }), None);
        assert!(!r.is_dragging());
    }

    #[test]
    fn hover_without_press_is_ignored() {
        let mut r = router();
        assert_eq!(r.route(&InputEvent::PointerMove { x: 500.0, y: 10.0 }), None);
        assert_eq!(r.route(&InputEvent::PointerUp { x: 500.0, y: 10.0 }), None);
    }

    #[test]
    fn wheel_direction_sets_zoom_factor() {
        let mut r = router();
        assert_eq!(r.route(&InputEvent::Wheel { delta_y: 100.0 }), Some(Intent::Zoom { factor: 1.1 }));
        match r.route(&InputEvent::Wheel { delta_y: -3.0 }) {
            Some(Intent::Zoom { factor }) => assert!((factor - 1.0 / 1.1).abs() < 1e-6),
            other => panic!("expected zoom, got {other:?}"),
        }
        assert_eq!(r.route(&InputEvent::Wheel { delta_y: 0.0 }), None);
    }

    #[test]
    fn pinch_out_zooms_in() {
        let mut r = router();
        match r.route(&InputEvent::Pinch { scale: 2.0 }) {
            Some(Intent::Zoom { factor }) => assert!(factor < 1.0),
            other => panic!("expected zoom, got {other:?}"),
        }
        match r.route(&InputEvent::Pinch { scale: 0.5 }) {
            Some(Intent::Zoom { factor }) => assert!(factor > 1.0),
            other => panic!("expected zoom, got {other:?}"),
        }
        assert_eq!(r.route(&InputEvent::Pinch { scale: 0.0 }), None);
        assert_eq!(r.route(&InputEvent::Pinch { scale: f32::NAN }), None);
    }

    #[test]
    fn ndc_corners() {
        let r = router();
        assert_eq!(r.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(r.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut r = router();
        r.route(&InputEvent::Resize { width: 0.0, height: 600.0 });
        assert_eq!(r.viewport(), Vec2::new(800.0, 600.0));
    }
}
