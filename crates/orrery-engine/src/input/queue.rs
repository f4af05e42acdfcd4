/// Raw pointer and viewport events, in CSS pixels relative to the canvas.
/// Interpretation (drag, click, zoom) happens in the router.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button or touch went down.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved, pressed or not.
    PointerMove { x: f32, y: f32 },
    /// Mouse button or touch released.
    PointerUp { x: f32, y: f32 },
    /// Wheel scroll. Positive `delta_y` scrolls down (zoom out).
    Wheel { delta_y: f32 },
    /// Two-finger pinch. `scale` is the finger-distance ratio since the last event.
    Pinch { scale: f32 },
    /// Canvas resized.
    Resize { width: f32, height: f32 },
}

fn usable_pinch(scale: f32) -> bool {
    scale.is_finite() && scale > 0.0
}

/// Events buffered between frames, drained once per frame in arrival order.
///
/// Browsers fire resize and pinch far faster than frames arrive. Back-to-back
/// resizes collapse to the newest size and back-to-back pinches to the product
/// of their ratios, so a burst costs one routed event. Pointer events are never
/// merged; the router's click/drag decision depends on every position.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        match (self.events.last_mut(), event) {
            (Some(InputEvent::Resize { width, height }), InputEvent::Resize { width: w, height: h }) => {
                *width = w;
                *height = h;
            }
            (Some(InputEvent::Pinch { scale }), InputEvent::Pinch { scale: next })
                if usable_pinch(*scale) && usable_pinch(next) =>
            {
                *scale *= next;
            }
            _ => self.events.push(event),
        }
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
