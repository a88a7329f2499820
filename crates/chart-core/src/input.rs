// File: crates/chart-core/src/input.rs
// Summary: Wheel-event translation into viewport pan/zoom mutations.

use tracing::trace;

use crate::config::ChartConfig;
use crate::view::Viewport;

/// A wheel notch as delivered by the host. Positive `delta_y` scrolls down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    /// The host's designated zoom modifier (e.g. Ctrl) is held.
    pub zoom_modifier: bool,
}

impl WheelEvent {
    pub fn pan(delta_y: f64) -> Self { Self { delta_y, zoom_modifier: false } }
    pub fn zoom(delta_y: f64) -> Self { Self { delta_y, zoom_modifier: true } }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputAction {
    Pan { delta_px: f32 },
    Zoom { delta_steps: i32 },
}

/// Result of handling one wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelOutcome {
    pub action: InputAction,
    /// The host should suppress its default scroll behavior.
    pub prevent_default: bool,
}

/// Two handlers on one wheel source: pan without the modifier, zoom with it.
#[derive(Clone, Copy, Debug)]
pub struct InputController {
    pub pan_step: f32,
    pub zoom_step: i32,
}

impl Default for InputController {
    fn default() -> Self { Self::from_config(&ChartConfig::default()) }
}

impl InputController {
    pub fn new(pan_step: f32, zoom_step: i32) -> Self { Self { pan_step, zoom_step } }

    pub fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.pan_step, config.zoom_step)
    }

    /// Map an event to its viewport action without applying it.
    pub fn classify(&self, event: &WheelEvent) -> WheelOutcome {
        // wheel up (negative delta) reveals earlier bars / widens bars
        let sign = if event.delta_y < 0.0 { 1 } else { -1 };
        if event.zoom_modifier {
            WheelOutcome { action: InputAction::Zoom { delta_steps: sign * self.zoom_step }, prevent_default: true }
        } else {
            WheelOutcome { action: InputAction::Pan { delta_px: sign as f32 * self.pan_step }, prevent_default: false }
        }
    }

    /// Apply one event to `viewport`. The caller redraws afterwards.
    pub fn handle_wheel(&self, event: &WheelEvent, viewport: &mut Viewport) -> WheelOutcome {
        let outcome = self.classify(event);
        match outcome.action {
            InputAction::Pan { delta_px } => viewport.pan(delta_px),
            InputAction::Zoom { delta_steps } => viewport.zoom(delta_steps),
        }
        trace!(delta_y = event.delta_y, zoom_modifier = event.zoom_modifier, action = ?outcome.action, "wheel handled");
        outcome
    }
}
