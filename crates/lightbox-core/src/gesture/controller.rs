use tracing::trace;

use crate::config::GestureConfig;

use super::session::{transition, GestureSession, GestureState};
use super::types::{Effect, PointerEvent, PointerId, Surface, ViewTransform};

/// Gesture state bound to one viewing surface.
///
/// Feed it pointer events in dispatch order; each call returns the effect
/// the display layer should apply.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    surface: Surface,
    state: GestureState,
}

impl GestureController {
    pub fn new(config: GestureConfig, surface: Surface) -> Self {
        Self {
            config,
            surface,
            state: GestureState::default(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn transform(&self) -> ViewTransform {
        self.state.transform
    }

    pub fn session(&self) -> &GestureSession {
        &self.state.session
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Replace the surface geometry, e.g. after the viewport was resized or
    /// a new image reported its natural size. The current offsets are
    /// clamped to the new bounds.
    pub fn set_surface(&mut self, surface: Surface) {
        self.surface = surface;
        self.state.transform = self.state.transform.clamped(&surface, self.config.pan_slack);
    }

    /// Back to identity. Pointers stay tracked, but any pinch or drag
    /// baseline is dropped so it is recaptured against the new transform.
    pub fn reset(&mut self) {
        self.state.transform = ViewTransform::IDENTITY;
        self.state.session.clear_references();
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (next, effect) = transition(state, event, &self.surface, &self.config);
        self.state = next;
        if !effect.is_none() {
            trace!(pointer = event.id, kind = %event.kind, %effect, "Gesture effect");
        }
        effect
    }

    pub fn on_pointer_down(&mut self, id: PointerId, x: f64, y: f64, time_ms: u64) -> Effect {
        self.handle(&PointerEvent::down(id, x, y, time_ms))
    }

    pub fn on_pointer_move(&mut self, id: PointerId, x: f64, y: f64, time_ms: u64) -> Effect {
        self.handle(&PointerEvent::moved(id, x, y, time_ms))
    }

    pub fn on_pointer_up(&mut self, id: PointerId, x: f64, y: f64, time_ms: u64) -> Effect {
        self.handle(&PointerEvent::up(id, x, y, time_ms))
    }

    pub fn on_pointer_cancel(&mut self, id: PointerId, x: f64, y: f64, time_ms: u64) -> Effect {
        self.handle(&PointerEvent::cancel(id, x, y, time_ms))
    }
}
