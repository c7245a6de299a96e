//! Touch gesture handling for the image viewer: swipe to navigate,
//! pinch to zoom, drag to pan, double tap to reset.
//!
//! [`transition`] is the pure state machine; [`GestureController`] owns its
//! state for a single viewing surface.

mod controller;
mod session;
mod types;

pub use controller::GestureController;
pub use session::{transition, DragRef, GestureSession, GestureState, PinchRef, SwipeStart};
pub use types::{Effect, Point, PointerEvent, PointerId, PointerKind, Surface, ViewTransform};
