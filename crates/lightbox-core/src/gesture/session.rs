use tracing::debug;

use crate::config::GestureConfig;
use crate::consts::PINCH_EPSILON;

use super::types::{Effect, Point, PointerEvent, PointerId, PointerKind, Surface, ViewTransform};

/// Baseline of a two-pointer gesture, captured on its first move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchRef {
    pub distance: f64,
    pub scale: f64,
    pub center: Point,
    pub translate: (f64, f64),
}

/// Baseline of a one-pointer pan, captured on its first move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRef {
    pub origin: Point,
    pub translate: (f64, f64),
}

/// Where and when a single-pointer interaction began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeStart {
    pub origin: Point,
    pub time_ms: u64,
}

/// Transient state of one continuous touch interaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Active pointers in the order they went down.
    pointers: Vec<(PointerId, Point)>,
    pinch: Option<PinchRef>,
    drag: Option<DragRef>,
    swipe: Option<SwipeStart>,
}

impl GestureSession {
    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn pinch(&self) -> Option<&PinchRef> {
        self.pinch.as_ref()
    }

    pub fn drag(&self) -> Option<&DragRef> {
        self.drag.as_ref()
    }

    pub fn swipe(&self) -> Option<&SwipeStart> {
        self.swipe.as_ref()
    }

    /// Forget the pinch and drag baselines; the next move captures new ones.
    pub fn clear_references(&mut self) {
        self.pinch = None;
        self.drag = None;
    }

    fn position_mut(&mut self, id: PointerId) -> Option<&mut Point> {
        self.pointers
            .iter_mut()
            .find(|(pid, _)| *pid == id)
            .map(|(_, pos)| pos)
    }

    fn press(&mut self, id: PointerId, pos: Point) {
        match self.position_mut(id) {
            Some(existing) => *existing = pos,
            None => self.pointers.push((id, pos)),
        }
    }

    fn release(&mut self, id: PointerId) {
        self.pointers.retain(|(pid, _)| *pid != id);
    }
}

/// Everything the gesture state machine carries between events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    pub session: GestureSession,
    pub transform: ViewTransform,
    /// Time of the previous pointer-down, for double-tap detection.
    pub last_down_ms: Option<u64>,
}

/// Advance the gesture state machine by one pointer event.
pub fn transition(
    mut state: GestureState,
    event: &PointerEvent,
    surface: &Surface,
    config: &GestureConfig,
) -> (GestureState, Effect) {
    let effect = match event.kind {
        PointerKind::Down => pointer_down(&mut state, event, config),
        PointerKind::Move => pointer_move(&mut state, event, surface, config),
        PointerKind::Up | PointerKind::Cancel => pointer_up(&mut state, event, config),
    };
    (state, effect)
}

fn pointer_down(state: &mut GestureState, event: &PointerEvent, config: &GestureConfig) -> Effect {
    let session = &mut state.session;
    session.press(event.id, event.position());
    session.clear_references();

    // Swipes are single-pointer only; a second finger turns this into a pinch.
    session.swipe = if session.pointers.len() == 1 {
        Some(SwipeStart {
            origin: event.position(),
            time_ms: event.time_ms,
        })
    } else {
        None
    };

    let double_tap = state
        .last_down_ms
        .is_some_and(|prev| event.time_ms.saturating_sub(prev) < config.double_tap_ms);
    state.last_down_ms = Some(event.time_ms);

    if double_tap {
        debug!(time_ms = event.time_ms, "Double tap, resetting view");
        state.transform = ViewTransform::IDENTITY;
        Effect::Reset
    } else {
        Effect::None
    }
}

fn pointer_move(
    state: &mut GestureState,
    event: &PointerEvent,
    surface: &Surface,
    config: &GestureConfig,
) -> Effect {
    match state.session.position_mut(event.id) {
        Some(pos) => *pos = event.position(),
        None => return Effect::None,
    }

    let active: Vec<Point> = state.session.pointers.iter().map(|(_, p)| *p).collect();
    match active.as_slice() {
        [a, b] => pinch(state, *a, *b, surface, config),
        [p] if state.transform.scale > config.pan_scale_threshold => {
            pan(state, *p, surface, config)
        }
        _ => Effect::None,
    }
}

fn pinch(
    state: &mut GestureState,
    a: Point,
    b: Point,
    surface: &Surface,
    config: &GestureConfig,
) -> Effect {
    let distance = a.distance(b);
    let center = a.midpoint(b);
    let current = state.transform;

    let Some(reference) = state.session.pinch else {
        state.session.pinch = Some(PinchRef {
            distance,
            scale: current.scale,
            center,
            translate: (current.tx, current.ty),
        });
        return Effect::None;
    };

    let factor = if reference.distance > PINCH_EPSILON {
        distance / reference.distance
    } else {
        1.0
    };
    let scale = (reference.scale * factor)
        .max(config.min_scale)
        .min(config.max_scale);

    let next = ViewTransform {
        scale,
        tx: reference.translate.0 + (center.x - reference.center.x),
        ty: reference.translate.1 + (center.y - reference.center.y),
    }
    .clamped(surface, config.pan_slack);

    state.transform = next;
    Effect::Transform(next)
}

fn pan(state: &mut GestureState, p: Point, surface: &Surface, config: &GestureConfig) -> Effect {
    let current = state.transform;

    let Some(reference) = state.session.drag else {
        state.session.drag = Some(DragRef {
            origin: p,
            translate: (current.tx, current.ty),
        });
        return Effect::None;
    };

    let next = ViewTransform {
        scale: current.scale,
        tx: reference.translate.0 + (p.x - reference.origin.x),
        ty: reference.translate.1 + (p.y - reference.origin.y),
    }
    .clamped(surface, config.pan_slack);

    state.transform = next;
    Effect::Transform(next)
}

fn pointer_up(state: &mut GestureState, event: &PointerEvent, config: &GestureConfig) -> Effect {
    let session = &mut state.session;
    session.release(event.id);
    session.clear_references();
    let start = session.swipe.take();

    if event.kind == PointerKind::Cancel || state.transform.scale > config.swipe_scale_tolerance {
        return Effect::None;
    }
    let Some(start) = start else {
        return Effect::None;
    };

    let dx = event.x - start.origin.x;
    let dy = event.y - start.origin.y;
    let dt = event.time_ms.saturating_sub(start.time_ms);

    let is_swipe = dt < config.swipe_max_duration_ms
        && dx.abs() > config.swipe_min_dx
        && dy.abs() < config.swipe_max_dy;
    if !is_swipe {
        return Effect::None;
    }

    debug!(dx, dy, dt, "Swipe");
    if dx < 0.0 {
        Effect::NavigateNext
    } else {
        Effect::NavigatePrev
    }
}
