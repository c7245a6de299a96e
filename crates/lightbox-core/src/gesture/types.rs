use std::fmt;

use serde::{Deserialize, Serialize};

pub type PointerId = u32;

/// A position in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away. Released like `Up`, never a swipe.
    Cancel,
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "down"),
            Self::Move => write!(f, "move"),
            Self::Up => write!(f, "up"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

/// One low-level pointer event on the viewing surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub x: f64,
    pub y: f64,
    /// Milliseconds on any monotonic clock shared by all events.
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerKind, x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            id,
            kind,
            x,
            y,
            time_ms,
        }
    }

    pub fn down(id: PointerId, x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(id, PointerKind::Down, x, y, time_ms)
    }

    pub fn moved(id: PointerId, x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(id, PointerKind::Move, x, y, time_ms)
    }

    pub fn up(id: PointerId, x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(id, PointerKind::Up, x, y, time_ms)
    }

    pub fn cancel(id: PointerId, x: f64, y: f64, time_ms: u64) -> Self {
        Self::new(id, PointerKind::Cancel, x, y, time_ms)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Natural image size and viewport size, both in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub image_width: f64,
    pub image_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Surface {
    pub fn new(image: (f64, f64), viewport: (f64, f64)) -> Self {
        Self {
            image_width: image.0,
            image_height: image.1,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
        }
    }

    /// Largest allowed absolute offset on each axis at `scale`.
    pub fn max_pan(&self, scale: f64, slack: f64) -> (f64, f64) {
        let max_x = ((self.image_width * scale - self.viewport_width) / 2.0).max(0.0) + slack;
        let max_y = ((self.image_height * scale - self.viewport_height) / 2.0).max(0.0) + slack;
        (max_x, max_y)
    }
}

/// Zoom and pan applied to the displayed image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Clamp the offsets so the image keeps overlapping the viewport.
    pub fn clamped(self, surface: &Surface, slack: f64) -> Self {
        let (max_x, max_y) = surface.max_pan(self.scale, slack);
        Self {
            scale: self.scale,
            tx: self.tx.max(-max_x).min(max_x),
            ty: self.ty.max(-max_y).min(max_y),
        }
    }

    /// CSS `transform` value, origin at the image center.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.tx, self.ty, self.scale
        )
    }
}

/// What the owner of the surface should do after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    None,
    Transform(ViewTransform),
    NavigateNext,
    NavigatePrev,
    /// The transform went back to identity.
    Reset,
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Transform(t) => write!(
                f,
                "transform (scale {:.3}, tx {:.1}, ty {:.1})",
                t.scale, t.tx, t.ty
            ),
            Self::NavigateNext => write!(f, "navigate next"),
            Self::NavigatePrev => write!(f, "navigate prev"),
            Self::Reset => write!(f, "reset"),
        }
    }
}
