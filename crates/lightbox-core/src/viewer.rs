use serde_json::Value;

use crate::config::LightboxConfig;
use crate::error::Result;
use crate::gallery::{Gallery, LoadOutcome, LoadTicket};
use crate::gesture::{Effect, GestureController, PointerEvent, Surface, ViewTransform};
use crate::index::ImageRecord;

/// What the display layer has to redraw.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerUpdate {
    None,
    /// Apply a new transform to the current image.
    Transform(ViewTransform),
    /// A different image (or none) is on display; the transform is identity.
    Show {
        record: Option<ImageRecord>,
        status: String,
    },
}

/// One gallery bound to one gesture surface.
///
/// Gestures that navigate move the gallery, and every image change resets
/// the zoom and pan before the new image is reported.
#[derive(Clone, Debug)]
pub struct Viewer {
    gallery: Gallery,
    gestures: GestureController,
    shown_epoch: u64,
}

impl Viewer {
    pub fn new(config: &LightboxConfig, surface: Surface) -> Self {
        let gallery = Gallery::new(config.grouping.clone());
        let shown_epoch = gallery.view_epoch();
        Self {
            gallery,
            gestures: GestureController::new(config.gesture.clone(), surface),
            shown_epoch,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn transform(&self) -> ViewTransform {
        self.gestures.transform()
    }

    /// Update geometry once the displayed image reports its natural size,
    /// or the viewport is resized.
    pub fn set_surface(&mut self, surface: Surface) {
        self.gestures.set_surface(surface);
    }

    pub fn begin_load(&mut self, source: impl Into<String>) -> LoadTicket {
        self.gallery.begin_load(source)
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Value>) -> (LoadOutcome, ViewerUpdate) {
        let outcome = self.gallery.finish_load(ticket, result);
        (outcome, self.sync())
    }

    pub fn select_category(&mut self, category: &str) -> ViewerUpdate {
        self.gallery.select_category(category);
        self.sync()
    }

    pub fn set_filter(&mut self, query: &str) -> ViewerUpdate {
        self.gallery.set_filter(query);
        self.sync()
    }

    pub fn next(&mut self) -> ViewerUpdate {
        self.gallery.next();
        self.sync()
    }

    pub fn prev(&mut self) -> ViewerUpdate {
        self.gallery.prev();
        self.sync()
    }

    pub fn select(&mut self, position: usize) -> ViewerUpdate {
        self.gallery.select(position);
        self.sync()
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> ViewerUpdate {
        match self.gestures.handle(event) {
            Effect::None => ViewerUpdate::None,
            Effect::Transform(t) => ViewerUpdate::Transform(t),
            Effect::Reset => ViewerUpdate::Transform(ViewTransform::IDENTITY),
            Effect::NavigateNext => self.next(),
            Effect::NavigatePrev => self.prev(),
        }
    }

    /// Report an image change, resetting the transform first.
    fn sync(&mut self) -> ViewerUpdate {
        if self.gallery.view_epoch() == self.shown_epoch {
            return ViewerUpdate::None;
        }
        self.shown_epoch = self.gallery.view_epoch();
        self.gestures.reset();
        ViewerUpdate::Show {
            record: self.gallery.current().cloned(),
            status: self.gallery.status().to_string(),
        }
    }
}
