#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use magnifier::consts::ZOOM_MIN;
use magnifier::coords::FocusPercent;
use magnifier::engine::ViewerCore;
use magnifier::events::ViewerEvent;
use magnifier::geometry::Size;
use magnifier::lens::{self, CropStyle, LensPlacement};

/// Reactive mirror of the magnifier engine, plus the engagement log.
///
/// Components render from this; the engine owns the truth and pushes a
/// fresh snapshot here on every `RenderNeeded` action.
#[derive(Clone, Debug)]
pub struct ViewerUiState {
    /// Whether the zoom overlay is up.
    pub is_open: bool,
    /// Current zoom level.
    pub zoom_level: f64,
    /// Normalized focus driving the crops.
    pub focus: FocusPercent,
    /// Floating lens placement; `None` while no drag/pinch is active.
    pub lens: Option<LensPlacement>,
    /// Crop parameters for the lens at the current zoom.
    pub lens_crop: CropStyle,
    /// Crop parameters for the persistent low-zoom preview pane.
    pub preview: CropStyle,
    /// Engagement events, oldest first, for the surrounding page to drain.
    pub events: Vec<ViewerEvent>,
}

impl Default for ViewerUiState {
    fn default() -> Self {
        Self {
            is_open: false,
            zoom_level: ZOOM_MIN,
            focus: FocusPercent::CENTER,
            lens: None,
            lens_crop: lens::crop(FocusPercent::CENTER, ZOOM_MIN),
            preview: lens::preview_crop(FocusPercent::CENTER),
            events: Vec::new(),
        }
    }
}

impl ViewerUiState {
    /// Refresh the mirror from the engine. `viewport` is the overlay's
    /// current size, used to clamp the lens placement.
    pub fn sync(&mut self, core: &ViewerCore, viewport: Size) {
        self.is_open = core.is_open();
        self.zoom_level = core.zoom_level();
        self.focus = core.focus();
        self.lens = core.lens_placement(viewport);
        self.lens_crop = core.crop();
        self.preview = core.preview();
    }

    /// Move the preview focus from a gallery hover, before any drag.
    pub fn hover(&mut self, focus: FocusPercent) {
        self.focus = focus;
        self.preview = lens::preview_crop(focus);
    }

    /// Append to the engagement log.
    pub fn record(&mut self, event: ViewerEvent) {
        self.events.push(event);
    }
}
