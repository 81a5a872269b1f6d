use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// Pointer-drag state on the crop surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    NotDragging,
    Dragging,
}

/// User-controlled zoom and pan applied on top of the cover-fit rectangle.
///
/// Pan is accumulated in source pixels as seen at zoom 1, not in screen
/// pixels. Hosts showing a scaled preview convert pointer deltas into these
/// units before calling [`drag_move`](Self::drag_move). Resolving the
/// sampled rectangle divides the pan by the zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    drag: DragState,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            drag: DragState::NotDragging,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Accumulated pan `(x, y)`.
    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Returns `false` (and leaves the zoom alone) for NaN or infinite input.
    pub fn set_zoom(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.zoom = value.clamp(MIN_ZOOM, MAX_ZOOM);
        true
    }

    /// Nudge the zoom by `step` (negative zooms out).
    pub fn zoom_by(&mut self, step: f64) -> bool {
        self.set_zoom(self.zoom + step)
    }

    pub fn drag_start(&mut self) {
        self.drag = DragState::Dragging;
    }

    /// Accumulate a pointer delta. Ignored unless a drag is in progress.
    ///
    /// A delta that would push the accumulated pan to infinity is rejected
    /// whole, so the pan always stays finite.
    pub fn drag_move(&mut self, dx: f64, dy: f64) -> bool {
        if self.drag != DragState::Dragging {
            return false;
        }
        let (pan_x, pan_y) = (self.pan_x + dx, self.pan_y + dy);
        if !pan_x.is_finite() || !pan_y.is_finite() {
            return false;
        }
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        true
    }

    /// End the drag (pointer released or left the surface).
    pub fn drag_end(&mut self) {
        self.drag = DragState::NotDragging;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
