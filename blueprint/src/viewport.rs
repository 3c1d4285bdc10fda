//! Interactive pan/zoom state. Pure transitions only; the render surface
//! forwards discrete events and reads the resulting transform.

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;

pub const WHEEL_ZOOM_IN: f32 = 1.1;
pub const WHEEL_ZOOM_OUT: f32 = 0.9;
pub const BUTTON_ZOOM_IN: f32 = 1.2;
pub const BUTTON_ZOOM_OUT: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    pub pan_x: f32,
    pub pan_y: f32,
    pub dragging: bool,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        ViewportState {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            dragging: false,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }
}

#[inline]
fn clamp_zoom(z: f32) -> f32 {
    z.max(ZOOM_MIN).min(ZOOM_MAX)
}

impl ViewportState {
    pub fn new() -> ViewportState {
        ViewportState::default()
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.dragging = false;
    }

    /// Wheel scroll: away zooms out, toward zooms in. Zoom is re-clamped
    /// after every mutation.
    pub fn wheel(&mut self, delta_y: f32) {
        if !delta_y.is_finite() {
            return;
        }
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.zoom = clamp_zoom(self.zoom * factor);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom * BUTTON_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom * BUTTON_ZOOM_OUT);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.dragging = true;
        self.anchor_x = x;
        self.anchor_y = y;
    }

    /// Incremental accumulation: each move adds the delta from the anchor and
    /// re-anchors at the current pointer.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.dragging || !x.is_finite() || !y.is_finite() {
            return;
        }
        self.pan_x += x - self.anchor_x;
        self.pan_y += y - self.anchor_y;
        self.anchor_x = x;
        self.anchor_y = y;
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.dragging = false;
    }

    /// Render transform, translate before scale.
    pub fn transform_attr(&self) -> String {
        format!(
            "translate({} {}) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }
}
