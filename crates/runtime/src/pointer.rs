/// Pointer input, in window pixel coordinates.
///
/// The host delivers these between frame passes; handlers run synchronously,
/// never concurrently with a frame pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    Press { x_px: f64, y_px: f64 },
    Move { x_px: f64, y_px: f64 },
    Release { x_px: f64, y_px: f64 },
}

impl PointerEvent {
    pub fn position_px(&self) -> (f64, f64) {
        match *self {
            PointerEvent::Press { x_px, y_px }
            | PointerEvent::Move { x_px, y_px }
            | PointerEvent::Release { x_px, y_px } => (x_px, y_px),
        }
    }
}

/// Click-versus-drag disambiguation.
///
/// Reset on every press; any move while the button is held marks the gesture
/// as a drag, and the matching release is then ignored as a click.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PointerGesture {
    button_down: bool,
    dragging: bool,
}

impl PointerGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_press(&mut self) {
        self.button_down = true;
        self.dragging = false;
    }

    pub fn on_move(&mut self) {
        if self.button_down {
            self.dragging = true;
        }
    }

    /// Ends the gesture. Returns `true` when the release counts as a click.
    pub fn on_release(&mut self) -> bool {
        let was_click = self.button_down && !self.dragging;
        self.button_down = false;
        self.dragging = false;
        was_click
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
