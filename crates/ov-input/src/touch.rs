//! Touch samples tracked between pointer down and up

/// Zone a touch started in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchArea {
    Controls,
    BottomScreen,
    None,
}

/// A live touch.
///
/// `area` is decided from the start point and kept for the touch's whole
/// lifetime, even after `x`/`y` move into another zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub area: TouchArea,
    pub start_x: f64,
    pub start_y: f64,
    pub x: f64,
    pub y: f64,
}

impl Touch {
    pub fn new(area: TouchArea, x: f64, y: f64) -> Self {
        Self {
            area,
            start_x: x,
            start_y: y,
            x,
            y,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}
