use glam::Vec2;

/// State of the custom cursor element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub pos: Vec2,
    pub hover: bool,
}

impl CursorFollower {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Set the hover state, returning whether it changed.
    pub fn set_hover(&mut self, hover: bool) -> bool {
        let changed = self.hover != hover;
        self.hover = hover;
        changed
    }

    /// `(left, top)` style values.
    pub fn style_position(&self) -> (String, String) {
        (format!("{}px", self.pos.x), format!("{}px", self.pos.y))
    }
}
