use glam::Vec2;

/// Pointer state shared between event closures (writers) and the frame
/// callback (reader). Position is absent until the first move.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub pos: Option<Vec2>,
    pub active: bool,
}

impl MouseState {
    /// The point the simulation should repel from, or `None` when the
    /// pointer has left the viewport or never entered it.
    #[inline]
    pub fn point(&self) -> Option<Vec2> {
        if self.active {
            self.pos
        } else {
            None
        }
    }
}
