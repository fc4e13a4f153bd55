/// Width of the play field in world units.
pub const WORLD_WIDTH: f32 = 600.0;
/// Height of the play field in world units.
pub const WORLD_HEIGHT: f32 = 600.0;

/// Axis-aligned bounding box in world units. The renderer scales world
/// coordinates down to terminal cells, so gameplay code never sees cell sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
