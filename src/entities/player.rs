use super::hitbox::{Hitbox, WORLD_HEIGHT, WORLD_WIDTH};

/// Maximum (and starting) hit points.
pub const MAX_HP: u8 = 3;

const PLAYER_WIDTH: f32 = 20.0;
const PLAYER_HEIGHT: f32 = 20.0;
const SPAWN_X: f32 = 20.0;
// The ship spawns 50 units above the bottom edge.
const SPAWN_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub hitbox: Hitbox,
    /// Per-axis movement speed in world units per frame.
    pub speed: (f32, f32),
    /// Remaining hit points, always within `[0, MAX_HP]`.
    pub hp: u8,
}

impl Player {
    pub fn new() -> Self {
        Self {
            hitbox: Self::spawn_hitbox(),
            speed: (5.0, 0.0),
            hp: MAX_HP,
        }
    }

    fn spawn_hitbox() -> Hitbox {
        Hitbox::new(
            SPAWN_X,
            WORLD_HEIGHT - SPAWN_MARGIN - PLAYER_HEIGHT,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        )
    }

    /// Puts the ship back on its spawn point without touching hit points.
    /// Used by the soft reset after a non-fatal hit.
    pub fn respawn(&mut self) {
        self.hitbox = Self::spawn_hitbox();
        self.speed = (5.0, 0.0);
    }

    pub fn move_left(&mut self) {
        self.hitbox.x = (self.hitbox.x - self.speed.0).max(0.0);
    }

    pub fn move_right(&mut self) {
        let max_x = WORLD_WIDTH - self.hitbox.width;
        self.hitbox.x = (self.hitbox.x + self.speed.0).min(max_x);
    }

    pub fn move_up(&mut self) {
        self.hitbox.y = (self.hitbox.y - self.speed.1).max(0.0);
    }

    pub fn move_down(&mut self) {
        let max_y = WORLD_HEIGHT - self.hitbox.height;
        self.hitbox.y = (self.hitbox.y + self.speed.1).min(max_y);
    }

    pub fn lose_hp(&mut self) {
        self.hp = self.hp.saturating_sub(1);
    }

    /// Restores one hit point, capped at [`MAX_HP`].
    pub fn gain_hp(&mut self) {
        self.hp = (self.hp + 1).min(MAX_HP);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
