use super::hitbox::{Hitbox, WORLD_WIDTH};

/// Fixed projectile pool size; firing with no free slot is silently ignored.
pub const PROJECTILE_CAPACITY: usize = 50;

const PROJECTILE_WIDTH: f32 = 5.0;
const PROJECTILE_HEIGHT: f32 = 10.0;
// Upward velocity in world units per frame.
const PROJECTILE_SPEED_Y: f32 = -7.0;

#[derive(Debug, Clone)]
pub struct Projectile {
    pub hitbox: Hitbox,
    pub speed: (f32, f32),
    pub active: bool,
}

impl Projectile {
    fn idle() -> Self {
        Self {
            hitbox: Hitbox::new(0.0, 0.0, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: (0.0, PROJECTILE_SPEED_Y),
            active: false,
        }
    }

    /// Moves by the fixed velocity; called once per frame while active.
    pub fn advance(&mut self) {
        self.hitbox.x += self.speed.0;
        self.hitbox.y += self.speed.1;
    }

    /// True once the leading edge has left the play field (top or right,
    /// matching the signed velocity).
    pub fn is_out_of_bounds(&self) -> bool {
        self.hitbox.x + self.hitbox.width >= WORLD_WIDTH
            || self.hitbox.y + self.hitbox.height <= 0.0
    }
}

/// Fixed-size pool; a projectile is spawned by claiming the first inactive
/// slot.
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self {
            slots: vec![Projectile::idle(); PROJECTILE_CAPACITY],
        }
    }

    /// Deactivates every slot.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = Projectile::idle();
        }
    }

    /// Claims the first free slot and places it at the given position.
    /// Returns false when the pool is exhausted; the caller treats that as a
    /// silent no-op.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> bool {
        let Some(slot) = self.slots.iter_mut().find(|slot| !slot.active) else {
            return false;
        };
        slot.hitbox.x = x;
        slot.hitbox.y = y;
        slot.active = true;
        true
    }

    pub fn slots(&self) -> &[Projectile] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.active).count()
    }
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}
