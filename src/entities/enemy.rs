use rand::Rng;

use super::hitbox::Hitbox;
use super::phase::Wave;

/// Total enemy slots ever available; enough for every row of every wave.
/// Slots are never reallocated, only toggled active/dead.
pub const ENEMY_CAPACITY: usize = 900;
/// Enemies per formation row.
pub const ROW_WIDTH: usize = 15;
/// Chance that an enemy is spawned with the heal flag set.
pub const HEAL_CHANCE: f64 = 0.03;

const ENEMY_SIZE: f32 = 10.0;
const COLUMN_PITCH: f32 = 35.0;
const ROW_PITCH: f32 = 15.0;
const FORMATION_TOP: f32 = 90.0;
// Withheld rows wait here until row introduction exposes them.
const STAGING_Y: f32 = 120.0;

#[derive(Debug, Clone)]
pub struct Enemy {
    pub hitbox: Hitbox,
    /// Per-axis step in world units per formation tick.
    pub speed: (f32, f32),
    /// Participates in movement, collision and drawing this frame.
    pub active: bool,
    /// Permanently destroyed; never reactivated until the arena is
    /// re-initialized.
    pub dead: bool,
    /// Destroying this enemy restores one player hit point.
    pub heal: bool,
}

impl Enemy {
    fn spawn(index: usize, wave: Wave, rng: &mut impl Rng) -> Self {
        let col = (index % ROW_WIDTH) as f32;
        let row = (index / ROW_WIDTH) as f32;
        let y = if index < wave.initial_count() {
            FORMATION_TOP + row * ROW_PITCH
        } else {
            STAGING_Y
        };

        Self {
            hitbox: Hitbox::new(col * COLUMN_PITCH + ENEMY_SIZE / 2.0, y, ENEMY_SIZE, ENEMY_SIZE),
            speed: (3.0, 32.0),
            active: true,
            dead: false,
            heal: rng.random_bool(HEAL_CHANCE),
        }
    }
}

/// Fixed-capacity arena of enemy slots. `relevant` is the high-water count:
/// the upper bound of slot indices considered for movement, collision and
/// drawing. It only increases (via row introduction) and is not a live count
/// of `active` slots.
#[derive(Debug, Clone)]
pub struct EnemyArena {
    slots: Vec<Enemy>,
    relevant: usize,
}

impl EnemyArena {
    pub fn new(wave: Wave) -> Self {
        let mut arena = Self {
            slots: Vec::with_capacity(ENEMY_CAPACITY),
            relevant: 0,
        };
        arena.reset(wave);
        arena
    }

    /// Re-initializes every slot for the given wave and drops the high-water
    /// count back to the wave's initial complement. Heal flags are re-rolled;
    /// dead flags are cleared (a re-initialization is a fresh spawn).
    pub fn reset(&mut self, wave: Wave) {
        let mut rng = rand::rng();
        self.slots.clear();
        for index in 0..ENEMY_CAPACITY {
            self.slots.push(Enemy::spawn(index, wave, &mut rng));
        }
        self.relevant = wave.initial_count();
    }

    /// High-water count of relevant slot indices.
    pub fn relevant(&self) -> usize {
        self.relevant
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    /// The slots currently considered by movement and collision.
    pub fn relevant_slots(&self) -> &[Enemy] {
        &self.slots[..self.relevant]
    }

    pub fn relevant_slots_mut(&mut self) -> &mut [Enemy] {
        let relevant = self.relevant;
        &mut self.slots[..relevant]
    }

    /// Exposes the next withheld row by raising the high-water count, and
    /// reactivates any slot that is off-formation but not dead. Dead slots
    /// stay dead.
    pub fn introduce_row(&mut self) {
        for enemy in &mut self.slots {
            if !enemy.dead {
                enemy.active = true;
            }
        }
        self.relevant = (self.relevant + ROW_WIDTH).min(ENEMY_CAPACITY);
    }

    /// True when every relevant slot has been destroyed; the trigger for
    /// wave advancement.
    pub fn all_relevant_dead(&self) -> bool {
        self.relevant_slots().iter().all(|enemy| enemy.dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_initial_high_water() {
        let arena = EnemyArena::new(Wave::First);
        assert_eq!(arena.relevant(), 60);
        assert_eq!(arena.slots().len(), ENEMY_CAPACITY);
        assert!(arena.relevant_slots().iter().all(|e| e.active && !e.dead));
    }

    #[test]
    fn test_withheld_rows_wait_at_staging_band() {
        let arena = EnemyArena::new(Wave::Second);
        // Slots past the wave complement sit at the staging band.
        assert_eq!(arena.slots()[20].hitbox.y, 120.0);
        // Slots within it are staggered by row.
        assert_eq!(arena.slots()[0].hitbox.y, 90.0);
        assert_eq!(arena.slots()[15].hitbox.y, 105.0);
    }

    #[test]
    fn test_introduce_row_raises_high_water_by_row_width() {
        let mut arena = EnemyArena::new(Wave::First);
        arena.introduce_row();
        assert_eq!(arena.relevant(), 60 + ROW_WIDTH);
    }

    #[test]
    fn test_introduce_row_never_revives_the_dead() {
        let mut arena = EnemyArena::new(Wave::First);
        {
            let enemy = &mut arena.relevant_slots_mut()[3];
            enemy.active = false;
            enemy.dead = true;
        }
        arena.relevant_slots_mut()[4].active = false;

        arena.introduce_row();
        assert!(!arena.slots()[3].active);
        assert!(arena.slots()[3].dead);
        // Merely off-formation slots are reactivated.
        assert!(arena.slots()[4].active);
    }

    #[test]
    fn test_high_water_capped_at_capacity() {
        let mut arena = EnemyArena::new(Wave::First);
        for _ in 0..100 {
            arena.introduce_row();
        }
        assert_eq!(arena.relevant(), ENEMY_CAPACITY);
    }

    #[test]
    fn test_all_relevant_dead() {
        let mut arena = EnemyArena::new(Wave::Second);
        assert!(!arena.all_relevant_dead());
        for enemy in arena.relevant_slots_mut() {
            enemy.active = false;
            enemy.dead = true;
        }
        assert!(arena.all_relevant_dead());
    }

    #[test]
    fn test_reset_is_a_fresh_spawn() {
        let mut arena = EnemyArena::new(Wave::First);
        for enemy in arena.relevant_slots_mut() {
            enemy.dead = true;
        }
        arena.reset(Wave::Second);
        assert_eq!(arena.relevant(), 20);
        assert!(arena.slots().iter().all(|e| !e.dead));
    }
}
