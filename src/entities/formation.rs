use super::enemy::EnemyArena;

/// Ticks of sideways movement before the formation flips and descends.
pub const TICKS_PER_TRAVERSAL: u32 = 30;
/// Multiplicative shrink applied to the tick threshold after each descent.
pub const SPEEDUP_FACTOR: f32 = 0.15;
/// Starting seconds between formation ticks.
pub const INITIAL_PROGRESSION: f32 = 1.0;

/// Drives the rigid enemy group: sideways steps on a shrinking wall-clock
/// timer, a descent every completed traversal, and row introduction on every
/// rightward re-entry.
#[derive(Debug, Clone)]
pub struct Formation {
    /// Elapsed time accumulated toward the next tick.
    timer: f32,
    /// Ticks spent on the current side-to-side traversal.
    side_ticks: u32,
    pub moving_left: bool,
    /// Set for the single tick on which the formation descends.
    descending: bool,
    /// Seconds between ticks. Shrinks geometrically after every descent and
    /// has no floor.
    pub progression: f32,
}

impl Formation {
    pub fn new() -> Self {
        Self {
            timer: 0.0,
            side_ticks: 0,
            moving_left: false,
            descending: false,
            progression: INITIAL_PROGRESSION,
        }
    }

    /// Resets traversal state but keeps `progression`. The soft reset and
    /// wave advancement use this; only a hard reset restores the initial
    /// tick threshold.
    pub fn reset_traversal(&mut self) {
        self.timer = 0.0;
        self.side_ticks = 0;
        self.moving_left = false;
        self.descending = false;
    }

    /// Accumulates frame time and performs at most one formation tick.
    pub fn advance(&mut self, dt: f32, enemies: &mut EnemyArena) {
        self.timer += dt;
        if self.timer < self.progression {
            return;
        }
        self.timer = 0.0;

        self.side_ticks += 1;
        if self.side_ticks >= TICKS_PER_TRAVERSAL {
            self.side_ticks = 0;
            self.moving_left = !self.moving_left;
            self.descending = true;
        }

        let direction = if self.moving_left { -1.0 } else { 1.0 };
        let descending = self.descending;
        for enemy in enemies.relevant_slots_mut() {
            if !enemy.active {
                continue;
            }
            if descending {
                enemy.hitbox.y += enemy.speed.1;
            } else {
                enemy.hitbox.x += enemy.speed.0 * direction;
            }
        }

        if self.descending {
            self.progression *= 1.0 - SPEEDUP_FACTOR;
            // A flip back to rightward marks a completed full cycle: the
            // next withheld row joins the formation.
            if !self.moving_left {
                enemies.introduce_row();
            }
            self.descending = false;
        }
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}
