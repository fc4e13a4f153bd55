use crate::entities::{EnemyArena, Formation, Phase, Player, ProjectilePool, Wave};
use crate::scores::ScoreBoard;

/// Points awarded per destroyed enemy.
pub const KILL_SCORE: u32 = 100;
/// Added to the fire-rate counter each frame the fire key is held.
pub const FIRE_RATE_STEP: u32 = 5;
/// A projectile is admitted only when the counter is a multiple of this.
pub const FIRE_RATE_WINDOW: u32 = 20;
/// An enemy whose top edge crosses this line costs the player a hit point
/// even without touching the ship.
pub const ENEMY_BREACH_Y: f32 = 5.0;
/// Name recorded for a qualifying run.
pub const DEFAULT_PILOT: &str = "IRRA";

// Wave banner fades in over roughly a second and a half of play.
const BANNER_FADE_RATE: f32 = 0.65;

/// Held inputs sampled for one frame. Edge-triggered actions (pause, confirm)
/// go through [`Game::toggle_pause`] and [`Game::confirm`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// What happened during one update pass; the app layer uses this for audio
/// cues without reaching into game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub shot_fired: bool,
    pub kills: u32,
    pub player_hit: bool,
}

/// The entire mutable game state, owned by the app and passed by exclusive
/// reference into the update pass; the render pass reads it immutably.
#[derive(Debug, Clone)]
pub struct Game {
    pub phase: Phase,
    /// Overlay set when the third wave is cleared; play continues beneath it.
    pub victory: bool,
    pub wave: Wave,
    pub player: Player,
    pub enemies: EnemyArena,
    pub projectiles: ProjectilePool,
    pub formation: Formation,
    /// Fire-rate counter; climbs while the fire key is held, resets on every
    /// projectile retirement.
    pub fire_rate: u32,
    pub score: u32,
    pub kills: u32,
    /// Fade-in of the wave banner, 0..=1.
    pub banner_alpha: f32,
    pub scores: ScoreBoard,
}

impl Game {
    pub fn new(scores: ScoreBoard) -> Self {
        Self {
            phase: Phase::Playing,
            victory: false,
            wave: Wave::First,
            player: Player::new(),
            enemies: EnemyArena::new(Wave::First),
            projectiles: ProjectilePool::new(),
            formation: Formation::new(),
            fire_rate: 0,
            score: 0,
            kills: 0,
            banner_alpha: 0.0,
            scores,
        }
    }

    /// One frame of game logic. Suspended outside of `Playing`; the frame in
    /// which a hit lands still runs to completion.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.phase != Phase::Playing {
            return events;
        }

        self.banner_alpha = (self.banner_alpha + dt * BANNER_FADE_RATE).min(1.0);

        self.move_player(input);
        events.player_hit = self.resolve_player_collisions();

        if !self.victory {
            self.formation.advance(dt, &mut self.enemies);
        }

        events.shot_fired = self.handle_fire(input.fire);
        events.kills = self.resolve_projectiles();

        if self.phase == Phase::Playing && !self.victory && self.enemies.all_relevant_dead() {
            self.advance_wave();
        }

        events
    }

    /// Pause is a straight toggle; it never leaves `HitPause` or `GameOver`.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
    }

    /// Acknowledgment after a hit: soft reset out of `HitPause`, hard reset
    /// out of `GameOver`.
    pub fn confirm(&mut self) {
        match self.phase {
            Phase::HitPause => self.soft_reset(),
            Phase::GameOver => self.hard_reset(),
            _ => {}
        }
    }

    /// Re-enters play after a non-fatal hit: player and current-wave pools
    /// are re-initialized in place; score, wave, kill totals and the
    /// formation's accumulated speed all persist.
    pub fn soft_reset(&mut self) {
        self.phase = Phase::Playing;
        self.fire_rate = 0;
        self.banner_alpha = 0.0;
        self.player.respawn();
        self.enemies.reset(self.wave);
        self.projectiles.reset();
        self.formation.reset_traversal();
    }

    /// Full restart; only the high-score board survives.
    pub fn hard_reset(&mut self) {
        let scores = std::mem::take(&mut self.scores);
        *self = Game::new(scores);
    }

    fn move_player(&mut self, input: &FrameInput) {
        if input.left {
            self.player.move_left();
        }
        if input.right {
            self.player.move_right();
        }
        if input.up {
            self.player.move_up();
        }
        if input.down {
            self.player.move_down();
        }
    }

    /// An enemy costs a hit point by overlapping the ship or by breaching the
    /// near-top line. The life-loss gate in [`Self::lose_hp`] keeps a single
    /// sweep from charging more than one point.
    fn resolve_player_collisions(&mut self) -> bool {
        let mut hit = false;
        for index in 0..self.enemies.relevant() {
            let enemy = &self.enemies.slots()[index];
            if !enemy.active {
                continue;
            }
            let breached = enemy.hitbox.y <= ENEMY_BREACH_Y;
            let rammed = enemy.hitbox.intersects(&self.player.hitbox);
            if (breached || rammed) && self.lose_hp() {
                hit = true;
            }
        }
        hit
    }

    /// Applies one hit-point loss, gated so a stunned or finished run never
    /// loses twice. Returns whether a point was actually charged.
    fn lose_hp(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.player.lose_hp();
        if self.player.is_alive() {
            self.phase = Phase::HitPause;
        } else {
            self.phase = Phase::GameOver;
            if self.scores.admits(self.score) {
                self.scores.insert(DEFAULT_PILOT, self.score);
            }
        }
        true
    }

    /// Rate-limited projectile admission: the counter climbs while the key
    /// is held and a pool slot is claimed only on exact window multiples.
    fn handle_fire(&mut self, held: bool) -> bool {
        if !held {
            return false;
        }
        self.fire_rate += FIRE_RATE_STEP;
        if !self.fire_rate.is_multiple_of(FIRE_RATE_WINDOW) {
            return false;
        }
        let x = self.player.hitbox.x;
        let y = self.player.hitbox.y + self.player.hitbox.height / 4.0;
        self.projectiles.spawn_at(x, y)
    }

    /// Moves every active projectile and resolves enemy hits and field exits.
    /// Returns the number of enemies destroyed this frame.
    fn resolve_projectiles(&mut self) -> u32 {
        let mut kills = 0;
        for shot in self.projectiles.slots_mut() {
            if !shot.active {
                continue;
            }
            shot.advance();

            for enemy in self.enemies.relevant_slots_mut() {
                if !enemy.active {
                    continue;
                }
                if shot.hitbox.intersects(&enemy.hitbox) {
                    shot.active = false;
                    enemy.active = false;
                    enemy.dead = true;
                    self.fire_rate = 0;
                    self.kills += 1;
                    self.score += KILL_SCORE;
                    kills += 1;
                    // The destroyed enemy's own flag decides the heal.
                    if enemy.heal {
                        self.player.gain_hp();
                    }
                    break;
                }
            }

            if shot.active && shot.is_out_of_bounds() {
                shot.active = false;
                self.fire_rate = 0;
            }
        }
        kills
    }

    fn advance_wave(&mut self) {
        match self.wave.next() {
            Some(next) => {
                self.wave = next;
                self.enemies.reset(next);
                self.projectiles.reset();
                self.formation.reset_traversal();
                self.banner_alpha = 0.0;
            }
            None => self.victory = true,
        }
    }
}
