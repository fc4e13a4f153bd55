mod enemy;
mod formation;
mod hitbox;
mod phase;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::{Enemy, EnemyArena, ENEMY_CAPACITY, HEAL_CHANCE, ROW_WIDTH};
pub use formation::{Formation, INITIAL_PROGRESSION, SPEEDUP_FACTOR, TICKS_PER_TRAVERSAL};
pub use hitbox::{Hitbox, WORLD_HEIGHT, WORLD_WIDTH};
pub use phase::{Phase, Wave};
pub use player::{Player, MAX_HP};
pub use projectile::{Projectile, ProjectilePool, PROJECTILE_CAPACITY};
