// Library exports for testing
pub use entities::{
    Enemy, EnemyArena, Formation, Hitbox, Phase, Player, Projectile, ProjectilePool, Wave,
};
pub use game::{FrameEvents, FrameInput, Game};
pub use scores::{ScoreBoard, ScoreEntry};

pub mod app;
pub mod audio;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scores;
