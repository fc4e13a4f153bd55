/// Top-level phase of a run. Exactly one phase holds at any time; the victory
/// overlay lives on [`crate::game::Game`] because it does not suspend play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal updates: movement, combat and formation all run.
    Playing,
    /// Pause toggled by the player; everything is frozen until resumed.
    Paused,
    /// The player lost a non-final hit point and must confirm before the
    /// soft reset re-enters play.
    HitPause,
    /// The player lost the final hit point; confirm performs a hard reset.
    GameOver,
}

/// The three fixed enemy waves. A wave only ever advances forward; it never
/// resets mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    First,
    Second,
    Third,
}

impl Wave {
    /// Number of enemy slots relevant when the wave begins.
    pub fn initial_count(self) -> usize {
        match self {
            Wave::First => 60,
            Wave::Second => 20,
            Wave::Third => 50,
        }
    }

    pub fn banner(self) -> &'static str {
        match self {
            Wave::First => "FIRST WAVE",
            Wave::Second => "SECOND WAVE",
            Wave::Third => "THIRD WAVE",
        }
    }

    /// The following wave, or `None` after the third (victory).
    pub fn next(self) -> Option<Wave> {
        match self {
            Wave::First => Some(Wave::Second),
            Wave::Second => Some(Wave::Third),
            Wave::Third => None,
        }
    }
}
