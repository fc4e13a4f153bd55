use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::game::{FrameInput, Game};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::scores::ScoreBoard;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    /// The whole mutable game state; exclusively owned here.
    game: Game,
    /// Frames info
    last_frame_time: Instant,
    fps: u32,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`] around a loaded score board.
    pub fn new(scores: ScoreBoard) -> Self {
        Self {
            running: true,
            game: Game::new(scores),
            last_frame_time: Instant::now(),
            fps: 0,
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            // Frame clock: elapsed wall-clock time drives the timers
            let now = Instant::now();
            let frame_time = now.duration_since(self.last_frame_time);
            self.last_frame_time = now;
            let dt = frame_time.as_secs_f32();
            if frame_time.as_micros() > 0 {
                self.fps = (1_000_000 / frame_time.as_micros()) as u32;
            }

            // Render the frame from an immutable snapshot of the state
            terminal.draw(|frame| {
                let view = RenderView {
                    game: &self.game,
                    area: frame.area(),
                    fps: self.fps,
                };
                self.renderer.render(frame, &view);
            })?;

            // Poll input events and get actions
            self.input_manager.poll_events(self.game.phase)?;
            let actions = self.input_manager.get_actions(self.game.phase);
            let input = self.apply_actions(&actions);

            // Update game state
            let events = self.game.update(dt, &input);
            if events.shot_fired {
                self.audio_manager.play_fire();
            }
            if events.kills > 0 {
                self.audio_manager.play_kill();
            }

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(8));
        }
        Ok(())
    }

    /// Applies edge-triggered actions immediately and folds the held keys
    /// into the [`FrameInput`] consumed by the update pass.
    fn apply_actions(&mut self, actions: &[InputAction]) -> FrameInput {
        let mut input = FrameInput::default();
        for action in actions {
            match action {
                InputAction::Quit => {
                    self.running = false;
                }
                InputAction::TogglePause => {
                    self.game.toggle_pause();
                }
                InputAction::Confirm => {
                    self.game.confirm();
                }
                InputAction::MoveLeft => input.left = true,
                InputAction::MoveRight => input.right = true,
                InputAction::MoveUp => input.up = true,
                InputAction::MoveDown => input.down = true,
                InputAction::Fire => input.fire = true,
            }
        }
        input
    }

    /// The score board, for the final persistence flush after the loop ends.
    pub fn scores(&self) -> &ScoreBoard {
        &self.game.scores
    }
}
