use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Hitbox, Phase, WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::Game;

/// View struct that holds all state needed for rendering
pub struct RenderView<'a> {
    pub game: &'a Game,
    pub area: Rect,
    pub fps: u32,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    // Future: could add theme/config fields here
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to phase-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.game.phase {
            Phase::Playing => self.render_game(frame, view),
            Phase::Paused => self.render_paused(frame, view),
            Phase::HitPause => self.render_hit_pause(frame, view),
            Phase::GameOver => self.render_game_over(frame, view),
        }
    }

    /// Renders the active play field: entity boxes, HUD and overlays.
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let game = view.game;

        let buffer = frame.buffer_mut();

        // Player ship
        draw_box(buffer, area, &game.player.hitbox, '█', Style::default().fg(Color::Green));

        // Enemies within the high-water count; heal carriers render green
        for enemy in game.enemies.relevant_slots() {
            if !enemy.active {
                continue;
            }
            let color = if enemy.heal { Color::Green } else { Color::Gray };
            draw_box(buffer, area, &enemy.hitbox, '▓', Style::default().fg(color));
        }

        // Projectiles
        for shot in game.projectiles.slots() {
            if shot.active {
                draw_box(buffer, area, &shot.hitbox, '|', Style::default().fg(Color::Red));
            }
        }

        // Stats overlay at the top - left side
        let stats_left = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:04}", game.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Wave: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.wave.banner(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(stats_left), stats_area);

        // Remaining hit points as discrete icons, right-aligned
        let hp_icons = "■ ".repeat(view.game.player.hp as usize);
        let hp_line = Line::from(Span::styled(
            hp_icons,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(
            Paragraph::new(hp_line).alignment(Alignment::Right),
            stats_area,
        );

        // Wave banner, fading in with play time
        if view.game.banner_alpha < 1.0 {
            let banner_color = if view.game.banner_alpha < 0.33 {
                Color::DarkGray
            } else if view.game.banner_alpha < 0.66 {
                Color::Gray
            } else {
                Color::White
            };
            let banner_area = Rect {
                x: area.x,
                y: area.y + area.height / 2,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(
                    Line::from(view.game.wave.banner())
                        .style(Style::default().fg(banner_color).add_modifier(Modifier::BOLD)),
                )
                .centered(),
                banner_area,
            );
        }

        if view.game.victory {
            let victory_area = Rect {
                x: area.x,
                y: area.y + area.height / 2,
                width: area.width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::from("YOU WIN").bold().yellow()).centered(),
                victory_area,
            );
        }

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause screen with overlay
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        // First render the game screen
        self.render_game(frame, view);

        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("GAME PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = centered_box(area, 30, 6);
        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Renders the post-hit screen awaiting acknowledgment
    fn render_hit_pause(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let hp = view.game.player.hp;

        let text = vec![
            Line::from(""),
            Line::from("SHIP HIT!").centered().red().bold(),
            Line::from(""),
            Line::from(format!("Hulls remaining: {}", hp)).centered().green(),
            Line::from(""),
            Line::from("PRESS [ENTER] TO PLAY AGAIN").centered().white(),
            Line::from("Press Q to quit").centered().dark_gray(),
        ];

        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }

    /// Renders the game over screen with the top-ten table
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let mut text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER!         ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {:04}", view.game.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("HIGH SCORES").centered().cyan().bold(),
        ];

        for (rank, entry) in view.game.scores.entries().iter().enumerate() {
            let name = if entry.name.is_empty() {
                "---"
            } else {
                entry.name.as_str()
            };
            text.push(
                Line::from(format!("{:2}. {:<9} {:>6}", rank + 1, name, entry.score))
                    .centered()
                    .gray(),
            );
        }

        text.push(Line::from(""));
        text.push(Line::from("PRESS [ENTER] TO PLAY AGAIN").centered().white());
        text.push(Line::from("Press Q to quit").centered().dark_gray());

        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects a world-unit hitbox onto the terminal cell grid and fills it.
/// Anything scaled below one cell still paints a single cell.
fn draw_box(buffer: &mut Buffer, area: Rect, hitbox: &Hitbox, glyph: char, style: Style) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let sx = f32::from(area.width) / WORLD_WIDTH;
    let sy = f32::from(area.height) / WORLD_HEIGHT;

    let x = (hitbox.x * sx).round();
    let y = (hitbox.y * sy).round();
    if x < 0.0 || y < 0.0 || x >= f32::from(area.width) || y >= f32::from(area.height) {
        return;
    }
    let x = x as u16;
    let y = y as u16;
    let w = ((hitbox.width * sx).ceil() as u16).max(1).min(area.width - x);
    let h = ((hitbox.height * sy).ceil() as u16)
        .max(1)
        .min(area.height - y);

    let row = glyph.to_string().repeat(w as usize);
    for dy in 0..h {
        buffer.set_string(area.x + x, area.y + y + dy, &row, style);
    }
}

fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
