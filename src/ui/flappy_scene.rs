//! Terminal rendering of a [`GameSnapshot`].

use crate::sim::{GameSnapshot, GameState, Renderer};
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_message_box, render_status_bar,
};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

const INFO_PANEL_WIDTH: u16 = 20;

/// Draw the whole scene into `area`.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, INFO_PANEL_WIDTH);

    render_play_area(frame, layout.content, snapshot);
    render_status_bar_content(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    match snapshot.state {
        GameState::Ready => render_message_box(
            frame,
            layout.content,
            Color::Yellow,
            "GET READY",
            &["Press Space to start".to_string()],
        ),
        GameState::GameOver => render_message_box(
            frame,
            layout.content,
            Color::Red,
            "GAME OVER",
            &[
                format!("Score {}", snapshot.score),
                format!("Best {}", snapshot.best),
                String::new(),
                "Press Enter to restart".to_string(),
            ],
        ),
        GameState::Playing => {}
    }
}

fn in_cloud(x: f64, y: f64, snapshot: &GameSnapshot) -> bool {
    // Each cloud is three overlapping puffs.
    snapshot.clouds.iter().any(|c| {
        let puffs = [
            (c.x, c.y, c.radius),
            (c.x + c.radius * 0.9, c.y + 2.0, c.radius * 1.2),
            (c.x - c.radius * 0.8, c.y + 4.0, c.radius * 1.1),
        ];
        puffs.iter().any(|&(px, py, r)| {
            let dx = x - px;
            let dy = y - py;
            dx * dx + dy * dy <= r * r
        })
    })
}

fn bird_glyph(rotation: f64) -> &'static str {
    if rotation < -0.3 {
        "▲"
    } else if rotation > 0.6 {
        "▼"
    } else {
        "►"
    }
}

/// Paint the world scaled to fit `area`, sampling each cell at its center.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snapshot.world_width / width as f64;
    let y_scale = snapshot.world_height / height as f64;
    let floor_y = snapshot.floor_y();

    let bird_col = (snapshot.bird.x / x_scale).floor() as i64;
    let bird_row = (snapshot.bird.y / y_scale).floor() as i64;

    let pipe_style = Style::default().fg(Color::Green);
    let ground_style = Style::default().fg(Color::Yellow);
    let cloud_style = Style::default().fg(Color::White);
    let bird_style = Style::default()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let wx = (col as f64 + 0.5) * x_scale;

            if row as i64 == bird_row && col as i64 == bird_col {
                spans.push(Span::styled(bird_glyph(snapshot.bird.rotation), bird_style));
                continue;
            }

            if wy >= floor_y {
                let glyph = if (col + row) % 4 == 0 { "▒" } else { "▓" };
                spans.push(Span::styled(glyph, ground_style));
                continue;
            }

            let in_pipe = snapshot.pipes.iter().any(|p| {
                [p.top, p.bottom].iter().any(|r| {
                    wx >= r.x && wx < r.right() && wy >= r.y && wy < r.bottom()
                })
            });
            if in_pipe {
                spans.push(Span::styled("█", pipe_style));
            } else if in_cloud(wx, wy, snapshot) {
                spans.push(Span::styled("░", cloud_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    match snapshot.state {
        GameState::Ready => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")],
        ),
        GameState::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &[("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")],
        ),
        GameState::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed with {} points", snapshot.score),
            Color::Red,
            &[("[Enter]", "Restart"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state_label, state_color) = match snapshot.state {
        GameState::Ready => ("Ready", Color::Yellow),
        GameState::Playing => ("Flying", Color::Green),
        GameState::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", state_label),
            Style::default()
                .fg(state_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.best),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.pipes.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// [`Renderer`] drawing into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            render_flappy(frame, area, snapshot);
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::sim::{FlappyGame, GameInput, Pipe};
    use ratatui::backend::TestBackend;

    fn screen_text(renderer: &TerminalRenderer<TestBackend>) -> String {
        renderer
            .terminal()
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn renderer() -> TerminalRenderer<TestBackend> {
        TerminalRenderer::new(Terminal::new(TestBackend::new(70, 30)).unwrap())
    }

    #[test]
    fn test_ready_screen_prompts_start() {
        let game = FlappyGame::new(GameConfig::default(), 4).unwrap();
        let mut renderer = renderer();
        renderer.render(&game.snapshot()).unwrap();
        let text = screen_text(&renderer);
        assert!(text.contains("GET READY"));
        assert!(text.contains("Best: 4"));
    }

    #[test]
    fn test_playing_screen_shows_pipes_and_bird() {
        let mut game = FlappyGame::new(GameConfig::default(), 0).unwrap();
        game.process_input(GameInput::Flap);
        game.obstacles
            .push(Pipe::new("p".into(), 200.0, 60.0, 300.0, 150.0));
        let mut renderer = renderer();
        renderer.render(&game.snapshot()).unwrap();
        let text = screen_text(&renderer);
        assert!(text.contains('█'));
        assert!(text.contains('▲') || text.contains('►') || text.contains('▼'));
        assert!(text.contains("Score: 0"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut game = FlappyGame::new(GameConfig::default(), 0).unwrap();
        game.process_input(GameInput::Flap);
        game.bird.y = 499.0;
        let mut rng = rand::thread_rng();
        game.tick(0.01, &mut rng);
        let mut renderer = renderer();
        renderer.render(&game.snapshot()).unwrap();
        let text = screen_text(&renderer);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Press Enter to restart"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let game = FlappyGame::new(GameConfig::default(), 0).unwrap();
        let mut renderer = TerminalRenderer::new(Terminal::new(TestBackend::new(5, 3)).unwrap());
        renderer.render(&game.snapshot()).unwrap();
    }
}
