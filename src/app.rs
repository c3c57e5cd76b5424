use std::time::Instant;

use log::info;
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::board::Board;
use crate::engine::{Engine, Snapshot};
use crate::input::Command;
use crate::theme::Theme;

pub struct App<R> {
    pub engine: Engine<R>,
    pub theme: Theme,
    pub exit: bool,
}

impl<R: Rng> App<R> {
    pub fn new(engine: Engine<R>, theme: Theme) -> Self {
        App {
            engine,
            theme,
            exit: false,
        }
    }

    pub fn handle_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Turn(direction) => self.engine.request_direction(direction),
            Command::TogglePause => self.engine.toggle_pause(now),
            Command::Reset => self.engine.reset(now),
            Command::CycleTheme => {
                self.theme = self.theme.next();
                info!("Theme switched to {}", self.theme.name());
            }
            Command::Quit => self.exit = true,
            Command::None => {}
        }
    }

    fn header(&self, snapshot: &Snapshot) -> String {
        let mut text = format!(
            "SNEK    Score: {}    Theme: {}",
            snapshot.score,
            self.theme.name()
        );
        if snapshot.speed < self.engine.settings().base_speed {
            text.push_str(&format!("    Tick: {}ms", snapshot.speed.as_millis()));
        }
        if snapshot.paused {
            text.push_str("    PAUSED");
        }
        if let (Some(effect), Some(remaining)) = (snapshot.active_effect, snapshot.effect_remaining)
        {
            text.push_str(&format!(
                "    {} {:.1}s",
                effect.kind.label(),
                remaining.as_secs_f32()
            ));
        }
        text
    }

    pub fn render(&self, frame: &mut Frame, now: Instant) {
        let snapshot = self.engine.snapshot(now);
        let grid = self.engine.settings().grid;
        let palette = self.theme.palette();

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score line
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(self.header(&snapshot))
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        let (width, height) = Board::footprint(grid);
        let [board_area] = Layout::horizontal([Constraint::Length(width + 2)])
            .flex(layout::Flex::Center)
            .areas(layout[1]);
        let [board_area] = Layout::vertical([Constraint::Length(height + 2)])
            .flex(layout::Flex::Center)
            .areas(board_area);

        let title = if snapshot.paused {
            "Paused. Press SPACE to continue"
        } else {
            "Playing"
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.grid));
        let inner_area = block.inner(board_area);
        frame.render_widget(block, board_area);
        frame.render_widget(
            Board {
                snapshot: &snapshot,
                grid,
                palette,
            },
            inner_area,
        );

        if snapshot.over {
            let [popup] = Layout::vertical([Constraint::Length(5)])
                .flex(layout::Flex::Center)
                .areas(inner_area);
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Paragraph::new(format!(
                    "GAME OVER\nFinal Score: {}\nPress R to play again",
                    snapshot.score
                ))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
                popup,
            );
        }

        frame.render_widget(
            Paragraph::new("arrows/WASD: steer   SPACE: pause   T: theme   R: restart   Q: quit")
                .alignment(Alignment::Center),
            layout[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use crate::settings::Settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn app(now: Instant) -> App<StdRng> {
        let settings = Settings {
            power_up_chance: 0.0,
            ..Default::default()
        };
        App::new(
            Engine::with_rng(settings, StdRng::seed_from_u64(11), now),
            Theme::Default,
        )
    }

    #[test]
    fn test_commands_reach_the_engine() {
        let now = Instant::now();
        let mut app = app(now);

        app.handle_command(Command::Turn(Direction::Left), now);
        app.engine.tick(now);
        assert_eq!(app.engine.state().direction, Direction::Left);

        app.handle_command(Command::TogglePause, now);
        assert!(app.engine.snapshot(now).paused);

        app.handle_command(Command::Reset, now);
        assert_eq!(app.engine.state().direction, Direction::Up);
        assert!(!app.engine.snapshot(now).paused);
    }

    #[test]
    fn test_theme_and_quit() {
        let now = Instant::now();
        let mut app = app(now);

        app.handle_command(Command::CycleTheme, now);
        assert_eq!(app.theme, Theme::Neon);
        app.handle_command(Command::None, now);
        assert!(!app.exit);
        app.handle_command(Command::Quit, now);
        assert!(app.exit);
    }

    #[test]
    fn test_render_shows_score_and_pause() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle_command(Command::TogglePause, now);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| app.render(frame, now)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Score: 0"));
        assert!(text.contains("PAUSED"));
    }
}
