use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Reset,
    CycleTheme,
    Quit,
    None,
}

pub fn command_for(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Command::Turn(Direction::Right)
        }
        KeyCode::Char(' ') => Command::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
        KeyCode::Char('t') | KeyCode::Char('T') => Command::CycleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(key(KeyCode::Up)), Command::Turn(Direction::Up));
        assert_eq!(command_for(key(KeyCode::Down)), Command::Turn(Direction::Down));
        assert_eq!(command_for(key(KeyCode::Left)), Command::Turn(Direction::Left));
        assert_eq!(command_for(key(KeyCode::Right)), Command::Turn(Direction::Right));
    }

    #[test]
    fn test_wasd() {
        assert_eq!(command_for(key(KeyCode::Char('w'))), Command::Turn(Direction::Up));
        assert_eq!(command_for(key(KeyCode::Char('A'))), Command::Turn(Direction::Left));
    }

    #[test]
    fn test_controls() {
        assert_eq!(command_for(key(KeyCode::Char(' '))), Command::TogglePause);
        assert_eq!(command_for(key(KeyCode::Char('r'))), Command::Reset);
        assert_eq!(command_for(key(KeyCode::Char('t'))), Command::CycleTheme);
        assert_eq!(command_for(key(KeyCode::Esc)), Command::Quit);
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
        assert_eq!(command_for(key(KeyCode::Char('c'))), Command::None);
        assert_eq!(command_for(key(KeyCode::Enter)), Command::None);
    }
}
