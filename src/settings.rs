use std::time::Duration;

use crate::grid::Size;

pub const GRID_SIDE: u16 = 30;
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const BASE_SPEED_MS: u64 = 100;
pub const EFFECT_DURATION_MS: u64 = 5000;
pub const POWER_UP_CHANCE: f64 = 0.01;
pub const FOOD_SCORE: u32 = 10;

/// Tunables of a single game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub grid: Size,
    pub initial_length: usize,
    /// Tick interval with no speed effect running.
    pub base_speed: Duration,
    pub effect_duration: Duration,
    /// Per-tick chance of a power-up appearing while none is on the board.
    pub power_up_chance: f64,
    pub food_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            grid: Size::square(GRID_SIDE),
            initial_length: INITIAL_SNAKE_LENGTH,
            base_speed: Duration::from_millis(BASE_SPEED_MS),
            effect_duration: Duration::from_millis(EFFECT_DURATION_MS),
            power_up_chance: POWER_UP_CHANCE,
            food_score: FOOD_SCORE,
        }
    }
}

impl Settings {
    pub fn with_grid(side: u16) -> Self {
        Settings {
            grid: Size::square(side),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.grid, Size::square(30));
        assert_eq!(settings.grid.area(), 900);
        assert_eq!(settings.initial_length, 3);
        assert_eq!(settings.base_speed, Duration::from_millis(100));
        assert_eq!(settings.effect_duration, Duration::from_millis(5000));
        assert_eq!(settings.food_score, 10);
    }

    #[test]
    fn test_custom_grid() {
        let settings = Settings::with_grid(12);
        assert_eq!(settings.grid, Size::square(12));
        assert_eq!(settings.base_speed, Duration::from_millis(100));
    }
}
