use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;

use crate::settings::{Settings, BASE_SPEED_MS, GRID_SIDE};
use crate::theme::Theme;

/// Snake on a wrapping grid, with speed, magnet and shield power-ups.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Side length of the square grid
    #[arg(long, default_value_t = GRID_SIDE, value_parser = clap::value_parser!(u16).range(8..=60))]
    pub grid_size: u16,

    /// Base tick interval in milliseconds
    #[arg(long, default_value_t = BASE_SPEED_MS, value_parser = clap::value_parser!(u64).range(20..=1000))]
    pub speed_ms: u64,

    /// Color theme to start with
    #[arg(long, value_enum, default_value_t = Theme::Default)]
    pub theme: Theme,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "snekfx.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            base_speed: Duration::from_millis(self.speed_ms),
            ..Settings::with_grid(self.grid_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Size;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["snekfx"]).unwrap();
        assert_eq!(cli.settings(), Settings::default());
        assert_eq!(cli.theme, Theme::Default);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "snekfx",
            "--grid-size",
            "20",
            "--speed-ms",
            "150",
            "--theme",
            "retro",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let settings = cli.settings();
        assert_eq!(settings.grid, Size::square(20));
        assert_eq!(settings.base_speed, Duration::from_millis(150));
        assert_eq!(cli.theme, Theme::Retro);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_tiny_grid() {
        assert!(Cli::try_parse_from(["snekfx", "--grid-size", "3"]).is_err());
        assert!(Cli::try_parse_from(["snekfx", "--speed-ms", "5"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
