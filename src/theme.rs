use clap::ValueEnum;
use ratatui::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    #[default]
    Default,
    Neon,
    Retro,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub power_up: Color,
}

impl Theme {
    pub fn next(self) -> Theme {
        match self {
            Theme::Default => Theme::Neon,
            Theme::Neon => Theme::Retro,
            Theme::Retro => Theme::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Neon => "neon",
            Theme::Retro => "retro",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Default => Palette {
                background: Color::Rgb(0x1a, 0x1a, 0x1a),
                grid: Color::Rgb(0x33, 0x33, 0x33),
                snake_head: Color::Rgb(0x4c, 0xaf, 0x50),
                snake_body: Color::Rgb(0x38, 0x8e, 0x3c),
                food: Color::Rgb(0xf4, 0x43, 0x36),
                power_up: Color::Rgb(0xff, 0xc1, 0x07),
            },
            Theme::Neon => Palette {
                background: Color::Rgb(0x00, 0x00, 0x00),
                grid: Color::Rgb(0x1a, 0x1a, 0x1a),
                snake_head: Color::Rgb(0x00, 0xff, 0x00),
                snake_body: Color::Rgb(0x00, 0xcc, 0x00),
                food: Color::Rgb(0xff, 0x00, 0xff),
                power_up: Color::Rgb(0x00, 0xff, 0xff),
            },
            Theme::Retro => Palette {
                background: Color::Rgb(0x2c, 0x3e, 0x50),
                grid: Color::Rgb(0x34, 0x49, 0x5e),
                snake_head: Color::Rgb(0xe7, 0x4c, 0x3c),
                snake_body: Color::Rgb(0xc0, 0x39, 0x2b),
                food: Color::Rgb(0xf1, 0xc4, 0x0f),
                power_up: Color::Rgb(0x9b, 0x59, 0xb6),
            },
        }
    }
}
