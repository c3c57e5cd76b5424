use ratatui::prelude::*;

use crate::engine::Snapshot;
use crate::grid::{Direction, Pos, Size};
use crate::powerup::PowerUpKind;
use crate::theme::Palette;

/// Terminal columns per grid cell, so cells come out roughly square.
pub const CELL_WIDTH: u16 = 2;

pub struct Board<'a> {
    pub snapshot: &'a Snapshot,
    pub grid: Size,
    pub palette: Palette,
}

impl Board<'_> {
    pub fn footprint(grid: Size) -> (u16, u16) {
        (grid.width * CELL_WIDTH, grid.height)
    }

    fn paint(&self, buf: &mut Buffer, area: Rect, pos: Pos, symbols: [&str; 2], style: Style) {
        for (i, symbol) in symbols.iter().enumerate() {
            let x = area.x + pos.x * CELL_WIDTH + i as u16;
            let y = area.y + pos.y;
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_style(style);
            }
        }
    }
}

fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

fn power_up_hint(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Speed => "s",
        PowerUpKind::Magnet => "m",
        PowerUpKind::Shield => "h",
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(self.palette.background);
        let dots = background.fg(self.palette.grid);
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                self.paint(buf, area, Pos::new(x, y), ["·", " "], dots);
            }
        }

        let food = background.fg(self.palette.food);
        self.paint(buf, area, self.snapshot.food, ["●", " "], food);

        if let Some(power_up) = self.snapshot.power_up {
            let style = background.fg(self.palette.power_up).bold();
            self.paint(
                buf,
                area,
                power_up.pos,
                ["★", power_up_hint(power_up.kind)],
                style,
            );
        }

        // Tail first so the head wins when a shielded snake overlaps itself.
        for pos in self.snapshot.snake.iter().skip(1).rev() {
            let style = Style::default().bg(self.palette.snake_body);
            self.paint(buf, area, *pos, [" ", " "], style);
        }
        if let Some(head) = self.snapshot.snake.first() {
            let style = Style::default()
                .bg(self.palette.snake_head)
                .fg(Color::Black);
            let symbol = head_symbol(self.snapshot.direction);
            self.paint(buf, area, *head, [symbol, " "], style);
        }
    }
}
