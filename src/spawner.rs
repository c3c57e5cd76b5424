//! Random placement of food and power-ups on free cells.
//!
//! Both placements use rejection sampling over the whole grid. They only
//! terminate while at least one cell is free, which holds as long as the
//! snake covers fewer cells than the grid has.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use rand::Rng;

use crate::grid::{Pos, Size};
use crate::powerup::{PowerUp, PowerUpKind};

fn random_pos(size: Size, rng: &mut impl Rng) -> Pos {
    Pos {
        x: rng.gen_range(0..size.width),
        y: rng.gen_range(0..size.height),
    }
}

/// Distinct cells under the snake. A shielded snake can overlap itself.
fn covered(snake: &VecDeque<Pos>) -> usize {
    snake.iter().collect::<HashSet<_>>().len()
}

pub fn place_food(size: Size, snake: &VecDeque<Pos>, rng: &mut impl Rng) -> Pos {
    debug_assert!(covered(snake) < size.area(), "no free cell left for food");
    loop {
        let pos = random_pos(size, rng);
        if !snake.contains(&pos) {
            return pos;
        }
    }
}

pub fn place_power_up(
    size: Size,
    snake: &VecDeque<Pos>,
    food: Pos,
    duration: Duration,
    now: Instant,
    rng: &mut impl Rng,
) -> PowerUp {
    debug_assert!(
        covered(snake) + 1 < size.area(),
        "no free cell left for a power-up"
    );
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    loop {
        let pos = random_pos(size, rng);
        if pos != food && !snake.contains(&pos) {
            return PowerUp {
                kind,
                pos,
                spawned_at: now,
                duration,
            };
        }
    }
}
