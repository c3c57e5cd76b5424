use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use log::info;

use crate::grid::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Halves the tick interval.
    Speed,
    /// Pulls the food one cell toward the head every tick.
    Magnet,
    /// Lets the snake pass through its own body.
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Speed,
        PowerUpKind::Magnet,
        PowerUpKind::Shield,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "Speed!",
            PowerUpKind::Magnet => "Magnet!",
            PowerUpKind::Shield => "Shield!",
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PowerUpKind::Speed => "speed",
            PowerUpKind::Magnet => "magnet",
            PowerUpKind::Shield => "shield",
        };
        f.write_str(name)
    }
}

/// A power-up lying on the board, waiting to be eaten.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Pos,
    pub spawned_at: Instant,
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEffect {
    pub kind: PowerUpKind,
    pub expires_at: Instant,
}

impl ActiveEffect {
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Tracks the single in-force effect and the tick interval it implies.
#[derive(Debug)]
pub struct PowerUps {
    base_speed: Duration,
    duration: Duration,
    active: Option<ActiveEffect>,
}

impl PowerUps {
    pub fn new(base_speed: Duration, duration: Duration) -> Self {
        PowerUps {
            base_speed,
            duration,
            active: None,
        }
    }

    /// Replaces whatever effect is running. Durations never stack.
    pub fn activate(&mut self, kind: PowerUpKind, now: Instant) -> ActiveEffect {
        let effect = ActiveEffect {
            kind,
            expires_at: now + self.duration,
        };
        if let Some(previous) = self.active.replace(effect) {
            info!("{} effect replaced by {}", previous.kind, kind);
        }
        effect
    }

    /// Clears the effect once `now` is past its expiry and hands it back.
    pub fn expire(&mut self, now: Instant) -> Option<ActiveEffect> {
        match self.active {
            Some(effect) if now > effect.expires_at => {
                info!("{} effect expired", effect.kind);
                self.active.take()
            }
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<ActiveEffect> {
        self.active
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.active.is_some_and(|effect| effect.kind == kind)
    }

    pub fn speed(&self) -> Duration {
        if self.is_active(PowerUpKind::Speed) {
            self.base_speed / 2
        } else {
            self.base_speed
        }
    }
}

/// Magnet pull: the food steps one cell toward `head`, unless that cell is
/// part of the snake.
pub fn attract(food: Pos, head: Pos, snake: &VecDeque<Pos>) -> Pos {
    let pulled = food.step_toward(head);
    if snake.contains(&pulled) {
        food
    } else {
        pulled
    }
}
