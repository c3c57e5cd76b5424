//! The game simulation: snake movement, collisions, food and power-ups.
//!
//! Everything here is driven by explicit `Instant`s handed in by the caller,
//! so the whole state machine can be stepped deterministically in tests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::grid::{Direction, Pos};
use crate::powerup::{attract, ActiveEffect, PowerUp, PowerUpKind, PowerUps};
use crate::settings::Settings;
use crate::spawner;
use crate::timer::TickTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

#[derive(Debug)]
pub enum StepResult {
    Skipped,     // Not running, nothing moved
    Ongoing,     // Normal movement, no food eaten
    Nommed(u32), // Ate food, with score increment
    Collision,   // Hit self, game over
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Head first, tail last.
    pub snake: VecDeque<Pos>,
    pub food: Pos,
    pub power_up: Option<PowerUp>,
    pub direction: Direction,
    pub score: u32,
    pub status: Status,
}

/// What the renderer gets to see after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Pos>,
    pub food: Pos,
    pub power_up: Option<PowerUp>,
    pub active_effect: Option<ActiveEffect>,
    pub effect_remaining: Option<Duration>,
    pub direction: Direction,
    pub score: u32,
    pub speed: Duration,
    pub paused: bool,
    pub over: bool,
}

pub struct Engine<R> {
    settings: Settings,
    rng: R,
    state: GameState,
    power_ups: PowerUps,
    timer: TickTimer,
    queued_turn: Option<Direction>,
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(settings: Settings, mut rng: R, now: Instant) -> Self {
        let state = Self::fresh_state(&settings, &mut rng);
        let mut timer = TickTimer::new(settings.base_speed);
        timer.arm(settings.base_speed, now);
        info!(
            "New game on a {}x{} grid, tick every {:?}",
            settings.grid.width, settings.grid.height, settings.base_speed
        );
        Engine {
            power_ups: PowerUps::new(settings.base_speed, settings.effect_duration),
            settings,
            rng,
            state,
            timer,
            queued_turn: None,
        }
    }

    fn fresh_state(settings: &Settings, rng: &mut R) -> GameState {
        let mid_x = settings.grid.width / 2;
        let mid_y = settings.grid.height / 2;
        let snake: VecDeque<Pos> = (0..settings.initial_length as u16)
            .map(|i| Pos::new(mid_x, mid_y + i))
            .collect();
        let food = spawner::place_food(settings.grid, &snake, rng);

        GameState {
            snake,
            food,
            power_up: None,
            direction: Direction::Up,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn active_effect(&self) -> Option<ActiveEffect> {
        self.power_ups.active()
    }

    pub fn speed(&self) -> Duration {
        self.power_ups.speed()
    }

    pub fn is_over(&self) -> bool {
        self.state.status == Status::GameOver
    }

    fn head(&self) -> Pos {
        self.state.snake[0]
    }

    /// Back to a brand new game. Any pending tick is dropped first so it
    /// cannot land on the new state.
    pub fn reset(&mut self, now: Instant) {
        self.timer.cancel();
        self.state = Self::fresh_state(&self.settings, &mut self.rng);
        self.power_ups.clear();
        self.queued_turn = None;
        self.timer.arm(self.power_ups.speed(), now);
        info!("Game reset");
    }

    /// Queues a turn for the next tick. Reversals relative to the direction
    /// the snake last moved in are dropped, as is anything after game over.
    pub fn request_direction(&mut self, requested: Direction) {
        if self.is_over() {
            return;
        }
        if requested == self.state.direction.opposite() {
            debug!("Ignoring reversal to {:?}", requested);
            return;
        }
        self.queued_turn = Some(requested);
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        match self.state.status {
            Status::Running => {
                self.state.status = Status::Paused;
                self.timer.cancel();
                debug!("Paused");
            }
            Status::Paused => {
                self.state.status = Status::Running;
                self.timer.arm(self.power_ups.speed(), now);
                debug!("Resumed");
            }
            Status::GameOver => {}
        }
    }

    /// Drops an expired effect. Runs whatever the status, so effects keep
    /// running down while the game is paused.
    pub fn check_effects(&mut self, now: Instant) -> bool {
        if self.power_ups.expire(now).is_some() {
            self.sync_speed(now);
            true
        } else {
            false
        }
    }

    fn sync_speed(&mut self, now: Instant) {
        let speed = self.power_ups.speed();
        if self.state.status == Status::Running && self.timer.interval() != speed {
            debug!("Tick interval now {:?}", speed);
            self.timer.arm(speed, now);
        }
    }

    /// Main loop entry point: expiry first, then a tick if one is due.
    /// Returns whether anything visible changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = self.check_effects(now);
        if self.timer.fire(now) {
            if let StepResult::Nommed(points) = self.tick(now) {
                debug!("+{} points", points);
            }
            changed = true;
        }
        changed
    }

    /// How long the caller may sleep before `poll` has work to do.
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        let effect = self
            .power_ups
            .active()
            .map(|effect| effect.remaining(now) + Duration::from_millis(1));
        match (self.timer.remaining(now), effect) {
            (Some(tick), Some(effect)) => Some(tick.min(effect)),
            (tick, effect) => tick.or(effect),
        }
    }

    pub fn tick(&mut self, now: Instant) -> StepResult {
        if self.state.status != Status::Running {
            return StepResult::Skipped;
        }
        if let Some(turn) = self.queued_turn.take() {
            self.state.direction = turn;
        }

        let magnet = self.power_ups.is_active(PowerUpKind::Magnet);
        if magnet {
            self.state.food = attract(self.state.food, self.head(), &self.state.snake);
        }

        let new_head = self
            .head()
            .wrapped_add(self.state.direction.into(), self.settings.grid);

        let shielded = self.power_ups.is_active(PowerUpKind::Shield);
        if !shielded && self.state.snake.contains(&new_head) {
            self.state.status = Status::GameOver;
            self.timer.cancel();
            info!("Game over, final score {}", self.state.score);
            return StepResult::Collision;
        }

        self.state.snake.push_front(new_head);
        let result = if new_head == self.state.food {
            self.state.score += self.settings.food_score;
            let mut food =
                spawner::place_food(self.settings.grid, &self.state.snake, &mut self.rng);
            if magnet {
                food = attract(food, new_head, &self.state.snake);
            }
            self.state.food = food;
            info!(
                "Food eaten, score {} length {}",
                self.state.score,
                self.state.snake.len()
            );
            StepResult::Nommed(self.settings.food_score)
        } else {
            self.state.snake.pop_back();
            StepResult::Ongoing
        };

        if let Some(power_up) = self.state.power_up.filter(|p| p.pos == new_head) {
            self.state.power_up = None;
            self.power_ups.activate(power_up.kind, now);
            info!(
                "Picked up {} power-up for {:?}, {:?} after it appeared",
                power_up.kind,
                power_up.duration,
                now.saturating_duration_since(power_up.spawned_at)
            );
            self.sync_speed(now);
        }

        if self.state.power_up.is_none() && self.rng.gen_bool(self.settings.power_up_chance) {
            let power_up = spawner::place_power_up(
                self.settings.grid,
                &self.state.snake,
                self.state.food,
                self.settings.effect_duration,
                now,
                &mut self.rng,
            );
            info!("Spawned {} power-up at {:?}", power_up.kind, power_up.pos);
            self.state.power_up = Some(power_up);
        }

        result
    }

    pub fn snapshot(&self, now: Instant) -> Snapshot {
        let active_effect = self.active_effect();
        Snapshot {
            snake: self.state.snake.iter().copied().collect(),
            food: self.state.food,
            power_up: self.state.power_up,
            active_effect,
            effect_remaining: active_effect.map(|effect| effect.remaining(now)),
            direction: self.state.direction,
            score: self.state.score,
            speed: self.speed(),
            paused: self.state.status == Status::Paused,
            over: self.is_over(),
        }
    }
}
