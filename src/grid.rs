#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn square(side: u16) -> Self {
        Size {
            width: side,
            height: side,
        }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => PosDelta { x: 0, y: -1 },
            Direction::Down => PosDelta { x: 0, y: 1 },
            Direction::Left => PosDelta { x: -1, y: 0 },
            Direction::Right => PosDelta { x: 1, y: 0 },
        }
    }
}

/// Toroidal wraparound of a single coordinate onto `0..axis`.
pub fn wrap(v: i32, axis: u16) -> u16 {
    v.rem_euclid(axis as i32) as u16
}

impl Pos {
    pub fn new(x: u16, y: u16) -> Self {
        Pos { x, y }
    }

    pub fn wrapped_add(&self, delta: PosDelta, size: Size) -> Pos {
        Pos {
            x: wrap(self.x as i32 + delta.x, size.width),
            y: wrap(self.y as i32 + delta.y, size.height),
        }
    }

    /// One step toward `target` on each axis independently, without wrapping.
    pub fn step_toward(&self, target: Pos) -> Pos {
        let step = |from: u16, to: u16| match from.cmp(&to) {
            std::cmp::Ordering::Less => from + 1,
            std::cmp::Ordering::Greater => from - 1,
            std::cmp::Ordering::Equal => from,
        };
        Pos {
            x: step(self.x, target.x),
            y: step(self.y, target.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Size = Size {
        width: 10,
        height: 10,
    };

    #[test]
    fn test_opposite_directions() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);

        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(-1, 30), 29);
        assert_eq!(wrap(30, 30), 0);
        assert_eq!(wrap(15, 30), 15);
        assert_eq!(wrap(-31, 30), 29);
    }

    #[test]
    fn test_axis_moves_are_reversible() {
        for v in 0..10u16 {
            let forward = wrap(v as i32 + 1, 10);
            assert_eq!(wrap(forward as i32 - 1, 10), v);
        }
    }

    #[test]
    fn test_zero_delta() {
        let delta = PosDelta { x: 0, y: 0 };
        for pos in [Pos::new(5, 5), Pos::new(0, 0), Pos::new(9, 9)] {
            assert_eq!(pos.wrapped_add(delta, ARENA), pos);
        }
    }

    #[test]
    fn test_non_square_arena() {
        let size = Size {
            width: 8,
            height: 6,
        };
        let pos = Pos::new(3, 3);
        assert_eq!(pos.wrapped_add(PosDelta { x: 8, y: 6 }, size), pos);
        assert_eq!(pos.wrapped_add(PosDelta { x: -8, y: -6 }, size), pos);
    }

    #[test]
    fn test_wrap_underflow() {
        assert_eq!(
            Pos::new(0, 0).wrapped_add(Direction::Up.into(), ARENA),
            Pos::new(0, 9)
        );
        assert_eq!(
            Pos::new(0, 5).wrapped_add(Direction::Left.into(), ARENA),
            Pos::new(9, 5)
        );
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(
            Pos::new(9, 9).wrapped_add(Direction::Down.into(), ARENA),
            Pos::new(9, 0)
        );
        assert_eq!(
            Pos::new(9, 5).wrapped_add(Direction::Right.into(), ARENA),
            Pos::new(0, 5)
        );
    }

    #[test]
    fn test_all_directions() {
        let pos = Pos::new(5, 5);
        assert_eq!(pos.wrapped_add(Direction::Up.into(), ARENA), Pos::new(5, 4));
        assert_eq!(
            pos.wrapped_add(Direction::Down.into(), ARENA),
            Pos::new(5, 6)
        );
        assert_eq!(
            pos.wrapped_add(Direction::Left.into(), ARENA),
            Pos::new(4, 5)
        );
        assert_eq!(
            pos.wrapped_add(Direction::Right.into(), ARENA),
            Pos::new(6, 5)
        );
    }

    #[test]
    fn test_step_toward() {
        let head = Pos::new(5, 5);
        assert_eq!(Pos::new(2, 9).step_toward(head), Pos::new(3, 8));
        assert_eq!(Pos::new(5, 0).step_toward(head), Pos::new(5, 1));
        assert_eq!(Pos::new(6, 4).step_toward(head), head);
        assert_eq!(head.step_toward(head), head);
    }
}
