use std::ops::{Index, IndexMut};

/// Headings in clockwise order; the discriminant is also the password score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]
    }

    pub fn from_i32(n: i32) -> Direction {
        match n.rem_euclid(4) {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        }
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    fn turn_right(self, n: i32) -> Direction {
        Direction::from_i32(self.to_i32() + n)
    }

    /// Rotate 90 degrees clockwise.
    pub fn next(self) -> Direction {
        self.turn_right(1)
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn prev(self) -> Direction {
        self.turn_right(-1)
    }

    pub fn flipped(self) -> Direction {
        self.turn_right(2)
    }

    pub fn turn(self, turn: Turn) -> Direction {
        match turn {
            Turn::Left => self.prev(),
            Turn::Right => self.next(),
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            _ => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            _ => 0,
        }
    }

    pub fn step(self, origin: (i32, i32)) -> (i32, i32) {
        (origin.0 + self.dx(), origin.1 + self.dy())
    }
}

/// One slot per side of a square, indexed by [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerSide<T>([T; 4]);

impl<T> PerSide<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::all().into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Direction> for PerSide<T> {
    type Output = T;

    fn index(&self, d: Direction) -> &T {
        &self.0[d.to_i32() as usize]
    }
}

impl<T> IndexMut<Direction> for PerSide<T> {
    fn index_mut(&mut self, d: Direction) -> &mut T {
        &mut self.0[d.to_i32() as usize]
    }
}
