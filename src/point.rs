use crate::command::Command;

/// Grid coordinate. Row 0 is the lowest row of the mine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }

    /// Neighbor one step in the direction of `command`; non-moving commands stay put.
    #[inline]
    pub const fn step(self, command: Command) -> Self {
        match command {
            Command::Up => self.up(),
            Command::Down => self.down(),
            Command::Left => self.left(),
            Command::Right => self.right(),
            Command::Wait | Command::Abort => self,
        }
    }

    /// The eight surrounding cells, row by row from the bottom.
    pub fn surrounding(self) -> [Point; 8] {
        [
            Self::new(self.x - 1, self.y - 1),
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x + 1, self.y + 1),
        ]
    }

    /// Straight-line distance, used as the search heuristic.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
