// src/map/cell.rs

/// A grid coordinate. `x` grows to the right, `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Cell { x, y }
    }

    /// The adjacent cell in `dir`, or `None` when it falls outside a
    /// `size` x `size` grid.
    pub fn neighbor(self, dir: Direction, size: usize) -> Option<Cell> {
        match dir {
            Direction::Up if self.y + 1 < size => Some(Cell::new(self.x, self.y + 1)),
            Direction::Right if self.x + 1 < size => Some(Cell::new(self.x + 1, self.y)),
            Direction::Down if self.y > 0 => Some(Cell::new(self.x, self.y - 1)),
            Direction::Left if self.x > 0 => Some(Cell::new(self.x - 1, self.y)),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Order in which frontier growth inspects the neighbours of an open cell.
pub const GROWTH_SCAN_ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

impl Direction {
    /// Clockwise order, starting at the top.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn index(self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    pub(crate) fn bit(self) -> u8 {
        1 << self.index()
    }

    /// The direction reached after `quarter_turns` clockwise quarter turns.
    pub fn rotated_cw(self, quarter_turns: u8) -> Direction {
        Direction::ALL[((self.index() + quarter_turns % 4) % 4) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_bounds() {
        let corner = Cell::new(0, 0);
        assert_eq!(corner.neighbor(Direction::Left, 3), None);
        assert_eq!(corner.neighbor(Direction::Down, 3), None);
        assert_eq!(corner.neighbor(Direction::Up, 3), Some(Cell::new(0, 1)));
        assert_eq!(corner.neighbor(Direction::Right, 3), Some(Cell::new(1, 0)));

        let far = Cell::new(2, 2);
        assert_eq!(far.neighbor(Direction::Up, 3), None);
        assert_eq!(far.neighbor(Direction::Right, 3), None);
        assert_eq!(far.neighbor(Direction::Left, 3), Some(Cell::new(1, 2)));
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let only = Cell::new(0, 0);
        for dir in Direction::ALL {
            assert_eq!(only.neighbor(dir, 1), None);
        }
    }

    #[test]
    fn test_rotation_is_clockwise() {
        assert_eq!(Direction::Up.rotated_cw(1), Direction::Right);
        assert_eq!(Direction::Left.rotated_cw(1), Direction::Up);
        assert_eq!(Direction::Down.rotated_cw(3), Direction::Right);
        assert_eq!(Direction::Right.rotated_cw(2), Direction::Left);
    }
}
