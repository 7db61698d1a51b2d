// src/map/tile.rs
//! Tile classification types: which sides of a cell connect to open
//! neighbours, which kind of piece covers them, and how it is rotated.

use crate::map::{Cell, Direction};
use std::fmt;

/// A set of cell sides, one bit per [`Direction`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborMask(u8);

impl NeighborMask {
    pub const EMPTY: NeighborMask = NeighborMask(0);

    /// Builds a mask from raw bits (bit 0 = up, 1 = right, 2 = down, 3 = left).
    /// Bits above the low four are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        NeighborMask(bits & 0b1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn from_directions(dirs: &[Direction]) -> Self {
        dirs.iter().fold(NeighborMask::EMPTY, |mask, &dir| mask.with(dir))
    }

    pub fn with(self, dir: Direction) -> Self {
        NeighborMask(self.0 | dir.bit())
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&dir| self.contains(dir))
    }

    /// Rotates every side in the set clockwise by `quarter_turns`.
    pub fn rotated_cw(self, quarter_turns: u8) -> Self {
        self.iter()
            .fold(NeighborMask::EMPTY, |mask, dir| mask.with(dir.rotated_cw(quarter_turns)))
    }
}

impl fmt::Debug for NeighborMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The piece placed on an open cell.
///
/// `Corner` and `Straight` both join two neighbours; they are kept apart so a
/// renderer can pick a different visual for pass-through pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// No open neighbours. Only legitimate on a single-cell map.
    Isolated,
    DeadEnd,
    Corner,
    Straight,
    TJunction,
    Cross,
}

impl TileKind {
    /// The classification code: the number of open neighbours, except the
    /// straight piece which reports 5.
    pub fn code(self) -> u8 {
        match self {
            TileKind::Isolated => 0,
            TileKind::DeadEnd => 1,
            TileKind::Corner => 2,
            TileKind::TJunction => 3,
            TileKind::Cross => 4,
            TileKind::Straight => 5,
        }
    }

    /// How many open neighbours this piece joins.
    pub fn neighbor_count(self) -> u8 {
        match self {
            TileKind::Straight => 2,
            other => other.code(),
        }
    }

    /// Sides connected by the unrotated piece.
    pub fn base_connectors(self) -> NeighborMask {
        use Direction::*;
        match self {
            TileKind::Isolated => NeighborMask::EMPTY,
            TileKind::DeadEnd => NeighborMask::from_directions(&[Up]),
            TileKind::Corner => NeighborMask::from_directions(&[Up, Right]),
            TileKind::Straight => NeighborMask::from_directions(&[Up, Down]),
            TileKind::TJunction => NeighborMask::from_directions(&[Up, Right, Down]),
            TileKind::Cross => NeighborMask::from_directions(&[Up, Right, Down, Left]),
        }
    }

    /// Index of the visual drawn for this kind in a renderer's tile set.
    /// The isolated seed borrows the dead-end visual.
    pub fn visual_index(self) -> usize {
        match self {
            TileKind::Isolated => 0,
            other => other.code() as usize - 1,
        }
    }
}

/// Rotation applied to a piece, clockwise when viewed from above.
///
/// `Neg90` and `Deg270` describe the same orientation but are reported as
/// distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Neg90,
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Neg90 => -90,
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    pub fn quarter_turns_cw(self) -> u8 {
        (self.degrees().rem_euclid(360) / 90) as u8
    }
}

/// An open cell together with the piece chosen for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedTile {
    pub cell: Cell,
    pub kind: TileKind,
    pub rotation: Rotation,
}

impl ClassifiedTile {
    pub fn x(&self) -> usize {
        self.cell.x
    }

    pub fn y(&self) -> usize {
        self.cell.y
    }

    pub fn degree(&self) -> u8 {
        self.kind.code()
    }

    /// Sides the rotated piece connects.
    pub fn connectors(&self) -> NeighborMask {
        self.kind
            .base_connectors()
            .rotated_cw(self.rotation.quarter_turns_cw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn test_mask_membership() {
        let mask = NeighborMask::from_directions(&[Up, Left]);
        assert!(mask.contains(Up));
        assert!(mask.contains(Left));
        assert!(!mask.contains(Down));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Up, Left]);
    }

    #[test]
    fn test_mask_rotation() {
        let corner = NeighborMask::from_directions(&[Up, Right]);
        assert_eq!(corner.rotated_cw(1), NeighborMask::from_directions(&[Right, Down]));
        assert_eq!(corner.rotated_cw(3), NeighborMask::from_directions(&[Left, Up]));
    }

    #[test]
    fn test_straight_reports_code_five() {
        assert_eq!(TileKind::Straight.code(), 5);
        assert_eq!(TileKind::Straight.neighbor_count(), 2);
        assert_eq!(TileKind::Corner.code(), 2);
    }

    #[test]
    fn test_visual_indices_are_distinct() {
        let kinds = [
            TileKind::DeadEnd,
            TileKind::Corner,
            TileKind::TJunction,
            TileKind::Cross,
            TileKind::Straight,
        ];
        let indices: Vec<usize> = kinds.iter().map(|k| k.visual_index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(TileKind::Isolated.visual_index(), 0);
    }

    #[test]
    fn test_negative_quarter_turn() {
        assert_eq!(Rotation::Neg90.quarter_turns_cw(), 3);
        assert_eq!(Rotation::Deg270.quarter_turns_cw(), 3);
        assert_eq!(Rotation::Deg0.quarter_turns_cw(), 0);
    }

    #[test]
    fn test_rotated_connectors() {
        let tile = ClassifiedTile {
            cell: Cell::new(1, 1),
            kind: TileKind::TJunction,
            rotation: Rotation::Deg90,
        };
        assert_eq!(tile.connectors(), NeighborMask::from_directions(&[Right, Down, Left]));
    }
}
