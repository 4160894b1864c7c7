//! Board structure with per-side occupancy

use super::bitboard::{Bitboard, BitboardIter};
use super::{Pos, Side, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::InvalidMove;

/// Game board. Exactly one per game; search mutates it in place and
/// restores every cell it touches before returning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Human (side A) stones
    pub human: Bitboard,
    /// Computer (side B) stones
    pub computer: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            human: Bitboard::new(),
            computer: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.human.get(pos) {
            Stone::Human
        } else if self.computer.get(pos) {
            Stone::Computer
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.human.get(pos) && !self.computer.get(pos)
    }

    /// Place a stone for `side`.
    ///
    /// Fails when the cell already holds a stone.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<(), InvalidMove> {
        if !self.is_empty(pos) {
            return Err(InvalidMove::Occupied { pos });
        }
        self.put(pos, side);
        Ok(())
    }

    /// Unchecked placement for search, where the caller has already
    /// verified the cell is empty.
    #[inline]
    pub(crate) fn put(&mut self, pos: Pos, side: Side) {
        debug_assert!(self.is_empty(pos));
        match side {
            Side::Human => self.human.set(pos),
            Side::Computer => self.computer.set(pos),
        }
    }

    /// Clear a cell unconditionally. Only search rollback calls this.
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.human.clear(pos);
        self.computer.clear(pos);
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Adjacency test: true iff any of the 8 surrounding cells holds a stone
    pub fn has_neighbor(&self, pos: Pos) -> bool {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(n) = pos.offset(dr, dc, 1) {
                    if !self.is_empty(n) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Get bitboard for a side
    #[inline]
    pub fn stones(&self, side: Side) -> &Bitboard {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Every occupied cell, row-major
    #[inline]
    pub fn occupied(&self) -> BitboardIter {
        (self.human | self.computer).iter_ones()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.human.count() + self.computer.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.human.is_empty() && self.computer.is_empty()
    }
}
