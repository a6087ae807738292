use std::ops::{Index, IndexMut, Not};
use crate::types::rank::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    White,
    Black
}

impl Side {

    pub const COUNT: usize = 2;

    /// White is the side whose home rank is One and whose pawns move toward Eight.
    pub const fn is_white(self) -> bool {
        matches!(self, Side::White)
    }

    pub const fn flip(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White
        }
    }

    pub const fn forward(self) -> Direction {
        if self.is_white() { Direction::Up } else { Direction::Down }
    }

}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        self.flip()
    }
}

impl<T, const N: usize> Index<Side> for [T; N] {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self[side as usize]
    }
}

impl<T, const N: usize> IndexMut<Side> for [T; N] {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self[side as usize]
    }
}
