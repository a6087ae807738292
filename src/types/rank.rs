use std::fmt;
use std::ops::{Index, IndexMut, Not};
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::types::side::Side;

/// An ordered run of ranks, as produced by [`Rank::to`] and [`Rank::between`].
pub type Ranks = ArrayVec<Rank, { Rank::COUNT }>;

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Rank {
    One, Two, Three, Four, Five, Six, Seven, Eight
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Direction {
    Up, Down
}

impl Rank {

    pub const COUNT: usize = 8;

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::One, Rank::Two, Rank::Three, Rank::Four,
        Rank::Five, Rank::Six, Rank::Seven, Rank::Eight,
    ];

    pub const CHARS: [char; Rank::COUNT] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    /// Returns the rank numbered `raw`, or `None` unless `raw` is in `1..=8`.
    pub const fn from_raw(raw: i32) -> Option<Rank> {
        match raw {
            1 => Some(Rank::One),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            _ => None,
        }
    }

    pub const fn from_index(index: i32) -> Option<Rank> {
        match index.checked_add(1) {
            Some(raw) => Rank::from_raw(raw),
            None => None,
        }
    }

    /// Builds a rank from a number known to be valid at the call site.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is outside `1..=8`. Input that is not a trusted
    /// constant must go through [`Rank::from_raw`] instead.
    pub fn new(raw: i32) -> Rank {
        match Rank::from_raw(raw) {
            Some(rank) => rank,
            None => panic!("Invalid rank: {} (expected 1..=8)", raw),
        }
    }

    /// The home rank of `side`.
    pub const fn start(side: Side) -> Rank {
        if side.is_white() { Rank::One } else { Rank::Eight }
    }

    /// The promotion rank of `side`.
    pub const fn end(side: Side) -> Rank {
        Rank::start(side).opposite()
    }

    pub fn iter() -> impl Iterator<Item = Rank> {
        Rank::ALL.into_iter()
    }

    pub const fn raw(self) -> u8 {
        self as u8 + 1
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        Rank::CHARS[self as usize]
    }

    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            '1' => Some(Rank::One),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            _ => None,
        }
    }

    pub const fn next(self) -> Option<Rank> {
        Rank::from_raw(self.raw() as i32 + 1)
    }

    pub const fn previous(self) -> Option<Rank> {
        Rank::from_raw(self.raw() as i32 - 1)
    }

    /// Mirrors the rank across the centre of the board, so One becomes Eight.
    pub const fn opposite(self) -> Rank {
        Rank::ALL[Rank::COUNT - 1 - self as usize]
    }

    pub const fn step(self, direction: Direction) -> Option<Rank> {
        match direction {
            Direction::Up => self.next(),
            Direction::Down => self.previous(),
        }
    }

    /// Moves `offset` ranks toward `direction`. A negative offset moves the other way.
    pub fn shifted(self, offset: i32, direction: Direction) -> Option<Rank> {
        let delta = match direction {
            Direction::Up => Some(offset),
            Direction::Down => offset.checked_neg(),
        };
        delta
            .and_then(|d| (self.raw() as i32).checked_add(d))
            .and_then(Rank::from_raw)
    }

    /// Moves `offset` ranks toward the far side of the board from `side`'s point of view.
    pub fn advanced(self, offset: i32, side: Side) -> Option<Rank> {
        self.shifted(offset, side.forward())
    }

    /// The rank as counted from `side`'s home rank.
    pub const fn relative(self, side: Side) -> Rank {
        if side.is_white() { self } else { self.opposite() }
    }

    pub const fn distance(self, other: Rank) -> u8 {
        self.raw().abs_diff(other.raw())
    }

    /// Every rank from `self` to `other` inclusive, walking toward `other`.
    pub fn to(self, other: Rank) -> Ranks {
        let (from, to) = (self.index(), other.index());
        if from <= to {
            (from..=to).map(|i| Rank::ALL[i]).collect()
        } else {
            (to..=from).rev().map(|i| Rank::ALL[i]).collect()
        }
    }

    /// Every rank strictly between `self` and `other`, walking toward `other`.
    pub fn between(self, other: Rank) -> Ranks {
        let mut ranks = self.to(other);
        if ranks.len() < 2 {
            return Ranks::new();
        }
        ranks.pop();
        ranks.remove(0);
        ranks
    }

}

impl Direction {

    pub const fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn sign(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Self::Output {
        self.flip()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Rank::from_raw(raw as i32).ok_or_else(|| format!("Invalid rank: {} (expected 1..=8)", raw))
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c).ok_or_else(|| format!("Invalid rank string: '{}'", s)),
            _ => Err(format!("Invalid rank string: '{}'", s)),
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.raw()
    }
}

impl From<Rank> for usize {
    fn from(rank: Rank) -> usize {
        rank.index()
    }
}

impl<T, const N: usize> Index<Rank> for [T; N] {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        &self[rank as usize]
    }
}

impl<T, const N: usize> IndexMut<Rank> for [T; N] {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        &mut self[rank as usize]
    }
}
