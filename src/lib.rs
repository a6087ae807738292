//! The rank axis of a chess board: eight ordered, bounds-checked row
//! coordinates with side-relative movement and range enumeration.

pub mod types;

pub use types::{Direction, Rank, Ranks, Side};
