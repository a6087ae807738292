pub mod rank;
pub mod side;

pub use rank::{Direction, Rank, Ranks};
pub use side::Side;
