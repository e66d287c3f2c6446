pub use util::*;

#[macro_use]
pub mod util;

puzzles![amphipod, virus];
