#![warn(missing_docs)]
//! Text maze parsing, breadth-first and depth-first solving, and path rendering

pub mod grid;
pub mod render;
pub mod search;
pub mod snapshot;
pub mod standard_mazes;
