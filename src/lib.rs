pub mod board;
pub mod cell;
pub mod pattern;
pub mod render;
pub mod rules;
pub mod sim;

/// Grid coordinate. Signed so neighbour arithmetic at the origin never
/// wraps; boards only ever hold coordinates in `[0, size)`.
pub type Coord = i32;
