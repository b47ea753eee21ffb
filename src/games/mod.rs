//! Bundled worlds.
//!
//! - `grid`: pellet maze with chasing ghosts
//! - `table`: explicit tree for scripted scenarios

pub mod grid;
pub mod table;
