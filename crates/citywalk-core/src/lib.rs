//! **citywalk-core** — city map model.
//!
//! This crate provides the types shared across *citywalk*: geometry
//! primitives, terrain codes and the square [`Map`] grid.

pub mod geom;
pub mod map;
pub mod terrain;

pub use geom::{Point, Range};
pub use map::{Map, MapError};
pub use terrain::Terrain;
