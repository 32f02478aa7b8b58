//! Route finding on city maps.
//!
//! A search labels the map with hop counts from one flower store, then walks
//! downhill from the man's position to reconstruct a route:
//!
//! - **Distance labeling** by level-synchronous breadth-first expansion
//!   ([`PathRange::label_map`])
//! - **Greedy descent** from a start cell toward the labeled origin
//!   ([`PathRange::walk_from`])
//! - **Store search** trying every store in scan order until a route passes
//!   few enough quarters ([`PathRange::find_store`], [`find_store`])
//!
//! All algorithms operate through [`PathRange`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | labeling |
//! | [`RoutePather`] : [`Pather`] | walking |
//!
//! [`CityPather`] implements both over a [`citywalk_core::Map`].

mod city;
mod label;
mod pathrange;
mod search;
mod traits;
mod walk;

pub use city::CityPather;
pub use pathrange::{PathNode, PathRange, UNVISITED};
pub use search::{MAX_QUARTERS, Search, find_store};
pub use traits::{Pather, RoutePather};
pub use walk::Walk;
