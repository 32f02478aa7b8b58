//! citywalk — find a route to a flower store across a city map.
//!
//! The library side holds the data-file loader, the text presenter and the
//! configuration; the search itself lives in `citywalk-paths`.

pub mod colors;
pub mod config;
pub mod loader;
pub mod present;

pub use config::{Config, ConfigError};
pub use loader::{CityData, LoadError};
