//! Reading city data files.
//!
//! A data file starts with a header line `N ROW COLUMN`: the map size and
//! the man's position, 1-based, row (top to bottom) first. `N` lines of `N`
//! terrain characters follow, top row first.
//!
//! ```text
//! 3 1 1
//! 000
//! 0.0
//! 00G
//! ```
//!
//! Inside the program positions are 0-based `(x, y)` points, so the header
//! above puts the man at `Point { x: 0, y: 0 }`.

use std::fmt;
use std::fs;
use std::path::Path;

use citywalk_core::{Map, MapError, Point};
use log::debug;

/// A loaded map and the man's starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityData {
    pub map: Map,
    pub start: Point,
}

/// Read and parse a data file.
pub fn load(path: impl AsRef<Path>) -> Result<CityData, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))?;
    let data = parse(&text)?;
    debug!(
        "loaded {}: {}x{} map, man at {}",
        path.display(),
        data.map.size(),
        data.map.size(),
        data.start
    );
    Ok(data)
}

/// Parse the contents of a data file.
pub fn parse(text: &str) -> Result<CityData, LoadError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));
    let header = lines.next().ok_or(LoadError::MissingHeader)?;

    let mut fields = header.split_whitespace();
    let mut field = |name: &'static str| -> Result<i32, LoadError> {
        let raw = fields.next().ok_or(LoadError::MissingHeader)?;
        raw.parse().map_err(|_| LoadError::BadNumber {
            field: name,
            value: raw.to_string(),
        })
    };
    let size = field("size")?;
    let row = field("row")?;
    let column = field("column")?;

    if size <= 0 {
        return Err(LoadError::BadNumber {
            field: "size",
            value: size.to_string(),
        });
    }

    let rows: Vec<&str> = lines.take_while(|l| !l.is_empty()).collect();
    if rows.len() != size as usize {
        return Err(LoadError::RowCount {
            expected: size as usize,
            found: rows.len(),
        });
    }
    let map = Map::from_rows(&rows)?;

    if row < 1 || column < 1 {
        return Err(LoadError::StartOutside { row, column, size });
    }
    let start = Point::new(column - 1, row - 1);
    if !map.contains(start) {
        return Err(LoadError::StartOutside { row, column, size });
    }
    Ok(CityData { map, start })
}

/// Errors that can occur when loading a data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io(String),
    /// The header line is missing or incomplete.
    MissingHeader,
    /// A header field is not a usable number.
    BadNumber { field: &'static str, value: String },
    /// The number of map rows does not match the header size.
    RowCount { expected: usize, found: usize },
    /// A map row has the wrong width.
    Map(MapError),
    /// The man stands outside the map.
    StartOutside { row: i32, column: i32, size: i32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "cannot read data file {msg}"),
            Self::MissingHeader => write!(f, "data file: expected header `SIZE ROW COLUMN`"),
            Self::BadNumber { field, value } => {
                write!(f, "data file: invalid {field} \u{201c}{value}\u{201d}")
            }
            Self::RowCount { expected, found } => {
                write!(f, "data file: expected {expected} map rows, found {found}")
            }
            Self::Map(e) => write!(f, "data file: {e}"),
            Self::StartOutside { row, column, size } => write!(
                f,
                "data file: man at row {row}, column {column} is outside the {size}x{size} map"
            ),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<MapError> for LoadError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}
