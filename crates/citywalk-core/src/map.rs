//! The [`Map`] type: a square grid of [`Terrain`] cells.
//!
//! A map is immutable once loaded. Marking a route produces a new map through
//! [`Map::with_marks`]; the source map is never touched.

use std::fmt;

use crate::geom::{Point, Range};
use crate::terrain::{GOAL, Terrain};

/// A square city map stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    cells: Vec<Terrain>,
    size: i32,
}

impl Map {
    /// Create a `size`×`size` map of plain ground.
    pub fn new(size: i32) -> Self {
        let n = size.max(0);
        Self {
            cells: vec![Terrain::default(); cell_count(n)],
            size: n,
        }
    }

    /// Build a map from its text rows, top row first.
    ///
    /// Every row must hold exactly as many characters as there are rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                return Err(MapError::NotSquare {
                    row: y,
                    width,
                    size,
                });
            }
            cells.extend(row.chars().map(Terrain));
        }
        Ok(Self {
            cells,
            size: size as i32,
        })
    }

    /// Side length N of the map.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The `[0, N)²` range covered by the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.size + p.x) as usize
    }

    /// Terrain at `p`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Terrain> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Terrain at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the map. Callers check bounds first.
    #[inline]
    pub fn cell_at(&self, p: Point) -> Terrain {
        assert!(self.contains(p), "cell {p} outside map {}", self.bounds());
        self.cells[self.index(p)]
    }

    /// Whether `p` can be entered (anything but an obstacle).
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the map.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.cell_at(p).is_passable()
    }

    /// Positions of every flower store, in row-major order.
    pub fn goals(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(|&(_, t)| t == GOAL).map(|(p, _)| p)
    }

    /// Iterate over `(Point, Terrain)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds().iter().map(|p| (p, self.cells[self.index(p)]))
    }

    /// One text row of the map.
    pub fn row(&self, y: i32) -> Option<String> {
        if y < 0 || y >= self.size {
            return None;
        }
        let start = (y * self.size) as usize;
        let end = start + self.size as usize;
        Some(self.cells[start..end].iter().map(|t| t.code()).collect())
    }

    /// A copy of the map with every point of `points` overwritten by `mark`.
    /// Points outside the map are skipped.
    pub fn with_marks(&self, points: &[Point], mark: Terrain) -> Map {
        let mut marked = self.clone();
        for &p in points {
            if marked.contains(p) {
                let i = marked.index(p);
                marked.cells[i] = mark;
            }
        }
        marked
    }
}

/// Number of cells in a `size`×`size` map, computed in `usize`.
fn cell_count(size: i32) -> usize {
    let n = size.max(0) as usize;
    n * n
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            if y > 0 {
                writeln!(f)?;
            }
            if let Some(row) = self.row(y) {
                write!(f, "{row}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A row's width does not match the number of rows.
    NotSquare { row: usize, width: usize, size: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { row, width, size } => write!(
                f,
                "map: row {} has {width} cells, expected {size}",
                row + 1
            ),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{OBSTACLE, PATH_MARK, QUARTER};

    const TOWN: [&str; 3] = ["0.G", "010", "G00"];

    #[test]
    fn cell_count_past_i32() {
        assert_eq!(cell_count(46_341), 2_147_488_281);
        assert_eq!(cell_count(-3), 0);
        let m = Map::new(300);
        assert_eq!(m.iter().count(), 90_000);
    }

    #[test]
    fn new_and_size() {
        let m = Map::new(4);
        assert_eq!(m.size(), 4);
        assert_eq!(m.bounds(), Range::square(4));
        assert_eq!(m.iter().count(), 16);
    }

    #[test]
    fn from_rows_and_lookup() {
        let m = Map::from_rows(&TOWN).unwrap();
        assert_eq!(m.size(), 3);
        assert_eq!(m.cell_at(Point::new(1, 0)), QUARTER);
        assert_eq!(m.cell_at(Point::new(1, 1)), OBSTACLE);
        assert_eq!(m.get(Point::new(3, 0)), None);
        assert!(m.is_passable(Point::new(0, 0)));
        assert!(!m.is_passable(Point::new(1, 1)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Map::from_rows(&["00", "0"]).unwrap_err();
        assert_eq!(
            err,
            MapError::NotSquare {
                row: 1,
                width: 1,
                size: 2
            }
        );
        assert!(Map::from_rows(&["000", "000"]).is_err());
    }

    #[test]
    #[should_panic]
    fn cell_at_out_of_bounds_panics() {
        let m = Map::new(2);
        m.cell_at(Point::new(2, 0));
    }

    #[test]
    fn goals_in_row_major_order() {
        let m = Map::from_rows(&TOWN).unwrap();
        let goals: Vec<Point> = m.goals().collect();
        assert_eq!(goals, vec![Point::new(2, 0), Point::new(0, 2)]);
    }

    #[test]
    fn marks_leave_source_untouched() {
        let m = Map::from_rows(&TOWN).unwrap();
        let marked = m.with_marks(&[Point::new(0, 0), Point::new(9, 9)], PATH_MARK);
        assert_eq!(marked.cell_at(Point::new(0, 0)), PATH_MARK);
        assert_eq!(m.cell_at(Point::new(0, 0)), Terrain('0'));
    }

    #[test]
    fn display_rows() {
        let m = Map::from_rows(&TOWN).unwrap();
        assert_eq!(m.to_string(), "0.G\n010\nG00");
        assert_eq!(m.row(2).as_deref(), Some("G00"));
        assert_eq!(m.row(3), None);
    }
}
