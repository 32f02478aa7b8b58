//! Trying every flower store until one is close enough.

use citywalk_core::terrain::PATH_MARK;
use citywalk_core::{Map, Point};
use log::{debug, info};

use crate::PathRange;
use crate::city::CityPather;

/// Most quarters a route may pass and still be accepted.
pub const MAX_QUARTERS: u32 = 5;

/// Outcome of [`PathRange::find_store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// Copy of the map with the accepted route marked, if one was found.
    pub map: Option<Map>,
    /// Whether a route within the quarter limit was found.
    pub found: bool,
    /// Quarters passed by the accepted route; 0 when none was found.
    pub quarters: u32,
    /// The accepted route, start first; empty when none was found.
    pub path: Vec<Point>,
    /// The store the distance field was labeled from.
    pub goal: Option<Point>,
}

impl Search {
    fn not_found() -> Self {
        Self {
            map: None,
            found: false,
            quarters: 0,
            path: Vec::new(),
            goal: None,
        }
    }

    /// Number of steps of the accepted route.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl PathRange {
    /// Find a route from `start` to a flower store passing at most
    /// `max_quarters` quarters.
    ///
    /// Stores are tried in row-major order and the first acceptable route
    /// wins, even when a later store is closer.
    ///
    /// # Panics
    ///
    /// Panics if `start` is outside the map.
    pub fn find_store(&mut self, map: &Map, start: Point, max_quarters: u32) -> Search {
        assert!(
            map.contains(start),
            "start {start} outside map {}",
            map.bounds()
        );
        if self.range() != map.bounds() {
            self.set_range(map.bounds());
        }

        let pather = CityPather::new(map);
        for goal in map.goals() {
            self.label_map(&pather, goal);
            let Some(walk) = self.walk_from(&pather, start) else {
                debug!("store at {goal} unreachable from {start}");
                continue;
            };
            if !walk.complete {
                continue;
            }
            if walk.quarters > max_quarters {
                debug!(
                    "store at {goal}: route passes {} quarters, limit {max_quarters}",
                    walk.quarters
                );
                continue;
            }

            info!(
                "store at {goal} reached in {} steps passing {} quarters",
                walk.steps(),
                walk.quarters
            );
            return Search {
                map: Some(map.with_marks(&walk.path, PATH_MARK)),
                found: true,
                quarters: walk.quarters,
                path: walk.path,
                goal: Some(goal),
            };
        }

        info!("no store within {max_quarters} quarters of {start}");
        Search::not_found()
    }
}

/// One-shot [`PathRange::find_store`] with a fresh cache.
pub fn find_store(map: &Map, start: Point, max_quarters: u32) -> Search {
    PathRange::new(map.bounds()).find_store(map, start, max_quarters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use citywalk_core::Terrain;

    #[test]
    fn open_square() {
        let map = Map::from_rows(&["000", "000", "00G"]).unwrap();
        let s = find_store(&map, Point::new(0, 0), MAX_QUARTERS);
        assert!(s.found);
        assert_eq!(s.quarters, 0);
        assert_eq!(s.steps(), 4);
        assert_eq!(s.goal, Some(Point::new(2, 2)));
        let marked = s.map.unwrap();
        assert_eq!(marked.to_string(), "KKK\n00K\n00K");
        // The input map is left as it was.
        assert_eq!(map.cell_at(Point::new(2, 2)), Terrain('G'));
    }

    #[test]
    fn detours_around_centre_obstacle() {
        let map = Map::from_rows(&["000", "010", "00G"]).unwrap();
        let s = find_store(&map, Point::new(0, 0), MAX_QUARTERS);
        assert!(s.found);
        assert_eq!(s.steps(), 4);
        assert!(!s.path.contains(&Point::new(1, 1)));
        assert_eq!(s.map.unwrap().to_string(), "KKK\n01K\n00K");
    }

    #[test]
    fn walled_in_start_finds_nothing() {
        let map = Map::from_rows(&["010", "110", "00G"]).unwrap();
        let s = find_store(&map, Point::new(0, 0), MAX_QUARTERS);
        assert!(!s.found);
        assert_eq!(s.map, None);
        assert!(s.path.is_empty());
        assert_eq!(s.quarters, 0);
        assert_eq!(s.goal, None);
    }

    #[test]
    fn no_stores_finds_nothing() {
        let s = find_store(&Map::new(3), Point::new(1, 1), MAX_QUARTERS);
        assert!(!s.found);
    }

    #[test]
    fn reusing_a_range_across_maps() {
        let mut pr = PathRange::new(Map::new(2).bounds());
        let big = Map::from_rows(&["0000", "0000", "0000", "000G"]).unwrap();
        let s = pr.find_store(&big, Point::new(0, 0), MAX_QUARTERS);
        assert_eq!(s.steps(), 6);
        let small = Map::from_rows(&["0G", "00"]).unwrap();
        let s = pr.find_store(&small, Point::new(0, 1), MAX_QUARTERS);
        assert_eq!(s.path, vec![Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)]);
    }

    #[test]
    #[should_panic]
    fn start_outside_map_panics() {
        find_store(&Map::new(3), Point::new(3, 0), MAX_QUARTERS);
    }
}
