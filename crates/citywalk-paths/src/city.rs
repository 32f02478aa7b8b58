//! Movement rules on a city map.

use citywalk_core::{Map, Point};

use crate::traits::{Pather, RoutePather};

/// [`Pather`] over a [`Map`]: side steps only, never into an obstacle, and
/// never directly from one quarter into another.
#[derive(Debug, Clone, Copy)]
pub struct CityPather<'a> {
    map: &'a Map,
}

impl<'a> CityPather<'a> {
    pub fn new(map: &'a Map) -> Self {
        Self { map }
    }

    /// Whether one step from `from` to `to` is allowed. Both points must be
    /// side neighbours; distance labels play no part here.
    pub fn can_step(&self, from: Point, to: Point) -> bool {
        let (Some(src), Some(dst)) = (self.map.get(from), self.map.get(to)) else {
            return false;
        };
        if !dst.is_passable() {
            return false;
        }
        // Two quarters never touch directly.
        !(src.is_quarter() && dst.is_quarter())
    }
}

impl Pather for CityPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.sides() {
            if self.can_step(p, n) {
                buf.push(n);
            }
        }
    }
}

impl RoutePather for CityPather<'_> {
    fn is_destination(&self, p: Point) -> bool {
        self.map.get(p).is_some_and(|t| t.is_goal())
    }

    fn departure_cost(&self, p: Point) -> u32 {
        match self.map.get(p) {
            Some(t) if t.is_quarter() => 1,
            _ => 0,
        }
    }
}
