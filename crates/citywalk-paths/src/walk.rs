//! Greedy descent over a labeled distance field.

use citywalk_core::Point;
use log::warn;

use crate::PathRange;
use crate::pathrange::UNVISITED;
use crate::traits::RoutePather;

/// A route reconstructed by [`PathRange::walk_from`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walk {
    /// Visited cells, start first.
    pub path: Vec<Point>,
    /// Sum of the departure costs of every cell left along the way.
    pub quarters: u32,
    /// Whether the walk reached a destination or the labeling origin, as
    /// opposed to stopping at a dead end.
    pub complete: bool,
}

impl Walk {
    /// Number of steps taken.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Where the walk stopped.
    pub fn end(&self) -> Option<Point> {
        self.path.last().copied()
    }
}

impl PathRange {
    /// Walk from `start` toward the origin of the last [`label_map`] call.
    ///
    /// Each step goes to the first neighbor, in left, right, up, down order,
    /// whose label is strictly smaller than the current one. The walk stops
    /// on a destination cell, on the origin, or when no neighbor qualifies.
    /// Returns `None` if `start` was not labeled.
    ///
    /// [`label_map`]: PathRange::label_map
    pub fn walk_from<P: RoutePather>(&mut self, pather: &P, start: Point) -> Option<Walk> {
        let start_label = self.label_at(start);
        if start_label == UNVISITED {
            return None;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut path = Vec::with_capacity(start_label as usize + 1);
        path.push(start);
        let mut quarters = 0;
        let mut cur = start;
        let mut complete = false;

        loop {
            let d = self.label_at(cur);
            if pather.is_destination(cur) || d == 0 {
                complete = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);
            let next = nbuf.iter().copied().find(|&n| {
                let l = self.label_at(n);
                l != UNVISITED && l < d
            });
            let Some(next) = next else {
                warn!("walk from {start} stuck at {cur} (label {d})");
                break;
            };

            quarters += pather.departure_cost(cur);
            path.push(next);
            cur = next;
        }

        self.nbuf = nbuf;
        Some(Walk {
            path,
            quarters,
            complete,
        })
    }
}
