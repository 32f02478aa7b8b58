//! Level-synchronous distance labeling.

use citywalk_core::Point;
use log::debug;

use crate::PathRange;
use crate::pathrange::{PathNode, UNVISITED};
use crate::traits::Pather;

impl PathRange {
    /// Label every cell reachable from `origin` with its hop count.
    ///
    /// The search expands one whole frontier per round: all unlabeled
    /// neighbors of the current frontier form the next frontier and get the
    /// next distance. It stops when a round finds nothing new. Returns the
    /// reached nodes in labeling order; an origin outside the range reaches
    /// nothing.
    pub fn label_map<P: Pather>(&mut self, pather: &P, origin: Point) -> &[PathNode] {
        // Reset.
        for v in self.labels.iter_mut() {
            *v = UNVISITED;
        }
        self.label_results.clear();
        self.frontier.clear();

        let Some(oi) = self.idx(origin) else {
            return &self.label_results;
        };
        self.labels[oi] = 0;
        self.frontier.push(oi);
        self.label_results.push(PathNode {
            pos: origin,
            cost: 0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut dist = 0;

        while !self.frontier.is_empty() {
            self.next_frontier.clear();
            let next_dist = dist + 1;

            for fi in 0..self.frontier.len() {
                let cp = self.point(self.frontier[fi]);
                nbuf.clear();
                pather.neighbors(cp, &mut nbuf);

                for &np in nbuf.iter() {
                    let Some(ni) = self.idx(np) else {
                        continue;
                    };
                    if self.labels[ni] != UNVISITED {
                        continue;
                    }
                    self.labels[ni] = next_dist;
                    self.next_frontier.push(ni);
                    self.label_results.push(PathNode {
                        pos: np,
                        cost: next_dist,
                    });
                }
            }

            std::mem::swap(&mut self.frontier, &mut self.next_frontier);
            dist = next_dist;
        }

        self.nbuf = nbuf;
        debug!(
            "labeled {} cells from {origin}, farthest at distance {}",
            self.label_results.len(),
            dist - 1
        );
        &self.label_results
    }

    /// Query the label of a specific point.
    ///
    /// Returns [`UNVISITED`] if the point is outside the range or was not
    /// reached by the last `label_map` call.
    pub fn label_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.labels[i],
            None => UNVISITED,
        }
    }
}
