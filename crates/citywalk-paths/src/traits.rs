use citywalk_core::Point;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather that also knows where a walk ends and what leaving a cell costs.
pub trait RoutePather: Pather {
    /// Whether a walk arriving at `p` is done.
    fn is_destination(&self, p: Point) -> bool;

    /// Cost charged when a walk departs `p`.
    fn departure_cost(&self, p: Point) -> u32;
}
