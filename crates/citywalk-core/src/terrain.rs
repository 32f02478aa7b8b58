//! Terrain codes of a city map.
//!
//! [`Terrain`] is a newtype over the `char` read from the map file. Only a
//! handful of codes carry meaning; everything else is plain walkable ground.

use std::fmt;

/// A map cell value, wrapping the character it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terrain(pub char);

/// Blocked cell; never entered.
pub const OBSTACLE: Terrain = Terrain('1');
/// An open city quarter. Counts toward the quarters passed by a route.
pub const QUARTER: Terrain = Terrain('.');
/// A flower store.
pub const GOAL: Terrain = Terrain('G');
/// Written over every cell of a found route.
pub const PATH_MARK: Terrain = Terrain('K');
/// Marks the man's position when the initial map is displayed.
pub const MAN_MARK: Terrain = Terrain('X');

impl Terrain {
    /// Create a terrain cell from its map character.
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// The map character.
    pub const fn code(self) -> char {
        self.0
    }

    /// Whether the cell can be entered at all.
    #[inline]
    pub fn is_passable(self) -> bool {
        self != OBSTACLE
    }

    /// Whether the cell is an open quarter.
    #[inline]
    pub fn is_quarter(self) -> bool {
        self == QUARTER
    }

    /// Whether the cell is a flower store.
    #[inline]
    pub fn is_goal(self) -> bool {
        self == GOAL
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self('0')
    }
}

impl From<char> for Terrain {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl From<Terrain> for char {
    fn from(t: Terrain) -> Self {
        t.0
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(!OBSTACLE.is_passable());
        assert!(QUARTER.is_passable() && QUARTER.is_quarter());
        assert!(GOAL.is_passable() && GOAL.is_goal());
        let ground = Terrain::new('0');
        assert!(ground.is_passable());
        assert!(!ground.is_quarter());
        assert!(!ground.is_goal());
    }

    #[test]
    fn unknown_codes_are_ground() {
        for c in ['a', '#', ' ', 'K', 'X'] {
            let t = Terrain::from(c);
            assert!(t.is_passable(), "{c:?} should be passable");
            assert!(!t.is_quarter());
        }
    }

    #[test]
    fn char_round_trip() {
        let t: Terrain = 'G'.into();
        assert_eq!(char::from(t), 'G');
        assert_eq!(t.to_string(), "G");
    }
}
