//! Terminal colors for map cells.

use citywalk_core::Terrain;
use citywalk_core::terrain::{GOAL, MAN_MARK, OBSTACLE, PATH_MARK, QUARTER};
use crossterm::style::Color;

/// Obstacle '1' — dark grey.
pub const OBSTACLE_FG: Color = Color::DarkGrey;
/// Quarter '.' — light blue-grey.
pub const QUARTER_FG: Color = Color::Rgb {
    r: 150,
    g: 155,
    b: 170,
};
/// Flower store 'G' — green.
pub const GOAL_FG: Color = Color::Rgb {
    r: 80,
    g: 200,
    b: 80,
};
/// Route 'K' — yellow.
pub const PATH_FG: Color = Color::Rgb {
    r: 241,
    g: 250,
    b: 140,
};
/// The man 'X' — red.
pub const MAN_FG: Color = Color::Rgb {
    r: 255,
    g: 85,
    b: 85,
};

/// Foreground for a cell, `None` for plain ground.
pub fn terrain_fg(t: Terrain) -> Option<Color> {
    match t {
        OBSTACLE => Some(OBSTACLE_FG),
        QUARTER => Some(QUARTER_FG),
        GOAL => Some(GOAL_FG),
        PATH_MARK => Some(PATH_FG),
        MAN_MARK => Some(MAN_FG),
        _ => None,
    }
}
