//! Rendering maps and search results as text.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use citywalk_core::{Map, Point};
use citywalk_core::terrain::{MAN_MARK, PATH_MARK};
use citywalk_paths::Search;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use log::debug;

use crate::colors::terrain_fg;
use crate::loader::CityData;

/// The loaded data as written to the initial report.
pub fn initial_report(data: &CityData) -> String {
    format!(
        "Map size: {}\n\
         Man coordinates (X; Y) (top left corner is (1; 1)): {}; {}\n\
         Map:\n\
         {}\n",
        data.map.size(),
        data.start.x + 1,
        data.start.y + 1,
        data.map
    )
}

/// The map shown before searching, with the man drawn as `X`.
pub fn initial_map(data: &CityData) -> Map {
    data.map.with_marks(&[data.start], MAN_MARK)
}

/// One sentence stating the outcome, shared by the terminal and the report.
pub fn result_headline(search: &Search, max_quarters: u32) -> String {
    if search.found {
        format!(
            "Reaching the flower store takes passing {} quarters",
            search.quarters
        )
    } else {
        format!(
            "There is no flower store reachable by passing no more than {max_quarters} quarters"
        )
    }
}

/// The outcome of a search as written to the results report.
pub fn result_report(search: &Search, max_quarters: u32) -> String {
    let mut s = result_headline(search, max_quarters);
    s.push('\n');
    if let (Some(map), true) = (&search.map, search.found) {
        s.push_str(&format!("{map}\n{PATH_MARK} - path to the store\n"));
    }
    s
}

/// Print `map` row by row, coloring marked cells when `color` is set.
pub fn print_map<W: Write>(out: &mut W, map: &Map, color: bool) -> io::Result<()> {
    for y in 0..map.size() {
        for x in 0..map.size() {
            let t = map.cell_at(Point::new(x, y));
            match terrain_fg(t).filter(|_| color) {
                Some(fg) => queue!(out, SetForegroundColor(fg), Print(t), ResetColor)?,
                None => queue!(out, Print(t))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Write a report to `path`, creating missing parent directories.
pub fn write_report(path: &Path, text: &str) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, text)?;
    debug!("wrote {}", path.display());
    Ok(())
}
