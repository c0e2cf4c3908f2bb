use crate::point::Point;
use crate::world::grid::{GridState, LifecycleState};
use crate::world::tile::Tile;
use colored::{ColoredString, Colorize};
use std::fmt;

/// Read-only snapshot handed to views
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableState {
    /// Grid text, top row first, one line per row
    pub grid: String,
    pub score: i64,
    pub move_count: usize,
    pub state: LifecycleState,
    pub submerged_turns: u32,
    pub water_level: i32,
    pub razors: u32,
}

impl fmt::Display for RenderableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        writeln!(
            f,
            "Score: {}  Moves: {}  State: {}  Water: {}  Submerged: {}  Razors: {}",
            self.score,
            self.move_count,
            self.state,
            self.water_level,
            self.submerged_turns,
            self.razors
        )
    }
}

impl GridState {
    pub fn snapshot(&self) -> RenderableState {
        RenderableState {
            grid: self.to_string(),
            score: self.score(),
            move_count: self.move_count(),
            state: self.state(),
            submerged_turns: self.flood().submerged_turns,
            water_level: self.water_level(),
            razors: self.razor_count(),
        }
    }
}

/// Colored grid for the trace view; flooded rows get a blue background
pub fn colorize(grid: &GridState) -> String {
    let water = grid.water_level();
    let mut out = String::with_capacity((grid.width() + 1) * grid.height() * 8);

    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let tile = grid.at(Point::new(x, y));
            let cell = paint(tile);
            let cell = if y < water { cell.on_blue() } else { cell };
            out.push_str(&cell.to_string());
        }
        out.push('\n');
    }
    out
}

fn paint(tile: Tile) -> ColoredString {
    let s = tile.as_char().to_string();
    match tile {
        Tile::Robot => s.bright_green().bold(),
        Tile::Boulder | Tile::GrowingBoulder => s.yellow(),
        Tile::Reward => s.bright_cyan().bold(),
        Tile::OpenExit => s.green(),
        Tile::ClosedExit => s.red(),
        Tile::TeleportIn(_) | Tile::TeleportOut(_) => s.magenta(),
        Tile::Beard => s.bright_black(),
        Tile::Razor => s.cyan(),
        Tile::Earth => s.dimmed(),
        _ => s.normal(),
    }
}
