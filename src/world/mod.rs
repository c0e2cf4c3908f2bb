pub mod grid;
pub mod parser;
pub mod render;
pub mod tile;

pub use grid::{Flood, GridState, LifecycleState, Step};
pub use parser::{parse_level, parse_level_from_reader, parse_level_from_str, LevelDescription, Metadata};
pub use render::{colorize, RenderableState};
pub use tile::Tile;
