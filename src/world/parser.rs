use crate::error::{ParseError, Result};
use crate::utils::{DEFAULT_GROWTH, DEFAULT_WATERPROOF};
use crate::world::tile::Tile;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};

/// Level settings that follow the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Initial flood level (rows from the bottom that are under water)
    pub water: i32,
    /// Turns between flood rises, 0 = never rises
    pub flooding: u32,
    /// Turns the robot survives under water
    pub waterproof: u32,
    /// Turns between beard growth
    pub growth: u32,
    /// Razors the robot starts with
    pub razors: u32,
    /// Teleporter source label -> target label
    pub trampolines: Vec<(u8, u8)>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            water: 0,
            flooding: 0,
            waterproof: DEFAULT_WATERPROOF,
            growth: DEFAULT_GROWTH,
            razors: 0,
            trampolines: Vec::new(),
        }
    }
}

/// Validated level: rectangular tile rows (top row first) plus metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelDescription {
    pub rows: Vec<Vec<Tile>>,
    pub metadata: Metadata,
}

impl LevelDescription {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Parse a level from a file path
pub fn parse_level(path: &str) -> Result<LevelDescription> {
    let file = File::open(path)?;
    parse_level_from_reader(file)
}

/// Parse a level from any reader (stdin in contest mode)
pub fn parse_level_from_reader<R: Read>(reader: R) -> Result<LevelDescription> {
    let reader = BufReader::with_capacity(64 * 1024, reader);
    let mut lines = Vec::with_capacity(128);
    for line in reader.lines() {
        lines.push(line?);
    }
    parse_lines(&lines)
}

/// Parse a level directly from an in-memory string
pub fn parse_level_from_str(src: &str) -> Result<LevelDescription> {
    let lines: Vec<&str> = src.lines().collect();
    parse_lines(&lines)
}

fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Result<LevelDescription> {
    let mut lines = lines
        .iter()
        .map(|l| l.as_ref().trim_end_matches('\r'))
        .skip_while(|l| l.is_empty());

    let mut grid: Vec<&str> = Vec::with_capacity(64);
    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        grid.push(line);
    }
    if grid.is_empty() {
        return Err(ParseError::EmptyLevel);
    }

    let mut metadata = Metadata::default();
    for line in lines {
        parse_metadata_line(line, &mut metadata)?;
    }

    let width = grid.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(grid.len());
    for (row, line) in grid.iter().enumerate() {
        let mut tiles = Vec::with_capacity(width);
        for (col, ch) in line.chars().enumerate() {
            let tile = Tile::from_char(ch).ok_or(ParseError::InvalidTile {
                ch,
                row: row + 1,
                col: col + 1,
            })?;
            tiles.push(tile);
        }
        tiles.resize(width, Tile::Empty);
        rows.push(tiles);
    }

    let level = LevelDescription { rows, metadata };
    validate(&level)?;
    Ok(level)
}

fn parse_metadata_line(line: &str, metadata: &mut Metadata) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let invalid = || ParseError::InvalidMetadata(line.to_string());

    match parts.as_slice() {
        [] => {}
        ["Water", n] => metadata.water = n.parse().map_err(|_| invalid())?,
        ["Flooding", n] => metadata.flooding = n.parse().map_err(|_| invalid())?,
        ["Waterproof", n] => metadata.waterproof = n.parse().map_err(|_| invalid())?,
        ["Growth", n] => metadata.growth = n.parse().map_err(|_| invalid())?,
        ["Razors", n] => metadata.razors = n.parse().map_err(|_| invalid())?,
        ["Trampoline", source, "targets", target] => {
            let source = single_byte(source, b'A'..=b'H').ok_or_else(invalid)?;
            let target = single_byte(target, b'1'..=b'9').ok_or_else(invalid)?;
            metadata.trampolines.push((source, target));
        }
        _ => return Err(invalid()),
    }
    Ok(())
}

fn single_byte(s: &str, range: std::ops::RangeInclusive<u8>) -> Option<u8> {
    match s.as_bytes() {
        [b] if range.contains(b) => Some(*b),
        _ => None,
    }
}

fn validate(level: &LevelDescription) -> Result<()> {
    let tiles = || level.rows.iter().flatten();

    match tiles().filter(|t| **t == Tile::Robot).count() {
        0 => return Err(ParseError::MissingRobot),
        1 => {}
        _ => return Err(ParseError::MultipleRobots),
    }

    let present = |wanted: Tile| tiles().any(|t| *t == wanted);
    for &(source, target) in &level.metadata.trampolines {
        if !present(Tile::TeleportIn(source)) {
            return Err(ParseError::UnknownTeleporter(source as char));
        }
        if !present(Tile::TeleportOut(target)) {
            return Err(ParseError::UnknownTeleporter(target as char));
        }
    }
    for tile in tiles() {
        if let Tile::TeleportIn(label) = *tile {
            if !level.metadata.trampolines.iter().any(|(s, _)| *s == label) {
                return Err(ParseError::UnknownTeleporter(label as char));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_level() {
        let level = parse_level_from_str("#####\n#R\\O#\n#####\n").unwrap();

        assert_eq!(level.height(), 3);
        assert_eq!(level.width(), 5);
        assert_eq!(level.rows[1][1], Tile::Robot);
        assert_eq!(level.rows[1][2], Tile::Reward);
        assert_eq!(level.rows[1][3], Tile::OpenExit);
        assert_eq!(level.metadata, Metadata::default());
    }

    #[test]
    fn test_short_rows_are_padded() {
        let level = parse_level_from_str("####\n#R\n####\n").unwrap();

        assert_eq!(level.width(), 4);
        assert_eq!(level.rows[1], vec![Tile::Wall, Tile::Robot, Tile::Empty, Tile::Empty]);
    }

    #[test]
    fn test_parse_metadata() {
        let src = "###\n#R#\n#A#\n#1#\n###\n\nWater 1\nFlooding 8\nWaterproof 5\nGrowth 15\nRazors 2\nTrampoline A targets 1\n";
        let level = parse_level_from_str(src).unwrap();

        assert_eq!(level.metadata.water, 1);
        assert_eq!(level.metadata.flooding, 8);
        assert_eq!(level.metadata.waterproof, 5);
        assert_eq!(level.metadata.growth, 15);
        assert_eq!(level.metadata.razors, 2);
        assert_eq!(level.metadata.trampolines, vec![(b'A', b'1')]);
    }

    #[test]
    fn test_rejects_bad_levels() {
        assert!(matches!(parse_level_from_str("\n\n"), Err(ParseError::EmptyLevel)));
        assert!(matches!(parse_level_from_str("###\n# #\n"), Err(ParseError::MissingRobot)));
        assert!(matches!(parse_level_from_str("#RR#\n"), Err(ParseError::MultipleRobots)));
        assert!(matches!(
            parse_level_from_str("#R?#\n"),
            Err(ParseError::InvalidTile { ch: '?', row: 1, col: 3 })
        ));
        assert!(matches!(
            parse_level_from_str("#R#\n\nWater lots\n"),
            Err(ParseError::InvalidMetadata(_))
        ));
        assert!(matches!(
            parse_level_from_str("#RA#\n"),
            Err(ParseError::UnknownTeleporter('A'))
        ));
        assert!(matches!(
            parse_level_from_str("#RA#\n\nTrampoline A targets 2\n"),
            Err(ParseError::UnknownTeleporter('2'))
        ));
    }
}
