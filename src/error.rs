use crate::command::Command;
use crate::point::Point;
use std::fmt;

/// Errors raised while loading a level description
#[derive(Debug)]
pub enum ParseError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Level has no grid rows
    EmptyLevel,
    /// Unknown tile character (row counted from the top of the file)
    InvalidTile { ch: char, row: usize, col: usize },
    /// No `R` in the grid
    MissingRobot,
    /// More than one `R` in the grid
    MultipleRobots,
    /// Metadata line that could not be understood
    InvalidMetadata(String),
    /// Teleporter source or target without a counterpart
    UnknownTeleporter(char),
    /// Invalid command character
    InvalidCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError(err) => write!(f, "IO error: {}", err),
            ParseError::EmptyLevel => write!(f, "Level contains no grid"),
            ParseError::InvalidTile { ch, row, col } => {
                write!(f, "Invalid tile {:?} at row {}, column {}", ch, row, col)
            }
            ParseError::MissingRobot => write!(f, "Level has no robot"),
            ParseError::MultipleRobots => write!(f, "Level has more than one robot"),
            ParseError::InvalidMetadata(line) => write!(f, "Invalid metadata: {}", line),
            ParseError::UnknownTeleporter(c) => write!(f, "Unmatched teleporter: {}", c),
            ParseError::InvalidCommand(cmd) => write!(f, "Invalid command: {}", cmd),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::IoError(err)
    }
}

/// A command was submitted that the rules do not allow.
///
/// This is a defect in whoever produced the command, never a condition
/// to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    pub command: Command,
    pub from: Point,
    pub to: Point,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Illegal move {} from {} to {}",
            self.command, self.from, self.to
        )
    }
}

impl std::error::Error for IllegalMove {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;
