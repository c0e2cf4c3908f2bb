use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// One robot command; applying it advances the mine by one turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    Up = b'U',
    Down = b'D',
    Left = b'L',
    Right = b'R',
    Wait = b'W',
    Abort = b'A',
}

impl Command {
    /// The four commands that move the robot
    pub const MOVES: [Command; 4] = [Command::Up, Command::Down, Command::Left, Command::Right];

    /// Single-character wire form
    #[inline]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    #[inline]
    pub const fn is_move(self) -> bool {
        matches!(
            self,
            Command::Up | Command::Down | Command::Left | Command::Right
        )
    }

    /// Only sideways moves can push a boulder
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Command::Left | Command::Right)
    }

    pub const fn from_char(c: char) -> Option<Command> {
        match c {
            'U' => Some(Command::Up),
            'D' => Some(Command::Down),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'W' => Some(Command::Wait),
            'A' => Some(Command::Abort),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Command::from_char(c).ok_or_else(|| ParseError::InvalidCommand(s.to_string()))
            }
            _ => Err(ParseError::InvalidCommand(s.to_string())),
        }
    }
}

/// Render a command sequence as the judge expects it, e.g. `"LLURA"`
pub fn command_stream<'a, I>(commands: I) -> String
where
    I: IntoIterator<Item = &'a Command>,
{
    commands.into_iter().map(|c| c.as_char()).collect()
}

/// Parse a command stream, ignoring surrounding whitespace
pub fn parse_command_stream(s: &str) -> Result<Vec<Command>, ParseError> {
    s.trim()
        .chars()
        .map(|c| Command::from_char(c).ok_or_else(|| ParseError::InvalidCommand(c.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for c in ['U', 'D', 'L', 'R', 'W', 'A'] {
            assert_eq!(Command::from_char(c).unwrap().as_char(), c);
        }
        assert_eq!(Command::from_char('S'), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("L".parse::<Command>().unwrap(), Command::Left);
        assert!("LL".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        assert!("x".parse::<Command>().is_err());
    }

    #[test]
    fn test_stream() {
        let cmds = parse_command_stream(" LRUDWA\n").unwrap();
        assert_eq!(cmds.len(), 6);
        assert_eq!(command_stream(&cmds), "LRUDWA");
        assert!(parse_command_stream("LQ").is_err());
    }

    #[test]
    fn test_move_classification() {
        assert!(Command::MOVES.iter().all(|c| c.is_move()));
        assert!(!Command::Wait.is_move());
        assert!(!Command::Abort.is_move());
        assert!(Command::Left.is_horizontal());
        assert!(!Command::Up.is_horizontal());
    }
}
