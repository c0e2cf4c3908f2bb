/// Semantic kind of a single mine cell.
///
/// Movement and physics rules are written against the predicates below,
/// never against raw variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Earth,
    Boulder,
    /// Boulder that turns into a reward when its fall is stopped
    GrowingBoulder,
    Reward,
    ClosedExit,
    OpenExit,
    /// Teleporter source, labelled `A`..=`H`
    TeleportIn(u8),
    /// Teleporter target, labelled `1`..=`9`
    TeleportOut(u8),
    Beard,
    Razor,
    Robot,
    /// Sentinel for reads outside the grid
    OutOfBounds,
}

impl Tile {
    /// Decode a level-notation character
    pub const fn from_char(c: char) -> Option<Tile> {
        let tile = match c {
            ' ' => Tile::Empty,
            '#' => Tile::Wall,
            '.' => Tile::Earth,
            '*' => Tile::Boulder,
            '@' => Tile::GrowingBoulder,
            '\\' => Tile::Reward,
            'L' => Tile::ClosedExit,
            'O' => Tile::OpenExit,
            'A'..='H' => Tile::TeleportIn(c as u8),
            '1'..='9' => Tile::TeleportOut(c as u8),
            'W' => Tile::Beard,
            '!' => Tile::Razor,
            'R' => Tile::Robot,
            _ => return None,
        };
        Some(tile)
    }

    pub const fn as_char(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Wall => '#',
            Tile::Earth => '.',
            Tile::Boulder => '*',
            Tile::GrowingBoulder => '@',
            Tile::Reward => '\\',
            Tile::ClosedExit => 'L',
            Tile::OpenExit => 'O',
            Tile::TeleportIn(label) | Tile::TeleportOut(label) => label as char,
            Tile::Beard => 'W',
            Tile::Razor => '!',
            Tile::Robot => 'R',
            Tile::OutOfBounds => 'X',
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    #[inline]
    pub fn is_boulder(self) -> bool {
        matches!(self, Tile::Boulder | Tile::GrowingBoulder)
    }

    #[inline]
    pub fn is_reward(self) -> bool {
        self == Tile::Reward
    }

    #[inline]
    pub fn is_exit(self) -> bool {
        matches!(self, Tile::ClosedExit | Tile::OpenExit)
    }

    #[inline]
    pub fn is_teleport_in(self) -> bool {
        matches!(self, Tile::TeleportIn(_))
    }

    #[inline]
    pub fn is_empty_or_robot(self) -> bool {
        matches!(self, Tile::Empty | Tile::Robot)
    }

    #[inline]
    pub fn is_boulder_or_reward(self) -> bool {
        self.is_boulder() || self.is_reward()
    }

    /// The robot may step onto this tile (boulders only as a push)
    pub fn is_traversable(self) -> bool {
        matches!(
            self,
            Tile::Empty
                | Tile::Earth
                | Tile::Reward
                | Tile::OpenExit
                | Tile::Robot
                | Tile::Boulder
                | Tile::GrowingBoulder
                | Tile::TeleportIn(_)
                | Tile::Razor
        )
    }

    /// The robot can clear this tile out of a boulder's way by walking over it
    pub fn is_clearable_for_push(self) -> bool {
        matches!(
            self,
            Tile::Empty
                | Tile::Earth
                | Tile::Reward
                | Tile::TeleportIn(_)
                | Tile::Robot
                | Tile::Razor
        )
    }

    /// A boulder resting on this tile stays put, and would move if the tile were taken away
    pub fn holds_weight(self) -> bool {
        matches!(
            self,
            Tile::Boulder
                | Tile::GrowingBoulder
                | Tile::TeleportIn(_)
                | Tile::TeleportOut(_)
                | Tile::Reward
                | Tile::Robot
                | Tile::Earth
                | Tile::Beard
                | Tile::Razor
        )
    }
}
