use crate::command::Command;
use crate::error::IllegalMove;
use crate::point::Point;
use crate::utils::{ABORT_BONUS, EXIT_BONUS, REWARD_POINTS, TURN_COST};
use crate::world::parser::LevelDescription;
use crate::world::tile::Tile;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Where a mine run stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Active,
    VoluntarilyStopped,
    Crushed,
    Drowned,
    Completed,
}

impl LifecycleState {
    pub const fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Active => "Active",
            LifecycleState::VoluntarilyStopped => "Aborted",
            LifecycleState::Crushed => "Crushed",
            LifecycleState::Drowned => "Drowned",
            LifecycleState::Completed => "Won",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Flood parameters plus the running submersion counter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flood {
    pub base_level: i32,
    /// Turns between rises, 0 = never rises
    pub rise_interval: u32,
    pub tolerance: u32,
    pub submerged_turns: u32,
}

/// Resolved robot step: where the robot lands and what it touches on the way
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub command: Command,
    /// Cell the robot steps onto
    pub dest: Point,
    /// Cell the robot ends on (differs from `dest` through a teleporter)
    pub landing: Point,
    pub pushes_boulder: bool,
    pub uses_teleporter: bool,
}

/// The mutable mine: tile matrix, entity sets, counters and lifecycle.
///
/// The tile matrix and the position sets always agree; every write goes
/// through `put`. Cloning gives a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
    robot: Point,
    rewards: BTreeSet<Point>,
    exits: BTreeSet<Point>,
    boulders: BTreeSet<Point>,
    razors: BTreeSet<Point>,
    /// Teleporter source -> target
    teleporters: BTreeMap<Point, Point>,
    score: i64,
    rewards_collected: u32,
    razor_count: u32,
    state: LifecycleState,
    move_count: usize,
    history: Vec<Command>,
    flood: Flood,
    growth_interval: u32,
    changed: bool,
}

impl GridState {
    /// Build the initial state from an already validated level
    pub fn new(level: &LevelDescription) -> Self {
        let width = level.width();
        let height = level.height();
        let meta = &level.metadata;

        let mut grid = Self {
            width,
            height,
            cells: vec![Tile::Empty; width * height],
            robot: Point::new(0, 0),
            rewards: BTreeSet::new(),
            exits: BTreeSet::new(),
            boulders: BTreeSet::new(),
            razors: BTreeSet::new(),
            teleporters: BTreeMap::new(),
            score: 0,
            rewards_collected: 0,
            razor_count: meta.razors,
            state: LifecycleState::Active,
            move_count: 0,
            history: Vec::new(),
            flood: Flood {
                base_level: meta.water,
                rise_interval: meta.flooding,
                tolerance: meta.waterproof,
                submerged_turns: 0,
            },
            growth_interval: meta.growth,
            changed: false,
        };

        let mut sources: BTreeMap<u8, Vec<Point>> = BTreeMap::new();
        let mut targets: BTreeMap<u8, Point> = BTreeMap::new();

        for (row, tiles) in level.rows.iter().enumerate() {
            let y = (height - 1 - row) as i32;
            for (x, &tile) in tiles.iter().enumerate() {
                let p = Point::new(x as i32, y);
                match tile {
                    Tile::Robot => grid.robot = p,
                    Tile::TeleportIn(label) => sources.entry(label).or_default().push(p),
                    Tile::TeleportOut(label) => {
                        targets.insert(label, p);
                    }
                    _ => {}
                }
                grid.put(p, tile);
            }
        }

        for &(source, target) in &meta.trampolines {
            if let (Some(from), Some(&to)) = (sources.get(&source), targets.get(&target)) {
                for &p in from {
                    grid.teleporters.insert(p, to);
                }
            }
        }

        grid
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            None
        } else {
            Some(p.y as usize * self.width + p.x as usize)
        }
    }

    /// Tile at `p`, `OutOfBounds` outside the grid
    #[inline]
    pub fn at(&self, p: Point) -> Tile {
        self.index(p).map_or(Tile::OutOfBounds, |i| self.cells[i])
    }

    /// Write a tile and keep the entity sets in step with the matrix
    fn put(&mut self, p: Point, tile: Tile) {
        let Some(i) = self.index(p) else {
            debug_assert!(false, "write outside grid at {}", p);
            return;
        };

        match self.cells[i] {
            Tile::Reward => {
                self.rewards.remove(&p);
            }
            Tile::ClosedExit | Tile::OpenExit => {
                self.exits.remove(&p);
            }
            Tile::Boulder | Tile::GrowingBoulder => {
                self.boulders.remove(&p);
            }
            Tile::Razor => {
                self.razors.remove(&p);
            }
            Tile::TeleportIn(_) => {
                self.teleporters.remove(&p);
            }
            _ => {}
        }

        match tile {
            Tile::Reward => {
                self.rewards.insert(p);
            }
            Tile::ClosedExit | Tile::OpenExit => {
                self.exits.insert(p);
            }
            Tile::Boulder | Tile::GrowingBoulder => {
                self.boulders.insert(p);
            }
            Tile::Razor => {
                self.razors.insert(p);
            }
            _ => {}
        }

        self.cells[i] = tile;
    }

    /// Apply one command and advance the world by one turn.
    ///
    /// Returns the command back for logging convenience. Once the run is
    /// no longer active every command is a no-op.
    pub fn apply_turn(&mut self, command: Command) -> Result<Command, IllegalMove> {
        if self.state != LifecycleState::Active {
            return Ok(command);
        }
        self.changed = false;

        if command == Command::Abort {
            self.history.push(command);
            self.state = LifecycleState::VoluntarilyStopped;
            self.score += i64::from(self.rewards_collected) * ABORT_BONUS;
            return Ok(command);
        }

        let step = self.resolve_step(self.robot, command)?;
        self.history.push(command);
        self.move_count += 1;

        if command.is_move() {
            self.move_robot(step);
        }
        self.score -= TURN_COST;

        if self.state == LifecycleState::Completed {
            self.score += i64::from(self.rewards_collected) * EXIT_BONUS;
            return Ok(command);
        }

        let before = self.cells.clone();
        self.update_physics(&before);
        self.check_flood();
        self.check_crush(&before);

        Ok(command)
    }

    /// Whether `command` can be applied from the robot's position right now
    pub fn is_legal_move(&self, command: Command) -> bool {
        self.resolve_step(self.robot, command).is_ok()
    }

    /// Apply the movement rules to a robot standing at `from`.
    ///
    /// Shared by [`GridState::apply_turn`] and the route search, so both
    /// accept exactly the same moves.
    pub fn resolve_step(&self, from: Point, command: Command) -> Result<Step, IllegalMove> {
        self.resolve_step_with(from, command, |p| self.at(p))
    }

    /// [`GridState::resolve_step`] reading tiles through `at`, so a search can
    /// layer the robot's own earlier moves over this grid
    pub fn resolve_step_with<F>(
        &self,
        from: Point,
        command: Command,
        at: F,
    ) -> Result<Step, IllegalMove>
    where
        F: Fn(Point) -> Tile,
    {
        let dest = from.step(command);
        let mut step = Step {
            command,
            dest,
            landing: dest,
            pushes_boulder: false,
            uses_teleporter: false,
        };
        if !command.is_move() {
            return Ok(step);
        }

        let illegal = IllegalMove {
            command,
            from,
            to: dest,
        };
        let tile = at(dest);

        if tile.is_boulder() {
            if command.is_horizontal() && at(dest.step(command)).is_empty() {
                step.pushes_boulder = true;
                return Ok(step);
            }
            return Err(illegal);
        }
        if !tile.is_traversable() {
            return Err(illegal);
        }
        if tile.is_teleport_in() {
            step.landing = *self.teleporters.get(&dest).ok_or(illegal)?;
            step.uses_teleporter = true;
        }

        Ok(step)
    }

    fn move_robot(&mut self, step: Step) {
        let tile = self.at(step.dest);

        if step.pushes_boulder {
            self.put(step.dest.step(step.command), tile);
        }

        match tile {
            Tile::Reward => {
                self.score += REWARD_POINTS;
                self.rewards_collected += 1;
            }
            Tile::Razor => self.razor_count += 1,
            Tile::OpenExit => self.state = LifecycleState::Completed,
            Tile::TeleportIn(_) => {
                // every source sharing this target collapses at once
                let group: Vec<Point> = self
                    .teleporters
                    .iter()
                    .filter(|&(_, &to)| to == step.landing)
                    .map(|(&from, _)| from)
                    .collect();
                for source in group {
                    self.put(source, Tile::Empty);
                }
            }
            _ => {}
        }

        self.put(self.robot, Tile::Empty);
        self.put(step.landing, Tile::Robot);
        self.robot = step.landing;
    }

    /// One synchronous physics pass: reads come from `before`, writes land in `self`
    fn update_physics(&mut self, before: &[Tile]) {
        let read = |p: Point| -> Tile {
            if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
                Tile::OutOfBounds
            } else {
                before[p.y as usize * self.width + p.x as usize]
            }
        };

        let mut writes: Vec<(Point, Tile)> = Vec::new();

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let p = Point::new(x, y);
                let tile = read(p);
                if !tile.is_boulder() {
                    continue;
                }

                let below = read(p.down());
                let right_clear = read(p.right()).is_empty() && read(p.right().down()).is_empty();
                let left_clear = read(p.left()).is_empty() && read(p.left().down()).is_empty();

                let dest = if below.is_empty() {
                    Some(p.down())
                } else if below.is_boulder() && right_clear {
                    Some(p.right().down())
                } else if below.is_boulder() && left_clear {
                    Some(p.left().down())
                } else if below.is_reward() && right_clear {
                    Some(p.right().down())
                } else {
                    None
                };

                if let Some(dest) = dest {
                    let landed = if tile == Tile::GrowingBoulder && !read(dest.down()).is_empty() {
                        Tile::Reward
                    } else {
                        tile
                    };
                    writes.push((p, Tile::Empty));
                    writes.push((dest, landed));
                }
            }
        }

        if self.growth_interval > 0
            && self.move_count > 1
            && self.move_count % self.growth_interval as usize == 0
        {
            for y in 0..self.height as i32 {
                for x in 0..self.width as i32 {
                    let p = Point::new(x, y);
                    if read(p) != Tile::Beard {
                        continue;
                    }
                    for n in p.surrounding() {
                        if read(n).is_empty() {
                            writes.push((n, Tile::Beard));
                        }
                    }
                }
            }
        }

        for (p, tile) in writes {
            // beard only takes cells still empty after the boulders moved
            if tile == Tile::Beard && !self.at(p).is_empty() {
                continue;
            }
            self.put(p, tile);
            self.changed = true;
        }

        if self.rewards.is_empty() {
            let closed: Vec<Point> = self
                .exits
                .iter()
                .copied()
                .filter(|&p| self.at(p) == Tile::ClosedExit)
                .collect();
            for p in closed {
                self.put(p, Tile::OpenExit);
                self.changed = true;
            }
        }
    }

    fn check_flood(&mut self) {
        if self.robot.y < self.water_level() {
            self.flood.submerged_turns += 1;
            if self.flood.submerged_turns > self.flood.tolerance {
                self.state = LifecycleState::Drowned;
            }
        } else {
            self.flood.submerged_turns = 0;
        }
    }

    fn check_crush(&mut self, before: &[Tile]) {
        if self.state != LifecycleState::Active {
            return;
        }
        let above = self.robot.up();
        let was_boulder = self
            .index(above)
            .is_some_and(|i| before[i].is_boulder());
        if self.at(above).is_boulder() && !was_boulder {
            self.state = LifecycleState::Crushed;
        }
    }

    /// Current flood line: rows with index below it are under water
    pub fn water_level(&self) -> i32 {
        let rises = if self.flood.rise_interval > 0 {
            (self.move_count / self.flood.rise_interval as usize) as i32
        } else {
            0
        };
        self.flood.base_level + rises
    }

    /// Score the run would end with if the robot aborted now
    pub fn abort_score(&self) -> i64 {
        self.score + i64::from(self.rewards_collected) * ABORT_BONUS
    }

    /// Stepping onto `end` would unsettle a resting boulder
    pub fn move_disturbs_boulder(&self, end: Point) -> bool {
        let tile = self.at(end);
        if tile.is_boulder() {
            return true;
        }
        if !tile.holds_weight() {
            return false;
        }

        let up = self.at(end.up());
        up.is_boulder()
            || (up.is_empty_or_robot()
                && self.at(end.up().right()).is_boulder()
                && self.at(end.right()).is_boulder())
            || (up.is_empty_or_robot()
                && self.at(end.up().left()).is_boulder()
                && self.at(end.left()).is_boulder_or_reward())
    }

    /// A boulder whose flanks the robot could walk through to shift it sideways
    pub fn is_movable_boulder(&self, p: Point) -> bool {
        self.at(p).is_boulder()
            && self.at(p.left()).is_clearable_for_push()
            && self.at(p.right()).is_clearable_for_push()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn robot(&self) -> Point {
        self.robot
    }

    pub fn rewards(&self) -> &BTreeSet<Point> {
        &self.rewards
    }

    pub fn exits(&self) -> &BTreeSet<Point> {
        &self.exits
    }

    pub fn boulders(&self) -> &BTreeSet<Point> {
        &self.boulders
    }

    pub fn razors(&self) -> &BTreeSet<Point> {
        &self.razors
    }

    pub fn teleporters(&self) -> &BTreeMap<Point, Point> {
        &self.teleporters
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn rewards_collected(&self) -> u32 {
        self.rewards_collected
    }

    pub fn razor_count(&self) -> u32 {
        self.razor_count
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == LifecycleState::Active
    }

    /// Turns taken so far (an abort is recorded but takes no turn)
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Every command applied so far, abort included
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    pub fn flood(&self) -> &Flood {
        &self.flood
    }

    pub fn growth_interval(&self) -> u32 {
        self.growth_interval
    }

    /// Whether the last physics step altered any tile
    pub fn changed(&self) -> bool {
        self.changed
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            let line: String = (0..self.width as i32)
                .map(|x| self.at(Point::new(x, y)).as_char())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parser::parse_level_from_str;

    fn grid(src: &str) -> GridState {
        GridState::new(&parse_level_from_str(src).unwrap())
    }

    fn run(grid: &mut GridState, commands: &str) {
        for c in commands.chars() {
            grid.apply_turn(Command::from_char(c).unwrap()).unwrap();
        }
    }

    fn assert_consistent(grid: &GridState) {
        let count = |pred: fn(Tile) -> bool| {
            (0..grid.height() as i32)
                .flat_map(|y| (0..grid.width() as i32).map(move |x| Point::new(x, y)))
                .filter(|&p| pred(grid.at(p)))
                .count()
        };
        assert_eq!(grid.rewards().len(), count(Tile::is_reward));
        assert_eq!(grid.boulders().len(), count(Tile::is_boulder));
        assert_eq!(grid.exits().len(), count(Tile::is_exit));
    }

    #[test]
    fn test_rows_are_indexed_bottom_up() {
        let g = grid("#####\n# * #\n#R  #\n#####\n");

        assert_eq!(g.width(), 5);
        assert_eq!(g.height(), 4);
        assert_eq!(g.robot(), Point::new(1, 1));
        assert!(g.boulders().contains(&Point::new(2, 2)));
        assert_eq!(g.at(Point::new(0, 0)), Tile::Wall);
        assert_eq!(g.at(Point::new(-1, 0)), Tile::OutOfBounds);
        assert_eq!(g.at(Point::new(5, 0)), Tile::OutOfBounds);
        assert_eq!(g.to_string(), "#####\n# * #\n#R  #\n#####\n");
    }

    #[test]
    fn test_collect_reward_then_exit() {
        let mut g = grid("#####\n#R\\L#\n#####\n");

        run(&mut g, "R");
        assert_eq!(g.score(), 24);
        assert_eq!(g.rewards_collected(), 1);
        assert!(g.rewards().is_empty());
        assert_eq!(g.at(Point::new(3, 1)), Tile::OpenExit);
        assert!(g.changed());

        run(&mut g, "R");
        assert_eq!(g.state(), LifecycleState::Completed);
        assert_eq!(g.score(), 73);
        assert_eq!(g.move_count(), 2);
        assert_consistent(&g);
    }

    #[test]
    fn test_illegal_moves() {
        let g = grid("######\n#L*  #\n#R*.*#\n######\n");

        assert!(!g.is_legal_move(Command::Left));
        assert!(!g.is_legal_move(Command::Down));
        assert!(!g.is_legal_move(Command::Up));
        // beyond the boulder is earth, so no push
        assert!(!g.is_legal_move(Command::Right));
        assert!(g.is_legal_move(Command::Wait));
        assert!(g.is_legal_move(Command::Abort));

        let mut g = g;
        let err = g.apply_turn(Command::Left).unwrap_err();
        assert_eq!(err.from, Point::new(1, 1));
        assert_eq!(err.to, Point::new(0, 1));
        assert_eq!(g.move_count(), 0);
    }

    #[test]
    fn test_push_boulder_sideways() {
        let mut g = grid("#####\n#  R#\n# *.#\n#####\n");
        // robot at (3,2); walk down then push left
        run(&mut g, "D");
        assert_eq!(g.robot(), Point::new(3, 1));
        assert!(g.is_legal_move(Command::Left));

        run(&mut g, "L");
        assert_eq!(g.robot(), Point::new(2, 1));
        assert!(g.boulders().contains(&Point::new(1, 1)));
        assert!(!g.boulders().contains(&Point::new(2, 1)));
        assert_consistent(&g);
    }

    #[test]
    fn test_boulder_falls_until_supported() {
        let mut g = grid("#####\n# * #\n#   #\n#R  #\n#####\n");

        run(&mut g, "W");
        assert!(g.changed());
        assert!(g.boulders().contains(&Point::new(2, 2)));
        run(&mut g, "W");
        assert!(g.boulders().contains(&Point::new(2, 1)));
        run(&mut g, "W");
        assert!(!g.changed());
        assert_eq!(g.state(), LifecycleState::Active);
        assert_eq!(g.score(), -3);
    }

    #[test]
    fn test_boulder_rolls_right_off_boulder() {
        let mut g = grid("######\n# *  #\n# *  #\n#R...#\n######\n");

        run(&mut g, "W");
        let expected: BTreeSet<Point> = [Point::new(2, 2), Point::new(3, 2)].into();
        assert_eq!(g.boulders(), &expected);
    }

    #[test]
    fn test_boulder_rolls_left_when_right_blocked() {
        let mut g = grid("######\n# *# #\n# *  #\n#...R#\n######\n");

        run(&mut g, "W");
        let expected: BTreeSet<Point> = [Point::new(1, 2), Point::new(2, 2)].into();
        assert_eq!(g.boulders(), &expected);
    }

    #[test]
    fn test_boulder_rolls_right_off_reward() {
        let mut g = grid("#####\n# * #\n# \\ #\n#R..#\n#####\n");

        run(&mut g, "W");
        assert!(g.boulders().contains(&Point::new(3, 2)));
        assert!(g.rewards().contains(&Point::new(2, 2)));
        assert_consistent(&g);
    }

    #[test]
    fn test_growing_boulder_turns_into_reward() {
        let mut g = grid("#####\n# @ #\n#   #\n#R..#\n#####\n");

        run(&mut g, "W");
        assert!(g.boulders().is_empty());
        assert!(g.rewards().contains(&Point::new(2, 2)));
        assert_eq!(g.at(Point::new(2, 2)), Tile::Reward);
        assert_consistent(&g);
    }

    #[test]
    fn test_teleporter_group_collapses() {
        let src = "#######\n#RA 1B#\n#######\n\nTrampoline A targets 1\nTrampoline B targets 1\n";
        let mut g = grid(src);
        assert_eq!(g.teleporters().len(), 2);

        run(&mut g, "R");
        assert_eq!(g.robot(), Point::new(4, 1));
        assert!(g.teleporters().is_empty());
        assert_eq!(g.at(Point::new(2, 1)), Tile::Empty);
        assert_eq!(g.at(Point::new(5, 1)), Tile::Empty);
        assert_eq!(g.at(Point::new(1, 1)), Tile::Empty);
    }

    #[test]
    fn test_razor_pickup() {
        let mut g = grid("#####\n#R! #\n#####\n\nRazors 1\n");
        assert_eq!(g.razor_count(), 1);

        run(&mut g, "R");
        assert_eq!(g.razor_count(), 2);
        assert!(g.razors().is_empty());
    }

    #[test]
    fn test_crushed_when_leaving_from_under_boulder() {
        let mut g = grid("#####\n# * #\n# R #\n# . #\n#####\n");

        run(&mut g, "D");
        assert_eq!(g.state(), LifecycleState::Crushed);
        // dead robots ignore further commands
        run(&mut g, "U");
        assert_eq!(g.robot(), Point::new(2, 1));
        assert_eq!(g.move_count(), 1);
    }

    #[test]
    fn test_resting_boulder_does_not_crush() {
        let mut g = grid("#####\n# * #\n# R #\n#   #\n#####\n");

        run(&mut g, "W");
        assert_eq!(g.state(), LifecycleState::Active);
    }

    #[test]
    fn test_beard_grows_on_interval() {
        let mut g = grid("#####\n#R  #\n#  W#\n#####\n\nGrowth 2\n");

        run(&mut g, "W");
        assert_eq!(g.at(Point::new(2, 1)), Tile::Empty);
        assert!(!g.changed());

        run(&mut g, "W");
        assert!(g.changed());
        assert_eq!(g.at(Point::new(2, 1)), Tile::Beard);
        assert_eq!(g.at(Point::new(2, 2)), Tile::Beard);
        assert_eq!(g.at(Point::new(3, 2)), Tile::Beard);
        assert_eq!(g.at(Point::new(1, 2)), Tile::Robot);
    }

    #[test]
    fn test_drowns_after_tolerance() {
        let mut g = grid("#####\n#   #\n#R  #\n#####\n\nWater 1\nFlooding 2\nWaterproof 1\n");

        run(&mut g, "W");
        assert_eq!(g.water_level(), 1);
        assert_eq!(g.flood().submerged_turns, 0);

        run(&mut g, "W");
        assert_eq!(g.water_level(), 2);
        assert_eq!(g.flood().submerged_turns, 1);
        assert_eq!(g.state(), LifecycleState::Active);

        run(&mut g, "W");
        assert_eq!(g.state(), LifecycleState::Drowned);
    }

    #[test]
    fn test_abort_adds_bonus() {
        let mut g = grid("######\n#R\\\\L#\n######\n");

        run(&mut g, "R");
        assert_eq!(g.abort_score(), 24 + 25);
        run(&mut g, "A");
        assert_eq!(g.state(), LifecycleState::VoluntarilyStopped);
        assert_eq!(g.score(), 49);
        assert_eq!(g.move_count(), 1);
        assert_eq!(g.history(), &[Command::Right, Command::Abort]);

        // no-op afterwards
        run(&mut g, "RA");
        assert_eq!(g.score(), 49);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = grid("#####\n# * #\n#   #\n#R\\ #\n#####\n");
        let mut copy = original.clone();

        run(&mut copy, "RW");
        assert_ne!(copy, original);
        assert_eq!(original.score(), 0);
        assert_eq!(original.rewards().len(), 1);
        assert!(original.boulders().contains(&Point::new(2, 3)));
        assert_eq!(original.robot(), Point::new(1, 1));
    }

    #[test]
    fn test_move_disturbs_boulder() {
        let g = grid("#####\n# * #\n# . #\n#R  #\n#####\n");

        assert!(g.move_disturbs_boulder(Point::new(2, 2)));
        assert!(g.move_disturbs_boulder(Point::new(2, 3)));
        assert!(!g.move_disturbs_boulder(Point::new(2, 1)));
        assert!(!g.move_disturbs_boulder(Point::new(3, 1)));
    }
}
