//! A* route search over a frozen snapshot of the mine.
//!
//! Edges come from [`GridState::resolve_step_with`], the same rule set that
//! `apply_turn` enforces, read through the tiles the robot has already
//! rewritten on the way (pushed boulders, dug cells, spent teleporters). A
//! returned route is executable from the snapshot it was planned on as long as
//! physics leaves the mine alone.

use crate::command::Command;
use crate::point::Point;
use crate::utils::{DISTURBANCE_COST, DISTURB_PENALTY, PUSH_PENALTY, TELEPORT_PENALTY};
use crate::world::{GridState, Step, Tile};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

/// How picky the search is about where the robot may stand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Never step into a cell whose ceiling holds a boulder
    Cautious,
    /// Any legal step that does not get the robot crushed right away
    Permissive,
}

/// Planned command sequence plus the side effects of following it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    commands: VecDeque<Command>,
    pub traverses_teleporter: bool,
    pub pushes_boulder: bool,
    pub disturbs_boulder: bool,
}

impl Route {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn peek(&self) -> Option<Command> {
        self.commands.front().copied()
    }

    /// Take the next command off the front
    pub fn next_command(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }

    /// Append a command after the planned steps
    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.commands.iter().copied()
    }

    /// Ranking multiplier: the most severe side effect decides
    pub fn penalty_multiplier(&self) -> usize {
        if self.traverses_teleporter {
            TELEPORT_PENALTY
        } else if self.pushes_boulder {
            PUSH_PENALTY
        } else if self.disturbs_boulder {
            DISTURB_PENALTY
        } else {
            1
        }
    }

    /// Length weighted by side effects; lower is better
    pub fn weighted_cost(&self) -> usize {
        self.len() * self.penalty_multiplier()
    }
}

/// Open-set entry. Ordered so `BinaryHeap` pops the lowest f-score first,
/// ties going to the earliest insertion.
#[derive(Debug)]
struct OpenNode {
    f: f64,
    seq: u64,
    point: Point,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Route search bound to one snapshot.
///
/// The borrow keeps the grid frozen for the finder's lifetime, which is what
/// keeps the unreachable-cell memo valid. Build a new finder after the grid
/// changes.
pub struct PathFinder<'a> {
    grid: &'a GridState,
    mode: SearchMode,
    unreachable: HashSet<Point>,
}

impl<'a> PathFinder<'a> {
    pub fn new(grid: &'a GridState, mode: SearchMode) -> Self {
        Self {
            grid,
            mode,
            unreachable: HashSet::new(),
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Whether an earlier exhaustive search proved `p` out of reach
    pub fn is_known_unreachable(&self, p: Point) -> bool {
        self.unreachable.contains(&p)
    }

    /// Cheapest route from the robot to `goal`, `None` if there is none
    pub fn route_to(&mut self, goal: Point) -> Option<Route> {
        let goal = match self.grid.at(goal) {
            Tile::TeleportIn(_) => *self.grid.teleporters().get(&goal)?,
            _ => goal,
        };
        let start = self.grid.robot();

        if start == goal {
            return Some(Route::default());
        }
        if self.unreachable.contains(&goal) {
            return None;
        }

        let mut open = BinaryHeap::new();
        let mut open_members: HashSet<Point> = HashSet::new();
        let mut closed: HashSet<Point> = HashSet::new();
        let mut g_score: HashMap<Point, f64> = HashMap::new();
        let mut came_from: HashMap<Point, (Point, Step)> = HashMap::new();
        let mut seq = 0u64;

        g_score.insert(start, 0.0);
        open.push(OpenNode {
            f: start.distance(goal),
            seq,
            point: start,
        });
        open_members.insert(start);

        while let Some(OpenNode { point: current, .. }) = open.pop() {
            // stale duplicate of an already expanded node
            if !closed.insert(current) {
                continue;
            }
            open_members.remove(&current);

            if current == goal {
                return Some(self.reconstruct(&came_from, start, goal));
            }

            let current_g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
            let trail = self.trail_to(&came_from, start, current);
            for step in self.steps_from(current, &trail) {
                let next = step.landing;
                if closed.contains(&next) {
                    continue;
                }

                let tentative = current_g + self.step_cost(&step);
                let known = g_score.get(&next).copied().unwrap_or(f64::INFINITY);
                if !open_members.contains(&next) || tentative < known {
                    g_score.insert(next, tentative);
                    came_from.insert(next, (current, step));
                    seq += 1;
                    open.push(OpenNode {
                        f: tentative + next.distance(goal),
                        seq,
                        point: next,
                    });
                    open_members.insert(next);
                }
            }
        }

        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                let p = Point::new(x, y);
                if !closed.contains(&p) {
                    self.unreachable.insert(p);
                }
            }
        }
        None
    }

    /// Tiles the robot itself has rewritten by the time it reaches `node`:
    /// cells it left or dug, boulders it pushed, teleporters it used up.
    /// Physics is not replayed.
    fn trail_to(
        &self,
        came_from: &HashMap<Point, (Point, Step)>,
        start: Point,
        node: Point,
    ) -> HashMap<Point, Tile> {
        let mut steps = Vec::new();
        let mut current = node;
        while current != start {
            let Some(&(prev, step)) = came_from.get(&current) else {
                break;
            };
            steps.push((prev, step));
            current = prev;
        }

        let mut trail = HashMap::new();
        for (prev, step) in steps.into_iter().rev() {
            if step.pushes_boulder {
                let boulder = self.tile_on(&trail, step.dest);
                trail.insert(step.dest.step(step.command), boulder);
            }
            if step.uses_teleporter {
                for (&source, &target) in self.grid.teleporters() {
                    if target == step.landing {
                        trail.insert(source, Tile::Empty);
                    }
                }
            }
            trail.insert(prev, Tile::Empty);
            trail.insert(step.landing, Tile::Robot);
        }
        trail
    }

    fn tile_on(&self, trail: &HashMap<Point, Tile>, p: Point) -> Tile {
        trail.get(&p).copied().unwrap_or_else(|| self.grid.at(p))
    }

    fn steps_from(&self, from: Point, trail: &HashMap<Point, Tile>) -> Vec<Step> {
        Command::MOVES
            .iter()
            .filter_map(|&command| {
                self.grid
                    .resolve_step_with(from, command, |p| self.tile_on(trail, p))
                    .ok()
            })
            .filter(|step| self.is_safe(from, step))
            .collect()
    }

    fn step_cost(&self, step: &Step) -> f64 {
        if self.grid.move_disturbs_boulder(step.dest) {
            DISTURBANCE_COST
        } else {
            1.0
        }
    }

    /// Crush checks read the snapshot as planned on, moved robot aside
    fn is_safe(&self, from: Point, step: &Step) -> bool {
        let landing = step.landing;
        if self.mode == SearchMode::Cautious && self.grid.at(landing.up()).is_boulder() {
            return false;
        }
        let view = |p: Point| {
            if p == landing {
                Tile::Robot
            } else if p == from {
                Tile::Empty
            } else {
                self.grid.at(p)
            }
        };
        !boulder_lands_on(landing.up(), view)
    }

    fn reconstruct(
        &self,
        came_from: &HashMap<Point, (Point, Step)>,
        start: Point,
        goal: Point,
    ) -> Route {
        let mut route = Route::default();
        let mut reversed = Vec::new();
        let mut current = goal;

        while current != start {
            let Some(&(prev, step)) = came_from.get(&current) else {
                break;
            };
            route.pushes_boulder |= step.pushes_boulder;
            route.disturbs_boulder |=
                step.pushes_boulder || self.grid.move_disturbs_boulder(step.dest);
            route.traverses_teleporter |= step.uses_teleporter;
            reversed.push(step.command);
            current = prev;
        }

        route.commands = reversed.into_iter().rev().collect();
        route
    }
}

/// Would the next physics step drop a boulder into `cell`, reading the
/// world after the robot's move through `view`?
fn boulder_lands_on<F>(cell: Point, view: F) -> bool
where
    F: Fn(Point) -> Tile,
{
    if !view(cell).is_empty() {
        return false;
    }
    let top = cell.up();

    if view(top).is_boulder() {
        return true;
    }
    if view(top.left()).is_boulder()
        && view(cell.left()).is_boulder_or_reward()
        && view(top).is_empty()
    {
        return true;
    }
    let upper_right = top.right();
    view(upper_right).is_boulder()
        && view(cell.right()).is_boulder()
        && !(view(upper_right.right()).is_empty() && view(cell.right().right()).is_empty())
        && view(top).is_empty()
}
