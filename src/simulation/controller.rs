use crate::command::Command;
use crate::point::Point;
use crate::simulation::pathfinder::{PathFinder, Route, SearchMode};
use crate::world::{GridState, Tile};
use std::fmt;

/// What the controller was doing when it last decided
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    SeekingReward,
    SeekingExit,
    Settling,
    ClearingBoulder,
    GivingUp,
}

impl ControllerState {
    pub const fn as_str(self) -> &'static str {
        match self {
            ControllerState::Idle => "idle",
            ControllerState::SeekingReward => "seeking reward",
            ControllerState::SeekingExit => "seeking exit",
            ControllerState::Settling => "waiting for the mine to settle",
            ControllerState::ClearingBoulder => "clearing a boulder",
            ControllerState::GivingUp => "giving up",
        }
    }
}

impl fmt::Display for ControllerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the goal policy, consulted in order on every replan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Nearest reward; `cautious` avoids cells under a boulder
    Reward { cautious: bool },
    Exit,
    Settle,
    ClearBoulder,
    GiveUp,
}

/// Default policy order
pub const POLICY: [Goal; 6] = [
    Goal::Reward { cautious: true },
    Goal::Reward { cautious: false },
    Goal::Exit,
    Goal::Settle,
    Goal::ClearBoulder,
    Goal::GiveUp,
];

enum Decision {
    /// Cache the route and serve it command by command
    Follow(Route),
    /// Answer this turn only, nothing cached
    Immediate(Command),
}

impl Goal {
    fn state(self) -> ControllerState {
        match self {
            Goal::Reward { .. } => ControllerState::SeekingReward,
            Goal::Exit => ControllerState::SeekingExit,
            Goal::Settle => ControllerState::Settling,
            Goal::ClearBoulder => ControllerState::ClearingBoulder,
            Goal::GiveUp => ControllerState::GivingUp,
        }
    }

    fn evaluate(self, grid: &GridState) -> Option<Decision> {
        match self {
            Goal::Reward { cautious } => {
                let mode = if cautious {
                    SearchMode::Cautious
                } else {
                    SearchMode::Permissive
                };
                let targets = grid
                    .rewards()
                    .iter()
                    .copied()
                    .filter(|p| !cautious || !grid.at(p.up()).is_boulder());
                best_route(grid, mode, targets).map(Decision::Follow)
            }
            Goal::Exit => {
                if !grid.rewards().is_empty() {
                    return None;
                }
                let targets = grid.exits().iter().copied();
                best_route(grid, SearchMode::Permissive, targets).map(Decision::Follow)
            }
            Goal::Settle => {
                let mut scratch = grid.clone();
                match scratch.apply_turn(Command::Wait) {
                    Ok(_) if scratch.changed() => Some(Decision::Immediate(Command::Wait)),
                    _ => None,
                }
            }
            Goal::ClearBoulder => clear_boulder(grid).map(Decision::Follow),
            Goal::GiveUp => Some(Decision::Immediate(Command::Abort)),
        }
    }
}

/// Lowest weighted-cost route among `targets`, first one found wins ties
fn best_route<I>(grid: &GridState, mode: SearchMode, targets: I) -> Option<Route>
where
    I: IntoIterator<Item = Point>,
{
    let mut finder = PathFinder::new(grid, mode);
    let mut best: Option<Route> = None;

    for target in targets {
        let Some(route) = finder.route_to(target) else {
            continue;
        };
        if route.is_empty() {
            continue;
        }
        if best
            .as_ref()
            .map_or(true, |b| route.weighted_cost() < b.weighted_cost())
        {
            best = Some(route);
        }
    }
    best
}

/// Shift a boulder out of the way: push it sideways, dig out the earth next
/// to it, or stand under it. Stops at the first boulder that has a route.
fn clear_boulder(grid: &GridState) -> Option<Route> {
    let mut finder = PathFinder::new(grid, SearchMode::Permissive);

    for &boulder in grid.boulders() {
        if !grid.is_movable_boulder(boulder) {
            continue;
        }

        let (approach, push) = if grid.at(boulder.right()).is_empty() {
            (boulder.left(), Some(Command::Right))
        } else if grid.at(boulder.left()).is_empty() {
            (boulder.right(), Some(Command::Left))
        } else if grid.at(boulder.right()) == Tile::Earth {
            (boulder.right(), None)
        } else if grid.at(boulder.left()) == Tile::Earth {
            (boulder.left(), None)
        } else if grid.at(boulder.down()).is_traversable() {
            (boulder.down(), None)
        } else {
            continue;
        };

        let Some(mut route) = finder.route_to(approach) else {
            continue;
        };
        if let Some(push) = push {
            route.push(push);
            route.pushes_boulder = true;
            route.disturbs_boulder = true;
        }
        if !route.is_empty() {
            return Some(route);
        }
    }
    None
}

/// Greedy goal policy with a cached route.
///
/// A cached route is served until it runs out, the last physics step moved
/// something, or its next command is no longer legal; then the goals are
/// consulted again in order.
pub struct DecisionController {
    policy: Vec<Goal>,
    route: Option<Route>,
    state: ControllerState,
}

impl DecisionController {
    pub fn new() -> Self {
        Self::with_policy(POLICY.to_vec())
    }

    pub fn with_policy(policy: Vec<Goal>) -> Self {
        Self {
            policy,
            route: None,
            state: ControllerState::Idle,
        }
    }

    /// Reason behind the most recent decision
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Commands still queued from the last plan
    pub fn cached_route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Next command for `grid`; always legal on that grid
    pub fn next_move(&mut self, grid: &GridState) -> Command {
        if let Some(command) = self.next_cached(grid) {
            return command;
        }
        self.route = None;

        for &goal in &self.policy {
            let Some(decision) = goal.evaluate(grid) else {
                continue;
            };
            self.state = goal.state();
            match decision {
                Decision::Immediate(command) => return command,
                Decision::Follow(mut route) => {
                    let Some(command) = route.next_command() else {
                        continue;
                    };
                    if !route.is_empty() {
                        self.route = Some(route);
                    }
                    return command;
                }
            }
        }

        self.state = ControllerState::GivingUp;
        Command::Abort
    }

    fn next_cached(&mut self, grid: &GridState) -> Option<Command> {
        if grid.changed() {
            return None;
        }
        let route = self.route.as_mut()?;
        let command = route.peek()?;
        if !grid.is_legal_move(command) {
            return None;
        }
        route.next_command();
        if route.is_empty() {
            self.route = None;
        }
        Some(command)
    }
}

impl Default for DecisionController {
    fn default() -> Self {
        Self::new()
    }
}
