//! # Lambda Lifter
//!
//! A robot clears rewards out of a collapsing mine and heads for the exit.
//!
//! This library provides the mine simulation (boulders, flooding, beard
//! growth, teleporters), an A* path finder over it, a greedy goal policy that
//! picks the next command, and a planner that plays that policy out under a
//! time budget and keeps the best place to stop.

pub mod cli;
pub mod command;
pub mod error;
pub mod point;
pub mod simulation;
pub mod utils;
pub mod world;

pub use cli::Args;
pub use command::Command;
pub use error::{IllegalMove, ParseError, Result};
pub use point::Point;
pub use simulation::{DecisionController, OrchestratorConfig, PathFinder, Plan, TurnBudgetOrchestrator};
pub use world::{GridState, LifecycleState, Tile};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Command, DecisionController, GridState, IllegalMove, LifecycleState, OrchestratorConfig,
        ParseError, PathFinder, Plan, Point, Result, Tile, TurnBudgetOrchestrator,
    };
}
