pub mod controller;
pub mod engine;
pub mod pathfinder;

pub use controller::{ControllerState, DecisionController, Goal, POLICY};
pub use engine::{CancelToken, EndReason, OrchestratorConfig, Plan, StopKind, TurnBudgetOrchestrator};
pub use pathfinder::{PathFinder, Route, SearchMode};
