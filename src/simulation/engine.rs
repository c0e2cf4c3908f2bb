use crate::cli::Args;
use crate::command::{command_stream, Command};
use crate::error::IllegalMove;
use crate::simulation::controller::DecisionController;
use crate::utils::DEFAULT_TIME_LIMIT_SECS;
use crate::world::{colorize, GridState, LifecycleState};
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Planning knobs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Wall-clock budget for the speculative run, `None` = unbounded
    pub time_limit: Option<Duration>,
    /// Cap on speculative turns, `None` = width × height
    pub max_moves: Option<usize>,
    /// Render every speculative turn and pause; disables the time limit
    pub trace_delay: Option<Duration>,
    pub suppress_events: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            time_limit: Some(Duration::from_secs(DEFAULT_TIME_LIMIT_SECS)),
            max_moves: None,
            trace_delay: None,
            suppress_events: false,
        }
    }
}

impl From<&Args> for OrchestratorConfig {
    fn from(args: &Args) -> Self {
        Self {
            time_limit: Some(Duration::from_secs(args.time_limit)),
            max_moves: args.max_moves,
            trace_delay: args.trace_delay.map(Duration::from_millis),
            suppress_events: args.suppress_events,
        }
    }
}

/// Cooperative stop flag, checked between turns
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How the chosen stopping point ends the run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopKind {
    /// Trailing abort to bank the bonus
    Abort,
    /// The robot reaches the exit, nothing appended
    Completion,
}

/// Why the speculative run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Finished(LifecycleState),
    Deadline,
    Cancelled,
    MoveCap,
}

/// Outcome of the speculative run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Commands to replay on the real grid, trailing abort included
    pub commands: Vec<Command>,
    pub best_turn: usize,
    pub best_score: i64,
    pub stop: StopKind,
    /// Turns the speculative run got through
    pub explored_turns: usize,
    pub end_reason: EndReason,
}

impl Plan {
    pub fn command_stream(&self) -> String {
        command_stream(&self.commands)
    }
}

/// Plays the controller out on a disposable copy under a time budget, keeps
/// the best stopping point, then replays that prefix on the real grid.
pub struct TurnBudgetOrchestrator {
    config: OrchestratorConfig,
    cancel: CancelToken,
}

impl TurnBudgetOrchestrator {
    pub fn new(config: OrchestratorConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
        }
    }

    /// Share an externally owned stop flag
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Plan on a copy of `grid` and replay the best prefix onto it
    pub fn run(&self, grid: &mut GridState) -> Result<Plan, IllegalMove> {
        let plan = self.plan(grid)?;
        Self::replay(&plan, grid)?;
        Ok(plan)
    }

    /// Speculative playthrough; `grid` itself is left untouched
    pub fn plan(&self, grid: &GridState) -> Result<Plan, IllegalMove> {
        let started = Instant::now();
        let deadline = match self.config.trace_delay {
            Some(_) => None,
            None => self.config.time_limit.map(|limit| started + limit),
        };
        let max_moves = self
            .config
            .max_moves
            .unwrap_or(grid.width() * grid.height());

        let mut scratch = grid.clone();
        let mut controller = DecisionController::new();
        let mut best_turn = 0usize;
        let mut best_score = 0i64;
        let mut stop = StopKind::Abort;

        let end_reason = loop {
            if !scratch.is_active() {
                break EndReason::Finished(scratch.state());
            }
            if self.cancel.is_cancelled() {
                break EndReason::Cancelled;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break EndReason::Deadline;
            }
            if scratch.move_count() >= max_moves {
                break EndReason::MoveCap;
            }

            let command = controller.next_move(&scratch);
            scratch.apply_turn(command)?;

            if let Some(delay) = self.config.trace_delay {
                self.trace(&scratch, &controller, delay);
            }

            if scratch.is_active() && scratch.abort_score() > best_score {
                best_turn = scratch.move_count();
                best_score = scratch.abort_score();
                self.log_best(best_turn, best_score, StopKind::Abort);
            } else if scratch.state() == LifecycleState::Completed && scratch.score() > best_score {
                best_turn = scratch.move_count();
                best_score = scratch.score();
                stop = StopKind::Completion;
                self.log_best(best_turn, best_score, stop);
            }
        };
        self.log_end(end_reason, scratch.move_count());

        let mut commands = scratch.history()[..best_turn].to_vec();
        if stop == StopKind::Abort {
            commands.push(Command::Abort);
        }

        Ok(Plan {
            commands,
            best_turn,
            best_score,
            stop,
            explored_turns: scratch.move_count(),
            end_reason,
        })
    }

    /// Apply a plan to the authoritative grid
    pub fn replay(plan: &Plan, grid: &mut GridState) -> Result<(), IllegalMove> {
        for &command in &plan.commands {
            grid.apply_turn(command)?;
        }
        Ok(())
    }

    fn trace(&self, grid: &GridState, controller: &DecisionController, delay: Duration) {
        println!("{}", colorize(grid));
        println!(
            "{} {}  {} {}  {} {}  {} {}",
            "turn".dimmed(),
            grid.move_count(),
            "score".dimmed(),
            grid.score(),
            "state".dimmed(),
            grid.state(),
            "doing".dimmed(),
            controller.state().to_string().cyan()
        );
        std::thread::sleep(delay);
    }

    #[inline]
    fn log_best(&self, turn: usize, score: i64, stop: StopKind) {
        if self.config.suppress_events {
            return;
        }
        let how = match stop {
            StopKind::Abort => "abort".yellow(),
            StopKind::Completion => "exit".green(),
        };
        println!(
            "{} {} {} {}",
            "⛏️ ".bright_yellow(),
            format!("best stop at turn {}", turn).bright_white(),
            format!("score={}", score).cyan(),
            how
        );
    }

    fn log_end(&self, reason: EndReason, turns: usize) {
        if self.config.suppress_events {
            return;
        }
        let message = match reason {
            EndReason::Finished(LifecycleState::Completed) => "robot reached the exit".green(),
            EndReason::Finished(LifecycleState::Crushed) => "robot was crushed".red(),
            EndReason::Finished(LifecycleState::Drowned) => "robot drowned".red(),
            EndReason::Finished(_) => "controller gave up".yellow(),
            EndReason::Deadline => "time budget spent".yellow(),
            EndReason::Cancelled => "planning cancelled".yellow(),
            EndReason::MoveCap => "move cap reached".yellow(),
        };
        println!(
            "{} {} {}",
            "🏁".bright_blue(),
            message,
            format!("after {} turns", turns).dimmed()
        );
    }

    /// Print the final result line and the command stream
    pub fn print_summary(
        &self,
        name: &str,
        grid: &GridState,
        plan: &Plan,
        elapsed: Duration,
    ) {
        println!(
            "\n{}\n{:<20}  {} {:>5}   {} {:>3}   {} {:<7}  {} {:.3} ms",
            "===".bright_blue().bold(),
            name,
            "Score:".green().bold(),
            grid.score(),
            "Moves:".green().bold(),
            grid.move_count(),
            "State:".green().bold(),
            grid.state(),
            "Time:".green().bold(),
            elapsed.as_secs_f64() * 1000.0,
        );
        println!("{}", plan.command_stream().cyan());
    }
}
