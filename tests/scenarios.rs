// End-to-end runs of the library on small hand-made mines.

use lambda_lifter::prelude::*;
use lambda_lifter::simulation::{ControllerState, EndReason, SearchMode, StopKind};
use lambda_lifter::world::parse_level_from_str;

fn grid(src: &str) -> GridState {
    GridState::new(&parse_level_from_str(src).unwrap())
}

fn quiet() -> OrchestratorConfig {
    OrchestratorConfig {
        time_limit: None,
        suppress_events: true,
        ..OrchestratorConfig::default()
    }
}

#[test]
fn collects_reward_then_leaves() {
    let mut g = grid("#####\n# \\O#\n# R #\n#####\n");

    let plan = TurnBudgetOrchestrator::new(quiet()).run(&mut g).unwrap();

    assert_eq!(plan.stop, StopKind::Completion);
    assert_eq!(g.state(), LifecycleState::Completed);
    assert_eq!(g.move_count(), 2);
    assert_eq!(g.score(), -(g.move_count() as i64) + 25 + 50);
    assert_eq!(plan.command_stream(), "UR");
}

#[test]
fn pushes_boulder_off_the_only_path() {
    // the boulder rests right above the only way down to the reward, with
    // room on its left
    let mut g = grid("######\n# *R #\n#\\.###\n######\n");
    let mut controller = DecisionController::new();

    assert_eq!(controller.next_move(&g), Command::Left);
    assert_eq!(controller.state(), ControllerState::SeekingReward);

    let plan = TurnBudgetOrchestrator::new(quiet()).run(&mut g).unwrap();
    assert_eq!(plan.command_stream(), "LDLA");
    assert_eq!(g.rewards_collected(), 1);
    assert_eq!(g.at(Point::new(1, 2)), Tile::Boulder);
    assert_eq!(g.score(), 22 + 25);
}

#[test]
fn pushes_blocking_boulder_aside() {
    // the boulder sits on the only way up to the reward
    let g = grid("######\n#  \\ #\n#  ###\n# *R #\n######\n");
    let mut controller = DecisionController::new();

    let first = controller.next_move(&g);
    assert_eq!(first, Command::Left);
    assert_eq!(controller.state(), ControllerState::SeekingReward);

    let mut g = g;
    let plan = TurnBudgetOrchestrator::new(quiet()).run(&mut g).unwrap();
    assert_eq!(plan.commands.first(), Some(&Command::Left));
    assert_eq!(g.rewards_collected(), 1);
}

#[test]
fn enclosed_reward_is_skipped() {
    let g = grid(concat!(
        "#########\n",
        "#..***..#\n",
        "#..*\\*..#\n",
        "#..***..#\n",
        "#.......#\n",
        "#R.....L#\n",
        "#########\n",
    ));
    let reward = Point::new(4, 4);
    assert_eq!(g.at(reward), Tile::Reward);

    assert!(PathFinder::new(&g, SearchMode::Permissive).route_to(reward).is_none());
    assert!(PathFinder::new(&g, SearchMode::Cautious).route_to(reward).is_none());

    let mut controller = DecisionController::new();
    let command = controller.next_move(&g);
    assert_ne!(controller.state(), ControllerState::SeekingReward);
    assert!(g.is_legal_move(command));
}

#[test]
fn drowns_on_the_turn_the_water_passes_the_robot() {
    let mut g = grid("#####\n#R  #\n#####\n\nWater 0\nFlooding 2\nWaterproof 0\n");

    // line rises to 1 after turn 2 and to 2 after turn 4; the robot is on row 1
    for turn in 1..=3 {
        g.apply_turn(Command::Wait).unwrap();
        assert_eq!(g.state(), LifecycleState::Active, "turn {}", turn);
    }
    g.apply_turn(Command::Wait).unwrap();
    assert_eq!(g.water_level(), 2);
    assert_eq!(g.state(), LifecycleState::Drowned);
    assert_eq!(g.move_count(), 4);
}

#[test]
fn planner_aborts_rather_than_drown() {
    let mut g = grid("##########\n#R      \\#\n##########\n\nWater 0\nFlooding 2\nWaterproof 0\n");

    let plan = TurnBudgetOrchestrator::new(quiet()).run(&mut g).unwrap();

    assert_eq!(plan.end_reason, EndReason::Finished(LifecycleState::Drowned));
    assert_eq!(plan.commands, vec![Command::Abort]);
    assert_eq!(g.state(), LifecycleState::VoluntarilyStopped);
    assert_eq!(g.score(), 0);
}

#[test]
fn banks_rewards_when_exit_is_out_of_reach() {
    // second reward is walled off, so the exit never opens
    let mut g = grid("#######\n#R\\ #\\#\n#######\n");

    let plan = TurnBudgetOrchestrator::new(quiet()).run(&mut g).unwrap();

    assert_eq!(plan.stop, StopKind::Abort);
    assert_eq!(plan.command_stream(), "RA");
    assert_eq!(g.state(), LifecycleState::VoluntarilyStopped);
    assert_eq!(g.score(), 24 + 25);
}
