use clap::Parser;
use lambda_lifter::prelude::*;
use lambda_lifter::world::{parse_level, parse_level_from_reader};
use std::path::Path;
use std::time::Instant;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = OrchestratorConfig::from(&args);

    // Contest mode: level on stdin, nothing but the command stream on stdout
    let Some(map) = args.map.as_deref() else {
        config.suppress_events = true;
        config.trace_delay = None;
        let level = parse_level_from_reader(std::io::stdin().lock())?;
        let mut grid = GridState::new(&level);
        let plan = TurnBudgetOrchestrator::new(config).run(&mut grid)?;
        println!("{}", plan.command_stream());
        return Ok(());
    };

    let level = parse_level(map)?;
    let mut grid = GridState::new(&level);

    let started = Instant::now();
    let orchestrator = TurnBudgetOrchestrator::new(config);
    let plan = orchestrator.run(&mut grid)?;
    let elapsed = started.elapsed();

    let name = Path::new(map)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(map);
    orchestrator.print_summary(name, &grid, &plan, elapsed);
    if args.render {
        print!("{}", grid.snapshot());
    }

    Ok(())
}
