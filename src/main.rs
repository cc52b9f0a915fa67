//! Dot Circuit - Entry Point
//!
//! Runs the dot circulation simulation with the epsilon-greedy policy:
//! each cycle keys the grid state, chooses a barrier action, advances the
//! engine one step, records the outcome, and optionally publishes status
//! and log files for external collaborators.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dot_circuit::core::config::RunConfig;
use dot_circuit::core::error::Result;
use dot_circuit::policy::{choose_action, state_key, ExperienceHistory};
use dot_circuit::report::{append_log, write_status, CycleLog, StatusReport};
use dot_circuit::simulation::Engine;

#[derive(Parser, Debug)]
#[command(name = "dot-circuit", about = "Dot circulation simulation runner")]
struct Args {
    /// TOML run configuration; CLI flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid rows (including walls)
    #[arg(long)]
    rows: Option<usize>,

    /// Grid columns (including walls)
    #[arg(long)]
    cols: Option<usize>,

    /// Engine RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many cycles even if the run survives
    #[arg(long)]
    cycles: Option<u64>,

    /// Epsilon for the epsilon-greedy policy
    #[arg(long)]
    exploration_rate: Option<f64>,

    /// Render the board every N cycles
    #[arg(long)]
    render_every: Option<u64>,

    /// Directory for status.json / log.json
    #[arg(long)]
    report_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dot_circuit=info")),
        )
        .init();

    let args = Args::parse();

    let mut run = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(rows) = args.rows {
        run.engine.rows = rows;
    }
    if let Some(cols) = args.cols {
        run.engine.cols = cols;
    }
    if let Some(seed) = args.seed {
        run.engine.seed = seed;
    }
    if let Some(cycles) = args.cycles {
        run.max_cycles = cycles;
    }
    if let Some(rate) = args.exploration_rate {
        run.exploration_rate = rate;
    }
    if let Some(every) = args.render_every {
        run.render_every = every.max(1);
    }
    if let Some(dir) = args.report_dir {
        run.report_dir = Some(dir);
    }

    tracing::info!("Dot Circuit starting...");

    let mut engine = Engine::new(run.engine.clone())?;
    let mut history = ExperienceHistory::new();
    // a separate stream from the engine RNG keeps decision draws from
    // perturbing the replayable movement sequence
    let mut policy_rng = ChaCha8Rng::seed_from_u64(run.engine.seed.wrapping_add(1));

    if let Some(dir) = &run.report_dir {
        write_status(&dir.join("status.json"), &StatusReport::capture(&engine))?;
    }

    let render_every = run.render_every.max(1);

    while engine.cycle() < run.max_cycles && !engine.game_over() {
        let key = state_key(engine.grid());
        let action = choose_action(key, &history, run.exploration_rate, &mut policy_rng);
        let result = engine.step(action);

        // survival is success
        history.record(key, action, !result.game_over);

        if let Some(dir) = &run.report_dir {
            write_status(&dir.join("status.json"), &StatusReport::capture(&engine))?;
            append_log(
                &dir.join("log.json"),
                &CycleLog {
                    cycle: engine.cycle(),
                    state_key: key,
                    action: action.to_string(),
                    score_delta: result.score_delta,
                    trapped: result.trapped,
                    goal_placed: result.goal_placed,
                    success: !result.game_over,
                    score: engine.score(),
                    game_over: result.game_over,
                },
            )?;
        }

        if engine.cycle() % render_every == 0 || result.game_over {
            println!(
                "cycle {:>5}  action {}  score {:>4}",
                engine.cycle(),
                action,
                engine.score()
            );
            print!("{}", engine.grid());
        }
    }

    if engine.game_over() {
        tracing::info!(
            cycle = engine.cycle(),
            score = engine.score(),
            "run ended: a dot was trapped"
        );
    } else {
        tracing::info!(
            cycle = engine.cycle(),
            score = engine.score(),
            "cycle budget exhausted"
        );
    }
    println!(
        "\nfinished after {} cycles, final score {} ({} states remembered)",
        engine.cycle(),
        engine.score(),
        history.len()
    );

    Ok(())
}
