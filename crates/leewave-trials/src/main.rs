//! Run random pathfinding trials and print each searched field.
//!
//! Run: cargo run --bin leewave -- --trials 5 --seed 1

use std::io::{self, BufRead, Write};

use clap::Parser;
use leewave_paths::FieldConfig;
use leewave_trials::{TrialConfig, TrialGen, render, term};
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "leewave", version, about = "Shortest paths on random walled grids")]
struct Args {
    /// Number of trials to run.
    #[arg(short = 'n', long, default_value_t = 1000)]
    trials: usize,

    /// Field height.
    #[arg(long, default_value_t = FieldConfig::ROWS)]
    rows: i32,

    /// Field width.
    #[arg(long, default_value_t = FieldConfig::COLS)]
    cols: i32,

    /// Upper bound on walls, as a share of all cells.
    #[arg(long, default_value_t = 0.5)]
    wall_ratio: f64,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for Enter after every trial.
    #[arg(long)]
    pause: bool,

    /// Print without colours.
    #[arg(long)]
    plain: bool,
}

impl Args {
    fn config(&self) -> TrialConfig {
        TrialConfig {
            field: FieldConfig::new(self.rows, self.cols),
            max_wall_ratio: self.wall_ratio,
            trials: self.trials,
            seed: self.seed,
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config();
    let seed = config.seed.unwrap_or_else(|| rand::rng().random::<u64>());
    log::info!("seed {seed}, {} trials", config.trials);

    let trials = config.trials;
    let mut tg = TrialGen::new(config, SmallRng::seed_from_u64(seed))?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for i in 0..trials {
        let trial = tg.run_trial()?;
        match trial.steps() {
            Some(steps) => log::debug!("trial {i}: {} walls, {steps} steps", trial.walls),
            None => log::debug!("trial {i}: {} walls, no route", trial.walls),
        }

        if args.plain {
            write!(stdout, "{}", render(&trial.field))?;
        } else {
            term::write_field(&mut stdout, &trial.field)?;
        }
        writeln!(stdout)?;
        writeln!(stdout, "{i}")?;
        stdout.flush()?;

        if args.pause {
            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
