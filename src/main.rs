//! Headless episode runner (default binary).
//!
//! Plays episodes with the random baseline agent and prints one JSON summary
//! per episode on stdout. `--trace` additionally prints a JSON snapshot after
//! every step. Diagnostics go to stderr.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use rl_tetris::core::{GameConfig, GameState};
use rl_tetris::engine::{run_episode_with, DropSchedule, Environment, RandomAgent};

#[derive(Parser, Debug)]
#[command(name = "rl-tetris")]
#[command(version, about = "Run falling-block episodes with a random agent")]
struct Args {
    /// Number of episodes to play
    #[arg(short, long, default_value = "1")]
    episodes: u32,

    /// Seed for piece selection (the agent uses seed + 1)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Maximum steps per episode (0 = unlimited)
    #[arg(short, long, default_value = "10000")]
    max_steps: u32,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Issue one soft drop after every N agent steps (0 = off)
    #[arg(long, default_value = "0")]
    gravity_every: u32,

    /// JSON file with a game configuration; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON snapshot after every step
    #[arg(long)]
    trace: bool,
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config.validate().context("invalid game configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let state = GameState::with_config(config)?;
    let mut env = Environment::new(state).with_schedule(DropSchedule::every(args.gravity_every));
    let mut agent = RandomAgent::new(config.seed.wrapping_add(1));

    eprintln!(
        "[Runner] {} episode(s) on {}x{}, seed {}",
        args.episodes, config.width, config.height, config.seed
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut total_lines = 0u64;
    let mut total_reward = 0.0f64;

    for episode in 1..=args.episodes {
        let mut trace_err = None;
        let summary = run_episode_with(&mut env, &mut agent, args.max_steps, |_, env| {
            if !args.trace || trace_err.is_some() {
                return;
            }
            let written = serde_json::to_writer(&mut out, env.snapshot())
                .map_err(anyhow::Error::from)
                .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
            if let Err(e) = written {
                trace_err = Some(e);
            }
        });
        if let Some(e) = trace_err {
            return Err(e.context("writing trace"));
        }

        serde_json::to_writer(&mut out, &summary).context("writing summary")?;
        writeln!(out)?;

        total_lines += u64::from(summary.lines_cleared);
        total_reward += summary.total_reward;
        eprintln!(
            "[Runner] episode {}: {} steps, {} lines, reward {:.1}{}",
            episode,
            summary.steps,
            summary.lines_cleared,
            summary.total_reward,
            if summary.game_over { "" } else { " (step cap)" }
        );
    }

    out.flush()?;
    eprintln!(
        "[Runner] done: {} lines, mean reward {:.2}, highscore {}",
        total_lines,
        total_reward / f64::from(args.episodes.max(1)),
        env.state().highscore()
    );
    Ok(())
}
