use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use term_2048::config::GameConfig;
use term_2048::engine::Game;
use term_2048::game::GameController;
use term_2048::input::KeyDecoder;
use term_2048::render::AnsiRenderer;
use term_2048::terminal::RawModeGuard;

#[derive(Debug, Parser)]
#[command(name = "term-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for tile spawning (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a new tile is a 2 rather than a 4
    #[arg(long, value_name = "P")]
    two_probability: Option<f64>,

    /// One-based terminal column of the board
    #[arg(long)]
    origin_x: Option<u16>,

    /// One-based terminal row of the board
    #[arg(long)]
    origin_y: Option<u16>,

    /// Skip the key guide screen
    #[arg(long)]
    no_guide: bool,
}

impl Args {
    fn apply(&self, cfg: &mut GameConfig) {
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(p) = self.two_probability {
            cfg.spawn_two_probability = p;
        }
        if let Some(x) = self.origin_x {
            cfg.origin_x = x;
        }
        if let Some(y) = self.origin_y {
            cfg.origin_y = y;
        }
        if self.no_guide {
            cfg.show_key_guide = false;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    args.apply(&mut cfg);
    cfg.validate()?;

    let game = Game::new(cfg.rng(), cfg.spawn_two_probability);
    let decoder = KeyDecoder::new(io::stdin().lock());
    let renderer = AnsiRenderer::new(io::stdout(), cfg.origin());

    // Declared before the controller so it is dropped after it.
    let _raw = RawModeGuard::acquire().context("failed to enter raw mode")?;
    let mut controller = GameController::new(game, decoder, renderer).with_key_guide(cfg.show_key_guide);
    controller.start()?;
    controller.run_until_quit()?;
    Ok(())
}
