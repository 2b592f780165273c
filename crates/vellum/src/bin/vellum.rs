//! # VELLUM Runner
//!
//! Renders one frame of the sketch and prints its display list.
//!
//! ```bash
//! # Random seed, default 1080x1080 canvas
//! vellum
//!
//! # Reproduce a piece
//! vellum sketch.toml --seed 1234
//!
//! # See what the engine is doing
//! RUST_LOG=debug vellum --seed 1234
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vellum::cli::USAGE;
use vellum::{CliArgs, Design, SketchResult};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vellum: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> SketchResult<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = args.load_config()?;
    let mut design = Design::from_config(&config);
    let seed = design.seed();

    let commands = design.render()?;
    tracing::info!(%seed, commands = commands.len(), "frame complete");

    println!("# seed {seed}");
    for command in commands {
        println!("{command}");
    }
    Ok(())
}
