//! Draws an L-System from a description file and writes a replay script.
//!
//! ```text
//! lsystem-turtle -i arbre.txt -o sortie.py --rgb
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use lsystem_turtle::{Canvas, LSystemConfig, ReplayScript, TurtleInterpreter, expand};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "lsystem-turtle")]
#[command(about = "Draws an L-System and generates a Python turtle script replaying it")]
#[command(after_help = "Example: lsystem-turtle -i arbre.txt -o sortie.py --rgb")]
struct Cli {
    /// Path of the L-System description file
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the generated replay script
    #[arg(short, long, default_value = "./output.py")]
    output: PathBuf,

    /// Cycle the pen colour while drawing
    #[arg(long)]
    rgb: bool,

    /// Also dump the drawn strokes as JSON
    #[arg(long)]
    strokes: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = LSystemConfig::load(&cli.input)
        .with_context(|| format!("could not load {}", cli.input.display()))?;

    let sequence = expand(&config.axiom, &config.rules, config.levels)?;
    info!(len = sequence.len(), levels = config.levels, "axiom expanded");

    let mut turtle_config = config.turtle_config();
    turtle_config.color_cycling |= cli.rgb;
    let interpreter = TurtleInterpreter::new(turtle_config);

    let mut canvas = Canvas::new();
    let run = interpreter.interpret(&sequence, &mut canvas)?;
    if let Some((min, max)) = canvas.bounds() {
        info!(
            strokes = canvas.strokes.len(),
            "drawing spans ({:.1}, {:.1}) to ({:.1}, {:.1})",
            min.x,
            min.y,
            max.x,
            max.y
        );
    }

    ReplayScript::new(&run.trace).save(&cli.output)?;

    if let Some(path) = &cli.strokes {
        let json = serde_json::to_string_pretty(&canvas).context("could not serialise strokes")?;
        std::fs::write(path, json)
            .with_context(|| format!("could not write {}", path.display()))?;
        info!(path = %path.display(), "strokes written");
    }

    info!(
        "script generated to {}, it can be launched using 'python {}'",
        cli.output.display(),
        cli.output.display()
    );
    Ok(())
}
