//! Reverse rotation generator CLI
//!
//! With no arguments, prints the mirrored rotations to stdout.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rotation_mirror::MirrorConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rotation-mirror")]
#[command(about = "Generate reverse cube rotations from the forward ones", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file overriding markers, offsets and suffix
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mirrored rotations (default)
    Emit {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a generated file is in sync with the embedded rotations
    Check {
        /// Previously generated file
        #[arg(long)]
        against: PathBuf,
    },

    /// Check that every mirrored rotation undoes its forward rotation
    Verify,
}

fn main() -> Result<()> {
    // stdout carries the generated text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Using config: {}", path.display());
            MirrorConfig::load(path)?
        }
        None => MirrorConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Emit { output: None }) {
        Commands::Emit { output: None } => {
            let stdout = std::io::stdout();
            rotation_mirror::emit(&config, &mut stdout.lock())?;
        }
        Commands::Emit {
            output: Some(path),
        } => {
            rotation_mirror::emit_to_file(&config, &path)?;
        }
        Commands::Check { against } => {
            println!("Checking mirrored rotations are in sync...");
            if !rotation_mirror::check_against(&config, &against)? {
                anyhow::bail!(
                    "Mirrored rotations are out of sync. Run 'rotation-mirror emit -o {}' to regenerate.",
                    against.display()
                );
            }
        }
        Commands::Verify => {
            println!("Verifying mirrored rotations...");
            let report = rotation_mirror::verify_embedded(&config)?;
            for pair in &report.pairs {
                let mark = if pair.passed() { "✓" } else { "✗" };
                println!("  {} {} -> {}", mark, pair.forward, pair.mirrored);
            }
            if !report.passed() {
                anyhow::bail!("Mirrored rotations do not invert their forward rotations");
            }
            println!("✓ All {} rotations invert cleanly!", report.pairs.len());
        }
    }

    Ok(())
}
