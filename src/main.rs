//! linedup: streaming duplicate-line removal
//!
//! Usage: linedup <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;

use linedup::commands::{create_output, DedupCommand, GenerateCommand, GenerateConfig};
use linedup::error::Result;

#[derive(Parser)]
#[command(name = "linedup")]
#[command(version)]
#[command(about = "Remove duplicate lines from large text files, streaming", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove duplicate lines, keeping first occurrences in order
    Dedup {
        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite the output file if it already exists
        #[arg(long)]
        force: bool,

        /// Print dedup statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Generate a synthetic line corpus with planted duplicates
    Generate {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of lines to generate
        #[arg(short = 'n', long, default_value = "1000000")]
        lines: u64,

        /// Approximate fraction of duplicate lines (0..=1)
        #[arg(long, default_value = "0.2")]
        duplicate_frac: f64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Print generation statistics to stderr
        #[arg(long)]
        stats: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dedup {
            input,
            output,
            force,
            stats,
        } => run_dedup(input, output, force, stats),

        Commands::Generate {
            output,
            lines,
            duplicate_frac,
            seed,
            force,
            stats,
        } => run_generate(output, lines, duplicate_frac, seed, force, stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_dedup(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    force: bool,
    print_stats: bool,
) -> Result<()> {
    let cmd = DedupCommand::new().with_force(force);

    // `-` or omission selects stdin/stdout
    let input = input.filter(|p| p.to_string_lossy() != "-");
    let output = output.filter(|p| p.to_string_lossy() != "-");

    let stats = match (input, output) {
        (Some(in_path), Some(out_path)) => cmd.run_paths(&in_path, &out_path)?,

        (Some(in_path), None) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            cmd.run(&in_path, &mut handle)?
        }

        (None, Some(out_path)) => {
            let mut out = create_output(&out_path, force)?;
            cmd.run_stdin(&mut out)?
        }

        (None, None) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            cmd.run_stdin(&mut handle)?
        }
    };

    if print_stats {
        eprintln!("Dedup stats: {}", stats);
    }

    Ok(())
}

fn run_generate(
    output: PathBuf,
    lines: u64,
    duplicate_frac: f64,
    seed: u64,
    force: bool,
    print_stats: bool,
) -> Result<()> {
    let config = GenerateConfig {
        output,
        lines,
        duplicate_frac,
        seed,
        force,
    };

    let cmd = GenerateCommand::new(config);
    let stats = cmd.run()?;

    if print_stats {
        eprintln!("Generate stats: {}", stats);
    }

    Ok(())
}
