mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "framesync")]
#[command(about = "Framesync - Checksum-framed stream packing and recovery", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack raw bytes into checksum-terminated frames
    Pack {
        /// Input file of raw bytes
        #[arg(short, long)]
        input: String,

        /// Output file for the frame stream
        #[arg(short, long)]
        output: String,

        /// Frame length in bytes, trailing checksum included
        #[arg(short, long)]
        length: usize,
    },

    /// Synchronize against a (possibly damaged) stream and recover frames
    Scan {
        /// Input file to scan
        #[arg(short, long)]
        input: String,

        /// Output JSON file for recovered frames
        #[arg(short, long)]
        output: Option<String>,

        /// Frame length in bytes, trailing checksum included
        #[arg(short, long)]
        length: usize,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Strictly verify a frame-aligned file
    Verify {
        /// Input file to verify
        #[arg(short, long)]
        input: String,

        /// Frame length in bytes, trailing checksum included
        #[arg(short, long)]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Pack {
            input,
            output,
            length,
        } => commands::pack::execute(&input, &output, length),

        Commands::Scan {
            input,
            output,
            length,
            stats_only,
        } => commands::scan::execute(&input, output.as_deref(), length, stats_only),

        Commands::Verify { input, length } => commands::verify::execute(&input, length),
    }
}
