//! bookchunk - cut extracted book text into speech-synthesis-ready chunks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use bookchunk::config::BookchunkConfig;
use bookchunk::{PreprocessOptions, preprocess};

#[derive(Parser, Debug)]
#[command(name = "bookchunk")]
#[command(about = "Cut extracted book text into speech-synthesis-ready chunks", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a UTF-8 text file (already extracted from its source format)
    input: Option<PathBuf>,

    /// Maximum characters per chunk (overrides config)
    #[arg(long)]
    max_chars: Option<usize>,

    /// Strip publishing boilerplate and TOC-like blocks
    #[arg(long)]
    filter_meta: bool,

    /// Write chunks as chunk_NNNN.txt files into this directory instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress the summary printed to stderr
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default chunk budget
    SetMaxChars {
        /// Maximum characters per chunk (must be positive)
        value: usize,
    },
    /// Enable or disable boilerplate filtering by default
    SetFilterMeta {
        /// true or false
        value: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let input = args
        .input
        .clone()
        .context("the following arguments are required: input")?;

    let config = BookchunkConfig::load().context("Failed to load configuration")?;
    let options = PreprocessOptions {
        max_chars: args.max_chars.unwrap_or(config.max_chars),
        filter_meta: args.filter_meta || config.filter_meta,
    };

    let raw = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    if !args.quiet {
        eprintln!("Preprocessing {}...", input.display());
    }

    let chunks = preprocess(&raw, &options)?;

    if chunks.is_empty() {
        eprintln!("No text chunks to process");
        std::process::exit(1);
    }

    if !args.quiet {
        eprintln!("Generated {} chunks", chunks.len());
    }

    match &args.output {
        Some(dir) => write_chunks(dir, &chunks)?,
        None => {
            for chunk in &chunks {
                println!("{chunk}");
                println!();
            }
        }
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Write one chunk_NNNN.txt per chunk, in reading order.
fn write_chunks(dir: &Path, chunks: &[String]) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    for (i, chunk) in chunks.iter().enumerate() {
        let path = dir.join(format!("chunk_{i:04}.txt"));
        fs::write(&path, chunk)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = BookchunkConfig::load()?;
            println!("Config file: {}", BookchunkConfig::config_path()?.display());
            println!("  max_chars:   {}", config.max_chars);
            println!("  filter_meta: {}", config.filter_meta);
        }
        ConfigAction::SetMaxChars { value } => {
            if *value == 0 {
                anyhow::bail!("max_chars must be positive");
            }
            let mut config = BookchunkConfig::load()?;
            config.max_chars = *value;
            config.save()?;
            println!("Default max_chars set to {value}");
        }
        ConfigAction::SetFilterMeta { value } => {
            let mut config = BookchunkConfig::load()?;
            config.filter_meta = *value;
            config.save()?;
            println!("Default filter_meta set to {value}");
        }
    }
    Ok(())
}
