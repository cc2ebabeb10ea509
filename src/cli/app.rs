//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use super::count::{self, CountMode, RunOptions};
use super::logging;
use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "textstat")]
#[command(author, version, about = "Count lines, words, letters and bytes in files")]
#[command(long_about = "Count lines, words, letters and bytes in files or standard input.

Lines are always shown. With none of -l/-w/-b, letters, words and bytes are
shown too. Several files are counted in parallel and followed by a total.

A letter is any Unicode letter, whatever the script. A word is a run of
letters, decimal digits, underscores, apostrophes or hyphens.")]
#[command(after_help = "Examples:
  textstat notes.txt -l -w          Letters, words and lines of one file
  textstat a.txt b.txt -f csv       Several files, CSV output with a total
  cat notes.txt | textstat line     Lines read from stdin")]
#[command(args_conflicts_with_subcommands = true)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Worker threads for counting several files (0 = one per CPU)
    #[arg(long, short = 'j', global = true, value_name = "N")]
    pub jobs: Option<usize>,

    /// Configuration file (TOML or YAML)
    #[arg(long, short = 'c', global = true, value_name = "PATH", env = "TEXTSTAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub counts: CountFlags,

    /// Files to count (reads stdin when omitted)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Field flags of the root command
#[derive(Args, Debug, Default)]
pub struct CountFlags {
    /// Show the letter count
    #[arg(long, short = 'l')]
    pub letters: bool,

    /// Show the word count
    #[arg(long, short = 'w')]
    pub words: bool,

    /// Show the byte count
    #[arg(long, short = 'b')]
    pub bytes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count lines
    ///
    /// Examples:
    ///   textstat line file.txt
    ///   textstat line *.txt
    ///   cat file.txt | textstat line
    Line {
        /// Files to count (reads stdin when omitted)
        paths: Vec<PathBuf>,
    },

    /// Count words
    Word {
        /// Files to count (reads stdin when omitted)
        paths: Vec<PathBuf>,
    },

    /// Count letters
    ///
    /// Examples:
    ///   textstat char file.txt
    ///   cat file.txt | textstat char
    Char {
        /// Files to count (reads stdin when omitted)
        paths: Vec<PathBuf>,
    },
}

impl Cli {
    /// Layers explicit flags over the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        config.letters |= self.counts.letters;
        config.words |= self.counts.words;
        config.bytes |= self.counts.bytes;
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
    }

    /// Splits the invocation into its mode and input paths
    pub fn into_mode(self) -> (CountMode, Vec<PathBuf>) {
        match self.command {
            None => (CountMode::Combined, self.paths),
            Some(Commands::Line { paths }) => (CountMode::Lines, paths),
            Some(Commands::Word { paths }) => (CountMode::Words, paths),
            Some(Commands::Char { paths }) => (CountMode::Letters, paths),
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    debug!("textstat starting");

    let mut config = Config::load(cli.config.as_deref());
    cli.apply_to(&mut config);

    let (mode, paths) = cli.into_mode();
    let options = RunOptions::resolve(mode, &config);

    let all_ok = count::run(&options, &paths)?;

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
