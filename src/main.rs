//! CLI entry point for truffula

use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use truffula::{TreeOptions, TruffulaPrinter};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "truffula")]
#[command(about = "Print a directory as an indented tree, colored by depth")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show hidden files and descend into hidden directories
    #[arg(short, long)]
    all: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let use_color = should_use_color(args.color);
    log::debug!("color mode {:?} resolved to {}", args.color, use_color);

    let options = TreeOptions::new(&args.path, args.all, use_color);
    let stdout = io::stdout();
    let mut printer = TruffulaPrinter::new(options, BufWriter::new(stdout.lock())).with_escapes(use_color);

    let result = printer
        .print_tree()
        .and_then(|()| printer.into_inner().flush().map_err(Into::into));

    if let Err(e) = result {
        eprintln!("truffula: {}", e);
        process::exit(1);
    }
}
