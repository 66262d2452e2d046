//! relines CLI - reMarkable `.lines` to SVG converter
//!
//! Thin wrapper around `relines_backend::LinesConverter`: argument parsing,
//! logger setup, and a human-readable summary line. All decoding and
//! rendering behavior lives in the library crates.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use relines_backend::LinesConverter;
use relines_core::{RenderOptions, NATIVE_HEIGHT, NATIVE_WIDTH};
use std::path::{Path, PathBuf};

/// Convert a reMarkable `.lines` notebook page to SVG
#[derive(Debug, Parser)]
#[command(
    name = "relines",
    version,
    about = "Convert reMarkable .lines notebook pages to SVG"
)]
struct Args {
    /// Input .lines file
    input: PathBuf,

    /// Output SVG path (defaults to the input path with an .svg extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output canvas width in pixels
    #[arg(long, default_value_t = NATIVE_WIDTH)]
    width: f32,

    /// Output canvas height in pixels
    #[arg(long, default_value_t = NATIVE_HEIGHT)]
    height: f32,

    /// Render color indices 0/1 as blue/red instead of black/grey
    #[arg(long)]
    colored_annotations: bool,

    /// Print the decoded document model as JSON to stdout
    #[arg(long)]
    dump_json: bool,

    /// Surface every recovery decision taken on damaged input
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Verbosity level for output control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    /// Suppress all output except errors
    Quiet,
    /// Summary line only; silent on recoverable decode conditions
    Normal,
    /// Every recovery decision as a diagnostic line on stderr
    Verbose,
}

impl Verbosity {
    /// Create from CLI flags
    const fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if the summary line should be shown
    const fn should_show_output(self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Log filter realizing this verbosity
    ///
    /// Recoverable conditions are logged at `warn!` by the library crates;
    /// only `Verbose` lets them through.
    const fn log_level(self) -> log::LevelFilter {
        match self {
            Self::Quiet | Self::Normal => log::LevelFilter::Error,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Derive the output path from the input file
///
/// Given "notebook/page.lines", returns "notebook/page.svg".
fn smart_output_path(input: &Path) -> PathBuf {
    input.with_extension("svg")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);
    env_logger::Builder::new()
        .filter_level(verbosity.log_level())
        .format_timestamp(None)
        .init();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| smart_output_path(&args.input));
    let options = RenderOptions::default()
        .with_canvas(args.width, args.height)
        .with_colored_annotations(args.colored_annotations);

    let result = LinesConverter::new()
        .convert_file(&args.input, &options)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    if args.dump_json {
        let json = serde_json::to_string_pretty(&result.document)
            .context("failed to serialize document model")?;
        println!("{json}");
    }

    result
        .save(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    if verbosity.should_show_output() {
        let document = &result.document;
        let summary = format!(
            "{} → {} ({} layers, {} strokes, {:?})",
            args.input.display(),
            output.display(),
            document.layers.len(),
            document.stroke_count(),
            result.latency
        );
        println!("{} {summary}", "✓".green().bold());
        if !result.warnings.is_empty() && verbosity == Verbosity::Normal {
            println!(
                "  {} {} recovery decision(s) taken, re-run with --verbose for details",
                "!".yellow().bold(),
                result.warnings.len()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Verbose);
    }

    #[test]
    fn normal_mode_is_silent_on_recoverables() {
        assert_eq!(Verbosity::Normal.log_level(), log::LevelFilter::Error);
        assert_eq!(Verbosity::Verbose.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn output_path_swaps_extension() {
        let out = smart_output_path(Path::new("notes/page.lines"));
        assert_eq!(out, Path::new("notes/page.svg"));
    }
}
