use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use prosechk::cli::output::OutputFormat;
use prosechk::{checker, cli, Config};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "prosechk")]
#[command(version, about = "A fast proofreading linter for prose", long_about = None)]
struct Cli {
    /// Files or directories to check
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Use ASCII quotation symbols (' and ") instead of typographic ones
    #[arg(short, long)]
    ascii_quotes: bool,

    /// Sentence terminator symbol exempt from the quote spacing rule
    #[arg(long, value_name = "SYMBOL")]
    full_stop: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if violations are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Pattern for sentences to skip (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "prosechk", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.ascii_quotes,
        cli.full_stop.clone(),
        cli.ignore_pattern.clone(),
    )?;

    // Validate input files
    if cli.paths.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let files = collect_files(&cli.paths);
    if files.is_empty() {
        anyhow::bail!("No checkable files found under the given paths.");
    }

    // Initialize checker
    let checker = checker::ProseChecker::new(&config)?;

    // Process files
    let mut total_violations = 0;

    for file_path in &files {
        let result = checker.check_file(file_path, !cli.no_color, &cli.format)?;
        total_violations += result.violation_count;
    }

    // Print summary
    cli::output::print_check_summary(total_violations, &files, !cli.no_color);

    // Exit with appropriate code
    if total_violations > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Expand directory arguments into the text and markdown files below them.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() && is_checkable(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.exists() {
            files.push(path.clone());
        } else {
            eprintln!("Error: File not found: {}", path.display());
        }
    }

    files
}

fn is_checkable(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref(),
        Some("md" | "mdx" | "markdown" | "txt" | "text")
    )
}
