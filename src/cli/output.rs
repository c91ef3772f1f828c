use crate::CheckResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonViolation {
    file: String,
    line: usize,
    code: String,
    message: String,
    sentence: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    files_checked: usize,
    total_violations: usize,
    violations: Vec<JsonViolation>,
}

pub fn print_violations(
    file_path: &Path,
    result: &CheckResult,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_violations(file_path, result, colored_output),
        OutputFormat::Json => print_json_violations(file_path, result),
    }
}

fn print_text_violations(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.violations.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for violation in &result.violations {
        let line_info = format!("{}:", violation.line);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                violation.kind.message().red().bold(),
                format_context(&violation.sentence, colored_output)
            );
        } else {
            println!(
                "  {} {} {}",
                line_info,
                violation.kind.message(),
                format_context(&violation.sentence, colored_output)
            );
        }
    }
}

fn print_json_violations(file_path: &Path, result: &CheckResult) {
    let json_violations: Vec<JsonViolation> = result
        .violations
        .iter()
        .map(|v| JsonViolation {
            file: file_path.display().to_string(),
            line: v.line,
            code: v.kind.code().to_string(),
            message: v.kind.message().to_string(),
            sentence: v.sentence.clone(),
        })
        .collect();

    let output = JsonOutput {
        files_checked: 1,
        total_violations: result.violation_count,
        violations: json_violations,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

/// Shorten long sentences so a finding stays on one terminal line.
fn format_context(sentence: &str, colored: bool) -> String {
    let mut context: String = sentence.chars().take(60).collect();
    if sentence.chars().count() > 60 {
        context.push_str("...");
    }
    if colored {
        context.dimmed().to_string()
    } else {
        context
    }
}

pub fn print_check_summary(total_violations: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_violations == 0 {
        if colored {
            println!("{}", "✓ No proofreading issues found!".green().bold());
        } else {
            println!("✓ No proofreading issues found!");
        }
    } else {
        let issue_word = if total_violations == 1 {
            "issue"
        } else {
            "issues"
        };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_violations.to_string().red().bold(),
                issue_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_violations,
                issue_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
