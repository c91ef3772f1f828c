pub mod capital;
pub mod quotation;

use crate::cli::output::{print_violations, OutputFormat};
use crate::config::Config;
use crate::{CheckResult, Sentence, Violation};
use anyhow::{Context, Result};
use capital::CapitalCheck;
use quotation::QuotationCheck;
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::Path;

pub const QUOTATION_CHECK: &str = "quotation";
pub const CAPITAL_CHECK: &str = "start-with-capital";

/// Runs every enabled sentence check and merges their findings.
pub struct ProseChecker {
    quotation: Option<QuotationCheck>,
    capital: Option<CapitalCheck>,
    ignore_patterns: Vec<Regex>,
}

impl ProseChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let quotation = if config.check_enabled(QUOTATION_CHECK) {
            Some(QuotationCheck::new(config).context("Failed to configure the quotation check")?)
        } else {
            None
        };

        let capital = if config.check_enabled(CAPITAL_CHECK) {
            Some(CapitalCheck::new(config)?)
        } else {
            None
        };

        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid regex pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self {
            quotation,
            capital,
            ignore_patterns,
        })
    }

    /// Check one file and print its violations in the requested format.
    pub fn check_file(
        &self,
        file_path: &Path,
        colored: bool,
        format: &OutputFormat,
    ) -> Result<CheckResult> {
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let sentences = crate::parser::parse_file(file_path, &content)?;
        let violations = self.check_sentences(&sentences);

        let result = CheckResult {
            violation_count: violations.len(),
            violations,
        };

        print_violations(file_path, &result, colored, format);

        Ok(result)
    }

    /// Check a batch of sentences. Sentences are independent and the checks
    /// share no mutable state, so the batch runs in parallel; the returned
    /// list follows input order.
    pub fn check_sentences(&self, sentences: &[Sentence]) -> Vec<Violation> {
        let per_sentence: Vec<Vec<Violation>> = sentences
            .par_iter()
            .map(|sentence| {
                if self.should_ignore(&sentence.content) {
                    Vec::new()
                } else {
                    self.check_sentence(sentence)
                }
            })
            .collect();

        per_sentence.into_iter().flatten().collect()
    }

    /// All violations for a single sentence: the quotation pair scan first,
    /// then the capitalization test.
    pub fn check_sentence(&self, sentence: &Sentence) -> Vec<Violation> {
        let mut violations = Vec::new();
        if let Some(quotation) = &self.quotation {
            violations.extend(quotation.check(sentence));
        }
        if let Some(capital) = &self.capital {
            violations.extend(capital.check(sentence));
        }
        violations
    }

    fn should_ignore(&self, content: &str) -> bool {
        self.ignore_patterns
            .iter()
            .any(|pattern| pattern.is_match(content))
    }
}
