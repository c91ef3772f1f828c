use crate::config::Config;
use crate::{Sentence, Violation, ViolationKind};
use anyhow::{Context, Result};
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;

lazy_static! {
    // Product and technology names that legitimately start lowercase.
    static ref DEFAULT_WHITELIST: HashSet<&'static str> = [
        "iPhone", "iPad", "iPod", "iMac", "iOS", "iTunes", "iCloud", "eBay",
        "eSports", "mRNA", "tRNA", "pH", "macOS", "npm", "jQuery", "ffmpeg",
        "gcc", "git", "nginx", "systemd",
    ]
    .iter()
    .copied()
    .collect();
}

/// Checks that a sentence starts with a capital letter, unless its first
/// word is whitelisted.
pub struct CapitalCheck {
    whitelist: HashSet<String>,
}

impl CapitalCheck {
    pub fn new(config: &Config) -> Result<Self> {
        let mut whitelist: HashSet<String> =
            DEFAULT_WHITELIST.iter().map(|word| word.to_string()).collect();
        whitelist.extend(config.capital_whitelist.iter().cloned());

        if let Some(path) = &config.whitelist_file {
            if path.exists() {
                let content = fs::read_to_string(path).with_context(|| {
                    format!("Failed to read whitelist file: {}", path.display())
                })?;
                for line in content.lines() {
                    let word = line.trim();
                    if !word.is_empty() && !word.starts_with('#') {
                        whitelist.insert(word.to_string());
                    }
                }
            }
        }

        Ok(Self { whitelist })
    }

    pub fn add_whitelist_word(&mut self, word: impl Into<String>) -> bool {
        self.whitelist.insert(word.into())
    }

    pub fn check(&self, sentence: &Sentence) -> Vec<Violation> {
        let content = &sentence.content;

        if let Some(first_word) = content.split(' ').next() {
            if self.whitelist.contains(first_word) {
                return Vec::new();
            }
        }

        // Nothing to check in a blank sentence.
        if !content.chars().any(|c| c != ' ') {
            return Vec::new();
        }

        match content.chars().next() {
            Some(head) if head.is_lowercase() => {
                vec![Violation::new(ViolationKind::LowercaseStart, sentence)]
            }
            _ => Vec::new(),
        }
    }
}
