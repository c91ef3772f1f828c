use crate::config::Config;
use crate::{Sentence, Violation, ViolationKind};
use thiserror::Error;

const DEFAULT_FULL_STOP: char = '.';

/// Configuration faults caught while building the check. Distinct from scan
/// findings: a bad symbol table is fatal, bad prose is a `Violation`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    #[error("full stop symbol must be a single character, got {0:?}")]
    InvalidFullStop(String),
    #[error("quotation exception suffix must not be empty")]
    EmptySuffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A quotation symbol with its spacing requirements. Built once per
/// configuration and shared read-only across scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub value: String,
    pub side: Side,
    pub needs_space_before: bool,
    pub needs_space_after: bool,
}

impl Glyph {
    pub fn new(value: &str, side: Side, needs_space_before: bool, needs_space_after: bool) -> Self {
        Self {
            value: value.to_string(),
            side,
            needs_space_before,
            needs_space_after,
        }
    }
}

/// The (left, right) combination defining one quotation style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphPair {
    pub left: Glyph,
    pub right: Glyph,
}

impl GlyphPair {
    /// Single-quote style. ASCII mode uses the apostrophe for both sides.
    pub fn single(use_ascii: bool) -> Self {
        if use_ascii {
            Self {
                left: Glyph::new("'", Side::Left, true, false),
                right: Glyph::new("'", Side::Right, false, true),
            }
        } else {
            Self {
                left: Glyph::new("‘", Side::Left, true, false),
                right: Glyph::new("’", Side::Right, false, true),
            }
        }
    }

    /// Double-quote style. ASCII mode uses the straight double quote for both sides.
    pub fn double(use_ascii: bool) -> Self {
        if use_ascii {
            Self {
                left: Glyph::new("\"", Side::Left, true, false),
                right: Glyph::new("\"", Side::Right, false, true),
            }
        } else {
            Self {
                left: Glyph::new("“", Side::Left, true, false),
                right: Glyph::new("”", Side::Right, false, true),
            }
        }
    }
}

/// The quotation-pair scanner. Locates quote glyphs in a sentence, pairs
/// them, and classifies unmatched marks, inconsistent nesting, and missing
/// spacing around quote boundaries.
pub struct QuotationCheck {
    single: GlyphPair,
    double: GlyphPair,
    period: char,
    exception_suffixes: Vec<Vec<char>>,
}

impl QuotationCheck {
    pub fn new(config: &Config) -> Result<Self, CheckerError> {
        let mut full_stop = config.full_stop.chars();
        let period = match (full_stop.next(), full_stop.next()) {
            (None, _) => DEFAULT_FULL_STOP,
            (Some(symbol), None) => symbol,
            _ => return Err(CheckerError::InvalidFullStop(config.full_stop.clone())),
        };

        let mut exception_suffixes = Vec::with_capacity(config.exception_suffixes.len());
        for suffix in &config.exception_suffixes {
            if suffix.is_empty() {
                return Err(CheckerError::EmptySuffix);
            }
            exception_suffixes.push(suffix.chars().collect());
        }

        Ok(Self {
            single: GlyphPair::single(config.use_ascii_quotes),
            double: GlyphPair::double(config.use_ascii_quotes),
            period,
            exception_suffixes,
        })
    }

    /// Scan one sentence, single-quote pair first, then double. The two
    /// pairs never interact; their violation lists are concatenated.
    pub fn check(&self, sentence: &Sentence) -> Vec<Violation> {
        let mut violations = self.check_pair(sentence, &self.single);
        violations.extend(self.check_pair(sentence, &self.double));
        violations
    }

    /// Scan one sentence for a single quotation style.
    pub fn check_pair(&self, sentence: &Sentence, pair: &GlyphPair) -> Vec<Violation> {
        let chars: Vec<char> = sentence.content.chars().collect();
        let left_value: Vec<char> = pair.left.value.chars().collect();
        let right_value: Vec<char> = pair.right.value.chars().collect();

        let mut violations = Vec::new();
        // Both cursors start at the head of the sentence; every round
        // searches one position past the previous closing mark.
        let mut search_from = 1;

        loop {
            let left = self.locate(&chars, &left_value, search_from);
            let right = match left {
                Some(left) => self.locate(&chars, &right_value, left + 1),
                // No further opening mark: a dangling closing mark may still
                // sit ahead of the cursor.
                None => self.locate(&chars, &right_value, search_from),
            };

            // An unmatched mark leaves the cursors unreliable past this
            // point, so the scan of this pair stops here.
            let (left, right) = match (left, right) {
                (Some(_), None) => {
                    violations.push(Violation::new(ViolationKind::RightExists, sentence));
                    break;
                }
                (None, Some(_)) => {
                    violations.push(Violation::new(ViolationKind::LeftExists, sentence));
                    break;
                }
                (None, None) => break,
                (Some(left), Some(right)) => (left, right),
            };

            // Both lookaheads scan for the opening glyph: another opening
            // mark before the current pair closes reads as inconsistent
            // nesting.
            let next_left = self.locate(&chars, &left_value, left + 1);
            let next_right = self.locate(&chars, &left_value, left + 1);

            if next_left.is_some_and(|pos| pos > 0 && pos < right) {
                violations.push(Violation::new(ViolationKind::DoubleRight, sentence));
            }
            if next_right.is_some_and(|pos| pos > 0 && pos < left) {
                violations.push(Violation::new(ViolationKind::DoubleLeft, sentence));
            }

            if left > 0 && pair.left.needs_space_before && chars[left - 1] != ' ' {
                violations.push(Violation::new(ViolationKind::LeftSpace, sentence));
            }

            // A closing mark at the very end of the sentence is exempt from
            // the space-after rule, as is one followed by the full stop.
            if right > 0
                && right + 1 < chars.len()
                && pair.right.needs_space_after
                && chars[right + 1] != ' '
                && chars[right + 1] != self.period
            {
                violations.push(Violation::new(ViolationKind::RightSpace, sentence));
            }

            search_from = right + 1;
        }

        violations
    }

    /// Position of the next occurrence of `glyph` at or after `from` that is
    /// not disqualified by an exception suffix, or `None`. Each rejection
    /// resumes the literal search one position later; exception hits are
    /// rare and sentences short, so the linear rescan is fine.
    fn locate(&self, chars: &[char], glyph: &[char], from: usize) -> Option<usize> {
        let mut from = from;
        loop {
            let pos = find_at(chars, glyph, from)?;
            if self.is_exception(chars, pos) {
                from = pos + 1;
            } else {
                return Some(pos);
            }
        }
    }

    /// A candidate immediately followed by an exception suffix is not a real
    /// quote mark (handles contractions like "he's"). A suffix that does not
    /// fully fit before the end of the text never matches.
    fn is_exception(&self, chars: &[char], pos: usize) -> bool {
        self.exception_suffixes
            .iter()
            .any(|suffix| chars[pos + 1..].starts_with(suffix))
    }
}

/// First literal occurrence of `needle` at or after `from`, by codepoint
/// offset. Exact, case-sensitive, and indifferent to word boundaries.
fn find_at(chars: &[char], needle: &[char], from: usize) -> Option<usize> {
    let last = chars.len().checked_sub(needle.len())?;
    (from..=last).find(|&pos| chars[pos..pos + needle.len()] == needle[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typographic() -> QuotationCheck {
        QuotationCheck::new(&Config::default()).unwrap()
    }

    fn ascii() -> QuotationCheck {
        let config = Config {
            use_ascii_quotes: true,
            ..Default::default()
        };
        QuotationCheck::new(&config).unwrap()
    }

    fn sentence(content: &str) -> Sentence {
        Sentence::new(content, 1)
    }

    fn kinds(violations: &[Violation]) -> Vec<ViolationKind> {
        violations.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_balanced_double_quotes_pass() {
        let violations = typographic().check(&sentence("He said “Hello” to him."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_multiple_balanced_pairs_pass() {
        let violations = typographic().check(&sentence("He said “Hi” and “Bye” loud."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_ascii_double_quotes_pass() {
        let violations = ascii().check(&sentence("She said \"hello\" to him."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_empty_sentence_passes() {
        assert!(typographic().check(&sentence("")).is_empty());
    }

    #[test]
    fn test_contraction_apostrophe_is_not_a_quote() {
        let violations = ascii().check(&sentence("He's happy."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_typographic_apostrophe_in_contraction() {
        let violations = typographic().check(&sentence("I’m sure he’s happy."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_repeated_contractions_pass() {
        let violations = ascii().check(&sentence("It's Sam's job."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_trailing_apostrophe_counts_as_quote() {
        // At the literal end of the text the "s " suffix no longer fits, so
        // the final apostrophe is treated as an unmatched opening mark.
        let violations = ascii().check(&sentence("the dogs'"));
        assert_eq!(kinds(&violations), vec![ViolationKind::RightExists]);
    }

    #[test]
    fn test_unclosed_left_quote_stops_scan() {
        let violations = typographic().check(&sentence("He said “Hello to him."));
        assert_eq!(kinds(&violations), vec![ViolationKind::RightExists]);
    }

    #[test]
    fn test_unopened_right_quote() {
        let violations = typographic().check(&sentence("He said Hello” to him."));
        assert_eq!(kinds(&violations), vec![ViolationKind::LeftExists]);
    }

    #[test]
    fn test_sentence_initial_quote_reads_as_unopened() {
        // Searches begin one past the cursor, so a mark at offset zero is
        // never a left candidate; only its closing partner is seen.
        let violations = typographic().check(&sentence("“Hello” she said."));
        assert_eq!(kinds(&violations), vec![ViolationKind::LeftExists]);
    }

    #[test]
    fn test_second_opening_mark_reports_double_right() {
        let violations = typographic().check(&sentence("He said “Hi “there” now."));
        assert_eq!(kinds(&violations), vec![ViolationKind::DoubleRight]);
    }

    #[test]
    fn test_nested_marks_never_report_double_left() {
        let violations = typographic().check(&sentence("He said “Hi “there” now” ok."));
        assert!(kinds(&violations).contains(&ViolationKind::DoubleRight));
        assert!(!kinds(&violations).contains(&ViolationKind::DoubleLeft));
    }

    #[test]
    fn test_missing_space_before_left_quote() {
        let violations = typographic().check(&sentence("He said“Hello” now."));
        assert_eq!(kinds(&violations), vec![ViolationKind::LeftSpace]);
    }

    #[test]
    fn test_missing_space_after_right_quote() {
        let violations = typographic().check(&sentence("He said “Hello”now."));
        assert_eq!(kinds(&violations), vec![ViolationKind::RightSpace]);
    }

    #[test]
    fn test_full_stop_after_right_quote_is_exempt() {
        let violations = typographic().check(&sentence("He said “Hello”."));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_right_quote_at_end_of_sentence_is_exempt() {
        let violations = typographic().check(&sentence("He said “Hello”"));
        assert!(violations.is_empty(), "unexpected: {:?}", violations);
    }

    #[test]
    fn test_configured_full_stop_changes_exemption() {
        assert_eq!(
            kinds(&typographic().check(&sentence("He said “Hello”!"))),
            vec![ViolationKind::RightSpace]
        );

        let config = Config {
            full_stop: "!".to_string(),
            ..Default::default()
        };
        let check = QuotationCheck::new(&config).unwrap();
        assert!(check.check(&sentence("He said “Hello”!")).is_empty());
    }

    #[test]
    fn test_multi_character_glyph_values() {
        let pair = GlyphPair {
            left: Glyph::new("<<", Side::Left, false, false),
            right: Glyph::new(">>", Side::Right, false, false),
        };
        let check = typographic();

        assert!(check
            .check_pair(&sentence("He said <<hi>> ok."), &pair)
            .is_empty());
        assert_eq!(
            kinds(&check.check_pair(&sentence("He said <<hi ok."), &pair)),
            vec![ViolationKind::RightExists]
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let check = typographic();
        let input = sentence("He said“Hi “there” now.");
        assert_eq!(check.check(&input), check.check(&input));
    }

    #[test]
    fn test_empty_full_stop_falls_back_to_period() {
        let config = Config {
            full_stop: String::new(),
            ..Default::default()
        };
        let check = QuotationCheck::new(&config).unwrap();
        assert!(check.check(&sentence("He said “Hello”.")).is_empty());
    }

    #[test]
    fn test_multi_character_full_stop_is_rejected() {
        let config = Config {
            full_stop: "!?".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            QuotationCheck::new(&config),
            Err(CheckerError::InvalidFullStop(_))
        ));
    }

    #[test]
    fn test_empty_exception_suffix_is_rejected() {
        let config = Config {
            exception_suffixes: vec!["s ".to_string(), String::new()],
            ..Default::default()
        };
        assert!(matches!(
            QuotationCheck::new(&config),
            Err(CheckerError::EmptySuffix)
        ));
    }
}
