pub mod checker;
pub mod cli;
pub mod config;
pub mod parser;

pub use checker::ProseChecker;
pub use config::Config;

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub violation_count: usize,
    pub violations: Vec<Violation>,
}

/// A sentence extracted from a source file, attributed to the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub content: String,
    pub line: usize,
}

impl Sentence {
    pub fn new(content: impl Into<String>, line: usize) -> Self {
        Self {
            content: content.into(),
            line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub line: usize,
    pub sentence: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, sentence: &Sentence) -> Self {
        Self {
            kind,
            line: sentence.line,
            sentence: sentence.content.clone(),
        }
    }
}

/// The classified proofreading defects this tool reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A left quotation mark with no matching right mark after it.
    RightExists,
    /// A right quotation mark with no matching left mark before it.
    LeftExists,
    /// A closing mark repeated before the current pair opens.
    DoubleLeft,
    /// An opening mark repeated before the current pair closes.
    DoubleRight,
    /// Missing space before a left quotation mark.
    LeftSpace,
    /// Missing space after a right quotation mark.
    RightSpace,
    /// Sentence starts with a lowercase letter.
    LowercaseStart,
}

impl ViolationKind {
    /// Stable identifier used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::RightExists => "quote-unclosed",
            ViolationKind::LeftExists => "quote-unopened",
            ViolationKind::DoubleLeft => "quote-double-left",
            ViolationKind::DoubleRight => "quote-double-right",
            ViolationKind::LeftSpace => "quote-left-space",
            ViolationKind::RightSpace => "quote-right-space",
            ViolationKind::LowercaseStart => "lowercase-start",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::RightExists => "left quotation mark is never closed",
            ViolationKind::LeftExists => "right quotation mark is never opened",
            ViolationKind::DoubleLeft => "closing quotation mark repeated before the pair opens",
            ViolationKind::DoubleRight => "opening quotation mark repeated before the pair closes",
            ViolationKind::LeftSpace => "missing space before left quotation mark",
            ViolationKind::RightSpace => "missing space after right quotation mark",
            ViolationKind::LowercaseStart => "sentence starts with a lowercase letter",
        }
    }
}
