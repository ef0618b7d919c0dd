// Tone checks for manipulative or too-good-to-be-true wording

use serde::{Deserialize, Serialize};

/// Phrases that push the reader to act before thinking.
pub const PUSHY_PATTERNS: &[&str] = &[
    "act now",
    "don't wait",
    "urgent",
    "immediate action",
    "expires in",
    "last chance",
    "hurry",
    "limited spots",
];

/// Promises no genuine scholarship makes.
pub const GUARANTEE_PATTERNS: &[&str] = &[
    "100% success",
    "guaranteed",
    "no selection",
    "direct entry",
    "free cash",
];

/// More than this many `!` counts as aggressive punctuation.
pub const EXCLAMATION_LIMIT: usize = 2;

pub const PUNCTUATION_PENALTY: i32 = -15;
pub const PUSHY_PENALTY: i32 = -25;
pub const GUARANTEE_PENALTY: i32 = -30;

pub const AGGRESSIVE_PUNCTUATION_FLAG: &str = "Aggressive Punctuation (!!!)";
pub const PUSHY_FLAG_PREFIX: &str = "Pushy Tone Detected: ";
pub const GUARANTEE_FLAG: &str = "Unrealistic Guarantees";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneReport {
    /// Always zero or negative.
    pub penalty: i32,
    pub flags: Vec<String>,
}

/// Lower-cases `text` and runs the punctuation, pushy and guarantee checks in
/// that order. Matching is plain substring containment, so `"guaranteedly"`
/// still hits `"guaranteed"`.
pub fn analyze(text: &str) -> ToneReport {
    let text = text.to_lowercase();
    let mut report = ToneReport::default();

    if text.matches('!').count() > EXCLAMATION_LIMIT {
        report.penalty += PUNCTUATION_PENALTY;
        report.flags.push(AGGRESSIVE_PUNCTUATION_FLAG.to_string());
    }

    let found_pushy = matched_patterns(&text, PUSHY_PATTERNS);
    if !found_pushy.is_empty() {
        report.penalty += PUSHY_PENALTY;
        report
            .flags
            .push(format!("{}{}", PUSHY_FLAG_PREFIX, found_pushy.join(", ")));
    }

    if GUARANTEE_PATTERNS.iter().any(|g| text.contains(g)) {
        report.penalty += GUARANTEE_PENALTY;
        report.flags.push(GUARANTEE_FLAG.to_string());
    }

    report
}

/// Patterns contained in `text`, in table order. `text` must already be lower-cased.
pub fn matched_patterns<'a>(text: &str, patterns: &[&'a str]) -> Vec<&'a str> {
    patterns
        .iter()
        .copied()
        .filter(|p| text.contains(p))
        .collect()
}
