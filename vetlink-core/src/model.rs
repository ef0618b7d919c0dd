use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification derived from a trust score.
///
/// `Unrated` is only produced when the URL could not be parsed at all; its
/// label is the empty string so callers can tell it apart from `Risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "")]
    Unrated,
    #[serde(rename = "Risk")]
    Risk,
    #[serde(rename = "Caution")]
    Caution,
    #[serde(rename = "Verified")]
    Verified,
    #[serde(rename = "High Trust")]
    HighTrust,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::HighTrust => "High Trust",
            Status::Verified => "Verified",
            Status::Caution => "Caution",
            Status::Risk => "Risk",
            Status::Unrated => "",
        }
    }

    /// Status for a clamped score. `60` is still Caution and `30` is not yet Risk.
    pub fn from_score(score: i32) -> Self {
        let mut status = if score > 60 {
            Status::Verified
        } else {
            Status::Caution
        };
        if score < 30 {
            status = Status::Risk;
        }
        status
    }

    /// Parse a user supplied label, e.g. from the command line.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high trust" | "high-trust" | "hightrust" => Some(Status::HighTrust),
            "verified" => Some(Status::Verified),
            "caution" => Some(Status::Caution),
            "risk" => Some(Status::Risk),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub url: String,
    #[serde(default)]
    pub title: String,
}

impl ScoreInput {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i32,
    pub flags: Vec<String>,
    pub status: Status,
}

impl ScoreResult {
    pub fn new(score: i32, flags: Vec<String>, status: Status) -> Self {
        Self {
            score,
            flags,
            status,
        }
    }

    /// Result returned when no domain could be parsed from the URL.
    pub fn invalid_url() -> Self {
        Self::new(0, vec!["Invalid URL".to_string()], Status::Unrated)
    }
}

/// A link handed over by a harvester. Duplicates are expected and kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub url: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn default_source() -> String {
    "Web".to_string()
}

impl Candidate {
    pub fn new(url: impl Into<String>, title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: source.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDetails {
    pub info: String,
    pub documents_required: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub result: ScoreResult,
    pub details: ListingDetails,
}
