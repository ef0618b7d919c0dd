// Report generation for scored candidates

use crate::batch::StatusCounts;
use crate::model::{ScoreResult, ScoredCandidate, Status};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEAVY_RULE: &str =
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n";
const LIGHT_RULE: &str =
    "────────────────────────────────────────────────────────────────────────────────\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Unrated => "Unrated",
        other => other.as_str(),
    }
}

/// One-line rendering, e.g. `[Risk] -70  Aggressive Punctuation (!!!); ...`
pub fn format_result_line(result: &ScoreResult) -> String {
    let flags = if result.flags.is_empty() {
        "no flags".to_string()
    } else {
        result.flags.join("; ")
    };
    format!("[{}] {}  {}", status_label(result.status), result.score, flags)
}

pub fn generate_text_report(scored: &[ScoredCandidate]) -> String {
    let counts = StatusCounts::tally(scored);
    let mut report = String::new();

    // Header
    report.push_str(HEAVY_RULE);
    report.push_str("                          VETLINK TRUST REPORT\n");
    report.push_str(HEAVY_RULE);
    report.push('\n');

    report.push_str(&format!("Links Scored: {}\n\n", counts.total()));

    // Summary
    report.push_str(HEAVY_RULE);
    report.push_str("SUMMARY\n");
    report.push_str(HEAVY_RULE);
    report.push('\n');

    if counts.high_trust > 0 {
        report.push_str(&format!("  [HIGH TRUST] {}  (Official source)\n", counts.high_trust));
    }
    if counts.verified > 0 {
        report.push_str(&format!("  [VERIFIED]   {}  (Looks legitimate)\n", counts.verified));
    }
    if counts.caution > 0 {
        report.push_str(&format!("  [CAUTION]    {}  (Check before applying)\n", counts.caution));
    }
    if counts.risk > 0 {
        report.push_str(&format!("  [RISK]       {}  (Likely scam)\n", counts.risk));
    }
    if counts.unrated > 0 {
        report.push_str(&format!("  [UNRATED]    {}  (Unparseable URL)\n", counts.unrated));
    }
    report.push('\n');

    if !scored.is_empty() {
        report.push_str(HEAVY_RULE);
        report.push_str("RESULTS\n");
        report.push_str(HEAVY_RULE);
        report.push('\n');

        for (idx, item) in scored.iter().enumerate() {
            report.push_str(&format!("[{}] {}\n", idx + 1, item.candidate.title));
            report.push_str(&format!("URL:          {}\n", item.candidate.url));
            report.push_str(&format!("Source:       {}\n", item.candidate.source));
            report.push_str(&format!("Score:        {}\n", item.result.score));
            report.push_str(&format!("Status:       {}\n", status_label(item.result.status)));

            if !item.result.flags.is_empty() {
                report.push_str("\nFlags:\n");
                for flag in &item.result.flags {
                    report.push_str(&format!("  - {}\n", flag));
                }
            }

            report.push_str("\nDocuments:\n");
            for doc in &item.details.documents_required {
                report.push_str(&format!("  - {}\n", doc));
            }
            report.push('\n');
            report.push_str(LIGHT_RULE);
            report.push('\n');
        }
    }

    // Footer
    report.push_str(HEAVY_RULE);
    report.push_str("                             End of Report\n");
    report.push_str(HEAVY_RULE);
    report.push_str("\nGenerated by vetlink. Scores are heuristics, not a guarantee.\n\n");

    report
}

pub fn generate_json_report(scored: &[ScoredCandidate]) -> Result<String, serde_json::Error> {
    let counts = StatusCounts::tally(scored);
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "vetlink",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json"
            },
            "summary": {
                "total": counts.total(),
                "status_breakdown": counts
            },
            "results": scored
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
