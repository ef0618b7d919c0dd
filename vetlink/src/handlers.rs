use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vetlink_core::batch::{filter_by_min_status, score_candidates};
use vetlink_core::error::{Result, VetError};
use vetlink_core::model::{Candidate, ScoreResult, ScoredCandidate, Status};
use vetlink_core::report::{
    ReportFormat, format_result_line, generate_json_report, generate_text_report, save_report,
};
use vetlink_core::{analyze, evaluate};

// Helper functions for batch handler

/// Expand a leading `~` in a user supplied path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Parse one `URL [title...]` line. Blank lines and `#` comments yield `None`.
pub fn parse_candidate_line(line: &str) -> Option<Candidate> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (url, title) = match line.split_once(char::is_whitespace) {
        Some((url, title)) => (url, title.trim()),
        None => (line, ""),
    };
    Some(Candidate::new(url, title, "File"))
}

/// Load candidates from a JSON array or a line-oriented text file
pub fn load_candidates_from_file(path: &Path) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let candidates: Vec<Candidate> = if is_json {
        serde_json::from_str(&content)?
    } else {
        content.lines().filter_map(parse_candidate_line).collect()
    };

    if candidates.is_empty() {
        return Err(VetError::NoCandidates(path.display().to_string()));
    }

    info!(count = candidates.len(), path = %path.display(), "loaded candidates");
    Ok(candidates)
}

pub fn render_report(scored: &[ScoredCandidate], format: &ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => generate_text_report(scored),
        ReportFormat::Json => generate_json_report(scored)?,
    })
}

fn colored_status(result: &ScoreResult) -> String {
    let line = format_result_line(result);
    match result.status {
        Status::HighTrust | Status::Verified => line.green().bold().to_string(),
        Status::Caution => line.yellow().bold().to_string(),
        Status::Risk => line.red().bold().to_string(),
        Status::Unrated => line.bright_black().to_string(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "✗".red().bold(), message);
    std::process::exit(1);
}

pub fn handle_check(args: &ArgMatches) {
    let url = args.get_one::<String>("url").map(String::as_str).unwrap_or_default();
    let title = args.get_one::<String>("title").map(String::as_str).unwrap_or_default();
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);

    let result = evaluate(url, title);

    match format {
        ReportFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        },
        ReportFormat::Text => {
            println!("{} {}", "→".blue(), url.bright_white());
            println!("{}", colored_status(&result));
        }
    }
}

pub fn handle_tone(args: &ArgMatches) {
    let text = args.get_one::<String>("TEXT").map(String::as_str).unwrap_or_default();
    let report = analyze(text);

    println!("Penalty: {}", report.penalty.to_string().cyan());
    if report.flags.is_empty() {
        println!("{} No manipulative tone detected", "✓".green().bold());
    }
    for flag in &report.flags {
        println!("  {} {}", "•".yellow(), flag);
    }
}

fn run_batch(args: &ArgMatches) -> anyhow::Result<Option<PathBuf>> {
    let input = args
        .get_one::<String>("input")
        .map(|p| expand_path(p))
        .context("--input is required")?;
    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Text);
    let min_status = args.get_one::<String>("min-status").and_then(|s| Status::from_label(s));
    let output = args.get_one::<String>("output").map(|p| expand_path(p));

    let candidates = load_candidates_from_file(&input)
        .with_context(|| format!("Failed to load candidates from {}", input.display()))?;

    let mut scored = score_candidates(&candidates);
    if let Some(min) = min_status {
        let before = scored.len();
        scored = filter_by_min_status(scored, min);
        if scored.is_empty() {
            warn!(before, min = %min, "no candidates met the minimum status");
        }
    }

    let report = render_report(&scored, &format)?;
    match output {
        Some(path) => {
            save_report(&report, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            Ok(Some(path))
        }
        None => {
            print!("{}", report);
            Ok(None)
        }
    }
}

pub fn handle_batch(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    match run_batch(args) {
        Ok(Some(path)) => println!(
            "{} Report written to {}",
            "✓".green().bold(),
            path.display().to_string().bright_white()
        ),
        Ok(None) => {}
        Err(e) => fail(format!("{:#}", e)),
    }
}
