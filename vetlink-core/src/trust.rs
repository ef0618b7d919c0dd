// Layered trust scoring for candidate links

use crate::error::{Result, VetError};
use crate::model::{ScoreInput, ScoreResult, Status};
use crate::tone;

pub const MIN_SCORE: i32 = -100;
pub const MAX_SCORE: i32 = 100;
pub const BASELINE_SCORE: i32 = 50;

pub const GOVERNMENT_DOMAINS: &[&str] = &[".gov.in", ".nic.in", ".ai", "aicte-india.org"];
pub const EDUCATION_DOMAINS: &[&str] = &[".edu.in", ".ac.in"];
pub const REPUTABLE_NEWS_DOMAINS: &[&str] = &[
    "timesofindia",
    "hindustantimes",
    "ndtv",
    "jagran",
    "careers360",
    "shiksha",
];

pub const REPUTATION_BONUS: i32 = 30;
pub const SECURE_TRANSPORT_BONUS: i32 = 10;
pub const INSECURE_TRANSPORT_PENALTY: i32 = -50;

pub const REPUTABLE_NEWS_FLAG: &str = "Reputable News Source";
pub const INSECURE_CONNECTION_FLAG: &str = "Insecure Connection (No SSL)";

/// A group of domain substrings that settles the score on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowListTier {
    pub name: &'static str,
    pub needles: &'static [&'static str],
    pub score: i32,
    pub flag: &'static str,
}

impl AllowListTier {
    pub fn matches(&self, domain: &str) -> bool {
        self.needles.iter().any(|n| domain.contains(n))
    }

    pub fn result(&self) -> ScoreResult {
        ScoreResult::new(self.score, vec![self.flag.to_string()], Status::HighTrust)
    }
}

/// Checked in order; the first tier whose needles hit the domain wins.
pub const ALLOW_LIST_TIERS: &[AllowListTier] = &[
    AllowListTier {
        name: "government",
        needles: GOVERNMENT_DOMAINS,
        score: 100,
        flag: "Official Government Source",
    },
    AllowListTier {
        name: "education",
        needles: EDUCATION_DOMAINS,
        score: 90,
        flag: "Official Educational Institute",
    },
];

/// Running total threaded through the cumulative layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub score: i32,
    pub flags: Vec<String>,
}

impl Tally {
    fn baseline() -> Self {
        Self {
            score: BASELINE_SCORE,
            flags: Vec::new(),
        }
    }
}

/// What every cumulative layer gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct LayerInput<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub domain: &'a str,
}

pub type ScoringLayer = fn(&LayerInput<'_>, &mut Tally);

/// Applied in order after the allow-list, each adding to the same tally.
pub const SCORING_LAYERS: &[(&str, ScoringLayer)] = &[
    ("reputation", reputation_layer),
    ("tone", tone_layer),
    ("transport", transport_layer),
];

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Network location of `url`: the raw authority after `scheme://` (or a
/// leading `//`) up to the first `/`, `?` or `#`.
///
/// Case, user info and port are kept as written, so `GOV.IN` does not match
/// `.gov.in`. Input without an authority yields an empty domain. The only
/// error is an unbalanced `[`/`]` IPv6 bracket.
pub fn extract_domain(url: &str) -> Result<String> {
    let cleaned: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let mut rest = cleaned.as_str();
    if let Some((scheme, tail)) = rest.split_once(':')
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme.chars().all(is_scheme_char)
    {
        rest = tail;
    }

    let Some(authority) = rest.strip_prefix("//") else {
        return Ok(String::new());
    };
    let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    let netloc = &authority[..end];

    if netloc.contains('[') != netloc.contains(']') {
        return Err(VetError::InvalidUrl(format!("{}: unbalanced IPv6 bracket", url)));
    }

    Ok(netloc.to_string())
}

pub fn allow_list_match(domain: &str) -> Option<&'static AllowListTier> {
    ALLOW_LIST_TIERS.iter().find(|tier| tier.matches(domain))
}

pub fn reputation_layer(input: &LayerInput<'_>, tally: &mut Tally) {
    if REPUTABLE_NEWS_DOMAINS.iter().any(|n| input.domain.contains(n)) {
        tally.score += REPUTATION_BONUS;
        tally.flags.push(REPUTABLE_NEWS_FLAG.to_string());
    }
}

pub fn tone_layer(input: &LayerInput<'_>, tally: &mut Tally) {
    let combined_text = format!("{} {}", input.url, input.title);
    let report = tone::analyze(&combined_text);
    tally.score += report.penalty;
    tally.flags.extend(report.flags);
}

/// Looks at the literal prefix only, so `"HTTPS://..."` is treated as insecure.
pub fn transport_layer(input: &LayerInput<'_>, tally: &mut Tally) {
    if input.url.starts_with("https") {
        tally.score += SECURE_TRANSPORT_BONUS;
    } else {
        tally.score += INSECURE_TRANSPORT_PENALTY;
        tally.flags.push(INSECURE_CONNECTION_FLAG.to_string());
    }
}

pub fn clamp_score(score: i32) -> i32 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Scores a link and its title.
///
/// Never fails: a URL with a broken IPv6 bracket comes back as
/// [`ScoreResult::invalid_url`] with [`Status::Unrated`].
pub fn evaluate(url: &str, title: &str) -> ScoreResult {
    let domain = match extract_domain(url) {
        Ok(domain) => domain,
        Err(_) => return ScoreResult::invalid_url(),
    };

    if let Some(tier) = allow_list_match(&domain) {
        return tier.result();
    }

    let input = LayerInput {
        url,
        title,
        domain: &domain,
    };
    let mut tally = Tally::baseline();
    for (_, layer) in SCORING_LAYERS {
        layer(&input, &mut tally);
    }

    let final_score = clamp_score(tally.score);
    ScoreResult::new(final_score, tally.flags, Status::from_score(final_score))
}

pub fn evaluate_input(input: &ScoreInput) -> ScoreResult {
    evaluate(&input.url, &input.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_tiers_are_ordered_government_first() {
        let names: Vec<&str> = ALLOW_LIST_TIERS.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["government", "education"]);
    }

    #[test]
    fn domain_matching_both_tiers_takes_the_first() {
        let tier = allow_list_match("portal.ac.in.gov.in").unwrap();
        assert_eq!(tier.name, "government");
    }

    #[test]
    fn layers_run_reputation_tone_transport() {
        let names: Vec<&str> = SCORING_LAYERS.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["reputation", "tone", "transport"]);
    }

    #[test]
    fn tally_starts_at_baseline() {
        let tally = Tally::baseline();
        assert_eq!(tally.score, 50);
        assert!(tally.flags.is_empty());
    }
}
