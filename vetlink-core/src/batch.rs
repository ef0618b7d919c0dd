use crate::listing::extract_listing_details;
use crate::model::{Candidate, ScoredCandidate, Status};
use crate::trust::evaluate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub fn score_candidate(candidate: &Candidate) -> ScoredCandidate {
    let result = evaluate(&candidate.url, &candidate.title);
    debug!(
        url = %candidate.url,
        score = result.score,
        status = %result.status,
        "scored candidate"
    );

    ScoredCandidate {
        details: extract_listing_details(&candidate.title, candidate.summary.as_deref()),
        candidate: candidate.clone(),
        result,
    }
}

/// Scores every candidate in input order. Duplicate URLs are scored again;
/// deduplication belongs to whoever harvested the links.
pub fn score_candidates(candidates: &[Candidate]) -> Vec<ScoredCandidate> {
    let scored: Vec<ScoredCandidate> = candidates.iter().map(score_candidate).collect();
    info!(total = scored.len(), "scored candidates");
    scored
}

/// Keeps results whose status is at least as trusted as `min`.
pub fn filter_by_min_status(scored: Vec<ScoredCandidate>, min: Status) -> Vec<ScoredCandidate> {
    scored
        .into_iter()
        .filter(|s| s.result.status >= min)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub high_trust: usize,
    pub verified: usize,
    pub caution: usize,
    pub risk: usize,
    pub unrated: usize,
}

impl StatusCounts {
    pub fn tally(scored: &[ScoredCandidate]) -> Self {
        let mut counts = StatusCounts::default();
        for s in scored {
            match s.result.status {
                Status::HighTrust => counts.high_trust += 1,
                Status::Verified => counts.verified += 1,
                Status::Caution => counts.caution += 1,
                Status::Risk => counts.risk += 1,
                Status::Unrated => counts.unrated += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.high_trust + self.verified + self.caution + self.risk + self.unrated
    }
}
