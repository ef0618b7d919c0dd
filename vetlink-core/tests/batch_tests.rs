// Tests for batch scoring and listing details

use vetlink_core::batch::{StatusCounts, filter_by_min_status, score_candidate, score_candidates};
use vetlink_core::listing::{MAX_INFO_LEN, documents_required, extract_listing_details};
use vetlink_core::model::{Candidate, Status};

fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(
            "https://mahadbt.maharashtra.gov.in/",
            "MahaDBT Official Portal - Post Matric Scholarship",
            "GOV.IN",
        ),
        Candidate::new(
            "http://get-free-money-now.scam/apply",
            "!!! HURRY !!! 100% GUARANTEED CASH SCHOLARSHIP - NO SELECTION !!!",
            "Test Injection",
        ),
        Candidate::new("https://example.org/grant", "Community grant", "Web"),
        Candidate::new("http://[::1", "Broken link", "Web"),
        Candidate::new(
            "https://mahadbt.maharashtra.gov.in/",
            "MahaDBT Official Portal - Post Matric Scholarship",
            "GOV.IN",
        ),
    ]
}

// ============================================================================
// Batch Scoring Tests
// ============================================================================

#[test]
fn test_score_candidates_preserves_order_and_duplicates() {
    let candidates = sample_candidates();
    let scored = score_candidates(&candidates);

    assert_eq!(scored.len(), 5);
    for (item, candidate) in scored.iter().zip(&candidates) {
        assert_eq!(&item.candidate, candidate);
    }
    assert_eq!(scored[0].result, scored[4].result);
}

#[test]
fn test_score_candidate_uses_trust_engine() {
    let candidate = Candidate::new(
        "http://get-free-money-now.scam/apply",
        "!!! HURRY !!! 100% GUARANTEED CASH SCHOLARSHIP - NO SELECTION !!!",
        "Test Injection",
    );
    let scored = score_candidate(&candidate);
    assert_eq!(scored.result.score, -70);
    assert_eq!(scored.result.status, Status::Risk);
}

#[test]
fn test_score_candidate_reads_summary() {
    let candidate = Candidate::new(
        "https://scholarships.reliancefoundation.org/",
        "Reliance Foundation Undergraduate Scholarship 2026",
        "Corporate CSR",
    )
    .with_summary("Merit-cum-means scholarship granting up to Rs. 2 Lakhs.");
    let scored = score_candidate(&candidate);

    assert_eq!(scored.result.score, 60);
    assert!(scored.details.info.starts_with("Merit-cum-means"));
    assert!(
        scored
            .details
            .documents_required
            .contains(&"Income Certificate (Below 2.5 LPA)".to_string())
    );
}

#[test]
fn test_status_counts() {
    let scored = score_candidates(&sample_candidates());
    let counts = StatusCounts::tally(&scored);

    assert_eq!(counts.high_trust, 2);
    assert_eq!(counts.verified, 0);
    assert_eq!(counts.caution, 1);
    assert_eq!(counts.risk, 1);
    assert_eq!(counts.unrated, 1);
    assert_eq!(counts.total(), 5);
}

#[test]
fn test_filter_by_min_status() {
    let scored = score_candidates(&sample_candidates());
    let kept = filter_by_min_status(scored, Status::Caution);

    assert_eq!(kept.len(), 3);
    assert!(kept.iter().all(|s| s.result.status >= Status::Caution));
}

#[test]
fn test_filter_by_min_status_unrated_keeps_everything() {
    let scored = score_candidates(&sample_candidates());
    assert_eq!(filter_by_min_status(scored, Status::Unrated).len(), 5);
}

#[test]
fn test_status_ordering() {
    assert!(Status::HighTrust > Status::Verified);
    assert!(Status::Verified > Status::Caution);
    assert!(Status::Caution > Status::Risk);
    assert!(Status::Risk > Status::Unrated);
}

// ============================================================================
// Listing Details Tests
// ============================================================================

#[test]
fn test_details_use_summary_when_long_enough() {
    let details = extract_listing_details(
        "Reliance Foundation Undergraduate Degree Grant 2026",
        Some("<p>Merit-cum-means scholarship granting up to Rs. 2 Lakhs.</p>"),
    );

    assert_eq!(
        details.info,
        "Merit-cum-means scholarship granting up to Rs. 2 Lakhs...."
    );
    assert_eq!(
        details.documents_required,
        vec![
            "Aadhaar Card",
            "Bank Passbook",
            "Previous Year Marksheet",
            "Passport Photo",
            "Income Certificate (Below 2.5 LPA)",
            "Current Year Fee Receipt / Bonafide Certificate",
        ]
    );
}

#[test]
fn test_details_fall_back_for_short_summary() {
    let details = extract_listing_details("PwD Support Grant", Some("<b>Apply</b>"));

    assert!(details.info.starts_with(
        "Official financial assistance and support program for students applying for PwD Support Grant."
    ));
    assert!(details.info.ends_with("..."));
    assert_eq!(details.documents_required.len(), 5);
    assert_eq!(details.documents_required[4], "Disability Certificate");
}

#[test]
fn test_details_without_summary() {
    let details = extract_listing_details("PwD Support Grant", None);
    assert!(details.info.contains("PwD Support Grant"));
}

#[test]
fn test_info_is_truncated() {
    let summary = "a".repeat(400);
    let details = extract_listing_details("Grant", Some(&summary));
    assert_eq!(details.info.chars().count(), MAX_INFO_LEN + 3);
}

#[test]
fn test_category_keywords_match_substrings() {
    // "sc" inside "scholarship" is enough.
    let docs = documents_required("Post Matric Scholarship", "");
    assert!(docs.contains(&"Caste/Category Certificate".to_string()));
}

#[test]
fn test_income_keyword_in_info() {
    let docs = documents_required("Grant", "for economically weaker families");
    assert!(docs.contains(&"Income Certificate (Below 2.5 LPA)".to_string()));
}
