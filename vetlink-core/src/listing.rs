// Listing details derived from a candidate's title and feed summary

use crate::model::ListingDetails;

pub const BASE_DOCUMENTS: &[&str] = &[
    "Aadhaar Card",
    "Bank Passbook",
    "Previous Year Marksheet",
    "Passport Photo",
];

pub const CATEGORY_KEYWORDS: &[&str] = &["minority", "caste", "obc", "sc", "st"];
pub const INCOME_KEYWORDS: &[&str] = &["merit", "means", "income", "economically"];
pub const DISABILITY_KEYWORDS: &[&str] = &["disability", "pwd", "disabled"];
pub const COURSE_KEYWORDS: &[&str] = &["medical", "diploma", "engineering", "degree"];

pub const MIN_INFO_LEN: usize = 30;
pub const MAX_INFO_LEN: usize = 250;

/// Removes every `<...>` tag and trims the remainder.
///
/// A tag runs from `<` to the last `>` before the next `<`, so `<b>bold>`
/// goes as a whole. `<>` and a `<` with no closing `>` are kept as text.
pub fn clean_summary(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let run_end = after.find('<').unwrap_or(after.len());
        match after[..run_end].rfind('>') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                out.push('<');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn fallback_info(title: &str) -> String {
    format!(
        "Official financial assistance and support program for students applying for {}. \
         Eligible candidates must submit their verified applications and documents before the \
         portal deadline to be considered for fund disbursement.",
        title
    )
}

fn full_info(title: &str, summary_html: Option<&str>) -> String {
    let cleaned = summary_html.map(clean_summary).unwrap_or_default();
    if cleaned.chars().count() < MIN_INFO_LEN {
        fallback_info(title)
    } else {
        cleaned
    }
}

fn truncate_info(info: &str) -> String {
    let mut truncated: String = info.chars().take(MAX_INFO_LEN).collect();
    truncated.push_str("...");
    truncated
}

/// Paragraph shown under a listing, cut to `MAX_INFO_LEN` characters plus `...`.
pub fn info_paragraph(title: &str, summary_html: Option<&str>) -> String {
    truncate_info(&full_info(title, summary_html))
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Documents an applicant should prepare. `info` is the untruncated paragraph text.
pub fn documents_required(title: &str, info: &str) -> Vec<String> {
    let title_lower = title.to_lowercase();
    let info_lower = info.to_lowercase();
    let mut docs: Vec<String> = BASE_DOCUMENTS.iter().map(|d| d.to_string()).collect();

    if mentions_any(&title_lower, CATEGORY_KEYWORDS) {
        docs.push("Caste/Category Certificate".to_string());
    }
    if mentions_any(&title_lower, INCOME_KEYWORDS) || mentions_any(&info_lower, INCOME_KEYWORDS) {
        docs.push("Income Certificate (Below 2.5 LPA)".to_string());
    }
    if mentions_any(&title_lower, DISABILITY_KEYWORDS) {
        docs.push("Disability Certificate".to_string());
    }
    if mentions_any(&title_lower, COURSE_KEYWORDS) {
        docs.push("Current Year Fee Receipt / Bonafide Certificate".to_string());
    }

    docs
}

pub fn extract_listing_details(title: &str, summary_html: Option<&str>) -> ListingDetails {
    let info = full_info(title, summary_html);

    ListingDetails {
        documents_required: documents_required(title, &info),
        info: truncate_info(&info),
    }
}
