use super::model::PackageMetadata;

// ---------------------------------------------------------------------------
// Dataset discovery: keyword filter + CSV resource resolution
// ---------------------------------------------------------------------------

/// Keep the identifiers containing `keyword` as a substring.
///
/// Matching is case-insensitive on both sides. An empty keyword matches
/// everything; an empty result is the caller's error condition, not ours.
pub fn filter_identifiers(identifiers: &[String], keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();
    identifiers
        .iter()
        .filter(|id| id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// URL shape accepted for a resource declared as CSV.
fn looks_like_csv_url(url: &str) -> bool {
    url.ends_with(".csv") || url.contains("accessType=DOWNLOAD")
}

/// Resolve the download URL of the first CSV resource of a dataset.
///
/// Resources are scanned in declared order; the first one whose declared
/// format is `CSV` *and* whose URL plausibly points at a CSV payload
/// wins. `None` means the caller must supply a URL manually.
pub fn resolve_csv_url(metadata: &PackageMetadata) -> Option<&str> {
    metadata
        .resources
        .iter()
        .find(|r| r.format == "CSV" && looks_like_csv_url(&r.url))
        .map(|r| r.url.as_str())
}
