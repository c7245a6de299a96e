use super::record::ImageRecord;

/// Keep records whose name or path contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_records(records: &[ImageRecord], query: &str) -> Vec<ImageRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query) || r.path.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
