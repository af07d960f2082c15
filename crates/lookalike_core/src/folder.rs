const FOLDER_MARKER: &str = "/folders/";

/// Reduce a folder reference to the bare identifier sent to the service.
///
/// References pasted as full folder URLs carry a `/folders/{id}` segment;
/// the `{id}` (letters, digits, `-`, `_`) replaces the whole input. Anything
/// else is used verbatim after trimming, including the empty string.
/// Normalizing an already-bare identifier is a no-op, so the function is
/// idempotent.
pub fn normalize_folder_reference(reference: &str) -> String {
    let trimmed = reference.trim();
    match extract_folder_id(trimmed) {
        Some(id) => id.to_string(),
        None => trimmed.to_string(),
    }
}

fn extract_folder_id(reference: &str) -> Option<&str> {
    // A marker only counts when at least one identifier character follows;
    // a bare marker is skipped and the scan continues.
    for (idx, _) in reference.match_indices(FOLDER_MARKER) {
        let rest = &reference[idx + FOLDER_MARKER.len()..];
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(rest.len());
        if end > 0 {
            return Some(&rest[..end]);
        }
    }
    None
}
