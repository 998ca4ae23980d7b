//! Approximate string similarity scores in the `0..=100` range.

/// Best similarity of the shorter string against every equally long window of the longer one.
///
/// A short name fully contained in a long identifier scores `100`, wherever it appears:
/// `partial_ratio("Workspace", "/subscriptions/{}/providers/microsoft.databricks/workspaces/{}")`
/// is `100`.
///
/// Windows are scored with the normalized Levenshtein similarity of the lowercased strings.
/// This is not the `SequenceMatcher` ratio fuzzywuzzy uses, and it ignores case, so rankings of
/// close candidates may differ from tools built on it.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.is_empty() {
        return 0;
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0;
    for window in longer.windows(shorter.len()) {
        let candidate: String = window.iter().collect();
        best = best.max(score(&needle, &candidate));
        if best == 100 {
            break;
        }
    }
    best
}

fn score(a: &str, b: &str) -> u8 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
}
