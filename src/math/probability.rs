/// Normalize occurrence counts into a probability distribution
///
/// Each entry becomes `count / total`. Returns `None` when the counts are
/// empty or sum to zero, which callers treat as "no distribution" rather
/// than dividing by zero.
pub fn normalize_counts(counts: &[u64]) -> Option<Vec<f64>> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return None;
    }

    let total = total as f64;
    Some(counts.iter().map(|&count| count as f64 / total).collect())
}
