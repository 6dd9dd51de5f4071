//! Shannon information of class distributions.

/// Computes `-Σ p_i log2(p_i)` over the nonzero entries of `counts`.
///
/// Zero counts contribute nothing. The result is `0.0` for a single
/// nonzero class and `log2(k)` for `k` equally frequent classes.
///
/// # Panics
///
/// Panics if every count is zero; callers only evaluate non-empty subsets.
pub fn entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    assert!(total > 0, "entropy of an empty class distribution");

    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of the two sides of a split, each weighted by its share of
/// the records.
pub fn weighted_entropy(left: &[usize], right: &[usize]) -> f64 {
    let left_total: usize = left.iter().sum();
    let right_total: usize = right.iter().sum();
    let n = (left_total + right_total) as f64;

    let mut score = 0.0;
    if left_total > 0 {
        score += entropy(left) * (left_total as f64 / n);
    }
    if right_total > 0 {
        score += entropy(right) * (right_total as f64 / n);
    }
    score
}
