/// Levenshtein edit distance between two strings, over unicode scalar
/// values. Minimum number of single character insertions, deletions and
/// substitutions to turn `a` into `b`.
///
/// Standard dynamic programming recurrence, keeping one row of the cost
/// table at a time so the extra space is O(len(b)).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == *cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}
