//! Deterministic Selector — seeded shuffle, dedup, and merge primitives used
//! to pick bounded, non-repeating, reproducible subsets of candidate phrases.
//!
//! Reproducibility is a functional requirement here, not a weakness: the same
//! seed and pool must always yield the same result, so resumes are testable
//! and a re-submitted request renders identically. The hash + LCG
//! construction below is kept bit-for-bit compatible with prior output
//! (FNV-1a over the seed bytes, then a `(s*9301 + 49297) % 233280`
//! Fisher-Yates walk), so callers that depend on exact historical orderings
//! keep getting them.

/// LCG parameters for the shuffle recurrence.
const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233280;

/// Removes duplicates and empty-after-trim values, keeping the first
/// occurrence and the original order otherwise.
pub fn dedupe<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let value = item.as_ref().trim();
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            out.push(value.to_string());
        }
    }
    out
}

/// FNV-1a over the seed bytes, truncated to 32 bits.
pub fn fnv1a_32(seed: &str) -> u32 {
    let mut hash: u32 = 2166136261;
    for byte in seed.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16777619);
    }
    hash
}

/// Returns a permutation of `items` that is a pure function of
/// `(items, seed)`. Fisher-Yates from the last index down to 1, with each
/// swap index drawn from the LCG recurrence seeded by `fnv1a_32(seed)`.
pub fn seeded_shuffle(items: Vec<String>, seed: &str) -> Vec<String> {
    let mut items = items;
    // Empty seeds still shuffle deterministically.
    let seed = if seed.is_empty() { "seed" } else { seed };
    let mut s = fnv1a_32(seed) as u64;

    for i in (1..items.len()).rev() {
        s = (s * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        let j = ((s as f64 / LCG_MODULUS as f64) * (i as f64 + 1.0)).floor() as usize;
        items.swap(i, j);
    }
    items
}

/// Dedupes `pool`, shuffles it with `seed`, and keeps the first `n` entries.
///
/// Guarantees: no duplicate phrase in the result, identical inputs always
/// produce identical output, and the result length is
/// `min(n, |dedupe(pool)|)`.
pub fn select_top_n<I>(pool: I, seed: &str, n: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut selected = seeded_shuffle(dedupe(pool), seed);
    selected.truncate(n);
    selected
}

/// Merges user-selected values with a suggested pool, user values first, and
/// caps the result.
///
/// With `role_safe` set, user values not present in `suggested` are dropped
/// before the merge — this is what prevents a previous role's skill chips
/// from leaking into a new role's resume.
pub fn merge_skills(
    user_selected: &[String],
    suggested: &[&str],
    cap: usize,
    role_safe: bool,
) -> Vec<String> {
    let filtered: Vec<&str> = user_selected
        .iter()
        .map(|s| s.trim())
        .filter(|s| !role_safe || suggested.contains(s))
        .collect();

    let mut merged = dedupe(filtered.into_iter().chain(suggested.iter().copied()));
    merged.truncate(cap);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_in_order() {
        let out = dedupe(["b", "a", "b", "c", "a"]);
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedupe_drops_empty_and_whitespace_values() {
        let out = dedupe(["x", "", "  ", "y"]);
        assert_eq!(out, vec!["x", "y"]);
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        // Standard FNV-1a 32-bit test vectors.
        assert_eq!(fnv1a_32(""), 2166136261);
        assert_eq!(fnv1a_32("a"), 0xe40c292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9cf968);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let p = pool(&["one", "two", "three", "four", "five", "six"]);
        let a = seeded_shuffle(p.clone(), "alpha|beta|gamma");
        let b = seeded_shuffle(p, "alpha|beta|gamma");
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let p = pool(&["one", "two", "three", "four", "five"]);
        let mut shuffled = seeded_shuffle(p.clone(), "some-seed");
        let mut original = p;
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_is_seed_sensitive() {
        // Not every seed pair diverges, but at least one of these must.
        let p = pool(&["one", "two", "three", "four", "five", "six", "seven", "eight"]);
        let baseline = seeded_shuffle(p.clone(), "seed-0");
        let diverged = (1..10)
            .map(|i| seeded_shuffle(p.clone(), &format!("seed-{i}")))
            .any(|order| order != baseline);
        assert!(diverged, "shuffle ignored the seed entirely");
    }

    #[test]
    fn test_select_top_n_called_twice_is_identical() {
        let p = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(select_top_n(p, "k|l|m", 4), select_top_n(p, "k|l|m", 4));
    }

    #[test]
    fn test_select_top_n_never_repeats_even_with_dirty_pool() {
        let p = ["a", "b", "a", "c", "b", "", "c"];
        let out = select_top_n(p, "any", 10);
        let mut sorted = out.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), out.len(), "duplicate in {out:?}");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_select_top_n_length_is_min_of_n_and_pool() {
        let p = ["a", "b", "c", "d"];
        assert_eq!(select_top_n(p, "s", 2).len(), 2);
        assert_eq!(select_top_n(p, "s", 4).len(), 4);
        assert_eq!(select_top_n(p, "s", 9).len(), 4);
        assert_eq!(select_top_n::<[&str; 0]>([], "s", 3).len(), 0);
    }

    #[test]
    fn test_merge_skills_role_safe_drops_foreign_values() {
        let user = vec!["X".to_string(), "Y".to_string()];
        let suggested = &["Y", "Z", "W"];
        let merged = merge_skills(&user, suggested, 10, true);
        assert!(!merged.contains(&"X".to_string()));
        assert_eq!(merged, vec!["Y", "Z", "W"]);
    }

    #[test]
    fn test_merge_skills_keeps_user_values_first_without_role_safe() {
        let user = vec!["Custom Skill".to_string()];
        let suggested = &["A", "B"];
        let merged = merge_skills(&user, suggested, 10, false);
        assert_eq!(merged, vec!["Custom Skill", "A", "B"]);
    }

    #[test]
    fn test_merge_skills_fills_to_cap_without_exceeding() {
        let user = vec!["B".to_string()];
        let suggested = &["A", "B", "C", "D", "E"];
        let merged = merge_skills(&user, suggested, 3, true);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], "B", "user selection comes first");
    }

    #[test]
    fn test_merge_skills_dedupes_across_user_and_suggested() {
        let user = vec!["A".to_string(), "A".to_string()];
        let suggested = &["A", "B"];
        let merged = merge_skills(&user, suggested, 10, true);
        assert_eq!(merged, vec!["A", "B"]);
    }
}
