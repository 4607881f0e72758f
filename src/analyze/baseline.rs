//! Body-text baseline estimation.

use std::collections::HashMap;

use crate::model::TextRun;

/// Document-level body text statistics.
///
/// The dominant font size is treated as body text; everything the candidate
/// identifier scores is measured against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyStats {
    /// Body font size in points.
    pub size: f32,

    /// Body font size in tenths of a point (the comparison key).
    pub size_key: i32,

    /// How many runs share the body size.
    pub frequency: usize,

    /// Average word count among body-sized runs.
    pub avg_word_count: f64,

    /// Average character count among body-sized runs.
    pub avg_char_count: f64,

    /// Total number of runs observed.
    pub total_runs: usize,
}

/// Estimate the body-text baseline from all runs of a document.
///
/// The most frequent size (grouped at one-decimal precision) wins. On a
/// frequency tie, the size whose first occurrence comes earliest in scan
/// order wins, so the estimate is deterministic for a fixed run sequence.
pub fn estimate_body_stats(runs: &[TextRun]) -> BodyStats {
    if runs.is_empty() {
        return BodyStats::default();
    }

    // size_key -> (count, index of first occurrence)
    let mut histogram: HashMap<i32, (usize, usize)> = HashMap::new();
    for (i, run) in runs.iter().enumerate() {
        let entry = histogram.entry(run.size_key).or_insert((0, i));
        entry.0 += 1;
    }

    let (&body_key, &(frequency, _)) = histogram
        .iter()
        .min_by_key(|(_, &(count, first_seen))| (std::cmp::Reverse(count), first_seen))
        .expect("histogram is non-empty for non-empty runs");

    let body_runs: Vec<&TextRun> = runs.iter().filter(|r| r.size_key == body_key).collect();
    let avg_word_count =
        body_runs.iter().map(|r| r.word_count).sum::<usize>() as f64 / body_runs.len() as f64;
    let avg_char_count =
        body_runs.iter().map(|r| r.char_count).sum::<usize>() as f64 / body_runs.len() as f64;

    BodyStats {
        size: body_key as f32 / 10.0,
        size_key: body_key,
        frequency,
        avg_word_count,
        avg_char_count,
        total_runs: runs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, size: f32) -> TextRun {
        TextRun::new(text, size, "Helvetica", 1, 0.0, 0.0)
    }

    #[test]
    fn test_dominant_size_wins() {
        let mut runs: Vec<TextRun> = (0..20).map(|_| run("body text here", 10.0)).collect();
        runs.push(run("Heading", 18.0));
        runs.push(run("Another Heading", 18.0));

        let stats = estimate_body_stats(&runs);
        assert_eq!(stats.size, 10.0);
        assert_eq!(stats.size_key, 100);
        assert_eq!(stats.frequency, 20);
        assert_eq!(stats.total_runs, 22);
    }

    #[test]
    fn test_frequency_tie_prefers_first_seen() {
        // 11pt and 9pt both occur three times; 11pt appears first.
        let runs = vec![
            run("a first", 11.0),
            run("b second", 9.0),
            run("c third", 11.0),
            run("d fourth", 9.0),
            run("e fifth", 11.0),
            run("f sixth", 9.0),
        ];

        let stats = estimate_body_stats(&runs);
        assert_eq!(stats.size, 11.0);
        assert_eq!(stats.frequency, 3);
    }

    #[test]
    fn test_averages_restricted_to_body_runs() {
        let runs = vec![
            run("one two three", 10.0),
            run("one", 10.0),
            run("A Much Longer Heading Line Entirely Ignored", 24.0),
        ];

        let stats = estimate_body_stats(&runs);
        assert_eq!(stats.size, 10.0);
        assert!((stats.avg_word_count - 2.0).abs() < 1e-9);
        // "one two three" has 13 chars, "one" has 3.
        assert!((stats.avg_char_count - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounding_groups_nearby_sizes() {
        // 10.04 and 9.96 both round to 10.0 and count as one size.
        let runs = vec![
            run("first", 10.04),
            run("second", 9.96),
            run("third", 12.0),
        ];

        let stats = estimate_body_stats(&runs);
        assert_eq!(stats.size_key, 100);
        assert_eq!(stats.frequency, 2);
    }

    #[test]
    fn test_empty_runs() {
        let stats = estimate_body_stats(&[]);
        assert_eq!(stats, BodyStats::default());
    }
}
