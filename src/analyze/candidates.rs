//! Heading candidate identification.

use crate::model::TextRun;

use super::baseline::BodyStats;

/// A text run that crossed the heading-candidacy threshold, with its score.
#[derive(Debug, Clone)]
pub struct HeadingCandidate<'a> {
    /// The underlying run.
    pub run: &'a TextRun,

    /// Weighted sum of the typographic signals.
    pub score: u32,
}

/// Minimum score for a run to become a candidate.
const MIN_SCORE: u32 = 3;

/// Score every run against the body baseline and keep those that qualify.
///
/// The additive score lets weight, casing, digit absence and phrase length
/// compensate for borderline size differences, but a run at or below the
/// body size is never a candidate no matter how it scores. Output preserves
/// input order.
pub fn identify_candidates<'a>(
    runs: &'a [TextRun],
    stats: &BodyStats,
) -> Vec<HeadingCandidate<'a>> {
    let mut candidates = Vec::new();

    for run in runs {
        if run.char_count < 3 {
            continue;
        }

        let larger_than_body = run.size_key > stats.size_key;
        let significantly_larger = run.font_size >= stats.size * 1.1;
        let reasonable_length = (3..=20).contains(&run.word_count);

        let mut score = 0u32;
        if larger_than_body {
            score += 2;
        }
        if significantly_larger {
            score += 3;
        }
        if run.is_bold {
            score += 2;
        }
        if run.is_all_caps {
            score += 1;
        }
        if reasonable_length {
            score += 1;
        }
        if !run.has_digits {
            score += 1;
        }

        // The size gate is mandatory regardless of score: body-sized
        // emphasis text is not structure.
        if score >= MIN_SCORE && larger_than_body {
            candidates.push(HeadingCandidate { run, score });
        }
    }

    candidates
}
