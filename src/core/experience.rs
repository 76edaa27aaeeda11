use std::sync::LazyLock;

use regex::Regex;

use crate::core::normalize::labels_equal;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Inclusive year bounds parsed from an experience-band label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

impl ExperienceRange {
    #[inline]
    pub fn overlaps(&self, other: &ExperienceRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Parse the numeric bounds out of a label like "from 3 to 5 years".
///
/// A single number is both bounds. Returns `None` when the label carries no
/// number at all.
pub fn parse_range(label: &str) -> Option<ExperienceRange> {
    let mut numbers = NUMBER_RE
        .find_iter(label)
        .filter_map(|m| m.as_str().parse::<u32>().ok());

    let first = numbers.next()?;
    let (min, max) = numbers.fold((first, first), |(lo, hi), n| (lo.min(n), hi.max(n)));

    Some(ExperienceRange { min, max })
}

/// Whether two experience bands overlap.
///
/// Falls back to label equality when either side has no parsable number.
pub fn experience_overlaps(a: Option<&str>, b: Option<&str>) -> bool {
    let (Some(a_label), Some(b_label)) = (a, b) else {
        return false;
    };

    match (parse_range(a_label), parse_range(b_label)) {
        (Some(a_range), Some(b_range)) => a_range.overlaps(&b_range),
        _ => labels_equal(a, b),
    }
}
