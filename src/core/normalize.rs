/// How two labels of the same dimension relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMatch {
    Exact,
    Partial,
    None,
}

/// Canonical form of a free-form label: trimmed, inner whitespace collapsed,
/// lowercased. Blank or missing labels have no canonical form.
pub fn canonical(label: Option<&str>) -> Option<String> {
    let label = label?;
    let collapsed = label.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

/// Case-insensitive equality of two labels; missing labels never match
#[inline]
pub fn labels_equal(a: Option<&str>, b: Option<&str>) -> bool {
    classify(a, b) == LabelMatch::Exact
}

/// Classify a pair of labels as exact, partial or none.
///
/// Partial means the words of one label appear as a contiguous run inside the
/// other ("chef" in "head chef", "italian" in "italian, french"). Words split on
/// anything but letters, digits and hyphens, so "chef" and "sous-chef" do not
/// relate.
pub fn classify(a: Option<&str>, b: Option<&str>) -> LabelMatch {
    let (Some(a), Some(b)) = (canonical(a), canonical(b)) else {
        return LabelMatch::None;
    };

    if a == b {
        LabelMatch::Exact
    } else if contains_words(&a, &b) || contains_words(&b, &a) {
        LabelMatch::Partial
    } else {
        LabelMatch::None
    }
}

/// `needle` occurs in `haystack` as a run of whole words
fn contains_words(haystack: &str, needle: &str) -> bool {
    let needle = words(needle);
    if needle.is_empty() {
        return false;
    }

    words(haystack)
        .windows(needle.len())
        .any(|run| run == needle.as_slice())
}

#[inline]
fn words(label: &str) -> Vec<&str> {
    label
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
        .collect()
}
