//! Code-point decoding and recurrence search.

/// Decode text into its ordered code-point sequence.
pub fn decode(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Where and how often a substring recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recurrence {
    /// Index of the first match at or after the search offset.
    pub first: usize,
    /// Total matches from the search offset to the end.
    pub count: usize,
}

/// Scan `seq` for occurrences of `needle` starting at or after `from`.
///
/// Counts every match position, contiguous or not; two occurrences
/// separated by unrelated text both count. Returns `None` when the needle
/// is empty or no match exists in range.
pub fn find_recurrence(seq: &[char], needle: &[char], from: usize) -> Option<Recurrence> {
    if needle.is_empty() || needle.len() > seq.len() {
        return None;
    }
    let last = seq.len() - needle.len();
    if from > last {
        return None;
    }

    let mut first = None;
    let mut count = 0;
    for i in from..=last {
        if seq[i..i + needle.len()] == *needle {
            if first.is_none() {
                first = Some(i);
            }
            count += 1;
        }
    }
    first.map(|first| Recurrence { first, count })
}
