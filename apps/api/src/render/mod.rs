//! The template engine: pure functions from a draft snapshot to a preview.
//!
//! Nothing in this module errors or touches the clock — the cover-letter
//! date is passed in by the caller. Missing required fields render as
//! bracketed placeholders; missing secondary fields render as nothing.

pub mod bio;
pub mod cover_letter;
pub mod references;
pub mod resume;

/// Joins non-empty sentence segments with single spaces.
///
/// The builders assemble prose from optional fragments; skipping empty
/// fragments here is what keeps doubled spaces out of the output.
pub(crate) fn join_segments(segments: &[String]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_segments_skips_empty() {
        let joined = join_segments(&[
            "a".to_string(),
            String::new(),
            "b".to_string(),
        ]);
        assert_eq!(joined, "a b");
    }
}
