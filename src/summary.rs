//! Summary text built from reference links.

/// Separator placed between links in a summary.
pub const SUMMARY_SEPARATOR: &str = " | ";

/// Joins links into a single summary line.
pub fn summarize<S: AsRef<str>>(links: &[S]) -> String {
    links
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&["a", "b", "c"]), "a | b | c");
        assert_eq!(summarize(&["only"]), "only");
        assert_eq!(summarize::<&str>(&[]), "");
    }

    #[test]
    fn test_summarize_owned() {
        let links = vec!["x".to_string(), "y".to_string()];
        assert_eq!(summarize(&links), "x | y");
    }
}
