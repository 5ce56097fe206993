/// Helpers for filtering the list pages.

/// Trait for row types that support the free-text search box.
pub trait Searchable {
    /// Whether the row matches the search query.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive containment check; an empty filter matches everything.
pub fn contains_ci(value: &str, filter: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() {
        return true;
    }
    value.to_lowercase().contains(&filter.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(contains_ci("Paris", ""));
        assert!(contains_ci("", "   "));
    }

    #[test]
    fn containment_ignores_case() {
        assert!(contains_ci("Paris", "par"));
        assert!(contains_ci("sophie.martin@email.com", "MARTIN"));
        assert!(!contains_ci("Paris", "lyon"));
    }
}
