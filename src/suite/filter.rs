//! Tag-based case selection

use std::collections::HashSet;

/// A set of tags selecting which cases run
///
/// A case matches iff its tag is a member of the set. Untagged cases never
/// match. An empty filter therefore runs zero cases; "run everything" is
/// expressed by not installing a filter at all.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    tags: HashSet<String>,
}

impl TagFilter {
    /// Build a filter from any sequence of tag strings
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test for a case's tag
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match tag {
            Some(tag) => self.tags.contains(tag),
            None => false,
        }
    }

    /// Number of distinct tags in the filter
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the filter selects nothing
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_case_matches_member() {
        let filter = TagFilter::new(["smoke", "render"]);
        assert!(filter.matches(Some("smoke")));
        assert!(filter.matches(Some("render")));
        assert!(!filter.matches(Some("slow")));
    }

    #[test]
    fn test_untagged_case_never_matches() {
        let filter = TagFilter::new(["smoke"]);
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = TagFilter::new(Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(!filter.matches(Some("smoke")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_duplicate_tags_collapse() {
        let filter = TagFilter::new(["smoke", "smoke"]);
        assert_eq!(filter.len(), 1);
    }
}
