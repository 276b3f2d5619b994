//! Suite and case declarations
//!
//! Suites are declared in code through a chaining builder and handed to the
//! harness as an ordered collection. Hooks and case bodies receive the suite
//! scope as an explicit argument.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

mod case;
mod filter;
mod scope;

pub use case::TestCase;
pub use filter::TagFilter;
pub use scope::SuiteScope;

use case::{boxed_case, CaseFn};

use crate::common::Result;

/// An ordered group of related test cases sharing an optional setup hook
///
/// Declaration order is execution order. The suite is read-only once the
/// harness starts running.
pub struct TestSuite {
    label: String,
    scope: Arc<SuiteScope>,
    before_each: Option<CaseFn>,
    cases: Vec<TestCase>,
}

impl TestSuite {
    /// Start a suite with the given describe label
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let scope = Arc::new(SuiteScope::new(label.clone()));
        Self {
            label,
            scope,
            before_each: None,
            cases: Vec::new(),
        }
    }

    /// Install a setup hook that runs before every case in this suite
    ///
    /// The hook receives the suite scope and typically seeds the state the
    /// case bodies read. Declaring a second hook replaces the first.
    pub fn before_each<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(Arc<SuiteScope>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.before_each = Some(boxed_case(hook));
        self
    }

    /// Append an untagged case
    pub fn case<F, Fut>(self, label: impl Into<String>, body: F) -> Self
    where
        F: Fn(Arc<SuiteScope>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.push_case(label.into(), None, boxed_case(body))
    }

    /// Append a case carrying a selection tag
    pub fn tagged_case<F, Fut>(
        self,
        tag: impl Into<String>,
        label: impl Into<String>,
        body: F,
    ) -> Self
    where
        F: Fn(Arc<SuiteScope>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.push_case(label.into(), Some(tag.into()), boxed_case(body))
    }

    fn push_case(mut self, label: String, tag: Option<String>, body: CaseFn) -> Self {
        self.cases.push(TestCase::new(label, tag, body));
        self
    }

    /// The describe label shared by every case in this suite
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The declared cases, in execution order
    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// True when the suite declares no cases
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// A handle to the suite scope shared with hooks and bodies
    pub fn scope(&self) -> Arc<SuiteScope> {
        Arc::clone(&self.scope)
    }

    pub(crate) fn setup_hook(&self) -> Option<&CaseFn> {
        self.before_each.as_ref()
    }
}

impl fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSuite")
            .field("label", &self.label)
            .field("cases", &self.cases)
            .field("has_before_each", &self.before_each.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_declaration_order() {
        let suite = TestSuite::new("deck")
            .case("first", |_| async { Ok(()) })
            .tagged_case("smoke", "second", |_| async { Ok(()) })
            .case("third", |_| async { Ok(()) });

        let labels: Vec<&str> = suite.cases().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
        assert_eq!(suite.cases()[1].tag(), Some("smoke"));
        assert_eq!(suite.cases()[0].tag(), None);
    }

    #[test]
    fn test_scope_carries_the_suite_label() {
        let suite = TestSuite::new("status banner");
        assert_eq!(suite.scope().label(), "status banner");
        assert!(suite.is_empty());
    }
}
