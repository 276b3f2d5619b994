//! Test case storage
//!
//! A case body is stored as a boxed async function taking the suite scope
//! explicitly; there is no implicit calling context.

use std::fmt;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::common::Result;

use super::scope::SuiteScope;

/// Stored form of a case body or per-suite setup hook
pub(crate) type CaseFn =
    Box<dyn Fn(Arc<SuiteScope>) -> BoxFuture<'static, Result<()>> + Send + Sync>;

/// Box an async function into the stored [`CaseFn`] form
pub(crate) fn boxed_case<F, Fut>(f: F) -> CaseFn
where
    F: Fn(Arc<SuiteScope>) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<()>> + Send + 'static,
{
    Box::new(move |scope| Box::pin(f(scope)))
}

/// A single named, optionally tagged test operation
///
/// Immutable once declared; owned by its suite. Built through
/// [`TestSuite::case`](super::TestSuite::case) and
/// [`TestSuite::tagged_case`](super::TestSuite::tagged_case).
pub struct TestCase {
    label: String,
    tag: Option<String>,
    body: CaseFn,
}

impl TestCase {
    pub(crate) fn new(label: String, tag: Option<String>, body: CaseFn) -> Self {
        Self { label, tag, body }
    }

    /// The case label, unique within its suite by convention
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The selection tag, if any
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Start the case body with the given suite scope
    pub(crate) fn execute(&self, scope: Arc<SuiteScope>) -> BoxFuture<'static, Result<()>> {
        (self.body)(scope)
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase")
            .field("label", &self.label)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
