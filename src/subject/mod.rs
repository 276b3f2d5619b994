//! The surface under test
//!
//! The harness drives an application surface it does not own. The embedder
//! hands it a [`Subject`] implementation that knows how to put that surface
//! back into a known-clean state and how to flush pending redraws so a case
//! observes settled output.

use async_trait::async_trait;

use crate::common::Result;

/// Embedder-provided handle to the live surface being exercised
#[async_trait]
pub trait Subject: Send + Sync {
    /// Reset the surface to a known-clean baseline
    ///
    /// Runs before every case, before the suite's setup hook.
    async fn clear_state(&self) -> Result<()>;

    /// Flush pending redraws so the surface reflects the state written so far
    ///
    /// Runs after the setup hook and before the case body.
    async fn resync(&self) -> Result<()>;
}

/// A subject with nothing to reset or redraw
///
/// Useful for pure-logic suites and for harness tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSubject;

#[async_trait]
impl Subject for StaticSubject {
    async fn clear_state(&self) -> Result<()> {
        Ok(())
    }

    async fn resync(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_subject_is_a_no_op() {
        let subject = StaticSubject;
        subject.clear_state().await.unwrap();
        subject.resync().await.unwrap();
    }
}
