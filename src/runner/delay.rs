//! Start-delay suspension

use std::time::Duration;

/// Suspend the current task for the given duration
///
/// Backs the optional delay before the first suite runs. There is no
/// cancellation; once begun the pause always runs to completion.
pub async fn pause(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pause_waits_the_full_duration() {
        let before = tokio::time::Instant::now();
        pause(Duration::from_millis(200)).await;
        assert!(before.elapsed() >= Duration::from_millis(200));
    }
}
