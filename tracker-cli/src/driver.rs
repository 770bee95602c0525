//! Runs checker timers on the tokio clock.

use tokio::time::sleep;
use tracing::debug;
use tracker_core::{Checker, Phase, ProgressSource, Result, Snapshot};

/// Submit `identifier` and wait out every scheduled timer until the cycle
/// settles (normally in [`Phase::Revealed`]).
///
/// `on_phase` is called with the phase after submit and after each timer.
pub async fn run_check<S, F>(checker: &mut Checker<S>, identifier: &str, mut on_phase: F) -> Result<Snapshot>
where
    S: ProgressSource,
    F: FnMut(Phase),
{
    checker.set_identifier(identifier);
    let mut next = Some(checker.submit()?);
    on_phase(checker.phase());

    while let Some(timer) = next {
        debug!(kind = ?timer.ticket.kind(), delay_ms = timer.delay.as_millis() as u64, "waiting");
        sleep(timer.delay).await;
        next = checker.fire(timer.ticket);
        on_phase(checker.phase());
    }

    Ok(checker.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::time::Instant;
    use tracker_core::{FixedProgressSource, MilestoneSet, Timings, TrackerError};

    fn checker(timings: Timings) -> Checker<FixedProgressSource> {
        Checker::new(
            timings,
            FixedProgressSource::new(MilestoneSet::new(true, true, false, false)),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn phases_follow_configured_delays() {
        let mut checker = checker(Timings::default());
        let start = Instant::now();
        let mut seen = Vec::new();

        let snapshot = run_check(&mut checker, "alice@upi", |phase| {
            seen.push((phase, start.elapsed()));
        })
        .await
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (Phase::Checking, Duration::ZERO),
                (Phase::Settled, Duration::from_millis(1500)),
                (Phase::Revealed, Duration::from_millis(1800)),
            ]
        );
        assert!(snapshot.results_visible);
        assert_eq!(snapshot.progress.percent(), 50);
        assert_eq!(snapshot.checked_identifier.as_deref(), Some("alice@upi"));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_identifier_schedules_nothing() {
        let mut checker = checker(Timings::default());
        let start = Instant::now();
        let mut calls = 0;

        let err = run_check(&mut checker, "  ", |_| calls += 1).await.unwrap_err();

        assert!(matches!(err, TrackerError::BlankIdentifier));
        assert_eq!(calls, 0);
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(checker.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn instant_timings_finish_immediately() {
        let mut checker = checker(Timings::instant());
        let snapshot = run_check(&mut checker, "bob", |_| {}).await.unwrap();
        assert_eq!(snapshot.phase, Phase::Revealed);
    }
}
