//! The check/reveal/reset state machine.
//!
//! ```text
//!            submit             1.5s                 0.3s
//!   Idle ───────────▶ Checking ──────▶ Settled ──────────▶ Revealed
//!    ▲                                                        │ reset
//!    │                        0.3s                            ▼
//!    └──────────────────────────────────────────────── Resetting
//! ```
//!
//! Transitions never wait. `submit`, `reset` and `fire` return a
//! [`Scheduled`] timer that the host runtime must deliver back through
//! [`Checker::fire`] once its delay has elapsed. Each ticket carries the
//! generation that issued it; `submit` and `reset` bump the generation, so
//! timers left over from an earlier cycle are dropped on delivery.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Timings;
use crate::error::{Result, TrackerError};
use crate::milestone::{MilestoneSet, Progress};
use crate::source::ProgressSource;

/// Where the page currently is in a check cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Form shown, nothing in flight
    #[default]
    Idle,
    /// Waiting for the fabricated result
    Checking,
    /// Results computed, panel about to be revealed
    Settled,
    /// Results panel visible
    Revealed,
    /// Results panel hidden, waiting to clear the form
    Resetting,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Checking => "checking",
            Phase::Settled => "settled",
            Phase::Revealed => "revealed",
            Phase::Resetting => "resetting",
        }
    }

    /// The input form is on screen and not busy.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Settled)
    }

    pub fn results_visible(&self) -> bool {
        matches!(self, Phase::Revealed)
    }

    /// The input form is mounted. It comes back only once a reset has
    /// cleared the identifier.
    pub fn shows_form(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Checking | Phase::Settled)
    }

    /// The results panel is mounted, either settled in or playing its exit
    /// animation.
    pub fn shows_results_panel(&self) -> bool {
        matches!(self, Phase::Revealed | Phase::Resetting)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a scheduled timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    CheckComplete,
    Reveal,
    ResetComplete,
}

impl TimerKind {
    /// Phase the checker must still be in for the timer to apply.
    fn expected_phase(&self) -> Phase {
        match self {
            TimerKind::CheckComplete => Phase::Checking,
            TimerKind::Reveal => Phase::Settled,
            TimerKind::ResetComplete => Phase::Resetting,
        }
    }
}

/// Identifies one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    kind: TimerKind,
}

impl Ticket {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A timer the host must deliver back via [`Checker::fire`] after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub ticket: Ticket,
    pub delay: Duration,
}

/// Observable state of the checker, cheap to clone into the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Live contents of the input field
    pub identifier: String,
    /// Identifier the current results were checked for
    pub checked_identifier: Option<String>,
    pub results: Option<MilestoneSet>,
    pub progress: Progress,
    pub can_submit: bool,
    pub can_reset: bool,
    pub is_checking: bool,
    pub results_visible: bool,
}

/// Page state plus the source that answers checks.
#[derive(Debug)]
pub struct Checker<S> {
    timings: Timings,
    source: S,
    phase: Phase,
    identifier: String,
    checked_identifier: Option<String>,
    results: Option<MilestoneSet>,
    generation: u64,
}

impl<S: ProgressSource> Checker<S> {
    pub fn new(timings: Timings, source: S) -> Self {
        Self {
            timings,
            source,
            phase: Phase::Idle,
            identifier: String::new(),
            checked_identifier: None,
            results: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn checked_identifier(&self) -> Option<&str> {
        self.checked_identifier.as_deref()
    }

    pub fn results(&self) -> Option<MilestoneSet> {
        self.results
    }

    /// Derived from the current results; 0 when there are none.
    pub fn progress(&self) -> Progress {
        self.results.map(|set| set.progress()).unwrap_or_default()
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn is_checking(&self) -> bool {
        self.phase == Phase::Checking
    }

    pub fn can_submit(&self) -> bool {
        self.phase.accepts_submit() && !self.identifier.trim().is_empty()
    }

    pub fn can_reset(&self) -> bool {
        self.phase == Phase::Revealed
    }

    /// Replace the input text. Never changes phase.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
    }

    /// Start a check for the current identifier.
    ///
    /// Blank identifiers and a busy/hidden form are refused without touching
    /// any state.
    pub fn submit(&mut self) -> Result<Scheduled> {
        if !self.phase.accepts_submit() {
            return Err(TrackerError::SubmitUnavailable { phase: self.phase });
        }
        let trimmed = self.identifier.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::BlankIdentifier);
        }

        self.checked_identifier = Some(trimmed.to_string());
        self.results = None;
        self.phase = Phase::Checking;
        self.generation += 1;
        info!(identifier = trimmed, generation = self.generation, "check started");

        Ok(self.schedule(TimerKind::CheckComplete, self.timings.check_delay()))
    }

    /// Hide the results and schedule clearing the form.
    pub fn reset(&mut self) -> Result<Scheduled> {
        if !self.can_reset() {
            return Err(TrackerError::ResetUnavailable { phase: self.phase });
        }

        self.phase = Phase::Resetting;
        self.generation += 1;
        info!(generation = self.generation, "reset requested");

        Ok(self.schedule(TimerKind::ResetComplete, self.timings.reset_delay()))
    }

    /// Deliver an elapsed timer. Returns the follow-up timer, if any.
    ///
    /// Tickets from an older generation, or whose phase has already been
    /// left, are ignored.
    pub fn fire(&mut self, ticket: Ticket) -> Option<Scheduled> {
        if ticket.generation != self.generation || ticket.kind.expected_phase() != self.phase {
            debug!(
                ?ticket,
                current_generation = self.generation,
                phase = %self.phase,
                "ignoring stale timer"
            );
            return None;
        }

        match ticket.kind {
            TimerKind::CheckComplete => {
                let identifier = self.checked_identifier.as_deref().unwrap_or_default();
                let set = self.source.lookup(identifier);
                self.results = Some(set);
                self.phase = Phase::Settled;
                info!(
                    identifier,
                    progress = set.progress().percent(),
                    "check complete"
                );
                Some(self.schedule(TimerKind::Reveal, self.timings.reveal_delay()))
            }
            TimerKind::Reveal => {
                self.phase = Phase::Revealed;
                debug!("results revealed");
                None
            }
            TimerKind::ResetComplete => {
                self.identifier.clear();
                self.checked_identifier = None;
                self.results = None;
                self.phase = Phase::Idle;
                debug!("form cleared");
                None
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            identifier: self.identifier.clone(),
            checked_identifier: self.checked_identifier.clone(),
            results: self.results,
            progress: self.progress(),
            can_submit: self.can_submit(),
            can_reset: self.can_reset(),
            is_checking: self.is_checking(),
            results_visible: self.phase.results_visible(),
        }
    }

    fn schedule(&self, kind: TimerKind, delay: Duration) -> Scheduled {
        Scheduled {
            ticket: Ticket {
                generation: self.generation,
                kind,
            },
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixedProgressSource, RandomProgressSource};
    use crate::config::Odds;
    use pretty_assertions::assert_eq;

    fn checker(set: MilestoneSet) -> Checker<FixedProgressSource> {
        Checker::new(Timings::default(), FixedProgressSource::new(set))
    }

    fn three_of_four() -> MilestoneSet {
        MilestoneSet::new(true, true, true, false)
    }

    /// Drives timers until nothing more is scheduled.
    fn settle<S: ProgressSource>(checker: &mut Checker<S>, first: Scheduled) {
        let mut next = Some(first);
        while let Some(timer) = next {
            next = checker.fire(timer.ticket);
        }
    }

    #[test]
    fn fresh_checker_matches_default_snapshot() {
        let c = checker(three_of_four());
        assert_eq!(c.snapshot(), Snapshot::default());
    }

    #[test]
    fn submit_enters_checking_and_schedules_check_delay() {
        let mut c = checker(three_of_four());
        c.set_identifier("  alice@upi ");
        let timer = c.submit().unwrap();

        assert_eq!(c.phase(), Phase::Checking);
        assert!(c.is_checking());
        assert!(!c.can_submit());
        assert_eq!(c.results(), None);
        assert_eq!(c.checked_identifier(), Some("alice@upi"));
        assert_eq!(timer.ticket.kind(), TimerKind::CheckComplete);
        assert_eq!(timer.delay, Duration::from_millis(1500));
    }

    #[test]
    fn full_cycle_reveals_results_after_both_delays() {
        let mut c = checker(three_of_four());
        c.set_identifier("alice@upi");

        let check = c.submit().unwrap();
        let reveal = c.fire(check.ticket).unwrap();
        assert_eq!(c.phase(), Phase::Settled);
        assert!(!c.snapshot().results_visible);
        assert_eq!(c.progress().percent(), 75);
        assert_eq!(reveal.ticket.kind(), TimerKind::Reveal);
        assert_eq!(reveal.delay, Duration::from_millis(300));

        assert_eq!(c.fire(reveal.ticket), None);
        let snap = c.snapshot();
        assert_eq!(snap.phase, Phase::Revealed);
        assert!(snap.results_visible);
        assert!(snap.can_reset);
        assert_eq!(snap.results, Some(three_of_four()));
        assert_eq!(snap.progress.percent(), 75);
    }

    #[test]
    fn blank_identifiers_never_transition() {
        for blank in ["", "   ", "\t\n"] {
            let mut c = checker(three_of_four());
            c.set_identifier(blank);
            let before = c.snapshot();

            assert!(!c.can_submit());
            assert!(matches!(c.submit(), Err(TrackerError::BlankIdentifier)));
            assert_eq!(c.snapshot(), before);
        }
    }

    #[test]
    fn submit_refused_while_checking_or_revealed() {
        let mut c = checker(three_of_four());
        c.set_identifier("bob");
        let check = c.submit().unwrap();
        assert!(matches!(
            c.submit(),
            Err(TrackerError::SubmitUnavailable {
                phase: Phase::Checking
            })
        ));

        settle(&mut c, check);
        assert!(matches!(
            c.submit(),
            Err(TrackerError::SubmitUnavailable {
                phase: Phase::Revealed
            })
        ));
    }

    #[test]
    fn reset_only_from_revealed() {
        let mut c = checker(three_of_four());
        assert!(matches!(
            c.reset(),
            Err(TrackerError::ResetUnavailable { phase: Phase::Idle })
        ));

        c.set_identifier("carol");
        let check = c.submit().unwrap();
        assert!(c.reset().is_err());
        settle(&mut c, check);
        assert!(c.reset().is_ok());
    }

    #[test]
    fn reset_hides_then_clears_everything() {
        let mut c = checker(three_of_four());
        c.set_identifier("dave@upi");
        let check = c.submit().unwrap();
        settle(&mut c, check);

        let clear = c.reset().unwrap();
        assert_eq!(c.phase(), Phase::Resetting);
        assert!(!c.snapshot().results_visible);
        assert_eq!(c.identifier(), "dave@upi");
        assert_eq!(clear.delay, Duration::from_millis(300));

        assert_eq!(c.fire(clear.ticket), None);
        let snap = c.snapshot();
        assert_eq!(snap, Snapshot::default());
        assert_eq!(c.progress().percent(), 0);
    }

    #[test]
    fn submit_refused_until_reset_clears_form() {
        let mut c = checker(three_of_four());
        c.set_identifier("erin");
        let check = c.submit().unwrap();
        settle(&mut c, check);

        let clear = c.reset().unwrap();
        assert!(!c.can_submit());
        assert!(matches!(
            c.submit(),
            Err(TrackerError::SubmitUnavailable {
                phase: Phase::Resetting
            })
        ));
        assert!(!c.phase().shows_form());
        assert!(c.phase().shows_results_panel());

        assert_eq!(c.fire(clear.ticket), None);
        assert!(c.phase().shows_form());
        assert!(!c.phase().shows_results_panel());
        assert_eq!(c.fire(clear.ticket), None);
        assert_eq!(c.phase(), Phase::Idle);

        c.set_identifier("frank");
        let check = c.submit().unwrap();
        settle(&mut c, check);
        assert_eq!(c.checked_identifier(), Some("frank"));
    }

    #[test]
    fn resubmit_while_settled_drops_pending_reveal() {
        let mut c = checker(three_of_four());
        c.set_identifier("gina");
        let check = c.submit().unwrap();
        let reveal = c.fire(check.ticket).unwrap();

        let second = c.submit().unwrap();
        assert_eq!(c.fire(reveal.ticket), None);
        assert_eq!(c.phase(), Phase::Checking);
        assert_eq!(c.results(), None);

        settle(&mut c, second);
        assert_eq!(c.phase(), Phase::Revealed);
    }

    #[test]
    fn duplicate_delivery_is_ignored() {
        let mut c = checker(three_of_four());
        c.set_identifier("hank");
        let check = c.submit().unwrap();
        let reveal = c.fire(check.ticket).unwrap();
        assert_eq!(c.fire(check.ticket), None);
        assert_eq!(c.phase(), Phase::Settled);
        c.fire(reveal.ticket);
        assert_eq!(c.fire(reveal.ticket), None);
        assert_eq!(c.phase(), Phase::Revealed);
    }

    #[test]
    fn progress_never_drifts_from_results() {
        let mut c = Checker::new(
            Timings::instant(),
            RandomProgressSource::seeded(&Odds::default(), 99).unwrap(),
        );
        for round in 0..50 {
            c.set_identifier(format!("user{round}"));
            let check = c.submit().unwrap();
            settle(&mut c, check);

            let snap = c.snapshot();
            let set = snap.results.unwrap();
            assert!(set.install && set.register);
            assert_eq!(snap.progress, set.progress());

            let clear = c.reset().unwrap();
            c.fire(clear.ticket);
        }
    }

    #[test]
    fn editing_input_keeps_checked_identifier() {
        let mut c = checker(three_of_four());
        c.set_identifier("ivy");
        let check = c.submit().unwrap();
        c.set_identifier("ivy-typo");
        settle(&mut c, check);
        assert_eq!(c.checked_identifier(), Some("ivy"));
        assert_eq!(c.identifier(), "ivy-typo");
    }

    #[test]
    fn phase_display_uses_labels() {
        assert_eq!(Phase::Checking.to_string(), "checking");
        let err = TrackerError::ResetUnavailable { phase: Phase::Idle };
        assert_eq!(err.to_string(), "cannot reset while idle; results are not shown");
    }
}
