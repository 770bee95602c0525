//! Where milestone results come from.
//!
//! There is no backend: [`RandomProgressSource`] fabricates results the way
//! the demo page always has, and [`FixedProgressSource`] returns a preset
//! answer for tests and previews.

use rand::SeedableRng;
use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;

use crate::config::Odds;
use crate::error::{Result, TrackerError};
use crate::milestone::MilestoneSet;

/// Looks up the milestone flags for an identifier.
pub trait ProgressSource {
    fn lookup(&mut self, identifier: &str) -> MilestoneSet;
}

impl<S: ProgressSource + ?Sized> ProgressSource for Box<S> {
    fn lookup(&mut self, identifier: &str) -> MilestoneSet {
        (**self).lookup(identifier)
    }
}

/// Install and registration always completed; deposit and trading drawn
/// independently with the configured odds. The identifier is ignored.
#[derive(Debug, Clone)]
pub struct RandomProgressSource {
    rng: StdRng,
    deposit: Bernoulli,
    trading: Bernoulli,
}

impl RandomProgressSource {
    /// Entropy-seeded source.
    pub fn new(odds: &Odds) -> Result<Self> {
        Self::with_rng(odds, StdRng::from_entropy())
    }

    /// Reproducible source for a given seed.
    pub fn seeded(odds: &Odds, seed: u64) -> Result<Self> {
        Self::with_rng(odds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(odds: &Odds, rng: StdRng) -> Result<Self> {
        Ok(Self {
            rng,
            deposit: bernoulli("deposit", odds.deposit)?,
            trading: bernoulli("trading", odds.trading)?,
        })
    }
}

fn bernoulli(name: &'static str, value: f64) -> Result<Bernoulli> {
    Bernoulli::new(value).map_err(|_| TrackerError::InvalidProbability { name, value })
}

impl ProgressSource for RandomProgressSource {
    fn lookup(&mut self, identifier: &str) -> MilestoneSet {
        let set = MilestoneSet {
            install: true,
            register: true,
            deposit: self.deposit.sample(&mut self.rng),
            trading: self.trading.sample(&mut self.rng),
        };
        tracing::debug!(identifier, ?set, "fabricated milestone set");
        set
    }
}

/// Returns the same set for every identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProgressSource {
    set: MilestoneSet,
}

impl FixedProgressSource {
    pub fn new(set: MilestoneSet) -> Self {
        Self { set }
    }
}

impl ProgressSource for FixedProgressSource {
    fn lookup(&mut self, _identifier: &str) -> MilestoneSet {
        self.set
    }
}
