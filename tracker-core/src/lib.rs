//! # tracker-core
//!
//! Domain model and state machine behind the event tracker page.
//!
//! The crate knows nothing about rendering or runtimes. A [`Checker`] holds
//! the whole page state and every transition hands back a [`Scheduled`]
//! timer instead of sleeping, so the browser build can drive it with
//! `set_timeout` and the CLI with tokio.
//!
//! ## Modules
//!
//! - [`milestone`] - the four funnel steps, [`MilestoneSet`] and [`Progress`]
//! - [`checker`] - the check/reveal/reset state machine
//! - [`source`] - where milestone results come from ([`ProgressSource`])
//! - [`clock`] - the date shown on completed cards ([`Clock`])
//! - [`config`] - delays and odds, loadable from TOML
//! - [`error`] - [`TrackerError`]
//!
//! ## Example
//!
//! ```rust
//! use tracker_core::{Checker, FixedProgressSource, MilestoneSet, Phase, Timings};
//!
//! let source = FixedProgressSource::new(MilestoneSet::new(true, true, true, false));
//! let mut checker = Checker::new(Timings::default(), source);
//!
//! checker.set_identifier("alice@upi");
//! let timer = checker.submit().unwrap();
//! assert_eq!(checker.phase(), Phase::Checking);
//!
//! let reveal = checker.fire(timer.ticket).unwrap();
//! checker.fire(reveal.ticket);
//! assert_eq!(checker.phase(), Phase::Revealed);
//! assert_eq!(checker.progress().percent(), 75);
//! ```

pub mod checker;
pub mod clock;
pub mod config;
pub mod error;
pub mod milestone;
pub mod source;

pub use checker::{Checker, Phase, Scheduled, Snapshot, Ticket, TimerKind};
pub use clock::{Clock, FixedClock, SystemClock, format_date};
pub use config::{Odds, Timings, TrackerConfig};
pub use error::{Result, TrackerError};
pub use milestone::{Milestone, MilestoneSet, Progress, footer_text};
pub use source::{FixedProgressSource, ProgressSource, RandomProgressSource};
