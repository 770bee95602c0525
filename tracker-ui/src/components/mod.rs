//! Leptos UI components for the tracker page.
//!
//! Every component reads from a [`tracker_core::Snapshot`] signal and
//! reports user intent through callbacks, so the same tree renders in the
//! browser and to static HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! TrackerDocument (static output only)
//! └── TrackerPage
//!     ├── CheckForm          (until results are revealed)
//!     ├── ResultsPanel       (once revealed)
//!     │   ├── ProgressBar
//!     │   └── MilestoneList
//!     │       └── MilestoneCard ×4
//!     └── TipsPanel
//! ```

mod check_form;
mod icons;
mod milestone_card;
mod page;
mod results;
mod tips;

pub use check_form::CheckForm;
pub use icons::*;
pub use milestone_card::{MilestoneCard, MilestoneList};
pub use page::{TrackerDocument, TrackerPage};
pub use results::{ProgressBar, ResultsPanel};
pub use tips::{TIPS, TipsPanel};
