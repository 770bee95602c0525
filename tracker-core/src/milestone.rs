//! Funnel milestones and the progress derived from them.
//!
//! A [`MilestoneSet`] always carries all four flags. "No check yet" is
//! modelled as `Option<MilestoneSet>` by the caller, never as a partial set.

use serde::{Deserialize, Serialize};

/// One step of the user funnel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Milestone {
    /// App installed and opened for the first time
    Install,
    /// Account created
    Register,
    /// First deposit made
    Deposit,
    /// First trade completed
    Trading,
}

impl Milestone {
    /// All milestones in display order.
    pub const ALL: [Milestone; 4] = [
        Milestone::Install,
        Milestone::Register,
        Milestone::Deposit,
        Milestone::Trading,
    ];

    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            Milestone::Install => "Install & Open",
            Milestone::Register => "Registration",
            Milestone::Deposit => "Deposit",
            Milestone::Trading => "Trading",
        }
    }

    /// Card description line.
    pub fn description(&self) -> &'static str {
        match self {
            Milestone::Install => "App installation and first open",
            Milestone::Register => "Account creation completed",
            Milestone::Deposit => "First deposit made",
            Milestone::Trading => "First trade completed",
        }
    }

    /// Lowercase key, matching the serialized field name.
    pub fn key(&self) -> &'static str {
        match self {
            Milestone::Install => "install",
            Milestone::Register => "register",
            Milestone::Deposit => "deposit",
            Milestone::Trading => "trading",
        }
    }

    /// Zero-based display position.
    pub fn index(&self) -> usize {
        match self {
            Milestone::Install => 0,
            Milestone::Register => 1,
            Milestone::Deposit => 2,
            Milestone::Trading => 3,
        }
    }

    /// Entrance animation delay in seconds: 0.1, 0.2, 0.3, 0.4.
    pub fn stagger_delay(&self) -> f64 {
        (self.index() + 1) as f64 / 10.0
    }
}

/// Completion flags for the four funnel steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MilestoneSet {
    pub install: bool,
    pub register: bool,
    pub deposit: bool,
    pub trading: bool,
}

impl MilestoneSet {
    pub fn new(install: bool, register: bool, deposit: bool, trading: bool) -> Self {
        Self {
            install,
            register,
            deposit,
            trading,
        }
    }

    /// Every milestone completed.
    pub fn all_completed() -> Self {
        Self::new(true, true, true, true)
    }

    pub fn get(&self, milestone: Milestone) -> bool {
        match milestone {
            Milestone::Install => self.install,
            Milestone::Register => self.register,
            Milestone::Deposit => self.deposit,
            Milestone::Trading => self.trading,
        }
    }

    /// Milestones paired with their flag, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Milestone, bool)> + '_ {
        Milestone::ALL.into_iter().map(|m| (m, self.get(m)))
    }

    pub fn completed_count(&self) -> usize {
        self.iter().filter(|(_, done)| *done).count()
    }

    pub fn progress(&self) -> Progress {
        Progress::from_counts(self.completed_count(), Milestone::ALL.len())
    }
}

/// Completion percentage, 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// `round(100 * completed / total)`, halves rounded up. Empty totals give 0.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0);
        }
        let completed = completed.min(total);
        let rounded = (completed * 200 + total) / (total * 2);
        Self(rounded as u8)
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// CSS width value for the progress bar, e.g. `"75%"`.
    pub fn css_width(&self) -> String {
        format!("{}%", self.0)
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Footer line of a milestone card.
pub fn footer_text(completed: bool, date_label: &str) -> String {
    if completed {
        format!("Completed on {date_label}")
    } else {
        "Action required to complete this step".to_string()
    }
}
