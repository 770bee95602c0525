//! Results panel - overall completion, milestone cards, checked identifier

use leptos::prelude::*;
use tracker_core::{Phase, Progress, Snapshot};

use super::{ICON_ARROWS_CLOCKWISE, Icon, MilestoneList};

/// Horizontal bar that grows to the completion percentage.
#[component]
pub fn ProgressBar(
    /// Completion percentage
    progress: Progress,
) -> impl IntoView {
    view! {
        <div class="progress">
            <div class="progress-head">
                <span class="progress-label">"Overall Completion"</span>
                <span class="progress-value">{progress.to_string()}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=format!("--progress: {}", progress.css_width())
                ></div>
            </div>
        </div>
    }
}

/// Everything shown once results are revealed. Fades out upward while a
/// reset is pending.
#[component]
pub fn ResultsPanel(
    /// Current checker state
    snapshot: Signal<Snapshot>,
    /// Date label for completed cards
    #[prop(into)]
    completed_on: Signal<String>,
    /// "New Check" pressed
    on_reset: Callback<()>,
) -> impl IntoView {
    let panel_class = move || {
        if snapshot.with(|s| s.phase == Phase::Resetting) {
            "panel fade-out-up"
        } else {
            "panel fade-in-up"
        }
    };
    let checked = move || {
        snapshot.with(|s| s.checked_identifier.clone().unwrap_or_default())
    };

    view! {
        <div class=panel_class>
            <div class="results-head">
                <h2>"Your Progress"</h2>
                <button
                    type="button"
                    class="reset-btn"
                    disabled=move || !snapshot.with(|s| s.can_reset)
                    on:click=move |_| on_reset.run(())
                >
                    <Icon path=ICON_ARROWS_CLOCKWISE size="16" />
                    "New Check"
                </button>
            </div>

            {move || view! { <ProgressBar progress=snapshot.with(|s| s.progress) /> }}

            {move || {
                snapshot
                    .with(|s| s.results)
                    .map(|results| view! {
                        <MilestoneList results=results completed_on=completed_on.get() />
                    })
            }}

            <div class="checked-for">
                <p>"Checked for UPI ID"</p>
                <p class="checked-id">{checked}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn progress_bar_sets_width_and_label() {
        let set = tracker_core::MilestoneSet::new(true, true, true, false);
        let html = view! { <ProgressBar progress=set.progress() /> }.to_html();
        assert!(html.contains("75%"));
        assert!(html.contains("--progress: 75%"));
        assert!(html.contains("Overall Completion"));
    }
}
