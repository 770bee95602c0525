//! Static tips panel shown under the tracker

use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, ICON_INFO, Icon};

/// Fixed hints, independent of any check state.
pub const TIPS: [&str; 3] = [
    "Complete your KYC to unlock deposit features",
    "Use code WELCOME50 for 50% off on your first trade",
    "Refer friends to earn bonus rewards",
];

#[component]
pub fn TipsPanel() -> impl IntoView {
    view! {
        <div class="panel tips-panel">
            <h3 class="tips-title">
                <Icon path=ICON_INFO class="icon-accent" />
                "Tips to Complete Your Journey"
            </h3>
            <ul class="tips-list">
                {TIPS
                    .iter()
                    .map(|tip| view! {
                        <li>
                            <Icon path=ICON_CHECK_CIRCLE class="icon-accent" />
                            <span>{*tip}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
