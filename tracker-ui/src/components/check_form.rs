//! Identifier form - text input plus the submit button

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use tracker_core::Snapshot;

use super::{ICON_ARROW_RIGHT, ICON_ARROWS_CLOCKWISE, ICON_MAGNIFYING_GLASS, Icon};

/// Input form. The submit button stays disabled while the identifier is
/// blank or a check is in flight.
#[component]
pub fn CheckForm(
    /// Current checker state
    snapshot: Signal<Snapshot>,
    /// Called with the new input text on every keystroke
    on_input: Callback<String>,
    /// Form submitted while submission is allowed
    on_submit: Callback<()>,
) -> impl IntoView {
    let identifier = move || snapshot.with(|s| s.identifier.clone());
    let blank = move || snapshot.with(|s| s.identifier.trim().is_empty());
    let checking = move || snapshot.with(|s| s.is_checking);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if snapshot.with_untracked(|s| s.can_submit) {
            on_submit.run(());
        }
    };

    view! {
        <div class="panel fade-in-up">
            <form on:submit=submit>
                <div class="field">
                    <label for="upi-input">"UPI ID"</label>
                    <div class="input-wrap">
                        <input
                            id="upi-input"
                            type="text"
                            placeholder="Enter your UPI ID"
                            autocomplete="off"
                            value=identifier
                            prop:value=identifier
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                        />
                        <span class="input-adornment">
                            <Icon path=ICON_ARROW_RIGHT />
                        </span>
                    </div>
                    <p class="field-hint">"Enter the UPI ID associated with your account"</p>
                </div>
                <button
                    type="submit"
                    class=move || if blank() { "submit-btn submit-btn-idle" } else { "submit-btn" }
                    disabled=move || !snapshot.with(|s| s.can_submit)
                >
                    {move || {
                        if checking() {
                            view! {
                                <Icon path=ICON_ARROWS_CLOCKWISE class="icon-spin" />
                                <span>"Checking..."</span>
                            }
                                .into_any()
                        } else {
                            view! {
                                <Icon path=ICON_MAGNIFYING_GLASS />
                                <span>"Check Progress"</span>
                            }
                                .into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
