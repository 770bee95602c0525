// Event Tracker page — Leptos 0.8 CSR build
//
// Owns the checker state machine and turns its scheduled timers into
// `set_timeout` callbacks. Rendering lives in tracker-ui.

use leptos::prelude::*;
use tracker_core::{
    Checker, Clock, Odds, RandomProgressSource, Scheduled, SystemClock, Timings,
};
use tracker_ui::components::TrackerPage;
use tracker_ui::styles::TRACKER_CSS;
use wasm_bindgen::JsValue;

type PageChecker = Checker<RandomProgressSource>;

fn main() {
    console_error_panic_hook::set_once();

    match RandomProgressSource::new(&Odds::default()) {
        Ok(source) => {
            let checker = Checker::new(Timings::default(), source);
            leptos::mount::mount_to_body(move || view! { <App checker=checker /> });
        }
        Err(err) => log_error(&format!("event tracker failed to start: {err}")),
    }
}

#[component]
fn App(checker: PageChecker) -> impl IntoView {
    let checker = RwSignal::new(checker);
    let snapshot = Memo::new(move |_| checker.with(Checker::snapshot));
    let results_visible = Memo::new(move |_| snapshot.with(|s| s.results_visible));

    // Read at reveal time, like a footer rendered on demand
    let today = Signal::derive(move || {
        results_visible.track();
        SystemClock.today_label()
    });

    let on_input = Callback::new(move |value: String| {
        checker.update(|c| c.set_identifier(value));
    });

    let on_submit = Callback::new(move |()| {
        match checker.try_update(|c| c.submit()) {
            Some(Ok(timer)) => schedule(checker, timer),
            Some(Err(err)) => log_debug(&format!("submit ignored: {err}")),
            None => {}
        }
    });

    let on_reset = Callback::new(move |()| {
        match checker.try_update(|c| c.reset()) {
            Some(Ok(timer)) => schedule(checker, timer),
            Some(Err(err)) => log_debug(&format!("reset ignored: {err}")),
            None => {}
        }
    });

    view! {
        <style>{TRACKER_CSS}</style>
        <TrackerPage
            snapshot=snapshot.into()
            today=today
            on_input=on_input
            on_submit=on_submit
            on_reset=on_reset
        />
    }
}

/// Deliver `timer` back to the checker after its delay, chaining any
/// follow-up timer. A disposed signal (page torn down) ends the chain.
fn schedule(checker: RwSignal<PageChecker>, timer: Scheduled) {
    set_timeout(
        move || {
            if let Some(Some(next)) = checker.try_update(|c| c.fire(timer.ticket)) {
                schedule(checker, next);
            }
        },
        timer.delay,
    );
}

fn log_debug(message: &str) {
    web_sys::console::debug_1(&JsValue::from_str(message));
}

fn log_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}
