//! Milestone card - one funnel step, completed or pending

use leptos::prelude::*;
use tracker_core::{Milestone, footer_text};

use super::{ICON_CALENDAR, ICON_CHECK_CIRCLE, ICON_CLOCK, ICON_X_CIRCLE, Icon};

/// Status card for a single milestone.
///
/// Pure function of its props. The entrance animation starts after
/// `delay` seconds so a list of cards can be staggered.
#[component]
pub fn MilestoneCard(
    /// Milestone title
    #[prop(into)]
    title: String,
    /// One-line description under the title
    #[prop(into)]
    description: String,
    /// Whether the step is done
    completed: bool,
    /// Entrance animation delay in seconds
    #[prop(default = 0.0)]
    delay: f64,
    /// Date shown in the footer of completed cards
    #[prop(into)]
    completed_on: String,
) -> impl IntoView {
    let tone = if completed { "completed" } else { "pending" };
    let card_class = format!("milestone-card milestone-{tone} fade-in-up");
    let (glyph, badge) = if completed {
        (ICON_CHECK_CIRCLE, "Completed")
    } else {
        (ICON_X_CIRCLE, "Pending")
    };
    let footer_icon = if completed { ICON_CALENDAR } else { ICON_CLOCK };

    view! {
        <div class=card_class style=format!("animation-delay: {delay}s")>
            <div class="milestone-body">
                <div class="milestone-glyph">
                    <span class="glyph-halo"></span>
                    <span class="glyph-badge">
                        <Icon path=glyph size="32" />
                    </span>
                </div>
                <div class="milestone-text">
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
                <span class="milestone-status">{badge}</span>
            </div>
            <div class="milestone-footer">
                <Icon path=footer_icon size="16" class="icon-sm" />
                {footer_text(completed, &completed_on)}
            </div>
        </div>
    }
}

/// The four cards of a check result, staggered in display order.
#[component]
pub fn MilestoneList(
    /// Result of one check
    results: tracker_core::MilestoneSet,
    /// Date shown in the footer of completed cards
    completed_on: String,
) -> impl IntoView {
    view! {
        <div class="milestone-list">
            {results
                .iter()
                .map(|(milestone, completed)| card_for(milestone, completed, completed_on.clone()))
                .collect_view()}
        </div>
    }
}

fn card_for(milestone: Milestone, completed: bool, completed_on: String) -> impl IntoView {
    view! {
        <MilestoneCard
            title=milestone.title()
            description=milestone.description()
            completed=completed
            delay=milestone.stagger_delay()
            completed_on=completed_on
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use tracker_core::MilestoneSet;

    fn render_card(completed: bool) -> String {
        view! {
            <MilestoneCard
                title="Deposit"
                description="First deposit made"
                completed=completed
                delay=0.3
                completed_on="3/7/2025"
            />
        }
        .to_html()
    }

    #[test]
    fn completed_card_shows_date_footer() {
        let html = render_card(true);
        assert!(html.contains("milestone-completed"));
        assert!(html.contains("Completed on 3/7/2025"));
        assert!(!html.contains("Pending"));
        assert!(!html.contains("Action required"));
    }

    #[test]
    fn pending_card_asks_for_action() {
        let html = render_card(false);
        assert!(html.contains("milestone-pending"));
        assert!(html.contains("Action required to complete this step"));
        assert!(html.contains("Pending"));
        assert!(!html.contains("Completed"));
    }

    #[test]
    fn card_carries_stagger_delay() {
        assert!(render_card(true).contains("animation-delay: 0.3s"));
    }

    #[test]
    fn list_renders_cards_in_display_order() {
        let html = view! {
            <MilestoneList
                results=MilestoneSet::new(true, true, false, true)
                completed_on="1/1/2026".to_string()
            />
        }
        .to_html();

        let positions: Vec<usize> = ["Install &amp; Open", "Registration", "Deposit", "Trading"]
            .iter()
            .map(|title| html.find(title).unwrap_or_else(|| panic!("missing {title}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("Completed on 1/1/2026").count(), 3);
        assert_eq!(html.matches("Action required").count(), 1);
    }
}
