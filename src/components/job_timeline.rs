//! Activity timeline: applications per month as a small bar chart.

use leptos::prelude::*;

use crate::net::types::TimelinePoint;

/// Vertical bar chart of application counts per month. Hidden entirely when
/// the timeline is empty, matching the analytics sidebar behavior.
#[component]
pub fn JobTimelinePanel(timeline: Vec<TimelinePoint>) -> impl IntoView {
    if timeline.is_empty() {
        return None;
    }

    let max = timeline.iter().map(|p| p.count).max().unwrap_or(0).max(1);

    Some(view! {
        <div class="panel">
            <h3 class="panel__title">"Activity Timeline"</h3>
            <div class="timeline">
                {timeline
                    .iter()
                    .map(|point| {
                        let height = point.count * 100 / max;
                        view! {
                            <div class="timeline__column" title=format!("{} applications", point.count)>
                                <div class="timeline__bar-track">
                                    <div class="timeline__bar" style:height=format!("{height}%")></div>
                                </div>
                                <span class="timeline__label">{point.month.label()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    })
}
