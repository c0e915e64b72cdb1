//! Analytics sidebar: totals, status distribution, top companies.

use leptos::prelude::*;

use crate::net::types::JobStats;

/// Panel rendering the per-user statistics returned by the API. The client
/// computes nothing beyond bar widths; all aggregation is server-side.
#[component]
pub fn JobStatsPanel(stats: JobStats) -> impl IntoView {
    let status_total: u32 = stats.status_distribution.iter().map(|s| s.count).sum();
    let company_max = stats
        .top_companies
        .iter()
        .map(|c| c.count)
        .max()
        .unwrap_or(0);

    view! {
        <div class="panel">
            <h3 class="panel__title">"Analytics"</h3>
            <div class="panel__totals">
                <div class="panel__total-row">
                    <span>"Total Applications"</span>
                    <span class="panel__total-value">{stats.total_applications}</span>
                </div>
                <div class="panel__total-row">
                    <span>"This Month"</span>
                    <span class="panel__total-value">{stats.applications_this_month}</span>
                </div>
                <div class="panel__total-row">
                    <span>"This Week"</span>
                    <span class="panel__total-value">{stats.applications_this_week}</span>
                </div>
            </div>

            <h4 class="panel__subtitle">"Status Distribution"</h4>
            {stats
                .status_distribution
                .iter()
                .map(|entry| {
                    let pct = percentage(entry.count, status_total);
                    view! {
                        <div class="panel__row">
                            <span class=entry.status.badge_class()>{entry.status.label()}</span>
                            <div class="panel__bar-track">
                                <div
                                    class=format!("panel__bar panel__bar--{}", entry.status.as_str())
                                    style:width=format!("{pct}%")
                                ></div>
                            </div>
                            <span class="panel__count">{entry.count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <h4 class="panel__subtitle">"Top Companies"</h4>
            {stats
                .top_companies
                .iter()
                .map(|entry| {
                    let pct = percentage(entry.count, company_max);
                    view! {
                        <div class="panel__row">
                            <span class="panel__company">{entry.company_name.clone()}</span>
                            <div class="panel__bar-track">
                                <div class="panel__bar" style:width=format!("{pct}%")></div>
                            </div>
                            <span class="panel__count">{entry.count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

fn percentage(count: u32, total: u32) -> u32 {
    if total == 0 { 0 } else { count * 100 / total }
}
