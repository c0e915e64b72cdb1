//! Personal dashboard: job application table with filters, add/edit modal,
//! delete-with-confirmation, and the analytics sidebar.

use leptos::prelude::*;

use crate::components::job_form::JobFormModal;
use crate::components::job_stats::JobStatsPanel;
use crate::components::job_timeline::JobTimelinePanel;
use crate::net::jobs::JobFilters;
use crate::net::types::{JobApplication, JobStatus};
use crate::state::toast::{self, ToastState};
use crate::util::date::human_date;

#[derive(Clone, Debug, PartialEq, Eq)]
enum ModalState {
    Closed,
    Add,
    Edit(JobApplication),
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let filters = RwSignal::new(JobFilters::default());
    let modal = RwSignal::new(ModalState::Closed);

    // Changing a filter re-runs the list fetch; stats and timeline are
    // unfiltered and refetch only after mutations.
    let jobs = LocalResource::new(move || {
        let filters = filters.get();
        async move {
            match crate::net::jobs::list(&filters).await {
                Ok(items) => items,
                Err(err) => {
                    leptos::logging::warn!("job list failed: {err}");
                    toast::error(toasts, "Failed to load jobs");
                    Vec::new()
                }
            }
        }
    });

    let stats = LocalResource::new(move || async move {
        match crate::net::jobs::statistics().await {
            Ok(stats) => Some(stats),
            Err(err) => {
                leptos::logging::warn!("statistics failed: {err}");
                None
            }
        }
    });

    let timeline = LocalResource::new(move || async move {
        match crate::net::jobs::timeline().await {
            Ok(points) => points,
            Err(err) => {
                leptos::logging::warn!("timeline failed: {err}");
                Vec::new()
            }
        }
    });

    let on_close = Callback::new(move |()| modal.set(ModalState::Closed));
    let on_saved = Callback::new(move |()| {
        modal.set(ModalState::Closed);
        jobs.refetch();
        stats.refetch();
        timeline.refetch();
    });

    // Declining the confirmation performs no network call.
    let on_delete = Callback::new(move |id: i64| {
        if !crate::util::browser::confirm("Delete this job application?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match crate::net::jobs::remove(id).await {
                Ok(()) => {
                    toast::success(toasts, "Deleted");
                    jobs.refetch();
                    stats.refetch();
                    timeline.refetch();
                }
                Err(_) => toast::error(toasts, "Failed to delete"),
            }
        });
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Job Applications"</h1>
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Add)>
                    "+ Add Application"
                </button>
            </header>

            <div class="dashboard-page__body">
                <div class="dashboard-page__main">
                    <div class="filters">
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Filter by company..."
                            prop:value=move || filters.get().company
                            on:input=move |ev| {
                                filters.update(|f| f.company = event_target_value(&ev));
                            }
                        />
                        <select
                            class="form__input"
                            on:change=move |ev| {
                                let status = JobStatus::parse(&event_target_value(&ev));
                                filters.update(|f| f.status = status);
                            }
                        >
                            <option value="">"All Statuses"</option>
                            {JobStatus::ALL
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <option
                                            value=status.as_str()
                                            selected=move || filters.get().status == Some(status)
                                        >
                                            {status.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <button class="btn" on:click=move |_| filters.set(JobFilters::default())>
                            "Reset"
                        </button>
                    </div>

                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Company"</th>
                                <th>"Title"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Suspense fallback=|| {
                                view! {
                                    <tr>
                                        <td colspan="5" class="table__empty">"Loading..."</td>
                                    </tr>
                                }
                            }>
                                {move || {
                                    jobs.get()
                                        .map(|list| {
                                            if list.is_empty() {
                                                view! {
                                                    <tr>
                                                        <td colspan="5" class="table__empty">
                                                            "No applications found."
                                                        </td>
                                                    </tr>
                                                }
                                                    .into_any()
                                            } else {
                                                list.into_iter()
                                                    .map(|job| view! { <JobRow job=job on_delete=on_delete modal=modal/> })
                                                    .collect::<Vec<_>>()
                                                    .into_any()
                                            }
                                        })
                                }}
                            </Suspense>
                        </tbody>
                    </table>
                </div>

                <aside class="dashboard-page__side">
                    <Suspense fallback=|| ()>
                        {move || {
                            stats
                                .get()
                                .flatten()
                                .map(|stats| view! { <JobStatsPanel stats=stats/> })
                        }}
                        {move || {
                            timeline
                                .get()
                                .map(|points| view! { <JobTimelinePanel timeline=points/> })
                        }}
                    </Suspense>
                </aside>
            </div>

            {move || match modal.get() {
                ModalState::Closed => ().into_any(),
                ModalState::Add => {
                    view! { <JobFormModal job=None on_close=on_close on_saved=on_saved/> }.into_any()
                }
                ModalState::Edit(job) => {
                    view! { <JobFormModal job=Some(job) on_close=on_close on_saved=on_saved/> }
                        .into_any()
                }
            }}
        </div>
    }
}

/// One table row with edit and delete actions.
#[component]
fn JobRow(
    job: JobApplication,
    on_delete: Callback<i64>,
    modal: RwSignal<ModalState>,
) -> impl IntoView {
    let id = job.id;
    let edit_job = job.clone();

    view! {
        <tr>
            <td class="table__strong">{job.company_name.clone()}</td>
            <td>{job.job_title.clone()}</td>
            <td>{human_date(&job.application_date)}</td>
            <td>
                <span class=job.status.badge_class()>{job.status_label()}</span>
            </td>
            <td class="table__actions">
                <button
                    class="link-button"
                    on:click=move |_| modal.set(ModalState::Edit(edit_job.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="link-button link-button--danger"
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
