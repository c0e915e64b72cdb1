//! Add/edit modal for a job application.

#[cfg(test)]
#[path = "job_form_test.rs"]
mod job_form_test;

use leptos::prelude::*;

use crate::net::types::{JobApplication, JobPayload, JobStatus};
use crate::state::toast::{self, ToastState};

/// Editable form fields, mirrored into a [`JobPayload`] on submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub company_name: String,
    pub job_title: String,
    pub application_date: String,
    pub status: JobStatus,
    pub notes: String,
    pub resume_url: String,
    pub interview_date: String,
}

impl JobDraft {
    /// Pre-fill the form from an existing application. Dates are trimmed to
    /// the precision the `date`/`datetime-local` inputs expect.
    pub fn from_job(job: &JobApplication) -> Self {
        Self {
            company_name: job.company_name.clone(),
            job_title: job.job_title.clone(),
            application_date: job
                .application_date
                .split('T')
                .next()
                .unwrap_or_default()
                .to_owned(),
            status: job.status,
            notes: job.notes.clone().unwrap_or_default(),
            resume_url: job.resume_url.clone().unwrap_or_default(),
            interview_date: job
                .interview_date
                .as_deref()
                .map(|d| d.chars().take(16).collect())
                .unwrap_or_default(),
        }
    }

    /// Reject the draft before any network call when a required field is
    /// missing. Empty optional fields are omitted from the payload rather
    /// than sent as empty strings.
    pub fn validate(&self) -> Result<JobPayload, String> {
        if self.company_name.trim().is_empty() {
            return Err("Company name is required.".to_owned());
        }
        if self.job_title.trim().is_empty() {
            return Err("Job title is required.".to_owned());
        }
        if self.application_date.trim().is_empty() {
            return Err("Application date is required.".to_owned());
        }

        let optional = |raw: &str| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        };

        Ok(JobPayload {
            company_name: self.company_name.trim().to_owned(),
            job_title: self.job_title.trim().to_owned(),
            application_date: self.application_date.trim().to_owned(),
            status: self.status,
            notes: self.notes.clone(),
            resume_url: optional(&self.resume_url),
            interview_date: optional(&self.interview_date),
        })
    }
}

/// Modal dialog for creating or editing a job application.
#[component]
pub fn JobFormModal(
    job: Option<JobApplication>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let editing = job.as_ref().map(|j| j.id);
    let draft = RwSignal::new(job.as_ref().map_or_else(JobDraft::default, JobDraft::from_job));
    let pending = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let payload = match draft.get_untracked().validate() {
            Ok(payload) => payload,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        error.set(String::new());
        pending.set(true);

        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => crate::net::jobs::update(id, &payload).await.map(|_| ()),
                None => crate::net::jobs::create(&payload).await.map(|_| ()),
            };
            pending.set(false);
            match result {
                Ok(()) => {
                    let note = if editing.is_some() {
                        "Application updated"
                    } else {
                        "Application added"
                    };
                    toast::success(toasts, note);
                    on_saved.run(());
                }
                Err(err) => {
                    error.set(err.to_string());
                    toast::error(toasts, "Failed to save application");
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing.is_some() { "Edit Application" } else { "Add Application" }}</h2>
                <form on:submit=submit>
                    <label class="dialog__label">
                        "Company Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.get().company_name
                            on:input=move |ev| {
                                draft.update(|d| d.company_name = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Job Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || draft.get().job_title
                            on:input=move |ev| {
                                draft.update(|d| d.job_title = event_target_value(&ev));
                            }
                        />
                    </label>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Application Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || draft.get().application_date
                                on:input=move |ev| {
                                    draft.update(|d| d.application_date = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                on:change=move |ev| {
                                    if let Some(status) = JobStatus::parse(&event_target_value(&ev)) {
                                        draft.update(|d| d.status = status);
                                    }
                                }
                            >
                                {JobStatus::ALL
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <option
                                                value=status.as_str()
                                                selected=move || draft.get().status == status
                                            >
                                                {status.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Resume URL"
                        <input
                            class="dialog__input"
                            type="url"
                            placeholder="https://..."
                            prop:value=move || draft.get().resume_url
                            on:input=move |ev| {
                                draft.update(|d| d.resume_url = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Interview Date (optional)"
                        <input
                            class="dialog__input"
                            type="datetime-local"
                            prop:value=move || draft.get().interview_date
                            on:input=move |ev| {
                                draft.update(|d| d.interview_date = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Notes"
                        <textarea
                            class="dialog__input"
                            rows=3
                            placeholder="Add any notes..."
                            prop:value=move || draft.get().notes
                            on:input=move |ev| {
                                draft.update(|d| d.notes = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <div class="form__error">{move || error.get()}</div>
                    </Show>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                            {move || {
                                if pending.get() {
                                    "Saving..."
                                } else if editing.is_some() {
                                    "Save Changes"
                                } else {
                                    "Add Application"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
