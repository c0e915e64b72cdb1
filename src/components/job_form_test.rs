use super::*;

fn filled_draft() -> JobDraft {
    JobDraft {
        company_name: "Acme".to_owned(),
        job_title: "Engineer".to_owned(),
        application_date: "2024-03-05".to_owned(),
        status: JobStatus::Applied,
        notes: "met the team".to_owned(),
        resume_url: String::new(),
        interview_date: String::new(),
    }
}

#[test]
fn valid_draft_produces_payload() {
    let payload = filled_draft().validate().unwrap();
    assert_eq!(payload.company_name, "Acme");
    assert_eq!(payload.status, JobStatus::Applied);
    assert!(payload.resume_url.is_none());
    assert!(payload.interview_date.is_none());
}

#[test]
fn required_fields_are_rejected_before_any_network_call() {
    let mut draft = filled_draft();
    draft.company_name = "  ".to_owned();
    assert!(draft.validate().is_err());

    let mut draft = filled_draft();
    draft.job_title = String::new();
    assert!(draft.validate().is_err());

    let mut draft = filled_draft();
    draft.application_date = String::new();
    assert!(draft.validate().is_err());
}

#[test]
fn optional_fields_are_trimmed_into_the_payload() {
    let mut draft = filled_draft();
    draft.resume_url = " https://example.com/cv.pdf ".to_owned();
    draft.interview_date = "2024-03-20T10:00".to_owned();

    let payload = draft.validate().unwrap();
    assert_eq!(payload.resume_url.as_deref(), Some("https://example.com/cv.pdf"));
    assert_eq!(payload.interview_date.as_deref(), Some("2024-03-20T10:00"));
}

#[test]
fn from_job_trims_dates_to_input_precision() {
    let job = JobApplication {
        id: 5,
        company_name: "Acme".to_owned(),
        job_title: "Engineer".to_owned(),
        application_date: "2024-03-05T00:00:00Z".to_owned(),
        status: JobStatus::Interviewing,
        status_display: None,
        notes: None,
        resume_url: None,
        interview_date: Some("2024-03-20T10:30:00Z".to_owned()),
        created_at: None,
        updated_at: None,
    };

    let draft = JobDraft::from_job(&job);
    assert_eq!(draft.application_date, "2024-03-05");
    assert_eq!(draft.interview_date, "2024-03-20T10:30");
    assert_eq!(draft.status, JobStatus::Interviewing);
    assert_eq!(draft.notes, "");
}
