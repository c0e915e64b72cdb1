use super::*;

#[test]
fn user_roundtrip_with_admin_role() {
    let raw = r#"{
        "id": 1,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "role": "admin",
        "is_active": true
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.full_name(), "Ada Lovelace");
    assert_eq!(user.initials(), "AL");
}

#[test]
fn unknown_role_defaults_to_user() {
    let raw = r#"{
        "id": 2,
        "first_name": "Bob",
        "last_name": "Jones",
        "email": "bob@example.com",
        "role": "superuser"
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::User);
    assert!(user.is_active);
}

#[test]
fn missing_role_defaults_to_user() {
    let raw = r#"{"id": 3, "first_name": "C", "last_name": "D", "email": "c@d.com"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::User);
}

#[test]
fn job_application_optional_fields() {
    let raw = r#"{
        "id": 9,
        "company_name": "Acme",
        "job_title": "Engineer",
        "application_date": "2024-03-05",
        "status": "interviewing",
        "status_display": "Interviewing",
        "notes": null,
        "resume_url": "https://example.com/cv.pdf"
    }"#;
    let job: JobApplication = serde_json::from_str(raw).unwrap();
    assert_eq!(job.status, JobStatus::Interviewing);
    assert_eq!(job.status_label(), "Interviewing");
    assert!(job.notes.is_none());
    assert!(job.interview_date.is_none());
}

#[test]
fn status_label_falls_back_to_enum() {
    let raw = r#"{
        "id": 9,
        "company_name": "Acme",
        "job_title": "Engineer",
        "application_date": "2024-03-05",
        "status": "offer"
    }"#;
    let job: JobApplication = serde_json::from_str(raw).unwrap();
    assert_eq!(job.status_label(), "Offer");
}

#[test]
fn job_status_parse_matches_select_values() {
    for status in JobStatus::ALL {
        assert_eq!(JobStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(JobStatus::parse(""), None);
    assert_eq!(JobStatus::parse("ghosted"), None);
}

#[test]
fn job_payload_omits_empty_optionals() {
    let payload = JobPayload {
        company_name: "Acme".to_owned(),
        job_title: "Engineer".to_owned(),
        application_date: "2024-03-05".to_owned(),
        status: JobStatus::Applied,
        notes: String::new(),
        resume_url: None,
        interview_date: None,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("resume_url").is_none());
    assert!(json.get("interview_date").is_none());
    assert_eq!(json["status"], "applied");
}

#[test]
fn login_response_shape() {
    let raw = r#"{
        "user": {"id": 1, "first_name": "A", "last_name": "B", "email": "a@b.com", "role": "user"},
        "access": "acc",
        "refresh": "ref"
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access, "acc");
    assert_eq!(resp.refresh, "ref");
    assert_eq!(resp.user.role, Role::User);
}

#[test]
fn month_key_labels() {
    assert_eq!(MonthKey::Number(3.0).label(), "Mar");
    assert_eq!(MonthKey::Text("2024-03".to_owned()).label(), "2024-03");
    assert_eq!(MonthKey::Number(0.0).label(), "0");
}

#[test]
fn job_stats_defaults_missing_sections() {
    let stats: JobStats = serde_json::from_str(r#"{"total_applications": 12}"#).unwrap();
    assert_eq!(stats.total_applications, 12);
    assert!(stats.status_distribution.is_empty());
    assert!(stats.top_companies.is_empty());
}

#[test]
fn admin_stats_nested_counters() {
    let raw = r#"{
        "users": {"total": 10, "active": 8, "verified": 6},
        "applications": {"total": 40, "this_month": 5, "this_week": 2},
        "status_distribution": [{"status": "applied", "count": 30}],
        "top_companies": [{"company_name": "Acme", "count": 4}]
    }"#;
    let stats: AdminStats = serde_json::from_str(raw).unwrap();
    assert_eq!(stats.users.active, 8);
    assert_eq!(stats.applications.this_week, 2);
    assert_eq!(stats.status_distribution[0].status, JobStatus::Applied);
    assert_eq!(stats.top_companies[0].company_name, "Acme");
}
