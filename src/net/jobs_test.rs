use super::*;

#[test]
fn empty_filters_have_no_query() {
    assert_eq!(JobFilters::default().to_query(), "");
}

#[test]
fn whitespace_company_is_no_filter() {
    let filters = JobFilters {
        status: None,
        company: "   ".to_owned(),
    };
    assert_eq!(filters.to_query(), "");
}

#[test]
fn status_only_query() {
    let filters = JobFilters {
        status: Some(JobStatus::Offer),
        company: String::new(),
    };
    assert_eq!(filters.to_query(), "?status=offer");
}

#[test]
fn combined_query_is_encoded() {
    let filters = JobFilters {
        status: Some(JobStatus::Applied),
        company: "Foo & Bar".to_owned(),
    };
    assert_eq!(
        filters.to_query(),
        "?status=applied&company_name=Foo%20%26%20Bar"
    );
}

#[test]
fn list_response_accepts_both_shapes() {
    let job = r#"{
        "id": 7,
        "company_name": "Acme",
        "job_title": "Engineer",
        "application_date": "2024-03-05",
        "status": "applied"
    }"#;

    let bare: ListResponse = serde_json::from_str(&format!("[{job}]")).unwrap();
    let ListResponse::Plain(items) = bare else {
        panic!("expected bare array");
    };
    assert_eq!(items.len(), 1);

    let paginated: ListResponse = serde_json::from_str(&format!(
        r#"{{"count": 1, "next": null, "previous": null, "results": [{job}]}}"#
    ))
    .unwrap();
    let ListResponse::Paginated { results } = paginated else {
        panic!("expected paginated envelope");
    };
    assert_eq!(results[0].company_name, "Acme");
}

#[test]
fn timeline_response_accepts_both_shapes() {
    let wrapped: TimelineResponse =
        serde_json::from_str(r#"{"timeline": [{"month": 3, "count": 4}]}"#).unwrap();
    let TimelineResponse::Wrapped { timeline } = wrapped else {
        panic!("expected wrapped timeline");
    };
    assert_eq!(timeline[0].count, 4);

    let bare: TimelineResponse =
        serde_json::from_str(r#"[{"month": "Mar", "count": 4}]"#).unwrap();
    assert!(matches!(bare, TimelineResponse::Plain(points) if points.len() == 1));
}
