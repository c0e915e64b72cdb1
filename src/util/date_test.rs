use super::*;

#[test]
fn formats_plain_date() {
    assert_eq!(human_date("2024-03-05"), "Mar 5, 2024");
}

#[test]
fn ignores_time_suffix() {
    assert_eq!(human_date("2024-12-01T09:30:00Z"), "Dec 1, 2024");
}

#[test]
fn falls_back_on_garbage() {
    assert_eq!(human_date("soon"), "soon");
    assert_eq!(human_date("2024-13-01"), "2024-13-01");
    assert_eq!(human_date(""), "");
}

#[test]
fn month_names_are_one_based() {
    assert_eq!(month_name(1), Some("Jan"));
    assert_eq!(month_name(12), Some("Dec"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}
