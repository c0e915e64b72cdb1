use super::*;

fn user(role: Role) -> User {
    User {
        id: 1,
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
        is_active: true,
    }
}

#[test]
fn default_session_is_signed_out() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(session.access.is_none());
    assert!(session.refresh.is_none());
}

#[test]
fn authenticated_session_holds_all_three_values() {
    let session = Session::authenticated(user(Role::User), "a".to_owned(), "r".to_owned());
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.access.as_deref(), Some("a"));
    assert_eq!(session.refresh.as_deref(), Some("r"));
}

#[test]
fn admin_predicate_requires_admin_role() {
    let admin = Session::authenticated(user(Role::Admin), "a".to_owned(), "r".to_owned());
    assert!(admin.is_authenticated());
    assert!(admin.is_admin());

    let regular = Session::authenticated(user(Role::User), "a".to_owned(), "r".to_owned());
    assert!(!regular.is_admin());
}

#[test]
fn landing_route_by_role() {
    assert_eq!(landing_route(&user(Role::Admin)), "/admin");
    assert_eq!(landing_route(&user(Role::User)), "/dashboard");
}

#[test]
fn login_and_logout_replace_wholesale() {
    let signal = RwSignal::new(Session::default());

    login(signal, user(Role::Admin), "acc".to_owned(), "ref".to_owned());
    let current = signal.get_untracked();
    assert!(current.is_admin());
    assert_eq!(current.access.as_deref(), Some("acc"));

    logout(signal);
    assert_eq!(signal.get_untracked(), Session::default());
}
