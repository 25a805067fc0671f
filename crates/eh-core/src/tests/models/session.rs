use crate::{Identity, Role, Session};

#[test]
fn given_guest_session_then_unauthenticated_with_guest_role() {
    let session = Session::guest();

    assert!(!session.is_authenticated());
    assert_eq!(session.role(), Role::Guest);
    assert!(session.identity().is_none());
}

#[test]
fn given_student_identity_then_authenticated_with_student_role() {
    let identity = Identity::generate("m", "a@b.com", Role::Student).unwrap();

    let session = Session::authenticated(identity);

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Role::Student);
    assert!(!session.is_admin());
}

#[test]
fn given_any_session_then_authenticated_iff_role_is_not_guest() {
    let sessions = [
        Session::guest(),
        Session::authenticated(Identity::generate("m", "e", Role::Student).unwrap()),
        Session::authenticated(Identity::generate("m", "e", Role::Admin).unwrap()),
    ];

    for session in sessions {
        assert_eq!(session.is_authenticated(), session.role() != Role::Guest);
        assert_eq!(session.is_authenticated(), session.identity().is_some());
    }
}
