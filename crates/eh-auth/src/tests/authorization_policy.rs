use crate::tests::ADMIN_CODE;
use crate::{Access, AuthorizationPolicy, Decision};

use eh_core::{Identity, RedirectTarget, Role, RouteClass, Session};

use proptest::prelude::*;

fn policy() -> AuthorizationPolicy {
    AuthorizationPolicy::new(ADMIN_CODE)
}

fn session_for(role: Role) -> Session {
    match role {
        Role::Guest => Session::guest(),
        role => Session::authenticated(
            Identity::generate("19/ENG02/001", "user@abuad.edu.ng", role).unwrap(),
        ),
    }
}

#[test]
fn given_admin_with_configured_code_when_claimed_then_allowed() {
    assert_eq!(policy().can_claim(Role::Admin, ADMIN_CODE), Decision::Allow);
}

#[test]
fn given_admin_with_other_code_when_claimed_then_denied() {
    assert_eq!(policy().can_claim(Role::Admin, "19/ENG02/123"), Decision::Deny);
}

#[test]
fn given_admin_code_with_padding_or_case_change_when_claimed_then_denied() {
    let policy = policy();

    assert_eq!(policy.can_claim(Role::Admin, " 19/ENG02/XXX"), Decision::Deny);
    assert_eq!(policy.can_claim(Role::Admin, "19/ENG02/XXX "), Decision::Deny);
    assert_eq!(policy.can_claim(Role::Admin, "19/eng02/xxx"), Decision::Deny);
    assert_eq!(policy.can_claim(Role::Admin, ""), Decision::Deny);
}

#[test]
fn given_public_route_when_accessed_then_guests_allowed_and_members_sent_home() {
    let policy = policy();

    assert_eq!(policy.can_access(&session_for(Role::Guest), RouteClass::Public), Access::Allow);
    for role in [Role::Student, Role::Admin] {
        assert_eq!(
            policy.can_access(&session_for(role), RouteClass::Public),
            Access::Redirect(RedirectTarget::Home)
        );
    }
}

#[test]
fn given_authenticated_route_when_guest_accesses_then_sent_to_login() {
    let policy = policy();

    assert_eq!(
        policy.can_access(&session_for(Role::Guest), RouteClass::Authenticated),
        Access::Redirect(RedirectTarget::Login)
    );
    for role in [Role::Student, Role::Admin] {
        assert_eq!(
            policy.can_access(&session_for(role), RouteClass::Authenticated),
            Access::Allow
        );
    }
}

#[test]
fn given_admin_route_when_non_admin_accesses_then_sent_home() {
    let policy = policy();

    assert_eq!(policy.can_access(&session_for(Role::Admin), RouteClass::AdminOnly), Access::Allow);
    for role in [Role::Student, Role::Guest] {
        assert_eq!(
            policy.can_access(&session_for(role), RouteClass::AdminOnly),
            Access::Redirect(RedirectTarget::Home)
        );
    }
}

#[test]
fn given_policy_when_debug_formatted_then_admin_code_hidden() {
    let rendered = format!("{:?}", policy());

    assert!(!rendered.contains(ADMIN_CODE));
    assert!(rendered.contains("redacted"));
}

proptest! {
    #[test]
    fn given_any_code_when_student_claims_then_allowed(code in ".{0,24}") {
        prop_assert_eq!(policy().can_claim(Role::Student, &code), Decision::Allow);
    }

    #[test]
    fn given_any_other_code_when_admin_claims_then_denied(code in ".{0,24}") {
        prop_assume!(code != ADMIN_CODE);
        prop_assert_eq!(policy().can_claim(Role::Admin, &code), Decision::Deny);
    }

    #[test]
    fn given_any_configured_code_when_claimed_exactly_then_allowed(code in "[A-Z0-9/]{1,16}") {
        let policy = AuthorizationPolicy::new(code.clone());
        prop_assert_eq!(policy.can_claim(Role::Admin, &code), Decision::Allow);
    }
}
