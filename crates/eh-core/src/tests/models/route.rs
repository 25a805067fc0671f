use crate::{HOME_PATH, LOGIN_PATH, RedirectTarget, Route, RouteClass};

#[test]
fn test_every_route_resolves_from_its_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn test_unknown_path_resolves_to_none() {
    assert_eq!(Route::from_path("/nowhere"), None);
    assert_eq!(Route::from_path("/admin/"), None);
}

#[test]
fn test_route_classes() {
    assert_eq!(Route::Login.class(), RouteClass::Public);
    assert_eq!(Route::Admin.class(), RouteClass::AdminOnly);

    let authenticated = Route::ALL
        .iter()
        .filter(|r| r.class() == RouteClass::Authenticated)
        .count();
    assert_eq!(authenticated, 8);
}

#[test]
fn test_redirect_target_paths() {
    assert_eq!(RedirectTarget::Home.path(), HOME_PATH);
    assert_eq!(RedirectTarget::Login.path(), LOGIN_PATH);
}
