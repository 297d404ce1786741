use super::*;

fn protected_routes() -> Vec<AppRoute> {
    let mut routes = vec![AppRoute::DoctorDashboard, AppRoute::PatientDashboard];
    routes.extend(Section::ALL.into_iter().map(AppRoute::Section));
    routes
}

// =========================================================
// 路径解析
// =========================================================

#[test]
fn test_known_paths_parse_back_to_themselves() {
    let mut routes = protected_routes();
    routes.push(AppRoute::Login);
    routes.push(AppRoute::Root);

    for route in routes {
        assert_eq!(AppRoute::from_path(route.to_path()), route, "{route}");
    }
}

#[test]
fn test_from_path_ignores_trailing_slash_and_query() {
    assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
    assert_eq!(
        AppRoute::from_path("/doctor-dashboard?tab=1"),
        AppRoute::DoctorDashboard
    );
    assert_eq!(
        AppRoute::from_path("/patient/access-control#top"),
        AppRoute::Section(Section::PatientAccessControl)
    );
    assert_eq!(AppRoute::from_path(""), AppRoute::Root);
}

#[test]
fn test_unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/doctor"), AppRoute::NotFound);
    assert!(!AppRoute::NotFound.requires_auth());
}

// =========================================================
// 守卫
// =========================================================

#[test]
fn test_unauthenticated_protected_request_redirects_to_login() {
    for route in protected_routes() {
        assert_eq!(
            route.guard(false, None),
            GuardOutcome::Redirect(AppRoute::Login),
            "{route}"
        );
    }
}

#[test]
fn test_authenticated_protected_request_renders_target() {
    for route in protected_routes() {
        assert_eq!(
            route.guard(true, Some(Role::Doctor)),
            GuardOutcome::Render(route),
            "{route}"
        );
    }
}

#[test]
fn test_role_is_not_enforced_per_route() {
    assert_eq!(
        AppRoute::PatientDashboard.guard(true, Some(Role::Doctor)),
        GuardOutcome::Render(AppRoute::PatientDashboard)
    );
    assert_eq!(
        AppRoute::DoctorDashboard.guard(true, Some(Role::Patient)),
        GuardOutcome::Render(AppRoute::DoctorDashboard)
    );
}

#[test]
fn test_root_redirects_to_login() {
    assert_eq!(
        AppRoute::Root.guard(false, None),
        GuardOutcome::Redirect(AppRoute::Login)
    );
}

#[test]
fn test_login_is_public() {
    assert_eq!(
        AppRoute::Login.guard(false, None),
        GuardOutcome::Render(AppRoute::Login)
    );
}

#[test]
fn test_authenticated_login_request_goes_to_role_home() {
    assert_eq!(
        AppRoute::Login.guard(true, Some(Role::Patient)),
        GuardOutcome::Redirect(AppRoute::PatientDashboard)
    );
    assert_eq!(
        AppRoute::Root.guard(true, Some(Role::Doctor)),
        GuardOutcome::Redirect(AppRoute::DoctorDashboard)
    );
    // 没有角色信息时回落到医生面板
    assert_eq!(
        AppRoute::Login.guard(true, None).route(),
        AppRoute::DoctorDashboard
    );
}

#[test]
fn test_not_found_renders_regardless_of_session() {
    assert_eq!(
        AppRoute::NotFound.guard(false, None),
        GuardOutcome::Render(AppRoute::NotFound)
    );
    assert!(!AppRoute::NotFound.guard(true, Some(Role::Doctor)).is_redirect());
}
