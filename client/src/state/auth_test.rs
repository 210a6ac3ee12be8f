use super::*;

fn user(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        email: "u1@example.com".to_owned(),
        name: "U1".to_owned(),
        role,
        company_id: None,
    }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn staff_and_admin_flags_follow_role() {
    let customer = AuthState { user: Some(user(Role::Customer)), loading: false };
    assert!(!customer.is_staff());
    assert!(!customer.is_admin());

    let admin = AuthState { user: Some(user(Role::Admin)), loading: false };
    assert!(admin.is_staff());
    assert!(admin.is_admin());

    let developer = AuthState { user: Some(user(Role::Developer)), loading: false };
    assert!(developer.is_staff());
    assert!(!developer.is_admin());
}
