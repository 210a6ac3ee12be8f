use super::*;
use wire::{Role, User};

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "anna@example.com".to_owned(),
            name: "Anna".to_owned(),
            role: Role::Customer,
            company_id: Some("c1".to_owned()),
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn token_is_absent_outside_browser() {
    assert_eq!(load_token(), None);
    save_token("abc");
    assert_eq!(load_token(), None);
    clear_token();
}
