use super::*;

#[test]
fn default_is_loading() {
    let state: Loadable<Vec<u8>> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.ready(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn from_ok_is_ready() {
    let state = Loadable::from(Ok::<_, ApiError>(vec![1, 2]));
    assert_eq!(state.ready(), Some(&vec![1, 2]));
    assert_eq!(state.items(), vec![1, 2]);
}

#[test]
fn from_err_keeps_message() {
    let state: Loadable<Vec<u8>> = Loadable::from(Err(ApiError::Status(500)));
    assert_eq!(state.error(), Some("server responded with status 500"));
    assert!(state.items().is_empty());
}

#[test]
fn map_preserves_state() {
    assert_eq!(Loadable::Ready(2).map(|n| n * 2), Loadable::Ready(4));
    assert_eq!(Loadable::<u8>::Loading.map(|n| n * 2), Loadable::Loading);
    assert_eq!(
        Loadable::<u8>::Failed("x".to_owned()).map(|n| n * 2),
        Loadable::Failed("x".to_owned())
    );
}
