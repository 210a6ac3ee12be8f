use super::*;

#[test]
fn stars_light_up_to_the_rating() {
    let lit: Vec<bool> = (1..=MAX_RATING).map(|n| star_on(3, n)).collect();
    assert_eq!(lit, vec![true, true, true, false, false]);
}

#[test]
fn unset_rating_lights_nothing() {
    assert!((1..=MAX_RATING).all(|n| !star_on(0, n)));
    assert_eq!(star_glyph(0, 1), "☆");
    assert_eq!(star_glyph(MAX_RATING, MAX_RATING), "★");
}
