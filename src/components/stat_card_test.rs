use super::*;

#[test]
fn stat_display_shows_placeholder_before_load() {
    assert_eq!(stat_display(None), "—");
}

#[test]
fn stat_display_shows_loaded_value() {
    assert_eq!(stat_display(Some(0)), "0");
    assert_eq!(stat_display(Some(128)), "128");
}
