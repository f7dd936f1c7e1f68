#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_outside_the_browser() {
    assert!(load().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save("abc");
    assert!(load().is_none());
    clear();
}
