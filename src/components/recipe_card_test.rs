use super::*;

#[test]
fn cooking_time_label_formats_minutes() {
    assert_eq!(cooking_time_label(45), "45 min.");
}

#[test]
fn cart_button_label_reflects_cart_membership() {
    assert_eq!(cart_button_label(false), "ADD TO CART");
    assert_eq!(cart_button_label(true), "REMOVE FROM CART");
}
