use std::collections::BTreeSet;

use super::*;
use crate::form::constraint::{InputType, MSG_REQUIRED};

fn required() -> Constraints {
    Constraints::required()
}

fn email() -> Constraints {
    Constraints::required().with_type(InputType::Email)
}

// =============================================================
// Fresh controller
// =============================================================

#[test]
fn new_controller_is_empty_and_valid() {
    let form = FormController::new();
    assert!(form.values().is_empty());
    assert!(form.validity.is_empty());
    assert!(form.is_valid());
}

#[test]
fn untouched_field_has_no_entry_and_no_message() {
    let form = FormController::new();
    assert!(!form.is_touched("username"));
    assert!(form.validity.get("username").is_none());
    assert!(form.message("username").is_none());
}

// =============================================================
// handle_change
// =============================================================

#[test]
fn required_username_cleared_marks_form_invalid() {
    let mut form = FormController::new();
    form.handle_change("username", "", &required());
    assert!(!form.validity.get("username").unwrap().valid);
    assert_eq!(form.message("username"), Some(MSG_REQUIRED));
    assert!(!form.is_valid());
}

#[test]
fn touched_then_cleared_required_field_is_immediately_invalid() {
    let mut form = FormController::new();
    form.handle_change("username", "chef", &required());
    assert!(form.is_valid());
    form.handle_change("username", "", &required());
    assert!(!form.is_valid());
}

#[test]
fn fixing_a_field_restores_form_validity() {
    let mut form = FormController::new();
    form.handle_change("email", "nope", &email());
    assert!(!form.is_valid());
    form.handle_change("email", "chef@foodgram.io", &email());
    assert!(form.is_valid());
    assert!(form.message("email").is_none());
}

#[test]
fn one_invalid_field_blocks_the_whole_form() {
    let mut form = FormController::new();
    form.handle_change("first_name", "Ada", &required());
    form.handle_change("email", "ada@", &email());
    form.handle_change("last_name", "Lovelace", &required());
    assert!(!form.is_valid());
    assert_eq!(form.invalid_fields(), vec!["email"]);
}

#[test]
fn values_track_latest_raw_input() {
    let mut form = FormController::new();
    form.handle_change("username", "c", &required());
    form.handle_change("username", "ch", &required());
    form.handle_change("username", "chef", &required());
    assert_eq!(form.value("username"), Some("chef"));
    assert_eq!(form.values().len(), 1);
}

#[test]
fn key_sets_match_touched_fields_for_any_sequence() {
    let mut form = FormController::new();
    let events = [
        ("email", "x"),
        ("password", ""),
        ("email", "a@b.co"),
        ("username", "chef"),
        ("password", "secret"),
        ("first_name", ""),
    ];
    let mut touched = BTreeSet::new();
    for (name, value) in events {
        form.handle_change(name, value, &required());
        touched.insert(name.to_owned());
        let value_keys: BTreeSet<String> = form.values().keys().cloned().collect();
        let validity_keys: BTreeSet<String> = form.validity.keys().cloned().collect();
        assert_eq!(value_keys, touched);
        assert_eq!(validity_keys, touched);
    }
}

#[test]
fn form_validity_is_conjunction_of_entries() {
    let mut form = FormController::new();
    form.handle_change("a", "1", &required());
    form.handle_change("b", "", &Constraints::none());
    assert_eq!(form.is_valid(), form.validity.values().all(|v| v.valid));
    form.handle_change("c", "", &required());
    assert_eq!(form.is_valid(), form.validity.values().all(|v| v.valid));
    assert!(!form.is_valid());
}

#[test]
fn repeated_identical_change_is_idempotent() {
    let mut once = FormController::new();
    once.handle_change("email", "bad", &email());

    let mut twice = FormController::new();
    twice.handle_change("email", "bad", &email());
    twice.handle_change("email", "bad", &email());

    assert_eq!(once, twice);
}

#[test]
fn validity_follows_the_constraints_passed_with_each_change() {
    let mut form = FormController::new();
    form.handle_change("nickname", "", &Constraints::none());
    assert!(form.is_valid());
    form.handle_change("nickname", "", &required());
    assert!(!form.is_valid());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_clears_everything() {
    let mut form = FormController::new();
    form.handle_change("username", "", &required());
    form.handle_change("email", "chef@foodgram.io", &email());
    form.reset();
    assert!(form.values().is_empty());
    assert!(form.validity.is_empty());
    assert!(form.is_valid());
    assert_eq!(form, FormController::new());
}

#[test]
fn reset_on_empty_form_is_a_no_op() {
    let mut form = FormController::new();
    form.reset();
    assert_eq!(form, FormController::default());
}
