use super::*;

fn field<'a>(schema: &'a FormSchema, name: &str) -> &'a FieldSpec {
    schema.fields.iter().find(|f| f.name == name).unwrap()
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn signup_declares_all_registration_fields_in_order() {
    let schema = signup().unwrap();
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["first_name", "last_name", "username", "email", "password"]);
    assert!(schema.fields.iter().all(FieldSpec::is_required));
    assert!(schema.rules.is_empty());
}

#[test]
fn signup_username_rejects_spaces() {
    let schema = signup().unwrap();
    let username = field(&schema, "username");
    assert!(username.constraints.check("chef.bob+1@home").valid);
    assert!(!username.constraints.check("chef bob").valid);
}

#[test]
fn signup_names_are_capped() {
    let schema = signup().unwrap();
    let first = field(&schema, "first_name");
    assert!(first.constraints.check(&"a".repeat(NAME_MAX_LEN)).valid);
    assert!(!first.constraints.check(&"a".repeat(NAME_MAX_LEN + 1)).valid);
}

#[test]
fn signup_email_and_password_types() {
    let schema = signup().unwrap();
    assert_eq!(field(&schema, "email").input_type(), InputType::Email);
    assert_eq!(field(&schema, "password").input_type(), InputType::Password);
    assert_eq!(field(&schema, "username").input_type(), InputType::Text);
}

// =============================================================
// Sign-in / change password
// =============================================================

#[test]
fn signin_has_email_and_password() {
    let schema = signin().unwrap();
    let names: Vec<&str> = schema.required_fields().map(|f| f.name).collect();
    assert_eq!(names, ["email", "password"]);
}

#[test]
fn change_password_requires_confirmation_rule() {
    let schema = change_password();
    assert_eq!(schema.fields.len(), 3);
    assert_eq!(field(&schema, "repeat_password").label, "Confirm password");
    assert!(matches!(
        schema.rules.as_slice(),
        [CrossFieldRule::Matches { field: "new_password", confirm: "repeat_password", .. }]
    ));
}

#[test]
fn unknown_field_lookup_is_none() {
    assert!(!change_password().fields.iter().any(|f| f.name == "username"));
}
