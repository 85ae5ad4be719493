use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Amina".to_owned(),
        email: "amina@example.org".to_owned(),
        message: "Bonjour".to_owned(),
        status: None,
    }
}

#[test]
fn contact_form_default_is_blank_without_status() {
    let form = ContactForm::default();
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
    assert_eq!(form.status, None);
}

#[test]
fn submit_complete_form_sets_confirmation_and_clears_fields() {
    let mut form = filled();
    assert_eq!(form.submit(), Ok(()));

    assert_eq!(form.status.as_deref(), Some(CONFIRMATION));
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());
}

#[test]
fn confirmation_text_is_fixed() {
    assert_eq!(CONFIRMATION, "Merci ! Votre message a été envoyé (simulation).");
}

#[test]
fn submit_again_keeps_confirmation() {
    let mut form = filled();
    form.submit().unwrap();
    form.name = "Paul".to_owned();
    form.email = "paul@example.org".to_owned();
    form.message = "Salut".to_owned();

    form.submit().unwrap();
    assert_eq!(form.status.as_deref(), Some(CONFIRMATION));
}

#[test]
fn submit_blocks_on_blank_field_and_leaves_form_untouched() {
    let mut form = filled();
    form.email = "   ".to_owned();
    let before = form.clone();

    assert_eq!(form.submit(), Err(ContactError::MissingField("email")));
    assert_eq!(form, before);
}

#[test]
fn submit_reports_first_missing_field() {
    let mut form = ContactForm::default();
    assert_eq!(form.submit(), Err(ContactError::MissingField("name")));

    form.name = "Amina".to_owned();
    form.email = "a@b.org".to_owned();
    let err = form.submit().unwrap_err();
    assert_eq!(err.to_string(), "missing required field: message");
}
