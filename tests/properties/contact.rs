//! Property tests for contact form validation.

use proptest::prelude::*;

use folio::contact::{validate, ContactForm, Field, MIN_MESSAGE_CHARS};

fn field_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ \\ta-zA-Z0-9@._-]{0,24}").unwrap()
}

fn email() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9._]{1,10}@[a-z0-9]{1,8}\\.[a-z]{2,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics, whatever the input.
    #[test]
    fn property_validate_never_panics(
        name in "(?s).{0,64}",
        email in "(?s).{0,64}",
        subject in "(?s).{0,64}",
        message in "(?s).{0,128}",
    ) {
        let _ = validate(&ContactForm { name, email, subject, message });
    }

    /// PROPERTY: whitespace-only fields are always reported as required.
    #[test]
    fn property_blank_fields_are_required(
        padding in "[ \\t\\n]{0,8}",
    ) {
        let form = ContactForm {
            name: padding.clone(),
            email: padding.clone(),
            subject: padding.clone(),
            message: padding,
        };
        let errors = validate(&form);
        prop_assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            prop_assert!(errors.get(field).unwrap().ends_with("is required"));
        }
    }

    /// PROPERTY: the message rule counts trimmed characters, not bytes.
    #[test]
    fn property_message_length_uses_trimmed_chars(
        body in "[a-zé]{1,20}",
        padding in "[ ]{0,6}",
        address in email(),
    ) {
        let form = ContactForm {
            name: "Ada".into(),
            email: address,
            subject: "Hello".into(),
            message: format!("{padding}{body}{padding}"),
        };
        let errors = validate(&form);
        let too_short = body.chars().count() < MIN_MESSAGE_CHARS;
        prop_assert_eq!(errors.get(Field::Message).is_some(), too_short);
        prop_assert!(errors.get(Field::Email).is_none());
    }

    /// PROPERTY: a field's error depends only on that field's value.
    #[test]
    fn property_errors_are_per_field(
        a in field_text(),
        b in field_text(),
    ) {
        let left = validate(&ContactForm { name: a.clone(), email: String::new(), subject: String::new(), message: String::new() });
        let right = validate(&ContactForm { name: a, email: b.clone(), subject: b.clone(), message: b });
        prop_assert_eq!(left.get(Field::Name), right.get(Field::Name));
    }
}
