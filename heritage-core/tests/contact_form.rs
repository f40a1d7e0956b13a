use heritage_core::{
    field_is_invalid, is_email_shaped, is_js_whitespace, success_notice, ContactError,
    ContactField, ContactSubmission, INVALID_NOTICE,
};

#[test]
fn rejects_malformed_email() {
    let submission = ContactSubmission::new("Ana", "bad-email", "Olá");
    let err = submission.validate().expect_err("malformed e-mail must be rejected");
    assert_eq!(err, ContactError::InvalidEmail);
    assert_eq!(err.notice(), INVALID_NOTICE);
}

#[test]
fn accepts_minimal_email_and_trims_values() {
    let submission = ContactSubmission::new("  Ana ", " a@b.co ", "\nOlá, tudo bem?  ");
    let valid = submission.validate().expect("submission is valid");

    assert_eq!(valid.name, "Ana");
    assert_eq!(valid.email, "a@b.co");
    assert_eq!(valid.message, "Olá, tudo bem?");
    assert_eq!(
        valid.notice(),
        "Obrigado, Ana! Sua mensagem foi enviada com sucesso. (Simulação)"
    );
}

#[test]
fn reports_first_blank_field() {
    let cases = [
        (ContactSubmission::new("", "a@b.co", "x"), ContactField::Name),
        (ContactSubmission::new("Ana", "   ", "x"), ContactField::Email),
        (ContactSubmission::new("Ana", "a@b.co", "\t"), ContactField::Message),
    ];

    for (submission, field) in cases {
        assert_eq!(
            submission.validate(),
            Err(ContactError::MissingField(field))
        );
    }
}

#[test]
fn email_shape_follows_local_at_domain_dot_tld() {
    for ok in ["a@b.co", "nome.sobrenome@exemplo.com.br", "x@y.z", "a@b.c.d"] {
        assert!(is_email_shaped(ok), "{ok} must be accepted");
    }
    for bad in [
        "bad-email",
        "@b.co",
        "a@.co",
        "a@b.",
        "a@bco",
        "a@@b.co",
        "a b@c.de",
        "a@b.c o",
        "",
    ] {
        assert!(!is_email_shaped(bad), "{bad:?} must be rejected");
    }
}

#[test]
fn blank_fields_are_flagged_invalid() {
    assert!(field_is_invalid(""));
    assert!(field_is_invalid("   \n"));
    assert!(!field_is_invalid(" Ana "));
}

#[test]
fn missing_fields_default_to_blank() {
    let submission = ContactSubmission {
        name: "Ana".to_string(),
        email: "a@b.co".to_string(),
        ..ContactSubmission::default()
    };
    assert_eq!(submission.message, "");
    assert_eq!(
        submission.validate(),
        Err(ContactError::MissingField(ContactField::Message))
    );
    assert_eq!(
        success_notice("Zé"),
        "Obrigado, Zé! Sua mensagem foi enviada com sucesso. (Simulação)"
    );
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    assert!(is_js_whitespace('\u{feff}'));
    assert!(!is_js_whitespace('\u{85}'));
    assert!(field_is_invalid("\u{feff}"));
    assert!(field_is_invalid(" \u{feff}\u{a0}"));

    let submission = ContactSubmission::new("\u{feff}", "a@b.co", "x");
    assert_eq!(
        submission.validate(),
        Err(ContactError::MissingField(ContactField::Name))
    );

    let valid = ContactSubmission::new("\u{feff}Ana\u{feff}", "a@b.co", "x")
        .validate()
        .expect("name with surrounding BOM is valid");
    assert_eq!(valid.name, "Ana");
}

#[test]
fn email_runs_follow_browser_whitespace() {
    assert!(!is_email_shaped("a\u{feff}b@c.de"));
    assert!(!is_email_shaped("a@c.d\u{feff}e"));
    assert!(is_email_shaped("a\u{85}b@c.de"));
    assert!(!field_is_invalid("\u{85}"));
}
