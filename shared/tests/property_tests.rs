//! Property-based tests for the screen model.

use login_core::{Diagnostic, FieldId, LoginForm, Mode, SocialProvider};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@._ ]{0,40}").expect("valid regex")
}

fn filled_form_strategy() -> impl Strategy<Value = LoginForm> {
    (
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        any::<bool>(),
    )
        .prop_map(|(full_name, username, email, password, confirm, register)| {
            let mut form = LoginForm::new();
            form.set_field(FieldId::FullName, full_name);
            form.set_field(FieldId::Username, username);
            form.set_field(FieldId::Email, email);
            form.set_field(FieldId::Password, password);
            form.set_field(FieldId::ConfirmPassword, confirm);
            if register {
                form.toggle_mode();
            }
            form
        })
}

fn provider_strategy() -> impl Strategy<Value = SocialProvider> {
    prop::sample::select(SocialProvider::all().to_vec())
}

fn fields_of(form: &LoginForm) -> Vec<String> {
    FieldId::all()
        .iter()
        .map(|&id| form.field(id).to_string())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn mismatched_registration_never_reports(
        username in text_strategy(),
        password in text_strategy(),
        confirm in text_strategy(),
    ) {
        prop_assume!(password != confirm);
        let mut form = LoginForm::new();
        form.toggle_mode();
        form.set_field(FieldId::Username, username);
        form.set_field(FieldId::Password, password);
        form.set_field(FieldId::ConfirmPassword, confirm);

        prop_assert!(form.submit().is_err());
        prop_assert!(!form.error_message().is_empty());
    }

    #[test]
    fn matching_registration_reports_once(
        username in text_strategy(),
        password in text_strategy(),
        email in text_strategy(),
    ) {
        let mut form = LoginForm::new();
        form.toggle_mode();
        form.set_field(FieldId::Username, username.clone());
        form.set_field(FieldId::Email, email.clone());
        form.set_field(FieldId::Password, password.clone());
        form.set_field(FieldId::ConfirmPassword, password.clone());

        let diagnostic = form.submit();
        prop_assert_eq!(diagnostic, Ok(Diagnostic::Register { username, password, email }));
        prop_assert_eq!(form.error_message(), "");
    }

    #[test]
    fn even_mode_toggles_restore_screen(form in filled_form_strategy(), pairs in 0usize..8) {
        let mut toggled = form.clone();
        for _ in 0..pairs * 2 {
            toggled.toggle_mode();
        }
        prop_assert_eq!(toggled.mode(), form.mode());
        prop_assert_eq!(fields_of(&toggled), fields_of(&form));
    }

    #[test]
    fn dark_mode_touches_only_presentation(form in filled_form_strategy()) {
        let mut toggled = form.clone();
        toggled.toggle_dark_mode();
        prop_assert_ne!(toggled.is_dark_mode(), form.is_dark_mode());
        prop_assert_eq!(toggled.mode(), form.mode());
        prop_assert_eq!(toggled.error(), form.error());
        prop_assert_eq!(fields_of(&toggled), fields_of(&form));
    }

    #[test]
    fn social_login_is_side_effect_free(
        form in filled_form_strategy(),
        provider in provider_strategy(),
    ) {
        let before = form.clone();
        let diagnostic = form.social_login(provider);
        prop_assert_eq!(diagnostic, Diagnostic::SocialLogin { provider });
        prop_assert_eq!(form, before);
    }
}

#[test]
fn registration_scenario() {
    let mut form = LoginForm::new();
    form.toggle_mode();
    assert_eq!(form.mode(), Mode::Register);
    form.set_field(FieldId::Password, "abc123");
    form.set_field(FieldId::ConfirmPassword, "abc124");
    assert!(form.submit().is_err());
    assert_eq!(form.error_message(), "Las contraseñas no coinciden");

    let mut form = LoginForm::new();
    form.toggle_mode();
    form.set_field(FieldId::Username, "u");
    form.set_field(FieldId::Email, "u@e.com");
    form.set_field(FieldId::Password, "abc123");
    form.set_field(FieldId::ConfirmPassword, "abc123");
    let line = form.submit().expect("passwords match").to_string();
    for needle in ["u", "abc123", "u@e.com"] {
        assert!(line.contains(needle), "{line} is missing {needle}");
    }
    assert_eq!(form.error_message(), "");
}
