use crate::config::ScreenConfig;
use crate::error::FormError;
use crate::types::{Diagnostic, FieldId, Mode, SocialProvider};

/// State of the login/registration screen.
///
/// Switching modes keeps every entered value, and a validation error stays
/// set until the screen is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    mode: Mode,
    dark_mode: bool,
    error: Option<FormError>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ScreenConfig) -> Self {
        Self {
            mode: config.initial_mode,
            dark_mode: config.dark_mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    /// Inline error text, empty when there is none.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        let slot = match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Username => &mut self.username,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    pub fn visible_fields(&self) -> Vec<FieldId> {
        FieldId::all()
            .iter()
            .copied()
            .filter(|f| f.is_visible_in(self.mode))
            .collect()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Runs the primary action for the current mode.
    ///
    /// A registration whose passwords differ records the error and yields no
    /// diagnostic.
    pub fn submit(&mut self) -> Result<Diagnostic, FormError> {
        match self.mode {
            Mode::Login => Ok(Diagnostic::Login {
                username: self.username.clone(),
                password: self.password.clone(),
            }),
            Mode::Register => {
                if self.password != self.confirm_password {
                    self.error = Some(FormError::PasswordMismatch);
                    return Err(FormError::PasswordMismatch);
                }
                Ok(Diagnostic::Register {
                    username: self.username.clone(),
                    password: self.password.clone(),
                    email: self.email.clone(),
                })
            }
        }
    }

    pub fn social_login(&self, provider: SocialProvider) -> Diagnostic {
        Diagnostic::SocialLogin { provider }
    }
}
