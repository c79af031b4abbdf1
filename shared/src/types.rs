use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Login => "login",
            Mode::Register => "register",
        }
    }

    pub fn toggled(self) -> Mode {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    /// Label of the primary action button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Mode::Login => "Log In",
            Mode::Register => "Sign Up",
        }
    }

    /// Footer prompt and the link text that switches to the other mode.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            Mode::Login => ("Don't have an account?", " Sign Up"),
            Mode::Register => ("Already have an account?", " Log In"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// DOM element id, also used as the label's `for`.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullname",
            FieldId::Username => "username",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Username => "Email or Phone",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::FullName => "Enter your full name",
            FieldId::Username => "Enter your email or phone number",
            FieldId::Email => "Enter your email address",
            FieldId::Password => "Enter your password",
            FieldId::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            FieldId::FullName | FieldId::Username => InputKind::Text,
            FieldId::Email => InputKind::Email,
            FieldId::Password | FieldId::ConfirmPassword => InputKind::Password,
        }
    }

    pub fn is_visible_in(&self, mode: Mode) -> bool {
        match self {
            FieldId::Username | FieldId::Password => true,
            FieldId::FullName | FieldId::Email | FieldId::ConfirmPassword => {
                mode == Mode::Register
            }
        }
    }

    /// All fields in render order.
    pub fn all() -> &'static [FieldId] {
        &[
            FieldId::FullName,
            FieldId::Username,
            FieldId::Email,
            FieldId::Password,
            FieldId::ConfirmPassword,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialProvider {
    Google,
    Github,
    Instagram,
    Email,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Github => "GitHub",
            SocialProvider::Instagram => "Instagram",
            SocialProvider::Email => "correo electrónico",
        }
    }

    /// Colour tag, mapped to `social-icon--{color}` in the stylesheet.
    pub fn color(&self) -> &'static str {
        match self {
            SocialProvider::Google | SocialProvider::Email => "blue",
            SocialProvider::Github => "gray",
            SocialProvider::Instagram => "pink",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SocialProvider::Google => "G",
            SocialProvider::Github => "\u{1F431}",
            SocialProvider::Instagram => "\u{25CE}",
            SocialProvider::Email => "\u{2709}",
        }
    }

    pub fn all() -> &'static [SocialProvider] {
        &[
            SocialProvider::Google,
            SocialProvider::Github,
            SocialProvider::Instagram,
            SocialProvider::Email,
        ]
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// A logged line standing in for the request a real screen would send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        password: String,
        email: String,
    },
    SocialLogin {
        provider: SocialProvider,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Login { username, password } => write!(
                f,
                "Realizando inicio de sesión con nombre de usuario: {username} y contraseña: {password}"
            ),
            Diagnostic::Register {
                username,
                password,
                email,
            } => write!(
                f,
                "Realizando registro con nombre de usuario: {username} , contraseña: {password} , y correo electrónico: {email}"
            ),
            Diagnostic::SocialLogin { provider } => {
                write!(f, "Realizando inicio de sesión de {}", provider.as_str())
            }
        }
    }
}
