//! Model of the login/registration screen, independent of the UI toolkit.

pub mod config;
pub mod error;
pub mod form;
pub mod types;

pub use config::ScreenConfig;
pub use error::{ConfigError, FormError};
pub use form::LoginForm;
pub use types::{Diagnostic, FieldId, InputKind, Mode, SocialProvider};
