pub mod action_button;
pub mod dark_mode_toggle;
pub mod input_field;
pub mod social_icon;
