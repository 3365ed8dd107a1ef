//! Login/signup UI module
//!
//! The panel component and the pieces it is built from. All state lives in
//! [`LoginSignup`]; the children read it through a signal and report clicks
//! through callbacks.

mod login_form;
mod login_signup;
mod password_field;
mod signup_form;
mod tab_selector;

pub use login_form::LoginForm;
pub use login_signup::{LOGO_PATH, LoginSignup};
pub use password_field::PasswordField;
pub use signup_form::SignupForm;
pub use tab_selector::TabSelector;
