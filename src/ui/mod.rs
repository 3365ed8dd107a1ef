pub mod auth;
pub mod icon;

pub use auth::LoginSignup;
pub use icon::{Icon, icons};
