//! Core state and server-side plumbing for the login/signup panel

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod error;
mod panel;

pub use panel::*;
