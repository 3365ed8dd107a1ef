//! Login/signup panel state
//!
//! The panel owns two pieces of transient state: which tab is selected and
//! whether password inputs reveal their plaintext. Both live in a single
//! value object that the rendering component keeps in one signal and mutates
//! only through [`PanelState::select_tab`] and
//! [`PanelState::toggle_password_visibility`].

use derive_more::Display;

/// One of the two mutually exclusive views of the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    /// Tabs in the order their labels appear in the slider
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::Signup];

    /// Target of the tab label's `for` attribute
    pub fn label_target(&self) -> &'static str {
        match self {
            AuthTab::Login => "loginTab",
            AuthTab::Signup => "signupTab",
        }
    }
}

/// Icon shown on the reveal toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealIcon {
    /// Password is shown as plaintext
    Eye,
    /// Password is masked
    EyeSlash,
}

/// Transient state of the login/signup panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub active_tab: AuthTab,
    pub show_password: bool,
}

impl PanelState {
    /// State on mount: login tab, password masked
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `tab`. Re-masks the password even if `tab` is already active.
    pub fn select_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
        self.show_password = false;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn is_active(&self, tab: AuthTab) -> bool {
        self.active_tab == tab
    }

    /// Value of the `type` attribute for password inputs
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Icon reflecting the current reveal state
    pub fn reveal_icon(&self) -> RevealIcon {
        if self.show_password {
            RevealIcon::Eye
        } else {
            RevealIcon::EyeSlash
        }
    }

    pub fn tab_label_class(&self, tab: AuthTab) -> &'static str {
        if self.is_active(tab) {
            "tab-label active"
        } else {
            "tab-label"
        }
    }

    pub fn slider_class(&self) -> &'static str {
        match self.active_tab {
            AuthTab::Login => "slider-tab left",
            AuthTab::Signup => "slider-tab right",
        }
    }
}
